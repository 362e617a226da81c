use std::{
    io::{self, Write},
    process,
};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sieve::{bound, cli::CliArgs, emit, engine, profiler, verify, Error};

fn main() {
    let program = std::env::args_os()
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sieve".to_owned());

    set_panic_handler(program.clone());

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(_) => fail(&program, &Error::Usage { count: 0 }),
    };

    init_logging(args.verbose);

    let res = run(&args);

    if args.profile {
        // best effort
        let _ = profiler::profile_log(&mut io::stderr());
    }

    if let Err(e) = res {
        fail(&program, &e);
    }
}

fn run(args: &CliArgs) -> Result<(), Error> {
    let (upto, _) = profiler::profile("resolve", || bound::resolve(args.upto.as_slice()));
    let upto = upto?;
    debug!(upto, "resolved bound");

    if args.verify {
        verify::ensure_verifiable(upto)?;
    }

    let primes = engine::sieve(upto)?;

    if args.verify {
        let (report, _) = profiler::profile("verify", || verify::check(upto, &primes));
        emit::closed_reader_ok(writeln!(io::stdout(), "{}", report))?;
        if !report.passed() {
            return Err(Error::Unknown(format!(
                "verification failed for {} primes up to {}",
                report.checked, upto
            )));
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let (written, _) = profiler::profile("emit", || emit::emit(&primes, &mut out));
    emit::closed_reader_ok(written)?;
    debug!(count = primes.len(), "emitted primes");

    Ok(())
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_writer(io::stderr)
        .init();
}

fn fail(program: &str, err: &Error) -> ! {
    debug!(error = %err, "aborting");
    eprint!("{}", err.report(program));
    process::exit(err.exit_code())
}

/// Any panic is reported as an unknown failure and ends the process.
fn set_panic_handler(program: String) {
    std::panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let msg = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic".to_owned()
        };
        debug!(location = ?panic_info.location(), "panicked");
        fail(&program, &Error::Unknown(msg));
    }));
}
