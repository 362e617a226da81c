use std::io::{self, Write};

use tracing::debug;

/// Writes every value followed by a single space, then a newline.
pub fn emit<W: Write>(primes: &[i32], out: &mut W) -> io::Result<()> {
    for p in primes {
        write!(out, "{} ", p)?;
    }
    writeln!(out)?;
    out.flush()
}

/// Treats a reader that hung up early (`head`, a closed pipe) as success.
pub fn closed_reader_ok(res: io::Result<()>) -> io::Result<()> {
    match res {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        res => res,
    }
}

pub fn render(primes: &[i32]) -> String {
    let mut res = String::with_capacity(primes.len() * 8 + 1);
    for p in primes {
        res.push_str(&p.to_string());
        res.push(' ');
    }
    res.push('\n');
    res
}
