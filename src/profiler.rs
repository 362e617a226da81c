use ahash::AHashMap;

use std::{
    io::{self, Write},
    sync::LazyLock,
    sync::RwLock,
    time::{Duration, Instant},
};

static PROFILER_TABLE: LazyLock<RwLock<AHashMap<&'static str, Duration>>> =
    LazyLock::new(|| RwLock::new(AHashMap::new()));

pub fn profile<T: FnOnce() -> X, X>(tag: &'static str, f: T) -> (X, Duration) {
    let start = Instant::now();
    let res = f();
    let time = start.elapsed();
    // entries stay valid after a panic in another profiled closure
    let mut table = PROFILER_TABLE.write().unwrap_or_else(|e| e.into_inner());
    let entry = table.entry(tag).or_default();
    *entry += time;
    (res, time)
}

pub fn total(tag: &str) -> Option<Duration> {
    let table = PROFILER_TABLE.read().unwrap_or_else(|e| e.into_inner());
    table.get(tag).copied()
}

pub fn profile_log<W: Write>(out: &mut W) -> io::Result<()> {
    let table = PROFILER_TABLE.read().unwrap_or_else(|e| e.into_inner());
    let mut pairs: Vec<_> = table.iter().collect();
    pairs.sort_by(|(_, b), (_, a)| a.cmp(b));
    writeln!(out, "PROFILE RESULTS:")?;
    for (name, t) in pairs {
        writeln!(out, "    {:20} {:?}", name, t)?;
    }
    Ok(())
}
