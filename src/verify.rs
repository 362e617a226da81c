//! Cross-checks sieve output against a classic boolean sieve.

use std::fmt;

use colored::Colorize;

use crate::error::Error;

/// Largest bound `--verify` accepts. The reference table holds one flag
/// per integer.
pub const MAX_VERIFY_BOUND: i32 = 10_000_000;

pub fn ensure_verifiable(upto: i32) -> Result<(), Error> {
    if upto > MAX_VERIFY_BOUND {
        return Err(Error::Unknown(format!(
            "verification is limited to bounds up to {}",
            MAX_VERIFY_BOUND
        )));
    }
    Ok(())
}

/// `table[n]` is true iff `n` is prime, for every `n` in `[0, upto]`.
pub fn reference_table(upto: i32) -> Vec<bool> {
    let n = upto.max(0) as usize;
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    if n >= 1 {
        is_prime[1] = false;
    }

    let mut i = 2;
    while i * i <= n {
        if is_prime[i] {
            for j in (i * i..=n).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }
    is_prime
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Verification {
    pub upto: i32,
    /// Primes up to the bound according to the reference test.
    pub expected: usize,
    /// Values the sieve produced.
    pub checked: usize,
    pub missing: Vec<i32>,
    pub spurious: Vec<i32>,
    pub unordered: usize,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.spurious.is_empty() && self.unordered == 0
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            write!(
                f,
                "{} {} primes up to {}",
                "GOOD:".green(),
                self.checked,
                self.upto
            )
        } else {
            let msg = format!(
                "FAIL: {} missing, {} spurious, {} out of order",
                self.missing.len(),
                self.spurious.len(),
                self.unordered
            );
            write!(f, "{}", msg.red())
        }
    }
}

pub fn check(upto: i32, primes: &[i32]) -> Verification {
    let unordered = primes.windows(2).filter(|w| w[0] >= w[1]).count();

    let table = reference_table(upto);
    let mut seen = vec![false; table.len()];

    let mut spurious = Vec::new();
    for &p in primes {
        match usize::try_from(p) {
            Ok(i) if i < table.len() && table[i] => seen[i] = true,
            _ => spurious.push(p),
        }
    }

    let mut expected = 0;
    let mut missing = Vec::new();
    for (n, &is_prime) in table.iter().enumerate() {
        if is_prime {
            expected += 1;
            if !seen[n] {
                missing.push(n as i32);
            }
        }
    }

    Verification {
        upto,
        expected,
        checked: primes.len(),
        missing,
        spurious,
        unordered,
    }
}
