use std::num::IntErrorKind;

use crate::error::{Error, ParseFailure};

pub const MIN_BOUND: i32 = 2;
pub const MAX_BOUND: i32 = 1_000_000_000;

/// Turns the positional arguments (program name already stripped) into the
/// upper bound of the sieve.
pub fn resolve<S: AsRef<str>>(args: &[S]) -> Result<i32, Error> {
    let [arg] = args else {
        return Err(Error::Usage { count: args.len() });
    };

    let upto = parse_bound(arg.as_ref())?;
    check_bound(upto)
}

/// Whole-string base-10 parse. Only a leading `-` is allowed as a sign and
/// no whitespace is trimmed.
pub fn parse_bound(arg: &str) -> Result<i32, ParseFailure> {
    if arg.starts_with('+') {
        return Err(ParseFailure::NotANumber);
    }

    arg.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::OutOfRange,
        _ => ParseFailure::NotANumber,
    })
}

pub fn check_bound(upto: i32) -> Result<i32, Error> {
    if (MIN_BOUND..=MAX_BOUND).contains(&upto) {
        Ok(upto)
    } else {
        Err(Error::Range(upto))
    }
}
