use clap::Parser;

/// Print every prime up to a bound
///
/// Help and version flags are left out so that every unexpected argument
/// ends in the same usage message.
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None, disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    /// Upper bound, between two and one billion. Exactly one is expected;
    /// the count is checked after parsing so the error matches a bad value.
    #[arg(value_name = "UPTO", allow_negative_numbers = true)]
    pub upto: Vec<String>,

    /// Dump timing information to stderr after running.
    #[arg(long)]
    pub profile: bool,

    /// Print debug information to stderr.
    #[arg(long, short)]
    pub verbose: bool,

    /// Check the result against a plain boolean sieve instead of printing it.
    #[arg(long)]
    pub verify: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_and_flags() {
        let args = CliArgs::try_parse_from(["sieve", "--profile", "30", "-v"]).unwrap();
        assert_eq!(args.upto, vec!["30"]);
        assert!(args.profile);
        assert!(args.verbose);
        assert!(!args.verify);
    }

    #[test]
    fn negative_number_is_positional() {
        let args = CliArgs::try_parse_from(["sieve", "-5"]).unwrap();
        assert_eq!(args.upto, vec!["-5"]);
    }

    #[test]
    fn count_is_left_to_resolver() {
        let args = CliArgs::try_parse_from(["sieve"]).unwrap();
        assert!(args.upto.is_empty());

        let args = CliArgs::try_parse_from(["sieve", "1", "2"]).unwrap();
        assert_eq!(args.upto.len(), 2);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["sieve", "--fast", "30"]).is_err());
    }

    #[test]
    fn no_help_or_version_flags() {
        for flag in ["--help", "-h", "--version", "-V"] {
            let err = CliArgs::try_parse_from(["sieve", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument, "{}", flag);
        }
    }
}
