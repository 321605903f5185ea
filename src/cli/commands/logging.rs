use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" | "warning" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            other => Err(format!(
                "invalid log level '{other}', expected one of: error, warn, info, debug, trace"
            )),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("AUTHGATE_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_env_rejects_unknown() {
        temp_env::with_var("AUTHGATE_LOG_LEVEL", Some("loud"), || {
            let command = with_args(Command::new("test"));
            let result = command.try_get_matches_from(vec!["test"]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_log_level_env_accepts_warning_alias() {
        temp_env::with_var("AUTHGATE_LOG_LEVEL", Some("WARNING"), || {
            let command = with_args(Command::new("test"));
            let matches = command.get_matches_from(vec!["test"]);
            assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(1));
        });
    }

    #[test]
    fn test_log_level_env_accepts_numbers() {
        temp_env::with_var("AUTHGATE_LOG_LEVEL", Some("3"), || {
            let command = with_args(Command::new("test"));
            let matches = command.get_matches_from(vec!["test"]);
            assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(3));
        });
    }
}
