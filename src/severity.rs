//! Severity levels for log messages.
use std::fmt;
use std::str::FromStr;

use tracing::Level;

/// Importance of a log message.
///
/// Variants are declared most severe first, so the derived ordering puts
/// `Error` lowest: `severity <= Severity::Warning` reads as "warning or more
/// severe", and a message passes a threshold when `severity <= min_severity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
}

impl Severity {
    fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Severity::Error
        } else if level == Level::WARN {
            Severity::Warning
        } else if level == Level::INFO {
            Severity::Info
        } else {
            // DEBUG and TRACE both land on the least severe variant.
            Severity::Debug
        }
    }
}

/// Error returned when a severity name cannot be parsed.
#[derive(Debug, Clone)]
pub struct ParseSeverityError {
    input: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown severity '{}', expected one of: error, warning, info, debug",
            self.input
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_from_most_to_least_severe() {
        assert!(Severity::Error < Severity::Warning);
        assert!(Severity::Warning < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
    }

    #[test]
    fn threshold_comparisons() {
        // A message passes when it is at least as severe as the threshold.
        assert!(Severity::Error <= Severity::Info);
        assert!(Severity::Info <= Severity::Info);
        assert!(Severity::Debug > Severity::Info);

        // Flush condition: warning or more severe.
        assert!(Severity::Error <= Severity::Warning);
        assert!(Severity::Warning <= Severity::Warning);
        assert!(Severity::Info > Severity::Warning);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for severity in [
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
        ] {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn maps_tracing_levels() {
        assert_eq!(Severity::from(Level::ERROR), Severity::Error);
        assert_eq!(Severity::from(Level::WARN), Severity::Warning);
        assert_eq!(Severity::from(Level::INFO), Severity::Info);
        assert_eq!(Severity::from(Level::DEBUG), Severity::Debug);
        assert_eq!(Severity::from(Level::TRACE), Severity::Debug);
    }
}
