use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "Loss Replay")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Epochs without improvement before early stopping.
    #[arg(long, default_value_t = 2)]
    pub patience: u64,

    /// File with one loss per line. Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Keep feeding losses after the stop signal.
    #[arg(long, default_value_t = false)]
    pub run_out: bool,

    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["replay"]);
        assert_eq!(args.patience, 2);
        assert!(args.input.is_none());
        assert!(!args.run_out);
        assert_eq!(args.log_level, LogLevel::Info);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "replay",
            "--patience",
            "5",
            "--input",
            "losses.txt",
            "--run-out",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.patience, 5);
        assert_eq!(args.input, Some(PathBuf::from("losses.txt")));
        assert!(args.run_out);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_negative_patience_rejected() {
        assert!(Args::try_parse_from(["replay", "--patience", "-1"]).is_err());
    }
}
