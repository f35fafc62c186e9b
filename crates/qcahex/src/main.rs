use clap::Parser;

use qcahex::cmd::{self, Command};
use qcahex::logging::{init_logging, LogFormat, LogLevel};
use qcahex::output::OutputFormat;

/// Analyze hexdumps produced by a QCA wireless kernel driver (such as
/// ath6kl or qcacld). The dumps are assumed to contain the HTC traffic
/// between the driver and the target; no preprocessing of the log files is
/// required. The driver must of course be configured to log the necessary
/// debug data (for ath6kl this means a proper debug mask).
#[derive(Parser, Debug)]
#[command(name = "qcahex", version)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    format: OutputFormat,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command, cli.format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wmi_ctrl_subcommand() {
        let cli = Cli::try_parse_from([
            "qcahex",
            "wmi-ctrl",
            "--wmi-unified",
            "--ep-id",
            "2",
            "-p",
            "-i",
            "/tmp/dump.log",
        ])
        .expect("wmi-ctrl args should parse");

        match cli.command {
            Command::WmiCtrl(args) => {
                assert!(args.wmi_unified);
                assert_eq!(args.ep_id, 2);
                assert!(args.common.print_data);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_all_subcommand_with_filters() {
        let cli = Cli::try_parse_from([
            "qcahex",
            "all",
            "--include-id",
            "0x3001",
            "--include-id",
            "4",
            "--exclude-id",
            "0x9001",
            "--direction",
            "target-to-host",
        ])
        .expect("all args should parse");

        match cli.command {
            Command::All(args) => {
                assert_eq!(args.common.include_id, vec![0x3001, 4]);
                assert_eq!(args.common.exclude_id, vec![0x9001]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_message_id() {
        let err = Cli::try_parse_from(["qcahex", "htt", "--include-id", "0xzz"])
            .expect_err("bad id should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_htc_ctrl_with_short_header() {
        let cli = Cli::try_parse_from(["qcahex", "htc-ctrl", "-s", "-n"])
            .expect("htc-ctrl args should parse");
        match cli.command {
            Command::HtcCtrl(args) => {
                assert!(args.common.short_htc_header);
                assert!(args.common.no_timestamps);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
