//! # tally
//!
//! Command-line front end for the `tally-core` constant tables.
//!
//! # Usage
//!
//! ```bash
//! tally status 404
//! tally frequency 1h
//! tally frequency --secs 3600
//! tally action buy --json
//! tally options --table frequency
//! tally check --config tally.json
//! ```

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use tally_core::config::{AppConfig, OutputFormat};
use tally_core::{Frequency, HttpStatus, TradeAction, registry};
use tracing::{debug, info};

/// Look up named constants.
#[derive(Debug, Parser)]
#[command(name = "tally", about = "Look up HTTP statuses, trade actions and frequencies")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file path (JSON).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Optional log directory for file output.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up an HTTP status by code.
    Status { code: u16 },

    /// Look up a frequency by short code or by seconds.
    Frequency {
        /// Short code, e.g. `1h`.
        #[arg(required_unless_present = "secs", conflicts_with = "secs")]
        code: Option<String>,

        #[arg(long)]
        secs: Option<u64>,
    },

    /// Look up a trade action by name or by value.
    Action {
        /// Name, any case, e.g. `buy`.
        #[arg(required_unless_present = "value", conflicts_with = "value")]
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        value: Option<i64>,
    },

    /// List `(value, label)` options, optionally for a single table.
    Options {
        #[arg(long)]
        table: Option<String>,
    },

    /// Validate every registered table.
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => tally_core::config::load_config(path)?,
        None => AppConfig::default(),
    };

    let log_level = cli.log_level.as_deref().unwrap_or(config.log_level());
    let log_dir = cli.log_dir.as_deref().or(config.log_dir());
    let _guard = tally_core::logging::init_logging(log_level, log_dir, config.module_name())?;

    let format = if cli.json { OutputFormat::Json } else { config.output_format() };
    debug!(?format, command = ?cli.command, "tally starting");

    for line in run(&cli.command, format)? {
        println!("{line}");
    }
    Ok(())
}

/// Execute one command, returning the lines to print.
fn run(command: &Command, format: OutputFormat) -> Result<Vec<String>> {
    let lines: Vec<String> = match command {
        Command::Status { code } => {
            let Some(status) = HttpStatus::from_code(*code) else {
                bail!("unknown status code: {code}");
            };
            vec![match format {
                OutputFormat::Text => status.to_string(),
                OutputFormat::Json => json!({
                    "symbol": status.symbol(),
                    "code": status.code(),
                    "desc": status.desc(),
                })
                .to_string(),
            }]
        }
        Command::Frequency { code, secs } => {
            let freq = match (code, secs) {
                (_, Some(secs)) => Frequency::from_secs(*secs)?,
                (Some(code), None) => Frequency::from_code(code)?,
                (None, None) => bail!("either a code or --secs is required"),
            };
            vec![match format {
                OutputFormat::Text => format!("{freq} ({} s)", freq.as_seconds()),
                OutputFormat::Json => json!({
                    "symbol": freq.symbol(),
                    "code": freq.as_str(),
                    "seconds": freq.as_seconds(),
                })
                .to_string(),
            }]
        }
        Command::Action { name, value } => {
            let action = match (name, value) {
                (_, Some(value)) => TradeAction::from_value(*value)?,
                (Some(name), None) => TradeAction::from_name(name)?,
                (None, None) => bail!("either a name or --value is required"),
            };
            vec![match format {
                OutputFormat::Text => format!("{action} ({})", action.value()),
                OutputFormat::Json => json!({ "name": action.name(), "value": action.value() }).to_string(),
            }]
        }
        Command::Options { table } => {
            let options = match table {
                Some(name) => match registry::find(name) {
                    Some(table) => (table.options)(),
                    None => bail!("unknown table: {name}"),
                },
                None => registry::as_options(),
            };
            match format {
                OutputFormat::Text => options.iter().map(|(v, l)| format!("{v}\t{l}")).collect(),
                OutputFormat::Json => vec![serde_json::to_string(&options)?],
            }
        }
        Command::Check => {
            registry::validate_all()?;
            let tables: Vec<_> = registry::TABLES.iter().map(|t| (t.name, (t.len)())).collect();
            info!(tables = tables.len(), "registry ok");
            match format {
                OutputFormat::Text => tables.iter().map(|(name, len)| format!("{name}: {len} members ok")).collect(),
                OutputFormat::Json => vec![json!({ "ok": true, "tables": tables }).to_string()],
            }
        }
    };
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let cli = parse(args);
        let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
        run(&cli.command, format)
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["status", "404", "--json", "-l", "debug"]);
        assert!(cli.json);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Status { code: 404 }));
    }

    #[test]
    fn frequency_requires_code_or_secs() {
        assert!(Cli::try_parse_from(["tally", "frequency"]).is_err());
        assert!(Cli::try_parse_from(["tally", "frequency", "1h", "--secs", "60"]).is_err());
    }

    #[test]
    fn status_lookup() {
        assert_eq!(run_args(&["status", "404"]).unwrap(), ["HTTP 404: Not Found"]);
        let err = run_args(&["status", "999"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown status code: 999");
    }

    #[test]
    fn status_json() {
        let out = run_args(&["status", "418", "--json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(v["code"], 418);
        assert_eq!(v["symbol"], "HTTP_418");
        assert_eq!(v["desc"], "I'm A Teapot");
    }

    #[test]
    fn frequency_lookups() {
        assert_eq!(run_args(&["frequency", "1H"]).unwrap(), ["1h (3600 s)"]);
        assert_eq!(run_args(&["frequency", "--secs", "86400"]).unwrap(), ["1d (86400 s)"]);
        let err = run_args(&["frequency", "--secs", "69420"]).unwrap_err();
        assert!(err.downcast_ref::<tally_core::TallyError>().is_some_and(|e| e.is_not_found()));
    }

    #[test]
    fn action_lookups() {
        assert_eq!(run_args(&["action", "Buy"]).unwrap(), ["BUY (0)"]);
        assert_eq!(run_args(&["action", "--value", "1"]).unwrap(), ["SELL (1)"]);
        assert!(run_args(&["action", "hold"]).is_err());
        assert!(run_args(&["action", "--value", "-1"]).is_err());
    }

    #[test]
    fn options_listing() {
        let out = run_args(&["options", "--table", "frequency"]).unwrap();
        assert_eq!(out.len(), Frequency::ALL.len());
        assert_eq!(out[0], "60\t1m");
        assert!(run_args(&["options", "--table", "trade_action"]).unwrap().is_empty());
        assert!(run_args(&["options", "--table", "nope"]).is_err());

        let all = run_args(&["options", "--json"]).unwrap();
        let v: Vec<(i64, String)> = serde_json::from_str(&all[0]).unwrap();
        assert_eq!(v.len(), HttpStatus::ALL.len() + Frequency::ALL.len());
    }

    #[test]
    fn check_reports_every_table() {
        let out = run_args(&["check"]).unwrap();
        assert_eq!(out, ["http_status: 62 members ok", "trade_action: 2 members ok", "frequency: 17 members ok"]);
    }
}
