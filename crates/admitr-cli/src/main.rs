use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use admitr_core::{Admission, AdmissionLedger};
use clap::Parser;
use dotenv::dotenv;

/// Terminal dashboard for hospital admissions
#[derive(Parser, Debug)]
#[command(name = "admitr", version, about)]
struct Cli {
    /// JSON file with admission records to seed the dashboard with,
    /// replacing the built-in demo data
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Start with an empty admissions list
    #[arg(long, conflicts_with = "seed")]
    empty: bool,

    /// Print the captured application logs to stderr on exit
    #[arg(long)]
    dump_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let ledger = match build_ledger(&cli) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("admitr: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match admitr_tui::tui_main(ledger).await {
        Ok(log_buffer) => {
            if cli.dump_logs {
                for line in log_buffer.get_logs() {
                    eprintln!("{}", line);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("admitr: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_ledger(cli: &Cli) -> Result<AdmissionLedger, Box<dyn std::error::Error>> {
    if cli.empty {
        return Ok(AdmissionLedger::new());
    }

    match &cli.seed {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| format!("cannot read seed file {}: {}", path.display(), e))?;
            let records: Vec<Admission> = serde_json::from_str(&raw)
                .map_err(|e| format!("malformed seed file {}: {}", path.display(), e))?;
            Ok(AdmissionLedger::from_records(records)?)
        }
        None => Ok(AdmissionLedger::seeded()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(seed: Option<PathBuf>, empty: bool) -> Cli {
        Cli {
            seed,
            empty,
            dump_logs: false,
        }
    }

    #[test]
    fn test_default_ledger_is_seeded() {
        let ledger = build_ledger(&cli(None, false)).expect("default ledger");
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_empty_flag_gives_empty_ledger() {
        let ledger = build_ledger(&cli(None, true)).expect("empty ledger");
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_seed_file_replaces_demo_data() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": 0, "patient": "A", "age": 40, "doctor": "Dr. A", "time": "08:00 AM"}}]"#
        )
        .expect("write seed");

        let ledger =
            build_ledger(&cli(Some(file.path().to_path_buf()), false)).expect("seeded ledger");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.admissions()[0].id, 1);
        assert_eq!(ledger.admissions()[0].patient, "A");
    }

    #[test]
    fn test_malformed_seed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write seed");

        assert!(build_ledger(&cli(Some(file.path().to_path_buf()), false)).is_err());
    }

    #[test]
    fn test_invalid_seed_record_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": 0, "patient": "", "age": 40, "doctor": "Dr. A", "time": "08:00 AM"}}]"#
        )
        .expect("write seed");

        assert!(build_ledger(&cli(Some(file.path().to_path_buf()), false)).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["admitr", "--empty", "--dump-logs"]);
        assert!(cli.empty);
        assert!(cli.dump_logs);
        assert!(cli.seed.is_none());
    }
}
