//! bf: MD5 digests, filter queries and golden-file checks from the shell.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use bf_02_membership_filter::DEFAULT_DOCUMENT_PREFIX;
use bf_telemetry::{init_telemetry, TelemetryConfig};
use clap::{ArgGroup, Parser, Subcommand};

use bf_cli::commands;

/// bf: Bloom filter membership tool
#[derive(Parser, Debug)]
#[command(name = "bf", version)]
#[command(about = "Query MD5-probed Bloom filters built by the document backend")]
struct Args {
    /// Log level filter (overrides BF_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit JSON logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the lowercase hex MD5 digest of a string or file
    #[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
    Digest {
        /// Text to digest (UTF-8 bytes)
        text: Option<String>,

        /// File to digest
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Test values against a base64-encoded bitmap
    Query {
        /// Standard base64 bitmap
        #[arg(long)]
        bitmap: String,

        /// Unused bits at the end of the bitmap
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        padding: i32,

        /// Probes per query
        #[arg(long, allow_negative_numbers = true)]
        hash_count: i32,

        /// Values to test
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Verify a backend golden pair; exits non-zero on any mismatch
    Golden {
        /// Encoded filter JSON
        #[arg(long)]
        filter: PathBuf,

        /// Expected membership results JSON
        #[arg(long)]
        results: PathBuf,

        /// Document-name prefix
        #[arg(long, default_value = DEFAULT_DOCUMENT_PREFIX)]
        prefix: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level.clone());
    }
    if args.json_logs {
        config = config.with_json_logs(true);
    }
    let _guard = init_telemetry(&config).context("initializing logging")?;

    match args.command {
        Command::Digest { text, file } => {
            let hex = match (text, file) {
                (_, Some(path)) => commands::digest_file(&path)?,
                (Some(text), None) => commands::digest_text(&text),
                (None, None) => anyhow::bail!("either TEXT or --file is required"),
            };
            println!("{}", hex);
            Ok(ExitCode::SUCCESS)
        }

        Command::Query {
            bitmap,
            padding,
            hash_count,
            values,
        } => {
            let results = commands::query(&bitmap, padding, hash_count, &values)
                .context("loading filter")?;
            for result in results {
                println!("{}\t{}", result.might_contain, result.value);
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Golden {
            filter,
            results,
            prefix,
        } => {
            let report = commands::golden(&filter, &results, &prefix)?;
            for mismatch in &report.mismatches {
                println!(
                    "MISMATCH #{} {}: expected {}, got {}",
                    mismatch.index, mismatch.document, mismatch.expected, mismatch.actual
                );
            }
            println!(
                "checked {} documents ({} expected positive), {} mismatches",
                report.checked,
                report.expected_positive,
                report.mismatches.len()
            );
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
