use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use u_completion::scheduler::Comparison;

/// Weighted completion time of the difference and ratio greedy schedules
#[derive(Parser, Debug)]
#[command(name = "u-completion")]
#[command(about = "Compare greedy single-machine schedules by weighted completion time")]
#[command(version)]
struct Cli {
    /// Job list: a count line, then one `<weight> <length>` pair per line
    input: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "U_COMPLETION_LOG", default_value = "warn")]
    log_level: String,

    /// Print both schedules as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {e}");
    }

    let comparison = match Comparison::from_path(&cli.input) {
        Ok(comparison) => comparison,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&comparison) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "Bad Sum of Weighted Completion Times: {}",
            comparison.bad.weighted_sum
        );
        println!(
            "Good Sum of Weighted Completion Times: {}",
            comparison.good.weighted_sum
        );
    }

    ExitCode::SUCCESS
}
