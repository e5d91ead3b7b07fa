use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "labcal", version, about = "Laboratory calibration scheduling CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next calibration due date
    Next(commands::next::NextArgs),
    /// Classify how urgent a calibration due date is
    Classify(commands::classify::ClassifyArgs),
    /// Work with a JSON file of calibration records
    Calibration {
        #[command(subcommand)]
        action: commands::calibration::CalibrationAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Next(args) => commands::next::run(args),
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Calibration { action } => commands::calibration::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "labcal", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
