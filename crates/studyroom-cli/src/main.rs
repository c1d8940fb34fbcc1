use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyroom-cli", version, about = "Studyroom CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a study diagnosis over an aggregated task analysis
    Diagnose(commands::diagnose::DiagnoseArgs),
    /// Aggregate raw session records into a task analysis
    Analyze(commands::analyze::AnalyzeArgs),
    /// Exam requirement table inspection
    Requirements {
        #[command(subcommand)]
        action: commands::requirements::RequirementsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Diagnose(args) => commands::diagnose::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Requirements { action } => commands::requirements::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
