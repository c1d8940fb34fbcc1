use clap::Subcommand;
use studyroom_core::StudyroomConfig;

#[derive(Subcommand)]
pub enum RequirementsAction {
    /// List the active requirement table
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RequirementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = StudyroomConfig::load()?;

    match action {
        RequirementsAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config.requirements)?);
            } else {
                for entry in &config.requirements.entries {
                    println!(
                        "{}: {}h/day (long), {}h/day (short), threshold {} days",
                        entry.keyword, entry.long_hours, entry.short_hours, entry.threshold_days
                    );
                }
                let fb = &config.requirements.fallback;
                println!(
                    "default: {}h/day (long), {}h/day (short), threshold {} days",
                    fb.long_hours, fb.short_hours, fb.threshold_days
                );
            }
        }
    }
    Ok(())
}
