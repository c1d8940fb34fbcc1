use clap::Args;
use studyroom_core::{SessionRecord, StudyroomConfig, TaskAnalyzer};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Session records JSON array file, or "-" for stdin
    #[arg(short, long)]
    pub input: String,
    /// How many top tasks to keep
    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw = super::read_input(&args.input)?;
    let records: Vec<SessionRecord> = serde_json::from_str(&raw)?;

    let config = StudyroomConfig::load()?;
    let analysis = TaskAnalyzer::new()
        .with_study_category(config.study_category)
        .with_top_task_limit(args.top)
        .aggregate(&records);

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
