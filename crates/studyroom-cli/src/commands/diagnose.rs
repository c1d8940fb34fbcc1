use chrono::{Local, NaiveDate};
use clap::Args;
use studyroom_core::{days_until, StudyroomConfig, TaskAnalysis};

#[derive(Args)]
pub struct DiagnoseArgs {
    /// Task analysis JSON file, or "-" for stdin
    #[arg(short, long)]
    pub input: String,
    /// Target exam name (matched against the requirement table keywords)
    #[arg(short, long)]
    pub exam: String,
    /// Days until the exam
    #[arg(short, long, conflicts_with = "exam_date")]
    pub days: Option<i64>,
    /// Exam date (YYYY-MM-DD), used to derive the day count
    #[arg(long)]
    pub exam_date: Option<NaiveDate>,
    /// Print the full diagnosis as JSON instead of the report text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DiagnoseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let days = match (args.days, args.exam_date) {
        (Some(days), _) => days,
        (None, Some(date)) => days_until(date, Local::now().date_naive()),
        (None, None) => return Err("either --days or --exam-date is required".into()),
    };

    let raw = super::read_input(&args.input)?;
    let analysis: TaskAnalysis = serde_json::from_str(&raw)?;

    let config = StudyroomConfig::load()?;
    let diagnosis = config.engine().generate(&analysis, &args.exam, days);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diagnosis)?);
    } else {
        println!("{}", diagnosis.study_time_balance);
        println!();
        println!("{}", diagnosis.habit_optimization);
        println!();
        println!("{}", diagnosis.goal_achievability);
    }
    Ok(())
}
