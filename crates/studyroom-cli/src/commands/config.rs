use clap::Subcommand;
use studyroom_core::StudyroomConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Show the active configuration
    Show,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", StudyroomConfig::path().display());
        }
        ConfigAction::Show => {
            let config = StudyroomConfig::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            let config = StudyroomConfig::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
