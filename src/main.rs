use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use word_scramble::config::CliConfig;
use word_scramble::{GameInterface, Config, VERSION};
use tracing::{info, error};

#[derive(Parser)]
#[command(name = "word-scramble")]
#[command(about = "Make as many words as you can from the letters of a random root word")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for root word selection
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// File of root words, one per line
    #[arg(long)]
    start_words: Option<PathBuf>,

    /// Dictionary file, one word per line
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Language tag of the dictionary
    #[arg(short, long)]
    language: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliConfig {
        CliConfig {
            start_words: self.start_words.clone(),
            dictionary: self.dictionary.clone(),
            language: self.language.clone(),
            seed: self.seed,
            debug: self.debug,
            theme: self.theme.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.overrides());
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("word_scramble={},warn", config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Word Scramble v{}", VERSION);

    let mut game_interface = GameInterface::new(config).await?;

    if let Err(e) = game_interface.run().await {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["word-scramble", "--debug", "--seed", "42"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "word-scramble",
            "--theme",
            "dark",
            "--dictionary",
            "words.txt",
        ])
        .unwrap();

        let mut config = Config::default();
        config.merge_with_cli(cli.overrides());
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.paths.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.logging.level, "info");
    }
}
