use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::core::Rules;
use crate::core::rules::{DEFAULT_LANGUAGE, DEFAULT_MIN_WORD_LENGTH, DEFAULT_ROOT_WORD};
use crate::utils::{GameError, GameResult};

/// Prefix for environment overrides, e.g. `WORD_SCRAMBLE__GAME__MIN_WORD_LENGTH=4`.
pub const ENV_PREFIX: &str = "WORD_SCRAMBLE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub paths: PathConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub language: String,
    pub min_word_length: usize,
    pub fallback_root_word: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: String,
    pub show_word_lengths: bool,
    pub animation_speed: AnimationSpeed,
    pub text_width: usize,
    pub recent_history: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub start_words: PathBuf,
    pub dictionary: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnimationSpeed {
    None,
    Slow,
    Medium,
    Fast,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                language: DEFAULT_LANGUAGE.to_string(),
                min_word_length: DEFAULT_MIN_WORD_LENGTH,
                fallback_root_word: DEFAULT_ROOT_WORD.to_string(),
                seed: None,
            },
            ui: UiConfig {
                theme: "default".to_string(),
                show_word_lengths: true,
                animation_speed: AnimationSpeed::Medium,
                text_width: 60,
                recent_history: 15,
            },
            paths: PathConfig {
                start_words: PathBuf::from("./assets/words/start.txt"),
                dictionary: PathBuf::from("./assets/dictionary/en.txt"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Defaults, then the TOML file if given and present, then `WORD_SCRAMBLE__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> GameResult<Self> {
        let defaults = ::config::Config::try_from(&Self::default())?;
        let mut builder = ::config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }

        let config: Config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GameError::configuration(format!("Failed to create config directory: {}", e)))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| GameError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if self.game.language.trim().is_empty() {
            return Err(GameError::configuration("Language tag cannot be empty"));
        }
        if self.game.min_word_length == 0 {
            return Err(GameError::configuration("Minimum word length must be greater than 0"));
        }
        if self.game.fallback_root_word.trim().is_empty() {
            return Err(GameError::configuration("Fallback root word cannot be empty"));
        }
        if self.paths.dictionary.as_os_str().is_empty() {
            return Err(GameError::configuration("Dictionary path cannot be empty"));
        }
        if self.ui.text_width < 20 {
            return Err(GameError::configuration("Text width must be at least 20"));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(start_words) = cli_config.start_words {
            self.paths.start_words = start_words;
        }
        if let Some(dictionary) = cli_config.dictionary {
            self.paths.dictionary = dictionary;
        }
        if let Some(language) = cli_config.language {
            self.game.language = language;
        }
        if let Some(seed) = cli_config.seed {
            self.game.seed = Some(seed);
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
    }

    pub fn rules(&self) -> Rules {
        Rules {
            language: self.game.language.clone(),
            min_word_length: self.game.min_word_length,
            fallback_root_word: self.game.fallback_root_word.clone(),
        }
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        match self.ui.animation_speed {
            AnimationSpeed::None => 0,
            AnimationSpeed::Slow => 600,
            AnimationSpeed::Medium => 300,
            AnimationSpeed::Fast => 100,
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub start_words: Option<PathBuf>,
    pub dictionary: Option<PathBuf>,
    pub language: Option<String>,
    pub seed: Option<u64>,
    pub debug: bool,
    pub theme: Option<String>,
}
