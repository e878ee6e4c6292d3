use dialoguer::{Select, Input, Confirm};
use std::time::Duration;
use tokio::time::sleep;

use crate::core::{GameEngine, Submission};
use crate::words::WordLoader;
use crate::ui::{Display, ThemeManager};
use crate::config::Config;
use crate::utils::{GameError, GameResult};
use tracing::{debug, info, warn, error};

/// Entries of the options menu opened by submitting an empty line.
enum MenuAction {
    KeepPlaying,
    NewWord,
    History,
    Statistics,
    ChangeTheme,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::KeepPlaying,
        MenuAction::NewWord,
        MenuAction::History,
        MenuAction::Statistics,
        MenuAction::ChangeTheme,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::KeepPlaying => "✏️ Keep playing",
            MenuAction::NewWord => "🔀 Try a new word",
            MenuAction::History => "📜 Recent attempts",
            MenuAction::Statistics => "📊 Round statistics",
            MenuAction::ChangeTheme => "🎨 Change theme",
            MenuAction::Quit => "🚪 Quit",
        }
    }
}

pub struct GameInterface {
    engine: GameEngine,
    display: Display,
    config: Config,
}

impl GameInterface {
    pub async fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let loader = WordLoader::new(&config.paths.start_words, &config.paths.dictionary);
        let start_words = loader.load_start_words(config.game.seed).await;
        let dictionary = loader.load_dictionary(&config.game.language).await?;

        let mut display = Display::new(ThemeManager::new(), config.ui.text_width)
            .map_err(|e| GameError::interface(format!("Failed to create display: {}", e)))?;

        if !display.set_theme(&config.ui.theme) {
            warn!("Unknown theme '{}', using default", config.ui.theme);
        }

        if start_words.is_empty() {
            display
                .show_warning(&format!(
                    "No start words found, playing with '{}'",
                    config.game.fallback_root_word
                ))
                .ok();
        }

        let engine = GameEngine::new(Box::new(start_words), Box::new(dictionary), config.rules());

        Ok(Self {
            engine,
            display,
            config,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub async fn run(&mut self) -> GameResult<()> {
        info!("Starting game loop");

        loop {
            match self.play_turn().await {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) => {
                    error!("Turn error: {}", e);
                    self.display.show_error(&format!("An error occurred: {}", e)).ok();
                    self.display.wait_for_enter().ok();
                }
            }
        }

        match self.engine.export_history() {
            Ok(history) => debug!("Attempt history: {}", history),
            Err(e) => warn!("Could not export attempt history: {}", e),
        }

        let stats = self.engine.state().get_statistics();
        self.display
            .show_message(&format!("Final score: {} ({} words)", stats.score, stats.words_found), "score")
            .ok();
        self.display.show_message("Thanks for playing!", "success").ok();

        Ok(())
    }

    /// One prompt and its outcome. Returns `false` once the player quits.
    async fn play_turn(&mut self) -> GameResult<bool> {
        self.render_round()?;

        let candidate: String = Input::new()
            .with_prompt("Enter your word (empty for options)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GameError::interface(format!("Word input error: {}", e)))?;

        match self.engine.submit(&candidate) {
            Ok(Submission::Accepted { word, points }) => {
                self.display.show_success(&format!("{} +{}", word, points))?;
                self.pause().await;
                Ok(true)
            }
            Ok(Submission::Ignored) => self.options_menu().await,
            Err(reason) => {
                self.display.show_rejection(&reason)?;
                self.display.wait_for_enter()?;
                Ok(true)
            }
        }
    }

    fn render_round(&self) -> GameResult<()> {
        self.display.clear_screen().ok();
        self.display.show_title("🔤 Word Scramble")?;

        let state = self.engine.state();
        self.display.show_round_header(state)?;
        self.display.show_used_words(&state.used_words, self.config.ui.show_word_lengths)?;
        self.display.show_separator()?;
        Ok(())
    }

    async fn options_menu(&mut self) -> GameResult<bool> {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();

        let selection = Select::new()
            .with_prompt("Options")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| GameError::interface(format!("Menu selection error: {}", e)))?;

        match MenuAction::ALL[selection] {
            MenuAction::KeepPlaying => {}
            MenuAction::NewWord => {
                let root_word = self.engine.new_round().root_word.clone();
                self.display.show_success(&format!("New root word: {}", root_word))?;
                self.pause().await;
            }
            MenuAction::History => {
                self.display.clear_screen().ok();
                let events = self.engine.recent_events(self.config.ui.recent_history);
                self.display.show_history(&events)?;
                self.display.wait_for_enter()?;
            }
            MenuAction::Statistics => {
                self.display.clear_screen().ok();
                self.display.show_statistics(&self.engine.state().get_statistics())?;
                self.display.wait_for_enter()?;
            }
            MenuAction::ChangeTheme => self.change_theme()?,
            MenuAction::Quit => return Ok(!self.confirm_quit()?),
        }

        Ok(true)
    }

    fn change_theme(&mut self) -> GameResult<()> {
        let themes = self.display.get_available_themes();

        let selection = Select::new()
            .with_prompt("Choose theme")
            .items(&themes)
            .interact()
            .map_err(|e| GameError::interface(format!("Theme selection error: {}", e)))?;

        let selected_theme = &themes[selection];
        if self.display.set_theme(selected_theme) {
            self.config.ui.theme = selected_theme.clone();
            self.display.show_success(&format!("Theme changed to '{}'", selected_theme))?;
        } else {
            self.display.show_error(&format!("Failed to set theme '{}'", selected_theme))?;
        }

        Ok(())
    }

    fn confirm_quit(&self) -> GameResult<bool> {
        Confirm::new()
            .with_prompt("Quit? Your words are not kept between sessions")
            .default(false)
            .interact()
            .map_err(|e| GameError::interface(format!("Quit confirmation error: {}", e)))
    }

    async fn pause(&self) {
        let delay = self.config.get_animation_delay_ms();
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }
    }
}
