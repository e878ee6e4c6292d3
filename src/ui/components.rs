use console::Term;
use std::io::{self, Write};
use crate::ui::ThemeManager;
use crate::core::{GameEvent, RejectionReason, RoundState, RoundStatistics};

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    text_width: usize,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, text_width: usize) -> io::Result<Self> {
        Ok(Self {
            term: Term::stdout(),
            theme_manager,
            text_width,
        })
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");
        writeln!(io::stdout(), "{}", styled_title)?;
        self.show_separator()?;
        Ok(())
    }

    /// Root word on the left, score on the right.
    pub fn show_round_header(&self, state: &RoundState) -> io::Result<()> {
        let score_text = format!("Score: {}", state.score);
        let padding = self
            .text_width
            .saturating_sub(state.root_word.chars().count() + score_text.len())
            .max(1);

        writeln!(
            io::stdout(),
            "{}{}{}",
            self.theme_manager.apply_style(&state.root_word, "root_word"),
            " ".repeat(padding),
            self.theme_manager.apply_style(&score_text, "score"),
        )?;
        self.show_separator()?;
        Ok(())
    }

    pub fn show_used_words(&self, used_words: &[String], show_lengths: bool) -> io::Result<()> {
        if used_words.is_empty() {
            return self.show_message("   No words yet. Make one from the letters above.", "info");
        }

        for word in used_words {
            let styled_word = self.theme_manager.apply_style(word, "used_word");
            if show_lengths {
                let badge = length_badge(word.chars().count());
                let styled_badge = self.theme_manager.apply_style(&badge, "word_length");
                writeln!(io::stdout(), "   {} {}", styled_badge, styled_word)?;
            } else {
                writeln!(io::stdout(), "   {}", styled_word)?;
            }
        }

        Ok(())
    }

    /// Title line plus message line, the way a modal alert reads.
    pub fn show_rejection(&self, reason: &RejectionReason) -> io::Result<()> {
        writeln!(io::stdout())?;
        self.show_message(&format!("❌ {}", reason.title()), "alert_title")?;
        self.show_message(&format!("   {}", reason.message()), "alert_message")?;
        Ok(())
    }

    pub fn show_statistics(&self, stats: &RoundStatistics) -> io::Result<()> {
        self.show_title("📊 Round Statistics")?;
        self.show_message(&format!("Root word: {}", stats.root_word), "info")?;
        self.show_message(&format!("Words found: {}", stats.words_found), "info")?;
        self.show_message(&format!("Score: {}", stats.score), "info")?;
        if let Some(longest) = &stats.longest_word {
            self.show_message(&format!("Longest word: {}", longest), "info")?;
        }
        self.show_message(&format!("Time played: {}", stats.get_elapsed_formatted()), "info")?;
        self.show_separator()?;
        Ok(())
    }

    pub fn show_history(&self, events: &[GameEvent]) -> io::Result<()> {
        self.show_title("📜 Recent Attempts")?;

        if events.is_empty() {
            self.show_message("   Nothing yet.", "info")?;
        }
        for event in events {
            let line = format!(
                "   {}  {}",
                event.timestamp.format("%H:%M:%S"),
                event.describe()
            );
            self.show_message(&line, "info")?;
        }

        self.show_separator()?;
        Ok(())
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_error(&self, error: &str) -> io::Result<()> {
        self.show_message(&format!("❌ {}", error), "alert_title")
    }

    pub fn show_success(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("✅ {}", message), "success")
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("⚠️ {}", message), "warning")
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let separator = "─".repeat(self.text_width);
        let styled = self.theme_manager.apply_style(&separator, "separator");
        writeln!(io::stdout(), "{}", styled)?;
        Ok(())
    }

    pub fn wait_for_enter(&self) -> io::Result<()> {
        let styled_prompt = self.theme_manager.apply_style("Press Enter to continue...", "info");
        print!("{}", styled_prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }
}

/// Circled number for word lengths up to twenty, bracketed beyond that.
pub fn length_badge(length: usize) -> String {
    match length {
        1..=20 => char::from_u32(0x2460 + length as u32 - 1)
            .map(|c| c.to_string())
            .unwrap_or_else(|| format!("({})", length)),
        _ => format!("({})", length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_creation() {
        let theme_manager = ThemeManager::new();
        let display = Display::new(theme_manager, 60);
        assert!(display.is_ok());
    }

    #[test]
    fn test_length_badge() {
        assert_eq!(length_badge(1), "①");
        assert_eq!(length_badge(4), "④");
        assert_eq!(length_badge(8), "⑧");
        assert_eq!(length_badge(20), "⑳");
        assert_eq!(length_badge(21), "(21)");
        assert_eq!(length_badge(0), "(0)");
    }

    #[test]
    fn test_set_theme() {
        let mut display = Display::new(ThemeManager::new(), 60).unwrap();
        assert!(display.set_theme("light"));
        assert!(!display.set_theme("sepia"));
        assert_eq!(display.get_available_themes().len(), 3);
    }
}
