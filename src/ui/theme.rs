use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl ColorConfig {
    /// `style` is a comma separated list such as `"bold,underline"`.
    fn new(foreground: &str, style: &str) -> Self {
        Self {
            foreground: Some(foreground.to_string()),
            style: style
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Theme {
    fn from_styles(name: &str, styles: &[(&str, &str, &str)]) -> Self {
        let colors = styles
            .iter()
            .map(|(key, fg, style)| (key.to_string(), ColorConfig::new(fg, style)))
            .collect();

        Self {
            name: name.to_string(),
            colors,
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: "default".to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(color_config) = self
            .themes
            .get(&self.current_theme)
            .and_then(|theme| theme.colors.get(style_name))
        else {
            return text.to_string();
        };

        let mut styled = text.normal();
        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled = styled.color(color);
        }

        for style in &color_config.style {
            styled = match style.as_str() {
                "bold" => styled.bold(),
                "italic" => styled.italic(),
                "underline" => styled.underline(),
                "dimmed" => styled.dimmed(),
                _ => styled,
            };
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let themes = [
            Theme::from_styles("default", &[
                ("title", "cyan", "bold"),
                ("root_word", "magenta", "bold,underline"),
                ("score", "yellow", "bold"),
                ("used_word", "green", ""),
                ("word_length", "bright_black", ""),
                ("alert_title", "red", "bold"),
                ("alert_message", "white", ""),
                ("success", "green", "bold"),
                ("warning", "yellow", "bold"),
                ("info", "blue", ""),
                ("separator", "bright_black", "dimmed"),
            ]),
            Theme::from_styles("dark", &[
                ("title", "bright_cyan", "bold"),
                ("root_word", "bright_magenta", "bold,underline"),
                ("score", "bright_yellow", "bold"),
                ("used_word", "bright_green", ""),
                ("word_length", "white", "dimmed"),
                ("alert_title", "bright_red", "bold"),
                ("alert_message", "bright_white", ""),
                ("success", "bright_green", "bold"),
                ("warning", "bright_yellow", "bold"),
                ("info", "bright_blue", ""),
                ("separator", "white", "dimmed"),
            ]),
            Theme::from_styles("light", &[
                ("title", "blue", "bold"),
                ("root_word", "magenta", "bold"),
                ("score", "black", "bold"),
                ("used_word", "blue", ""),
                ("alert_title", "red", "bold"),
                ("alert_message", "black", ""),
                ("success", "green", ""),
            ]),
        ];

        for theme in themes {
            self.themes.insert(theme.name.clone(), theme);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}
