//! Formatting helpers for terminal output
//!
//! Currency, percentages, text progress bars and optional ANSI colouring.

use std::fmt::Write;

use crate::config::settings::is_valid_date_format;
use crate::config::Settings;
use crate::metrics::progress_width;
use crate::models::Money;

/// Width of progress bars in characters
pub const BAR_WIDTH: usize = 30;

const ISO_DATE: &str = "%Y-%m-%d";

/// Semantic colour of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
    Danger,
    Neutral,
}

/// Output styling derived from the user's settings
#[derive(Debug, Clone)]
pub struct Theme {
    colour: bool,
    symbol: String,
    date_format: String,
}

impl Theme {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            colour: settings.dark_mode,
            symbol: settings.currency_symbol.clone(),
            date_format: if is_valid_date_format(&settings.date_format) {
                settings.date_format.clone()
            } else {
                ISO_DATE.to_string()
            },
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.symbol)
    }

    pub fn date(&self, date: chrono::NaiveDate) -> String {
        let mut rendered = String::new();
        match write!(rendered, "{}", date.format(&self.date_format)) {
            Ok(()) => rendered,
            Err(_) => date.format(ISO_DATE).to_string(),
        }
    }

    /// Wrap text in an ANSI colour when dark mode is on
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.colour {
            return text.to_string();
        }
        let code = match tone {
            Tone::Positive => "32",
            Tone::Warning => "33",
            Tone::Danger => "31",
            Tone::Neutral => return text.to_string(),
        };
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }

    /// Amount coloured by sign
    pub fn signed_money(&self, amount: Money) -> String {
        let tone = if amount.is_negative() {
            Tone::Danger
        } else if amount.is_positive() {
            Tone::Positive
        } else {
            Tone::Neutral
        };
        self.paint(tone, &self.money(amount))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Progress bar for a raw percentage; the bar saturates at 100
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = (progress_width(percentage) / 100.0 * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar scaled against the largest value of a chart
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    if !max_value.is_positive() || !value.is_positive() {
        return " ".repeat(width);
    }
    progress_bar(value.percentage_of(max_value), width)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
