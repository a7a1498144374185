//! Styling helpers for CLI output, built on owo-colors.
//!
//! Colors are dropped entirely when `NO_COLOR` is set or `--quiet`-adjacent
//! tooling disables them via the output configuration.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for the semantic elements of CLI output.
pub struct Style;

impl Style {
    /// Section headers (e.g. the language listing title).
    pub fn header<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.bold())
        }
    }

    /// Language codes.
    pub fn code<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.yellow())
        }
    }

    /// Secondary/supplementary info (e.g. language names).
    pub fn secondary<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.dimmed())
        }
    }

    /// Warning prefixes.
    pub fn warning<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.yellow())
        }
    }

    /// Error prefixes.
    pub fn error<T: Display>(text: T) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.red().bold())
        }
    }
}
