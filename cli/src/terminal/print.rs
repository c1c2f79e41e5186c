use std::fmt::Display;

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    // Hangul is double width in a terminal
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    );

    print(&line);
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn success<V: Display + WithDefaultColor>(msg: V) {
    status_line("[+]".green().bold(), msg);
}

pub fn warning<V: Display + WithDefaultColor>(msg: V) {
    status_line("[*]".yellow().bold(), msg);
}

pub fn failure<V: Display + WithDefaultColor>(msg: V) {
    status_line("[-]".red().bold(), msg);
}

fn status_line<V: Display + WithDefaultColor>(symbol: ColoredString, msg: V) {
    let msg: ColoredString = msg.with_default(colors::TEXT_DEFAULT);
    print(&format!("{} {}", symbol, msg));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::MEAL_TITLE).bold()
    );
    print(&output);
}

fn branch(last: bool) -> ColoredString {
    if last {
        "└─".color(colors::SEPARATOR)
    } else {
        "├─".color(colors::SEPARATOR)
    }
}

/// One branch per item, values printed as given.
pub fn as_tree(items: &[ColoredString]) {
    for (i, item) in items.iter().enumerate() {
        let last: bool = i + 1 == items.len();
        print(&format!(" {} {}", branch(last), item));
    }
}

/// One branch per key/value pair, keys dotted out to a common width.
pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| UnicodeWidthStr::width(key.as_str()))
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let dots: usize = key_width.saturating_sub(UnicodeWidthStr::width(key.as_str()));
        let output: String = format!(
            " {} {}{}{} {}",
            branch(last),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(dots).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}
