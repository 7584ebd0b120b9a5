//! Terminal messages with colour and icon prefixes.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn render<T: fmt::Display>(self, msg: T) -> String {
        format!("{}{}{} {}{}", self.colour(), BOLD, self.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.render(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.render(msg));
}

/// Printed on stdout: warnings never change the exit status.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.render(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.render(msg));
}
