//! Formatting utilities used for CLI and export outputs.

use chrono::TimeDelta;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a duration as zero-padded `HH:MM`.
///
/// Hours are not wrapped at 24, so totals over several entries print as
/// e.g. `41:15`. Seconds are truncated.
pub fn format_hhmm(d: TimeDelta) -> String {
    let mins = d.num_minutes().max(0);
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Cut `s` to at most `max` chars, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
