//! Terminal rendering for termcal-core types.
//!
//! Extension trait adding colored weekly-view output using owo_colors.

use owo_colors::OwoColorize;
use termcal_core::week_view::DaySlot;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for DaySlot<'_> {
    fn render(&self) -> String {
        let mut lines = vec![format!("{}:", self.day.code().bold())];

        if self.events.is_empty() {
            lines.push(format!("  {}", "(none)".dimmed()));
        } else {
            for event in &self.events {
                lines.push(format!(
                    "  {}–{}  {}",
                    event.start.format("%H:%M"),
                    event.end.format("%H:%M"),
                    event.title,
                ));
            }
        }

        lines.join("\n")
    }
}

impl Render for [DaySlot<'_>] {
    fn render(&self) -> String {
        let mut lines = vec!["WEEKLY VIEW".bold().to_string(), "-".repeat(40)];

        for slot in self {
            lines.push(String::new());
            lines.push(slot.render());
        }

        lines.join("\n")
    }
}
