//! Logging and debugging facilities for Trestle.
//!
//! This module provides:
//! - Target and span names for the `tracing` instrumentation in this crate
//! - Debug visualization of an event set's events and subscriber counts
//!
//! # Tracing Integration
//!
//! Trestle uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("trestle_core::event=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use trestle_core::{EventSet, logging::EventSetDebug};
//!
//! let events = EventSet::with_owner("OkButton");
//! events.subscribe_event("Clicked", |_| true);
//!
//! let output = EventSetDebug::new().format(&events);
//! assert!(output.contains("Clicked (1 subscriber)"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::event_set::EventSet;

/// Span names used throughout Trestle for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Event dispatch span.
    pub const FIRE: &str = "trestle::fire";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Event set management (add/remove/mute).
    pub const EVENT_SET: &str = "trestle_core::event_set";
    /// Per-event subscription and dispatch.
    pub const EVENT: &str = "trestle_core::event";
    /// Namespaced dispatch through the global event set.
    pub const GLOBAL: &str = "trestle_core::global";
}

/// Style options for event set visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact single-line representation.
    Compact,
}

/// Configuration for event set debug output.
#[derive(Debug, Clone)]
pub struct DebugFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show the owner label as the root line.
    pub show_owner: bool,
    /// Whether to show subscriber counts next to each event.
    pub show_counts: bool,
    /// Whether to list events that have no subscribers.
    pub show_empty: bool,
}

impl Default for DebugFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_owner: true,
            show_counts: true,
            show_empty: true,
        }
    }
}

impl DebugFormatOptions {
    /// Options for minimal output: event names only.
    pub fn minimal() -> Self {
        Self {
            show_owner: false,
            show_counts: false,
            ..Default::default()
        }
    }
}

/// Debug utility that renders the events of an [`EventSet`] as a tree.
#[derive(Debug, Clone, Default)]
pub struct EventSetDebug {
    options: DebugFormatOptions,
}

impl EventSetDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: DebugFormatOptions) -> Self {
        Self { options }
    }

    /// Render the events of `set`, in insertion order.
    pub fn format(&self, set: &EventSet) -> String {
        let mut output = String::new();

        if self.options.show_owner {
            let owner = if set.owner().is_empty() {
                "(unnamed)"
            } else {
                set.owner()
            };
            let muted = if set.is_muted() { " [muted]" } else { "" };
            writeln!(output, "{owner}{muted}").expect("write to String");
        }

        let rows: Vec<(String, usize)> = set
            .event_names()
            .into_iter()
            .filter_map(|name| {
                let count = set.event(&name)?.subscriber_count();
                (self.options.show_empty || count > 0).then_some((name, count))
            })
            .collect();

        if rows.is_empty() {
            writeln!(output, "  (no events)").expect("write to String");
            return output;
        }

        let last = rows.len() - 1;
        for (i, (name, count)) in rows.into_iter().enumerate() {
            output.push_str(self.connector(i == last));
            output.push_str(&name);
            if self.options.show_counts {
                let noun = if count == 1 { "subscriber" } else { "subscribers" };
                write!(output, " ({count} {noun})").expect("write to String");
            }
            output.push('\n');
        }

        output
    }

    fn connector(&self, is_last: bool) -> &'static str {
        match (self.options.style, is_last) {
            (TreeStyle::Ascii, false) => "+-- ",
            (TreeStyle::Ascii, true) => "`-- ",
            (TreeStyle::Unicode, false) => "\u{251c}\u{2500}\u{2500} ",
            (TreeStyle::Unicode, true) => "\u{2514}\u{2500}\u{2500} ",
            (TreeStyle::Compact, _) => "- ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> EventSet {
        let set = EventSet::with_owner("ListBox");
        set.add_event("SelectionChanged").unwrap();
        set.subscribe_event("Clicked", |_| false);
        set.subscribe_event("Clicked", |_| false);
        set
    }

    #[test]
    fn test_format_lists_events_in_order() {
        let output = EventSetDebug::new().format(&sample_set());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ListBox");
        assert!(lines[1].ends_with("SelectionChanged (0 subscribers)"));
        assert!(lines[2].ends_with("Clicked (2 subscribers)"));
        assert!(lines[2].starts_with('\u{2514}'));
    }

    #[test]
    fn test_format_minimal_hides_empty_and_counts() {
        let options = DebugFormatOptions {
            show_empty: false,
            style: TreeStyle::Ascii,
            ..DebugFormatOptions::minimal()
        };
        let output = EventSetDebug::with_options(options).format(&sample_set());

        assert_eq!(output, "`-- Clicked\n");
    }

    #[test]
    fn test_format_empty_set() {
        let set = EventSet::new();
        set.set_muted(true);
        let output = EventSetDebug::new().format(&set);

        assert!(output.starts_with("(unnamed) [muted]"));
        assert!(output.contains("(no events)"));
    }
}
