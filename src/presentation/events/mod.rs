//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Terminal event filter.
pub struct EventHandler;

impl EventHandler {
    /// Extracts a key press from a terminal event.
    ///
    /// Release and repeat events are dropped so each key acts once on
    /// terminals that report them.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// Checks whether the event requires a redraw.
    #[must_use]
    pub const fn needs_redraw(event: &Event) -> bool {
        matches!(event, Event::Key(_) | Event::Resize(..) | Event::Paste(_))
    }
}
