//! Transient emphasis of the last activated navbar control
//!
//! Activating a control moves the state to `Activated(label)` right away and
//! hands back a [`Ticket`]. The navbar schedules a reset task carrying that
//! ticket; when it fires after [`QUIESCENCE`] it calls [`HighlightState::expire`],
//! which only clears the emphasis if no newer activation happened meanwhile.

use std::time::Duration;

/// Highlight key of the home link
pub const LOGO_LABEL: &str = "logo";

/// Delay after which the emphasis clears
pub const QUIESCENCE: Duration = Duration::from_millis(600);

/// Identifies one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightState {
    active: Option<String>,
    generation: u64,
}

impl HighlightState {
    /// Enters `Activated(label)`, superseding any earlier activation
    pub fn activate(&mut self, label: impl Into<String>) -> Ticket {
        let label = label.into();
        self.generation += 1;
        log::debug!("Highlighting `{}` (activation {})", label, self.generation);
        self.active = Some(label);
        Ticket(self.generation)
    }

    /// Returns to `Neutral` if `ticket` is from the latest activation.
    /// Returns whether the state changed.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.generation || self.active.is_none() {
            log::debug!("Ignoring stale reset for activation {}", ticket.0);
            return false;
        }
        log::debug!("Clearing highlight after activation {}", ticket.0);
        self.active = None;
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_emphasized(&self, label: &str) -> bool {
        self.active() == Some(label)
    }
}
