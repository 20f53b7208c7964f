//! Cosmetic timers for the terminal front end.
//!
//! Nothing here touches game state: the main loop ticks [`Effects`] with the
//! elapsed time and asks it what to draw (spinner, toast) and when a delayed
//! callout is due.

use crate::types::{CALLOUT_DELAY_MS, NOTICE_MS, PICK_ANIMATION_MS};

/// Spinner frames shown around the current number while the picker spins.
pub const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Milliseconds per spinner frame.
const SPIN_FRAME_MS: u32 = 100;

/// A short-lived message under the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, is_error: bool) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCallout {
    number: u8,
    due_in_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Effects {
    spin_left_ms: u32,
    spin_elapsed_ms: u32,
    pending: Option<PendingCallout>,
    toast: Option<Toast>,
    toast_left_ms: u32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the pick animation and schedule the callout for `number`.
    ///
    /// A callout still waiting from an earlier draw is dropped.
    pub fn on_number_drawn(&mut self, number: u8) {
        self.spin_left_ms = PICK_ANIMATION_MS;
        self.spin_elapsed_ms = 0;
        self.pending = Some(PendingCallout {
            number,
            due_in_ms: CALLOUT_DELAY_MS,
        });
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
        self.toast_left_ms = NOTICE_MS;
    }

    /// Advance all timers by `dt_ms`; returns the number whose callout is now due.
    pub fn tick(&mut self, dt_ms: u32) -> Option<u8> {
        if self.spin_left_ms > 0 {
            self.spin_left_ms = self.spin_left_ms.saturating_sub(dt_ms);
            self.spin_elapsed_ms = self.spin_elapsed_ms.saturating_add(dt_ms);
        }

        if self.toast.is_some() {
            self.toast_left_ms = self.toast_left_ms.saturating_sub(dt_ms);
            if self.toast_left_ms == 0 {
                self.toast = None;
            }
        }

        let pending = self.pending.as_mut()?;
        pending.due_in_ms = pending.due_in_ms.saturating_sub(dt_ms);
        if pending.due_in_ms > 0 {
            return None;
        }
        self.pending.take().map(|p| p.number)
    }

    pub fn is_spinning(&self) -> bool {
        self.spin_left_ms > 0
    }

    /// Current spinner frame, `None` once the animation has finished.
    pub fn spin_frame(&self) -> Option<char> {
        if !self.is_spinning() {
            return None;
        }
        let i = (self.spin_elapsed_ms / SPIN_FRAME_MS) as usize % SPINNER.len();
        Some(SPINNER[i])
    }

    pub fn pending_callout(&self) -> Option<u8> {
        self.pending.map(|p| p.number)
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Anything still moving (the loop can slow down when idle).
    pub fn is_active(&self) -> bool {
        self.is_spinning() || self.pending.is_some() || self.toast.is_some()
    }

    /// Drop the animation and any pending callout; the toast stays.
    pub fn cancel_draw(&mut self) {
        self.spin_left_ms = 0;
        self.spin_elapsed_ms = 0;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callout_fires_once_after_delay() {
        let mut fx = Effects::new();
        fx.on_number_drawn(42);
        assert_eq!(fx.pending_callout(), Some(42));
        assert_eq!(fx.tick(CALLOUT_DELAY_MS - 1), None);
        assert_eq!(fx.tick(1), Some(42));
        assert_eq!(fx.tick(1_000), None);
        assert_eq!(fx.pending_callout(), None);
    }

    #[test]
    fn newer_draw_replaces_pending_callout() {
        let mut fx = Effects::new();
        fx.on_number_drawn(1);
        fx.tick(300);
        fx.on_number_drawn(2);
        assert_eq!(fx.tick(300), None);
        assert_eq!(fx.tick(200), Some(2));
    }

    #[test]
    fn spinner_runs_for_pick_animation() {
        let mut fx = Effects::new();
        assert_eq!(fx.spin_frame(), None);
        fx.on_number_drawn(9);
        assert_eq!(fx.spin_frame(), Some(SPINNER[0]));
        fx.tick(SPIN_FRAME_MS);
        assert_eq!(fx.spin_frame(), Some(SPINNER[1]));
        fx.tick(PICK_ANIMATION_MS);
        assert!(!fx.is_spinning());
        assert_eq!(fx.spin_frame(), None);
    }

    #[test]
    fn toast_expires() {
        let mut fx = Effects::new();
        fx.show_toast(Toast::new("Game Started!", "Good luck!", false));
        fx.tick(NOTICE_MS - 1);
        assert_eq!(fx.toast().map(|t| t.title.as_str()), Some("Game Started!"));
        fx.tick(1);
        assert!(fx.toast().is_none());
        assert!(!fx.is_active());
    }

    #[test]
    fn cancel_draw_keeps_toast() {
        let mut fx = Effects::new();
        fx.on_number_drawn(5);
        fx.show_toast(Toast::new("Game Reset", "", false));
        fx.cancel_draw();
        assert_eq!(fx.tick(CALLOUT_DELAY_MS), None);
        assert!(!fx.is_spinning());
        assert!(fx.toast().is_some());
    }
}
