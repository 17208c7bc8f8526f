//! Device input to flap intent
//!
//! Browser events can land at any point between two frames. They only set a
//! latch here; the frame loop takes it once at the next tick boundary.

/// A raw device event the game cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse button / pointer press on the playfield
    PointerDown,
    /// Finger down on the playfield
    TouchStart,
    /// Key press, by `KeyboardEvent.code`
    KeyDown { code: String, repeat: bool },
}

impl InputEvent {
    /// Whether this event means "flap"
    pub fn is_flap(&self) -> bool {
        match self {
            InputEvent::PointerDown | InputEvent::TouchStart => true,
            InputEvent::KeyDown { repeat: true, .. } => false,
            InputEvent::KeyDown { code, .. } => matches!(code.as_str(), "Space" | "ArrowUp"),
        }
    }
}

/// Pending flap, coalesced per frame
#[derive(Debug, Clone, Default)]
pub struct FlapLatch {
    pending: bool,
    presses: u32,
}

impl FlapLatch {
    pub fn press(&mut self) {
        self.pending = true;
        self.presses = self.presses.saturating_add(1);
    }

    /// Latch the event if it is a flap. Returns whether it was.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        let is_flap = event.is_flap();
        if is_flap {
            self.press();
        }
        is_flap
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending flap. Any number of presses since the last
    /// call count as one.
    pub fn take(&mut self) -> bool {
        if self.presses > 1 {
            log::debug!("Coalesced {} presses into one flap", self.presses);
        }
        self.presses = 0;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str, repeat: bool) -> InputEvent {
        InputEvent::KeyDown {
            code: code.to_string(),
            repeat,
        }
    }

    #[test]
    fn test_flap_events() {
        assert!(InputEvent::PointerDown.is_flap());
        assert!(InputEvent::TouchStart.is_flap());
        assert!(key("Space", false).is_flap());
        assert!(key("ArrowUp", false).is_flap());
        assert!(!key("KeyA", false).is_flap());
        assert!(!key("Space", true).is_flap());
    }

    #[test]
    fn test_latch_coalesces() {
        let mut latch = FlapLatch::default();
        assert!(!latch.take());

        assert!(latch.handle(&InputEvent::PointerDown));
        assert!(latch.handle(&key("Space", false)));
        assert!(!latch.handle(&key("Enter", false)));
        assert!(latch.is_pending());

        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn test_press_count_saturates() {
        let mut latch = FlapLatch {
            pending: true,
            presses: u32::MAX,
        };
        latch.press();
        assert_eq!(latch.presses, u32::MAX);

        assert!(latch.take());
        assert_eq!(latch.presses, 0);
    }
}
