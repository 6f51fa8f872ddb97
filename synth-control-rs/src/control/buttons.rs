//! Panel button gestures.
//!
//! Buttons are sampled by the polling loop. [`ButtonState::update`] turns
//! the sampled level into gestures:
//!
//! - a level change only counts once it has been stable for
//!   [`DEBOUNCE_MS`];
//! - a press held for [`HOLD_MS`] produces [`Gesture::Hold`] immediately,
//!   while the button is still down;
//! - a release produces [`Gesture::Click`] unless the press already
//!   produced a hold.

use crate::{DEBOUNCE_MS, HOLD_MS};

/// The four panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// The main encoder's push switch.
    Recall,
    Save,
    Settings,
    Back,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Recall, Button::Save, Button::Settings, Button::Back];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Click,
    Hold,
}

/// Debounce and hold tracking for one button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Debounced level.
    pressed: bool,
    /// Last sampled level and when it last changed.
    sampled: bool,
    sampled_since: u32,
    pressed_at: u32,
    held: bool,
}

impl ButtonState {
    /// Feed one sample taken at `now_ms`. Timestamps may wrap.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<Gesture> {
        if pressed != self.sampled {
            self.sampled = pressed;
            self.sampled_since = now_ms;
        }

        let stable = now_ms.wrapping_sub(self.sampled_since) >= DEBOUNCE_MS;
        if stable && self.sampled != self.pressed {
            self.pressed = self.sampled;
            if self.pressed {
                self.pressed_at = now_ms;
                self.held = false;
            } else if !self.held {
                return Some(Gesture::Click);
            }
        }

        if self.pressed && !self.held && now_ms.wrapping_sub(self.pressed_at) >= HOLD_MS {
            self.held = true;
            return Some(Gesture::Hold);
        }
        None
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// State of every panel button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons {
    states: [ButtonState; 4],
}

impl Buttons {
    pub fn update(&mut self, button: Button, pressed: bool, now_ms: u32) -> Option<Gesture> {
        self.states[button as usize].update(pressed, now_ms)
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.states[button as usize].is_pressed()
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
