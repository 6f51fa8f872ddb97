//! Notifications the control core sends to the UI.
//!
//! Rendering is someone else's job: every method is a fire-and-forget
//! notification with no return value. Implementations typically copy the
//! strings into their own frame buffer state.

use crate::control::{Page, Section};

/// One-off messages that are not tied to a parameter or patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notice {
    /// Patch storage is unavailable. Live edits still work.
    NoStorage,
    /// The catalog is full and nothing more can be saved.
    CatalogFull,
    /// The patch at the front of the catalog is about to be deleted.
    Deleting,
    /// Every voice was silenced.
    Panic,
    /// The current patch was rebuilt from the panel.
    Reinitialised,
}

/// UI sink for the control core.
pub trait Display {
    /// Show a parameter readout. `section` tags which panel section the
    /// parameter belongs to, when it has one.
    fn show_parameter(&mut self, label: &str, value: &str, section: Option<Section>);

    /// Show a patch. `version` is the stored format version, when known.
    fn show_patch(&mut self, number: u16, name: &str, version: Option<u8>);

    /// Show the naming editor: the name typed so far and the character
    /// currently under the cursor.
    fn show_renaming(&mut self, typed: &str, candidate: char);

    /// Show a settings entry and its (possibly pending) value.
    fn show_settings(&mut self, setting: &str, value: &str);

    fn show_notice(&mut self, notice: Notice);

    /// The control state machine moved to `page`.
    fn page_changed(&mut self, _page: Page) {}
}
