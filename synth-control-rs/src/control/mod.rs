//! Control dispatch: MIDI, encoders and buttons in, parameter updates and
//! patch operations out.
//!
//! # Architecture
//!
//! ```text
//!  MIDI CC ───────────────┐
//!                         ▼
//!  section encoder ─▶ stepped raw ─▶ CC dispatch ─▶ pick-up ─▶ VoiceGroup::update
//!                                                              │
//!  main encoder ──┐                                            ▼
//!  buttons ───────┴─▶ page state machine ─▶ PatchStore     SynthEngine, Display
//! ```
//!
//! Panel encoder edits are turned into the raw controller value an
//! external controller would have sent and re-enter the same dispatch, so
//! local and remote edits produce identical engine state and readouts.
//! Pick-up only applies to absolute (MIDI) input: a relative edit starts
//! from the applied value and cannot be out of step with it.
//!
//! # Pages
//!
//! | Page | Main encoder | Recall click |
//! |------|--------------|--------------|
//! | `Parameter` | browse and recall patches | open `Recall` |
//! | `Recall` | browse | recall, back to `Parameter` |
//! | `Save` | choose the slot to overwrite | name the patch |
//! | `PatchNaming` | choose a character | append it |
//! | `Delete` | choose the patch | delete it |
//! | `Settings` | choose a setting | edit it |
//! | `SettingsValue` | change the value | store it |
//!
//! `Patch`, `DeleteMessage` and `Reinitialise` are transient pages shown
//! while an operation runs.

mod buttons;
mod naming;
mod section;

pub use buttons::{Button, ButtonState, Buttons, Gesture};
pub use naming::{NameEditor, NAMING_ALPHABET};
pub use section::{section_of, stepped_raw, Section, SlotEdit, SECTION_NAMES, SECTION_SLOTS};

use heapless::Vec;

use crate::display::{Display, Notice};
use crate::engine::{Mode, SynthEngine};
use crate::error::StoreError;
use crate::mapping::VoiceGroup;
use crate::params::cc::{self, CcAction};
use crate::params::{Kind, Param};
use crate::patch::{
    patch_name, PatchEntry, PatchRecord, PatchStorage, PatchStore, INITIAL_PATCH_NAME,
};
use crate::pickup::PickUp;
use crate::settings::{Settings, SettingsMenu};
use crate::{FORMAT_VERSION, MAX_VOICE_GROUPS};

/// MIDI clock pulses per quarter note.
const CLOCKS_PER_BEAT: u8 = 24;

/// Pages of the control state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    #[default]
    Parameter,
    Recall,
    Save,
    PatchNaming,
    Delete,
    DeleteMessage,
    Settings,
    SettingsValue,
    Reinitialise,
    Patch,
}

/// Where a controller value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// An absolute control: MIDI or a pot.
    Absolute,
    /// A relative panel encoder.
    Relative,
}

/// Beat frequency from MIDI clock pulses.
#[derive(Debug, Clone, Copy, Default)]
struct Clock {
    ticks: u8,
    beat_started_ms: Option<u32>,
}

/// The instrument: voice groups, the patch store and the control surface.
///
/// All state is owned here and mutated only from the polling loop.
pub struct Instrument<E: SynthEngine, D: Display, S: PatchStorage> {
    /// Never empty; `active` always indexes it.
    groups: Vec<VoiceGroup<E>, MAX_VOICE_GROUPS>,
    active: usize,
    display: D,
    /// `None` when no storage is attached or it failed at startup.
    store: Option<PatchStore<S>>,
    settings: Settings,
    pick_up: PickUp,
    page: Page,
    section: Section,
    section_switch: bool,
    /// Number of the patch the active group was last recalled from or
    /// saved to.
    patch_no: u16,
    naming: NameEditor,
    menu: SettingsMenu,
    buttons: Buttons,
    clock: Clock,
}

impl<E: SynthEngine, D: Display, S: PatchStorage> Instrument<E, D, S> {
    /// Build an instrument with one voice group. Pass `None` for `storage`
    /// to run without patch storage.
    ///
    /// Nothing is loaded until [`start`](Self::start).
    pub fn new(engine: E, display: D, storage: Option<S>, settings: Settings) -> Self {
        let mut group = VoiceGroup::new(engine);
        group.set_mod_wheel_depth(settings.mod_wheel_scale());
        let mut groups = Vec::new();
        // Capacity is at least one.
        let _ = groups.push(group);
        Self {
            groups,
            active: 0,
            display,
            store: storage.map(PatchStore::new),
            settings,
            pick_up: PickUp::new(settings.pick_up),
            page: Page::Parameter,
            section: Section::default(),
            section_switch: false,
            patch_no: 1,
            naming: NameEditor::default(),
            menu: SettingsMenu::default(),
            buttons: Buttons::default(),
            clock: Clock::default(),
        }
    }

    /// Add a voice group. Returns the engine back when
    /// [`MAX_VOICE_GROUPS`] are in use.
    pub fn add_group(&mut self, engine: E) -> Result<usize, E> {
        let mut group = VoiceGroup::new(engine);
        group.set_mod_wheel_depth(self.settings.mod_wheel_scale());
        match self.groups.push(group) {
            Ok(()) => Ok(self.groups.len() - 1),
            Err(group) => Err(group.into_engine()),
        }
    }

    /// Choose which voice group the control surface edits.
    pub fn set_active_group(&mut self, index: usize) -> bool {
        if index < self.groups.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn active_group(&self) -> usize {
        self.active
    }

    pub fn group(&self, index: usize) -> Option<&VoiceGroup<E>> {
        self.groups.get(index)
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut VoiceGroup<E>> {
        self.groups.get_mut(index)
    }

    /// The record of the active voice group.
    pub fn record(&self) -> &PatchRecord {
        self.groups[self.active].record()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn store(&self) -> Option<&PatchStore<S>> {
        self.store.as_ref()
    }

    pub fn has_storage(&self) -> bool {
        self.store.is_some()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn patch_no(&self) -> u16 {
        self.patch_no
    }

    pub fn pick_up(&self) -> &PickUp {
        &self.pick_up
    }

    // ── Startup ──────────────────────────────────────────────────────

    /// Load the catalog and recall the first patch.
    ///
    /// Without usable storage the instrument keeps running on the initial
    /// patch and shows [`Notice::NoStorage`]. Empty storage gets the
    /// initial patch saved as number 1.
    pub fn start(&mut self) {
        let loaded = match self.store.as_mut() {
            Some(store) => match store.load() {
                Ok(0) => store
                    .save(1, &PatchRecord::default())
                    .and_then(|()| store.load())
                    .map(|_| ()),
                Ok(_) => Ok(()),
                Err(e) => Err(e),
            },
            None => Err(StoreError::Offline),
        };

        if let Err(_e) = loaded {
            #[cfg(feature = "defmt")]
            defmt::error!("patch storage unavailable: {}", _e);
            self.store = None;
            self.display.show_notice(Notice::NoStorage);
            self.groups[self.active].apply_record(&PatchRecord::default());
            self.set_page(Page::Parameter);
            return;
        }
        self.recall_first();
    }

    // ── MIDI ─────────────────────────────────────────────────────────

    /// A control change on `channel` (1–16).
    pub fn control_change(&mut self, channel: u8, controller: u8, value: u8) {
        if self.settings.accepts_channel(channel) {
            self.dispatch(controller, value, Origin::Absolute);
        }
    }

    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) {
        if !self.settings.accepts_channel(channel) {
            return;
        }
        let group = &mut self.groups[self.active];
        let record = group.record();
        let in_range = [Param::PitchA, Param::PitchB].iter().all(|p| {
            let shifted = i32::from(note) + p.value(record.get(*p), None) as i32;
            (0..=127).contains(&shifted)
        });
        if in_range {
            group.engine_mut().note_on(note, velocity);
        }
    }

    pub fn note_off(&mut self, channel: u8, note: u8) {
        if self.settings.accepts_channel(channel) {
            self.groups[self.active].engine_mut().note_off(note);
        }
    }

    /// Pitch bend, `bend` in -8192..=8191.
    pub fn pitch_bend(&mut self, channel: u8, bend: i16) {
        if self.settings.accepts_channel(channel) {
            let semitones = f32::from(bend) / 8192.0 * f32::from(self.settings.pitch_bend_range);
            self.groups[self.active].engine_mut().pitch_bend(semitones);
        }
    }

    /// Program change: recall patch `program + 1`.
    pub fn program_change(&mut self, channel: u8, program: u8) {
        if self.settings.accepts_channel(channel) {
            self.recall(u16::from(program) + 1);
        }
    }

    /// One MIDI clock pulse received at `now_ms`.
    ///
    /// Every [`CLOCKS_PER_BEAT`] pulses the beat frequency is measured and
    /// every voice group's clock-synced LFO rates follow it.
    pub fn clock_tick(&mut self, now_ms: u32) {
        if self.clock.ticks == 0 {
            if let Some(started) = self.clock.beat_started_ms {
                let interval = now_ms.wrapping_sub(started);
                if interval > 0 {
                    let beat_hz = 1000.0 / interval as f32;
                    for group in self.groups.iter_mut() {
                        group.engine_mut().midi_clock(beat_hz);
                        group.retempo(beat_hz);
                    }
                }
            }
            self.clock.beat_started_ms = Some(now_ms);
        }
        self.clock.ticks = (self.clock.ticks + 1) % CLOCKS_PER_BEAT;
    }

    /// MIDI clock start: realign LFOs and restart the beat measurement.
    pub fn clock_start(&mut self) {
        self.clock = Clock::default();
        for group in self.groups.iter_mut() {
            group.engine_mut().midi_clock_start();
        }
    }

    // ── Panel ────────────────────────────────────────────────────────

    /// Turn section encoder `slot` of the focused section by `delta`.
    ///
    /// Returns the controller number and value that were applied, for
    /// echoing to MIDI out.
    pub fn section_encoder(&mut self, slot: usize, delta: i32) -> Option<(u8, u8)> {
        if delta == 0 {
            return None;
        }
        let Some(edit) = self.section.slots().get(slot).copied() else {
            #[cfg(feature = "defmt")]
            defmt::warn!("no encoder slot {} in {}", slot, self.section);
            return None;
        };
        let record = self.groups[self.active].record();
        let (param, raw) = match edit {
            SlotEdit::Param(param) => {
                let synced = match param.descriptor().kind {
                    Kind::LfoRate { sync, .. } => self.groups[self.active].engine().switch(sync),
                    _ => false,
                };
                let chord = self.groups[self.active].engine().mode(Mode::Unison) == 2;
                let raw = stepped_raw(param, record.get(param), delta, synced, chord);
                (param, raw)
            }
            SlotEdit::SyncRetrig => {
                let param = if delta > 0 {
                    Param::FilterLfoSync
                } else {
                    Param::FilterLfoRetrig
                };
                let on = record.get(param) > 0;
                (param, param.raw_from_index(u8::from(!on)))
            }
            SlotEdit::Unused => return None,
        };
        let controller = cc::controller(param)?;
        self.dispatch(controller, raw, Origin::Relative);
        Some((controller, raw))
    }

    /// Hold state of the section switch. While held, the main encoder
    /// moves the section focus.
    pub fn set_section_switch(&mut self, held: bool) {
        self.section_switch = held;
    }

    /// Focus a section directly.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        self.display.show_parameter("Section", section.name(), Some(section));
    }

    /// Turn the main encoder by `delta` detents.
    pub fn main_encoder(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        let delta = if self.settings.encoder_reversed {
            -delta
        } else {
            delta
        };
        if self.section_switch {
            self.set_section(self.section.step(delta));
            return;
        }
        match self.page {
            Page::Parameter => {
                if let Some(store) = self.store.as_mut() {
                    store.rotate(delta);
                    self.recall_first();
                }
            }
            Page::Recall | Page::Delete => {
                if let Some(store) = self.store.as_mut() {
                    store.rotate(delta);
                }
                self.show_current_entry();
            }
            Page::Save => {
                if let Some(store) = self.store.as_mut() {
                    store.rotate(delta);
                }
                self.show_save_target();
            }
            Page::PatchNaming => {
                self.naming.scroll(delta);
                self.naming.show(&mut self.display);
            }
            Page::Settings => {
                self.menu.browse(delta, &self.settings);
                self.menu.show(&mut self.display);
            }
            Page::SettingsValue => {
                self.menu.adjust(delta);
                self.menu.show(&mut self.display);
            }
            Page::DeleteMessage | Page::Reinitialise | Page::Patch => {}
        }
    }

    /// Sample button `button` at `now_ms` and act on any gesture.
    pub fn poll_button(&mut self, button: Button, pressed: bool, now_ms: u32) {
        if let Some(gesture) = self.buttons.update(button, pressed, now_ms) {
            self.button(button, gesture);
        }
    }

    /// Act on a classified button gesture.
    pub fn button(&mut self, button: Button, gesture: Gesture) {
        match (button, gesture) {
            (Button::Save, Gesture::Hold) => self.save_hold(),
            (Button::Save, Gesture::Click) => self.save_click(),
            (Button::Settings, Gesture::Hold) => self.reinitialise(),
            (Button::Settings, Gesture::Click) => self.settings_click(),
            (Button::Back, Gesture::Hold) => self.panic(),
            (Button::Back, Gesture::Click) => self.back_click(),
            (Button::Recall, Gesture::Hold) => self.recall_first(),
            (Button::Recall, Gesture::Click) => self.recall_click(),
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Route one controller value. Unknown controllers are ignored.
    fn dispatch(&mut self, controller: u8, value: u8, origin: Origin) {
        let value = value.min(127);
        let group = &mut self.groups[self.active];
        match cc::action(controller) {
            Some(CcAction::AllNotesOff) => group.engine_mut().all_notes_off(),
            Some(CcAction::Set(param)) => {
                if origin == Origin::Absolute
                    && !self.pick_up.accepts(param, group.record().get(param), value)
                {
                    return;
                }
                group.update(param, value, &mut self.display);
            }
            None => {}
        }
    }

    // ── Page state machine ───────────────────────────────────────────

    fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.display.page_changed(page);
        }
    }

    fn save_hold(&mut self) {
        if matches!(self.page, Page::Parameter | Page::Patch) && self.store.is_some() {
            self.set_page(Page::Delete);
            self.show_current_entry();
        }
    }

    fn save_click(&mut self) {
        match self.page {
            Page::Parameter => self.begin_save(),
            Page::Save => {
                if let Some(target) = self.save_target() {
                    self.finish_save(target.number, &target.name);
                }
            }
            Page::PatchNaming => {
                if let Some(target) = self.save_target() {
                    let name = if self.naming.typed().is_empty() {
                        target.name
                    } else {
                        patch_name(self.naming.typed())
                    };
                    self.finish_save(target.number, &name);
                }
            }
            _ => {}
        }
    }

    fn begin_save(&mut self) {
        let Some(store) = self.store.as_mut() else {
            self.display.show_notice(Notice::NoStorage);
            return;
        };
        if store.catalog().is_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("catalog full, save refused");
            self.display.show_notice(Notice::CatalogFull);
            return;
        }
        store.sort();
        let number = store.catalog().highest_number().saturating_add(1);
        let placeholder = PatchEntry {
            number,
            name: patch_name(INITIAL_PATCH_NAME),
            version: FORMAT_VERSION,
        };
        // Not full, checked above.
        let _ = store.catalog_mut().push(placeholder);
        self.naming.clear();
        self.set_page(Page::Save);
        self.show_save_target();
    }

    fn finish_save(&mut self, number: u16, name: &str) {
        self.set_page(Page::Patch);
        let group = &mut self.groups[self.active];
        group.set_name(name);
        if let Some(store) = self.store.as_mut() {
            match store.save(number, group.record()) {
                Ok(()) => {
                    self.patch_no = number;
                    self.display.show_patch(number, name, Some(FORMAT_VERSION));
                }
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("saving patch {} failed: {}", number, _e);
                }
            }
            // Drops the placeholder if the save did not happen.
            if store.load().is_ok() {
                store.rotate_to_front(self.patch_no);
            }
        }
        self.naming.clear();
        self.set_page(Page::Parameter);
    }

    fn reinitialise(&mut self) {
        self.set_page(Page::Reinitialise);
        let group = &mut self.groups[self.active];
        group.capture_from_engine();
        group.set_name(INITIAL_PATCH_NAME);
        self.pick_up.bypass();
        self.display.show_notice(Notice::Reinitialised);
        self.set_page(Page::Parameter);
    }

    fn settings_click(&mut self) {
        match self.page {
            Page::Parameter => {
                self.menu.reset(&self.settings);
                self.set_page(Page::Settings);
                self.menu.show(&mut self.display);
            }
            Page::Settings | Page::SettingsValue => self.store_setting(),
            _ => {}
        }
    }

    fn store_setting(&mut self) {
        self.menu.store(&mut self.settings);
        self.pick_up.set_enabled(self.settings.pick_up);
        let depth = self.settings.mod_wheel_scale();
        for group in self.groups.iter_mut() {
            group.set_mod_wheel_depth(depth);
        }
        self.set_page(Page::Settings);
        self.menu.show(&mut self.display);
    }

    fn panic(&mut self) {
        let engine = self.groups[self.active].engine_mut();
        engine.all_notes_off();
        engine.close_envelopes();
        self.display.show_notice(Notice::Panic);
    }

    fn back_click(&mut self) {
        match self.page {
            Page::Recall | Page::Delete => {
                self.rotate_to_current();
                self.set_page(Page::Parameter);
            }
            Page::Save => {
                if let Some(store) = self.store.as_mut() {
                    let _ = store.load();
                }
                self.rotate_to_current();
                self.naming.clear();
                self.set_page(Page::Parameter);
            }
            Page::PatchNaming => {
                self.naming.clear();
                self.set_page(Page::Save);
                self.show_save_target();
            }
            Page::Settings => self.set_page(Page::Parameter),
            Page::SettingsValue => {
                self.menu.reset(&self.settings);
                self.set_page(Page::Settings);
                self.menu.show(&mut self.display);
            }
            _ => {}
        }
    }

    fn recall_click(&mut self) {
        match self.page {
            Page::Parameter => {
                if self.store.is_some() {
                    self.set_page(Page::Recall);
                    self.show_current_entry();
                }
            }
            Page::Recall => self.recall_first(),
            Page::Save => {
                self.naming.clear();
                self.set_page(Page::PatchNaming);
                self.show_save_target();
                self.naming.show(&mut self.display);
            }
            Page::PatchNaming => {
                self.naming.accept();
                self.naming.show(&mut self.display);
            }
            Page::Delete => self.delete_current(),
            Page::Settings => {
                self.set_page(Page::SettingsValue);
                self.menu.show(&mut self.display);
            }
            Page::SettingsValue => self.store_setting(),
            Page::DeleteMessage | Page::Reinitialise | Page::Patch => {}
        }
    }

    fn delete_current(&mut self) {
        let count = self.store.as_ref().map_or(0, |s| s.catalog().len());
        // The last patch is never deleted.
        if count <= 1 {
            self.set_page(Page::Parameter);
            return;
        }
        self.set_page(Page::DeleteMessage);
        self.display.show_notice(Notice::Deleting);
        if let Some(store) = self.store.as_mut() {
            let result = match store.catalog_mut().pop_front() {
                Some(entry) => store
                    .delete(entry.number)
                    .and_then(|()| store.load())
                    .and_then(|_| store.renumber_all())
                    .and_then(|()| store.load()),
                None => Ok(0),
            };
            if let Err(_e) = result {
                #[cfg(feature = "defmt")]
                defmt::warn!("delete failed: {}", _e);
                let _ = store.load();
            }
        }
        self.recall_first();
    }

    // ── Recall ───────────────────────────────────────────────────────

    /// Recall the first catalog entry and return to `Parameter`.
    fn recall_first(&mut self) {
        let first = self
            .store
            .as_ref()
            .and_then(|s| s.catalog().current())
            .map(|e| e.number);
        match first {
            Some(number) => self.recall(number),
            None => self.set_page(Page::Parameter),
        }
    }

    /// Recall patch `number` into the active group.
    ///
    /// A missing or unreadable patch leaves the engine as it was.
    pub fn recall(&mut self, number: u16) {
        self.set_page(Page::Patch);
        let group = &mut self.groups[self.active];
        group.engine_mut().all_notes_off();
        group.engine_mut().close_envelopes();
        let recalled = self.store.as_mut().map(|s| s.recall(number));
        match recalled {
            Some(Ok(decoded)) => {
                group.apply_record(&decoded.record);
                self.patch_no = number;
                self.pick_up.rearm();
                if let Some(store) = self.store.as_mut() {
                    store.rotate_to_front(number);
                }
                self.display
                    .show_patch(number, &decoded.record.name, Some(decoded.version));
            }
            Some(Err(_e)) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("recall of patch {} failed: {}", number, _e);
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("recall of patch {} without storage", number);
            }
        }
        self.set_page(Page::Parameter);
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn rotate_to_current(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.rotate_to_front(self.patch_no);
        }
    }

    /// The slot a save would write: the entry before the current one.
    fn save_target(&self) -> Option<PatchEntry> {
        self.store.as_ref()?.catalog().previous().cloned()
    }

    fn show_save_target(&mut self) {
        if let Some(target) = self.save_target() {
            self.display
                .show_patch(target.number, &target.name, Some(target.version));
        }
    }

    fn show_current_entry(&mut self) {
        let current = self.store.as_ref().and_then(|s| s.catalog().current().cloned());
        if let Some(entry) = current {
            self.display
                .show_patch(entry.number, &entry.name, Some(entry.version));
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Target;
    use crate::patch::MemoryStorage;
    use crate::testing::{RecordingDisplay, RecordingEngine};

    fn instrument(pick_up: bool) -> Instrument<RecordingEngine, RecordingDisplay, MemoryStorage> {
        let settings = Settings {
            pick_up,
            ..Settings::default()
        };
        let mut inst = Instrument::new(
            RecordingEngine::default(),
            RecordingDisplay::default(),
            Some(MemoryStorage::new()),
            settings,
        );
        inst.start();
        inst
    }

    #[test]
    fn relative_origin_skips_pick_up() {
        let mut inst = instrument(true);
        inst.dispatch(cc::FILTER_CUTOFF, 0, Origin::Absolute);
        assert_eq!(inst.record().get(Param::FilterCutoff), 255);
        inst.dispatch(cc::FILTER_CUTOFF, 0, Origin::Relative);
        assert_eq!(inst.record().get(Param::FilterCutoff), 0);
    }

    #[test]
    fn values_above_seven_bits_are_clamped() {
        let mut inst = instrument(false);
        inst.dispatch(cc::FILTER_CUTOFF, 200, Origin::Absolute);
        assert_eq!(inst.record().get(Param::FilterCutoff), 254);
    }

    #[test]
    fn clock_needs_a_full_beat() {
        let mut inst = instrument(false);
        for t in 0..24 {
            inst.clock_tick(t * 10);
        }
        let engine = inst.group(0).map(|g| g.engine().beat_hz);
        assert_eq!(engine, Some(None));
        inst.clock_tick(240);
        assert_eq!(inst.group(0).and_then(|g| g.engine().beat_hz), Some(1000.0 / 240.0));
    }

    #[test]
    fn page_only_reported_on_change() {
        let mut inst = instrument(false);
        inst.display_mut().clear();
        inst.set_page(Page::Parameter);
        assert!(inst.display().shown.is_empty());
        inst.set_page(Page::Recall);
        assert_eq!(inst.display().shown.len(), 1);
    }

    #[test]
    fn panic_silences_only_the_active_group() {
        let mut inst = instrument(false);
        assert!(inst.add_group(RecordingEngine::default()).is_ok());
        inst.button(Button::Back, Gesture::Hold);
        let closed = |i: usize| inst.group(i).map(|g| g.engine().envelopes_closed);
        assert_eq!(closed(0), Some(2));
        assert_eq!(closed(1), Some(0));
        assert_eq!(
            inst.group(0).map(|g| g.engine().get(Target::FilterCutoff)),
            Some(Param::FilterCutoff.value(255, None))
        );
    }
}
