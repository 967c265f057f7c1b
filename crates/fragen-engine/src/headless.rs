//! In-memory surface with fixed glyph metrics.
//!
//! The DOM-free realization of the render contract: slots and letters live
//! in plain vectors, every character advances by a fixed width, and color or
//! fade changes are recorded instead of painted. Integration tests drive the
//! sequencer against it; a native embedding can use it to run the engine
//! without a browser.

use glam::Vec2;

use crate::color::ColorPair;
use crate::letter::LetterUnit;
use crate::surface::{LetterId, SlotId, Surface};

/// Fixed horizontal advance per character, in pixels.
pub const CHAR_ADVANCE: f32 = 10.0;

#[derive(Debug, Clone)]
struct HeadlessSlot {
    id: SlotId,
    width: f32,
}

#[derive(Debug, Clone)]
struct HeadlessLetter {
    id: LetterId,
    slot: SlotId,
    unit: LetterUnit,
    visible: bool,
    offset: Option<Vec2>,
}

/// Records the display tree the engine would produce in a browser.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    slots: Vec<HeadlessSlot>,
    letters: Vec<HeadlessLetter>,
    next_slot_id: u32,
    next_letter_id: u32,
    container_opacity: f32,
    fading: bool,
    clear_count: u32,
    colors: ColorPair,
    color_applications: Vec<(ColorPair, f32)>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            container_opacity: 1.0,
            colors: ColorPair::default(),
            ..Self::default()
        }
    }

    // -- Test/observer accessors --

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_width(&self, slot: SlotId) -> Option<f32> {
        self.slots.iter().find(|s| s.id == slot).map(|s| s.width)
    }

    pub fn slot_ids(&self) -> Vec<SlotId> {
        self.slots.iter().map(|s| s.id).collect()
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    pub fn visible_count(&self) -> usize {
        self.letters.iter().filter(|l| l.visible).count()
    }

    /// Letters in append order, as (unit, slot, visible).
    pub fn letters(&self) -> impl Iterator<Item = (&LetterUnit, SlotId, bool)> {
        self.letters.iter().map(|l| (&l.unit, l.slot, l.visible))
    }

    /// The typed text reconstructed from appended units.
    pub fn typed_text(&self) -> String {
        self.letters.iter().map(|l| l.unit.ch).collect()
    }

    pub fn interaction_offset(&self, letter: LetterId) -> Option<Vec2> {
        self.letters
            .iter()
            .find(|l| l.id == letter)
            .and_then(|l| l.offset)
    }

    pub fn container_opacity(&self) -> f32 {
        self.container_opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn clear_count(&self) -> u32 {
        self.clear_count
    }

    pub fn current_colors(&self) -> ColorPair {
        self.colors
    }

    /// Every `apply_colors` call, in order, with its transition duration.
    pub fn color_applications(&self) -> &[(ColorPair, f32)] {
        &self.color_applications
    }

    fn letter_mut(&mut self, id: LetterId) -> Option<&mut HeadlessLetter> {
        self.letters.iter_mut().find(|l| l.id == id)
    }
}

impl Surface for HeadlessSurface {
    fn measure_text(&mut self, text: &str) -> f32 {
        text.chars().count() as f32 * CHAR_ADVANCE
    }

    fn clear_container(&mut self) {
        self.slots.clear();
        self.letters.clear();
        self.clear_count += 1;
    }

    fn set_container_opacity(&mut self, opacity: f32) {
        self.container_opacity = opacity;
    }

    fn create_word_slot(&mut self, width: f32) -> SlotId {
        let id = SlotId(self.next_slot_id);
        self.next_slot_id += 1;
        self.slots.push(HeadlessSlot { id, width });
        id
    }

    fn append_letter(&mut self, slot: SlotId, unit: &LetterUnit) -> LetterId {
        let id = LetterId(self.next_letter_id);
        self.next_letter_id += 1;
        self.letters.push(HeadlessLetter {
            id,
            slot,
            unit: unit.clone(),
            visible: false,
            offset: None,
        });
        id
    }

    fn mark_visible(&mut self, letter: LetterId) {
        if let Some(l) = self.letter_mut(letter) {
            l.visible = true;
        }
    }

    fn begin_fade_out(&mut self, _duration_ms: f32) {
        self.fading = true;
    }

    fn end_fade_out(&mut self) {
        self.fading = false;
    }

    fn apply_colors(&mut self, colors: &ColorPair, transition_ms: f32) {
        self.colors = *colors;
        self.color_applications.push((*colors, transition_ms));
    }

    fn visible_letter_centers(&self) -> Vec<(LetterId, Vec2)> {
        // Slots laid out left to right, one space advance between them.
        let mut origins = Vec::with_capacity(self.slots.len());
        let mut x = 0.0;
        for slot in &self.slots {
            origins.push((slot.id, x));
            x += slot.width + CHAR_ADVANCE;
        }

        let mut centers = Vec::new();
        for (slot_id, origin) in origins {
            let mut cursor = origin;
            for l in self.letters.iter().filter(|l| l.slot == slot_id) {
                if l.visible {
                    let center = Vec2::new(cursor + CHAR_ADVANCE / 2.0, l.unit.baseline_y);
                    centers.push((l.id, center));
                }
                cursor += CHAR_ADVANCE;
            }
        }
        centers
    }

    fn set_interaction_offset(&mut self, letter: LetterId, offset: Vec2) {
        if let Some(l) = self.letter_mut(letter) {
            l.offset = Some(offset);
        }
    }

    fn clear_interaction_offset(&mut self, letter: LetterId) {
        if let Some(l) = self.letter_mut(letter) {
            l.offset = None;
        }
    }
}
