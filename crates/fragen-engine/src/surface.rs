//! Render-surface contract.
//!
//! The engine is headless: it drives timing and state, and mutates the
//! display only through this trait. The browser build implements it over the
//! DOM (writing the CSS custom properties and state classes the stylesheet
//! animates); [`crate::headless::HeadlessSurface`] implements it in memory
//! for tests and native runs.
//!
//! The sequencer and the pointer-interaction pass touch disjoint attribute
//! sets on the same letters: content/visibility vs. transient offsets. An
//! interaction offset is a non-authoritative overlay and never becomes part
//! of a letter's canonical state.

use glam::Vec2;

use crate::color::ColorPair;
use crate::letter::LetterUnit;

/// Handle to a fixed-width word slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u32);

/// Handle to an appended letter unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterId(pub u32);

pub trait Surface {
    /// Rendered width in pixels of `text` laid out with the production
    /// per-letter markup. Used for pre-measurement only; must not leave
    /// anything visible behind.
    fn measure_text(&mut self, text: &str) -> f32;

    /// Remove all slots and letters from the root container.
    fn clear_container(&mut self);

    /// Opacity of the root container (1.0 while typing/holding, 0.0 between
    /// questions).
    fn set_container_opacity(&mut self, opacity: f32);

    /// Append a word slot with a fixed width. The width never changes after
    /// creation, so later letter insertions cannot shift placed content.
    fn create_word_slot(&mut self, width: f32) -> SlotId;

    /// Append a letter unit to a slot. The unit starts hidden; the
    /// appearance transition runs when it is marked visible.
    fn append_letter(&mut self, slot: SlotId, unit: &LetterUnit) -> LetterId;

    /// Trigger the letter's appearance transition.
    fn mark_visible(&mut self, letter: LetterId);

    /// Start the container's exit transition.
    fn begin_fade_out(&mut self, duration_ms: f32);

    /// Drop the exit-transition state so the next cycle starts clean.
    fn end_fade_out(&mut self);

    /// Apply a background/text color pair to the page, transitioning over
    /// `transition_ms` (0 applies immediately).
    fn apply_colors(&mut self, colors: &ColorPair, transition_ms: f32);

    /// Centers of all currently-visible letters, in surface pixel
    /// coordinates. Read by the pointer-interaction pass.
    fn visible_letter_centers(&self) -> Vec<(LetterId, Vec2)>;

    /// Set the transient pointer-interaction offset of a letter.
    fn set_interaction_offset(&mut self, letter: LetterId, offset: Vec2);

    /// Clear a letter's pointer-interaction offset.
    fn clear_interaction_offset(&mut self, letter: LetterId);
}
