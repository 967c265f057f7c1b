//! Pointer interaction — transient repulsion of nearby visible letters.
//!
//! Purely reactive and independent of the sequencer's timing: each pass
//! reads the current visible-letter view from the surface and writes only
//! the transient offset attributes. It never touches sequencing state and
//! never blocks a phase transition.

use glam::Vec2;

use crate::surface::Surface;

/// Letters within this distance of the pointer are displaced, in pixels.
pub const INTERACTION_RADIUS: f32 = 100.0;
/// Maximum displacement magnitude, in pixels.
pub const INTERACTION_STRENGTH: f32 = 5.0;

/// Push visible letters near `pointer` away from it.
///
/// A letter at distance `d < INTERACTION_RADIUS` is offset along the
/// pointer-to-letter direction by `(RADIUS - d) / RADIUS * STRENGTH`;
/// letters at or beyond the radius get any previous offset cleared.
pub fn apply_pointer_repulsion(pointer: Vec2, surface: &mut impl Surface) {
    for (id, center) in surface.visible_letter_centers() {
        let delta = center - pointer;
        let dist = delta.length();
        if dist < INTERACTION_RADIUS {
            let intensity = (INTERACTION_RADIUS - dist) / INTERACTION_RADIUS;
            // A letter exactly under the pointer has no direction; push it
            // to the right at full intensity.
            let dir = if dist > f32::EPSILON {
                delta / dist
            } else {
                Vec2::X
            };
            surface.set_interaction_offset(id, dir * intensity * INTERACTION_STRENGTH);
        } else {
            surface.clear_interaction_offset(id);
        }
    }
}

/// Clear the offsets of all visible letters (pointer left the surface).
pub fn clear_pointer_effects(surface: &mut impl Surface) {
    for (id, _) in surface.visible_letter_centers() {
        surface.clear_interaction_offset(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessSurface;
    use crate::letter::LetterUnit;
    use crate::rng::Rng;
    use crate::surface::LetterId;

    /// A surface with `n` visible letters in one slot, letter i centered at
    /// (i * 10 + 5, jitter).
    fn surface_with_letters(n: usize) -> (HeadlessSurface, Vec<LetterId>) {
        let mut surface = HeadlessSurface::new();
        let mut rng = Rng::new(42);
        let slot = surface.create_word_slot(n as f32 * 10.0);
        let ids: Vec<LetterId> = (0..n)
            .map(|i| {
                let id = surface.append_letter(slot, &LetterUnit::new('x', i, &mut rng, false));
                surface.mark_visible(id);
                id
            })
            .collect();
        (surface, ids)
    }

    #[test]
    fn nearby_letters_are_pushed_away() {
        let (mut surface, ids) = surface_with_letters(1);
        let center = surface.visible_letter_centers()[0].1;
        let pointer = center - Vec2::new(50.0, 0.0);

        apply_pointer_repulsion(pointer, &mut surface);
        let offset = surface.interaction_offset(ids[0]).unwrap();
        // Pointer is to the left, so the push is to the right.
        assert!(offset.x > 0.0);
        assert_eq!(offset.y, 0.0);
        // d = 50 -> intensity 0.5 -> magnitude 2.5
        assert!((offset.length() - 2.5).abs() < 1e-4);
    }

    #[test]
    fn distant_letters_get_offsets_cleared() {
        let (mut surface, ids) = surface_with_letters(1);
        let center = surface.visible_letter_centers()[0].1;

        apply_pointer_repulsion(center + Vec2::new(10.0, 0.0), &mut surface);
        assert!(surface.interaction_offset(ids[0]).is_some());

        apply_pointer_repulsion(center + Vec2::new(250.0, 0.0), &mut surface);
        assert!(surface.interaction_offset(ids[0]).is_none());
    }

    #[test]
    fn offset_magnitude_never_exceeds_strength() {
        let (mut surface, ids) = surface_with_letters(1);
        let center = surface.visible_letter_centers()[0].1;

        apply_pointer_repulsion(center, &mut surface);
        let offset = surface.interaction_offset(ids[0]).unwrap();
        assert!(offset.length() <= INTERACTION_STRENGTH + 1e-4);
    }

    #[test]
    fn leave_clears_all_offsets() {
        let (mut surface, ids) = surface_with_letters(5);
        let center = surface.visible_letter_centers()[0].1;
        apply_pointer_repulsion(center + Vec2::new(5.0, 5.0), &mut surface);
        assert!(ids.iter().any(|id| surface.interaction_offset(*id).is_some()));

        clear_pointer_effects(&mut surface);
        assert!(ids.iter().all(|id| surface.interaction_offset(*id).is_none()));
    }

    #[test]
    fn hidden_letters_are_untouched() {
        let mut surface = HeadlessSurface::new();
        let mut rng = Rng::new(42);
        let slot = surface.create_word_slot(10.0);
        let id = surface.append_letter(slot, &LetterUnit::new('x', 0, &mut rng, false));

        apply_pointer_repulsion(Vec2::new(5.0, 0.0), &mut surface);
        assert!(surface.interaction_offset(id).is_none());
    }
}
