//! Letter units — one per displayed character, including inter-word spaces.

use crate::rng::Rng;

/// Period of the ambient floating animation's staggered delays, in seconds.
const FLOAT_DELAY_PERIOD_S: f32 = 3.0;
/// Delay step between consecutive letters, in seconds.
const FLOAT_DELAY_STEP_S: f32 = 0.1;

/// One rendered character with its jitter parameters, drawn once at
/// creation and fixed for the unit's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterUnit {
    /// The character to display. A space renders as a blank unit.
    pub ch: char,
    /// Position in the question's reveal order (letters and spaces).
    pub index: usize,
    /// Stagger for the ambient floating animation, in seconds.
    pub animation_delay_s: f32,
    /// Baseline offset in pixels, clamped to [-4, 4].
    pub baseline_y: f32,
    /// Scale multiplier in [0.9, 1.2]; `None` when size jitter is disabled.
    pub scale: Option<f32>,
}

impl LetterUnit {
    pub fn new(ch: char, index: usize, rng: &mut Rng, size_jitter: bool) -> Self {
        Self {
            ch,
            index,
            animation_delay_s: (index as f32 * FLOAT_DELAY_STEP_S) % FLOAT_DELAY_PERIOD_S,
            baseline_y: rng.baseline_jitter(),
            scale: size_jitter.then(|| rng.size_jitter()),
        }
    }

    pub fn is_space(&self) -> bool {
        self.ch == ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_delay_cycles() {
        let mut rng = Rng::new(42);
        let a = LetterUnit::new('a', 0, &mut rng, false);
        let b = LetterUnit::new('b', 15, &mut rng, false);
        let c = LetterUnit::new('c', 30, &mut rng, false);
        assert_eq!(a.animation_delay_s, 0.0);
        assert!((b.animation_delay_s - 1.5).abs() < 1e-5);
        // 30 * 0.1 = 3.0 wraps back to 0
        assert!(c.animation_delay_s.abs() < 1e-5);
    }

    #[test]
    fn jitter_drawn_within_clamps() {
        let mut rng = Rng::new(42);
        for i in 0..1000 {
            let unit = LetterUnit::new('x', i, &mut rng, true);
            assert!((-4.0..=4.0).contains(&unit.baseline_y));
            let scale = unit.scale.unwrap();
            assert!((0.9..=1.2).contains(&scale));
        }
    }

    #[test]
    fn scale_absent_without_size_jitter() {
        let mut rng = Rng::new(42);
        let unit = LetterUnit::new('x', 0, &mut rng, false);
        assert_eq!(unit.scale, None);
    }

    #[test]
    fn space_detection() {
        let mut rng = Rng::new(42);
        assert!(LetterUnit::new(' ', 3, &mut rng, false).is_space());
        assert!(!LetterUnit::new('s', 3, &mut rng, false).is_space());
    }
}
