//! Contrasting background/text color pairs, drawn in HSL and packed to RGB.
//!
//! The pair is regenerated once per question transition: a dark, saturated
//! background against a light, near-complementary text color. High contrast
//! is a heuristic of the draw ranges, not a numerically enforced ratio.

use crate::rng::Rng;

/// An HSL triple. Hue in degrees [0, 360), saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// A packed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Format as an uppercase CSS hex color, e.g. `#1A2B3C`.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl)
    }
}

/// The background/text color combination active during one question's
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub background: Rgb,
    pub text: Rgb,
}

impl ColorPair {
    /// Draw a fresh contrasting pair.
    pub fn generate(rng: &mut Rng) -> Self {
        let (bg, text) = draw_hsl_pair(rng);
        ColorPair {
            background: bg.into(),
            text: text.into(),
        }
    }
}

impl Default for ColorPair {
    /// Black on white, the state before the first generated pair is applied.
    fn default() -> Self {
        ColorPair {
            background: Rgb(0x000000),
            text: Rgb(0xFFFFFF),
        }
    }
}

/// Draw the (background, text) HSL triples.
///
/// Background: random hue, S in [60, 90], L in [20, 35] (dark, saturated).
/// Text: hue shifted to the opposite side of the wheel with +/-30 degrees of
/// spread, S in [70, 90], L in [60, 85] (light).
pub fn draw_hsl_pair(rng: &mut Rng) -> (Hsl, Hsl) {
    let base_hue = rng.next_range(0.0, 360.0);

    let background = Hsl {
        h: base_hue,
        s: rng.next_range(60.0, 90.0),
        l: rng.next_range(20.0, 35.0),
    };
    let text = Hsl {
        h: (base_hue + 180.0 + rng.next_range(-30.0, 30.0)).rem_euclid(360.0),
        s: rng.next_range(70.0, 90.0),
        l: rng.next_range(60.0, 85.0),
    };
    (background, text)
}

/// Standard HSL -> RGB conversion.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let (r, g, b) = if s == 0.0 {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::from_channels(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_fixed_points() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 0.0 }).to_hex(), "#000000");
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 100.0 }).to_hex(), "#FFFFFF");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 100.0, l: 50.0 }).to_hex(), "#FF0000");
        assert_eq!(hsl_to_rgb(Hsl { h: 120.0, s: 100.0, l: 50.0 }).to_hex(), "#00FF00");
        assert_eq!(hsl_to_rgb(Hsl { h: 240.0, s: 100.0, l: 50.0 }).to_hex(), "#0000FF");
    }

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(Rgb::from_channels(0, 10, 255).to_hex(), "#000AFF");
    }

    #[test]
    fn draw_ranges_hold_for_many_seeds() {
        for seed in 1..100u64 {
            let mut rng = Rng::new(seed);
            let (bg, text) = draw_hsl_pair(&mut rng);

            assert!((0.0..360.0).contains(&bg.h));
            assert!((60.0..90.0).contains(&bg.s));
            assert!((20.0..35.0).contains(&bg.l), "bg must stay dark: {}", bg.l);

            assert!((0.0..360.0).contains(&text.h));
            assert!((70.0..90.0).contains(&text.s));
            assert!((60.0..85.0).contains(&text.l), "text must stay light: {}", text.l);
        }
    }

    #[test]
    fn text_hue_is_near_complementary() {
        for seed in 1..100u64 {
            let mut rng = Rng::new(seed);
            let (bg, text) = draw_hsl_pair(&mut rng);
            // Shortest angular distance from the exact complement.
            let complement = (bg.h + 180.0).rem_euclid(360.0);
            let diff = (text.h - complement).rem_euclid(360.0);
            let dist = diff.min(360.0 - diff);
            assert!(dist <= 30.0, "hue spread exceeded: {}", dist);
        }
    }

    #[test]
    fn generate_differs_between_draws() {
        let mut rng = Rng::new(42);
        let a = ColorPair::generate(&mut rng);
        let b = ColorPair::generate(&mut rng);
        assert_ne!(a, b);
    }
}
