//! Layout pre-measurement.
//!
//! Word widths are measured through the surface before any letter is
//! revealed, so every word slot can be created with its final width up
//! front. Incremental letter insertion then never reflows placed content.

use crate::surface::Surface;

/// One word with its pre-measured pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPlan {
    pub text: String,
    pub width: f32,
}

/// The measured layout of one question.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub words: Vec<WordPlan>,
    /// Width of a single inter-word space.
    pub space_width: f32,
    /// Characters in reveal order: letters plus inter-word spaces.
    pub total_chars: usize,
}

/// Split `question` on single spaces and measure each word plus one space.
///
/// Splitting is deliberately naive: consecutive spaces yield empty words
/// (zero width, zero letters), matching the original behavior.
pub fn plan_layout(question: &str, surface: &mut impl Surface) -> LayoutPlan {
    let words = question
        .split(' ')
        .map(|word| WordPlan {
            text: word.to_owned(),
            width: surface.measure_text(word),
        })
        .collect();
    let space_width = surface.measure_text(" ");

    LayoutPlan {
        words,
        space_width,
        total_chars: question.chars().count(),
    }
}
