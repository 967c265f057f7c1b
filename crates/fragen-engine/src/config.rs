//! Display configuration, fixed at startup.

use serde::Deserialize;

/// Timing constants and feature flags for the question display.
///
/// Durations are in milliseconds, matching the tick clock. Defaults are the
/// values of the original installation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Delay between consecutive letter reveals.
    pub letter_delay_ms: f32,
    /// How long a fully-typed question holds on screen.
    pub display_duration_ms: f32,
    /// Length of the fade-out and the accompanying color transition.
    pub fade_out_duration_ms: f32,
    /// Pause between one question's fade-out and the next one's typing.
    pub question_pause_ms: f32,
    /// Draw a per-letter scale multiplier in addition to the baseline offset.
    pub size_jitter: bool,
    /// Transition background/text colors on every fade-out. When disabled
    /// the pair applied at start stays for the whole run.
    pub color_transitions: bool,
    /// Seed for the jitter/color RNG.
    pub rng_seed: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            letter_delay_ms: 100.0,
            display_duration_ms: 10_000.0,
            fade_out_duration_ms: 1_500.0,
            question_pause_ms: 500.0,
            size_jitter: true,
            color_transitions: true,
            rng_seed: 42,
        }
    }
}

impl DisplayConfig {
    /// Parse a JSON config. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
