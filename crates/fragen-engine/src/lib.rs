pub mod config;
pub mod rng;
pub mod color;
pub mod letter;
pub mod questions;
pub mod layout;
pub mod surface;
pub mod headless;
pub mod sequencer;
pub mod input;
pub mod interaction;

// Re-export key types at crate root for convenience
pub use config::DisplayConfig;
pub use rng::Rng;
pub use color::{ColorPair, Hsl, Rgb};
pub use letter::LetterUnit;
pub use questions::QuestionList;
pub use layout::{plan_layout, LayoutPlan, WordPlan};
pub use surface::{LetterId, SlotId, Surface};
pub use headless::HeadlessSurface;
pub use sequencer::{Phase, Sequencer};
pub use input::{InputEvent, InputQueue};
pub use interaction::{apply_pointer_repulsion, clear_pointer_effects};
