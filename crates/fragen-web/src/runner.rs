use glam::Vec2;

use fragen_engine::{
    apply_pointer_repulsion, clear_pointer_effects, DisplayConfig, InputEvent, InputQueue,
    QuestionList, Sequencer, Surface,
};

/// Generic runner that wires the display loop together.
///
/// The browser build holds a `thread_local!` AppRunner over `DomSurface` and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly. Tests drive the same runner over the
/// engine's headless surface.
pub struct AppRunner<S: Surface> {
    surface: S,
    sequencer: Sequencer,
    questions: QuestionList,
    input: InputQueue,
}

impl<S: Surface> AppRunner<S> {
    pub fn new(surface: S, questions: QuestionList, config: DisplayConfig) -> Self {
        Self {
            surface,
            sequencer: Sequencer::new(questions.clone(), config),
            questions,
            input: InputQueue::new(),
        }
    }

    pub fn start(&mut self) {
        self.sequencer.start(&mut self.surface);
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: advance the sequencer, then apply the pointer
    /// interaction pass for the drained events. The interaction pass only
    /// writes transient offsets, so it can never delay a phase transition.
    pub fn tick(&mut self, dt_ms: f32) {
        self.sequencer.tick(dt_ms, &mut self.surface);

        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                    apply_pointer_repulsion(Vec2::new(x, y), &mut self.surface);
                }
                InputEvent::PointerLeave => {
                    clear_pointer_effects(&mut self.surface);
                }
            }
        }
    }

    /// Replace the question list from a JSON array of strings. An invalid
    /// or empty payload keeps the current list.
    pub fn load_questions(&mut self, json: &str) {
        match QuestionList::from_json(json) {
            Ok(list) if !list.is_empty() => {
                self.questions = list.clone();
                self.sequencer.set_questions(list);
                log::info!("loaded {} questions", self.questions.len());
            }
            Ok(_) => log::warn!("ignoring empty question list"),
            Err(e) => log::warn!("invalid question JSON, keeping current list: {}", e),
        }
    }

    /// Replace the configuration from JSON. Configuration is fixed once the
    /// cycle is running.
    pub fn configure(&mut self, json: &str) {
        if self.sequencer.is_running() {
            log::warn!("configuration is fixed after start");
            return;
        }
        match DisplayConfig::from_json(json) {
            Ok(config) => {
                self.sequencer = Sequencer::new(self.questions.clone(), config);
            }
            Err(e) => log::warn!("invalid config JSON, keeping current config: {}", e),
        }
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragen_engine::{HeadlessSurface, Phase};

    fn runner(questions: &[&str]) -> AppRunner<HeadlessSurface> {
        AppRunner::new(
            HeadlessSurface::new(),
            QuestionList::new(questions.iter().map(|s| s.to_string()).collect()),
            DisplayConfig::default(),
        )
    }

    #[test]
    fn tick_drives_typing() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.tick(300.0);
        assert_eq!(r.sequencer().phase(), Phase::Holding);
        assert_eq!(r.surface().typed_text(), "Hi");
    }

    #[test]
    fn pointer_events_offset_nearby_letters() {
        let mut r = runner(&["Hi"]);
        r.start();
        r.tick(300.0);

        let (id, center) = r.surface().visible_letter_centers()[0];
        r.push_input(InputEvent::PointerMove {
            x: center.x - 20.0,
            y: center.y,
        });
        r.tick(16.0);
        assert!(r.surface().interaction_offset(id).is_some());

        r.push_input(InputEvent::PointerLeave);
        r.tick(16.0);
        assert!(r.surface().interaction_offset(id).is_none());
    }

    #[test]
    fn configure_is_rejected_while_running() {
        let mut r = runner(&["Hi"]);
        r.configure(r#"{"letter_delay_ms": 50}"#);
        assert_eq!(r.sequencer().config().letter_delay_ms, 50.0);

        r.start();
        r.configure(r#"{"letter_delay_ms": 10}"#);
        assert_eq!(r.sequencer().config().letter_delay_ms, 50.0);
    }

    #[test]
    fn bad_question_payload_keeps_current_list() {
        let mut r = runner(&["Hi"]);
        r.load_questions("not json");
        r.load_questions("[]");
        r.start();
        r.tick(300.0);
        assert_eq!(r.surface().typed_text(), "Hi");
    }
}
