//! The phase state machine driving the question cycle.
//!
//! `Idle -> Typing -> Holding -> FadingOut -> Idle`, looping over the
//! question list until stopped. The machine is advanced by `tick(dt_ms)`
//! from the host's frame loop; every "timer" of the original choreography is
//! an elapsed-time comparison, so reveals within a question are strictly
//! ordered by their scheduled index no matter how coarse the ticks are.

use crate::color::ColorPair;
use crate::config::DisplayConfig;
use crate::layout::plan_layout;
use crate::letter::LetterUnit;
use crate::questions::QuestionList;
use crate::rng::Rng;
use crate::surface::{LetterId, SlotId, Surface};

/// Lag between a letter's insertion and its appearance trigger, in ms.
/// A presentation detail, not a design-significant value.
const VISIBLE_LAG_MS: f32 = 10.0;

/// Cap on phase transitions processed in one tick. Zero-duration phases
/// chain within a single tick; the cap keeps a degenerate all-zero config
/// from spinning.
const MAX_TRANSITIONS_PER_TICK: u32 = 8;

/// Lifecycle phase of the question currently in flight. At most one
/// question is ever in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Between questions (inter-question pause).
    Idle,
    /// Letters revealing on the per-letter delay.
    Typing,
    /// Fully revealed, holding with no mutation.
    Holding,
    /// Fading out while the page colors transition.
    FadingOut,
}

/// One character of the reveal schedule: letters and inter-word spaces share
/// a single monotonically increasing index, so reveal order is total.
#[derive(Debug, Clone, Copy)]
struct ScheduledChar {
    ch: char,
    index: usize,
    /// Index into the cycle's word slots. A space is appended to the slot of
    /// the word it follows.
    slot: usize,
    due_ms: f32,
}

/// Owns phase, question index, colors, and the per-cycle reveal schedule.
pub struct Sequencer {
    questions: QuestionList,
    config: DisplayConfig,
    rng: Rng,
    phase: Phase,
    question_index: usize,
    /// Time into the current phase.
    elapsed_ms: f32,
    /// Cycle epoch. Bumped at every cycle boundary and on stop; the reveal
    /// schedule of an older generation can never land because it is cleared
    /// with the bump.
    generation: u64,
    running: bool,
    colors: ColorPair,
    slots: Vec<SlotId>,
    schedule: Vec<ScheduledChar>,
    next_reveal: usize,
    pending_visible: Vec<(LetterId, f32)>,
    next_visible: usize,
    typing_done_ms: f32,
}

impl Sequencer {
    pub fn new(questions: QuestionList, config: DisplayConfig) -> Self {
        let rng = Rng::new(config.rng_seed);
        Self {
            questions,
            config,
            rng,
            phase: Phase::Idle,
            question_index: 0,
            elapsed_ms: 0.0,
            generation: 0,
            running: false,
            colors: ColorPair::default(),
            slots: Vec::new(),
            schedule: Vec::new(),
            next_reveal: 0,
            pending_visible: Vec::new(),
            next_visible: 0,
            typing_done_ms: 0.0,
        }
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_colors(&self) -> ColorPair {
        self.colors
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Replace the question list. The cycle index restarts at 0; a question
    /// already in flight finishes from its captured schedule.
    pub fn set_questions(&mut self, questions: QuestionList) {
        self.questions = questions;
        self.question_index = 0;
    }

    /// Begin (or resume) the cycle at the current question. The first cycle
    /// applies its color pair immediately instead of waiting for a fade.
    pub fn start(&mut self, surface: &mut impl Surface) {
        if self.running {
            return;
        }
        if self.questions.is_empty() {
            log::warn!("sequencer not started: question list is empty");
            return;
        }
        self.running = true;
        self.elapsed_ms = 0.0;
        if self.config.color_transitions {
            let pair = ColorPair::generate(&mut self.rng);
            surface.apply_colors(&pair, 0.0);
            self.colors = pair;
        }
        self.enter_typing(surface);
        log::info!("sequencer started, {} questions", self.questions.len());
    }

    /// Freeze the machine. The display is left as-is; the generation bump
    /// and schedule clear guarantee no stale reveal lands afterwards.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
        self.clear_cycle_state();
        log::info!("sequencer stopped");
    }

    /// Advance the machine. Zero-duration phases chain within one tick, so a
    /// cycle with `display_duration_ms == 0` still passes through Holding.
    pub fn tick(&mut self, dt_ms: f32, surface: &mut impl Surface) {
        if !self.running {
            return;
        }
        self.elapsed_ms += dt_ms;

        let mut transitions = 0;
        loop {
            match self.phase {
                Phase::Idle => {
                    if self.elapsed_ms < self.config.question_pause_ms {
                        break;
                    }
                    self.elapsed_ms -= self.config.question_pause_ms;
                    self.enter_typing(surface);
                }
                Phase::Typing => {
                    self.reveal_due(surface);
                    if self.elapsed_ms < self.typing_done_ms {
                        break;
                    }
                    self.elapsed_ms -= self.typing_done_ms;
                    self.flush_visibility(surface);
                    self.phase = Phase::Holding;
                }
                Phase::Holding => {
                    if self.elapsed_ms < self.config.display_duration_ms {
                        break;
                    }
                    self.elapsed_ms -= self.config.display_duration_ms;
                    self.enter_fade_out(surface);
                }
                Phase::FadingOut => {
                    if self.elapsed_ms < self.config.fade_out_duration_ms {
                        break;
                    }
                    self.elapsed_ms -= self.config.fade_out_duration_ms;
                    self.finish_fade_out(surface);
                }
            }
            transitions += 1;
            if transitions >= MAX_TRANSITIONS_PER_TICK {
                break;
            }
        }
    }

    /// Idle -> Typing. Clears the container, pre-measures the layout,
    /// creates the fixed-width slots, and builds the reveal schedule before
    /// any letter appears.
    fn enter_typing(&mut self, surface: &mut impl Surface) {
        if self.question_index >= self.questions.len() {
            self.question_index = 0;
        }
        let question = self.questions.get(self.question_index).to_owned();

        surface.clear_container();
        surface.set_container_opacity(1.0);

        let plan = plan_layout(&question, surface);
        self.slots = plan
            .words
            .iter()
            .map(|w| surface.create_word_slot(w.width))
            .collect();

        self.schedule.clear();
        let delay = self.config.letter_delay_ms;
        let mut index = 0usize;
        let word_count = plan.words.len();
        for (wi, word) in plan.words.iter().enumerate() {
            for ch in word.text.chars() {
                self.schedule.push(ScheduledChar {
                    ch,
                    index,
                    slot: wi,
                    due_ms: index as f32 * delay,
                });
                index += 1;
            }
            if wi + 1 < word_count {
                self.schedule.push(ScheduledChar {
                    ch: ' ',
                    index,
                    slot: wi,
                    due_ms: index as f32 * delay,
                });
                index += 1;
            }
        }
        debug_assert_eq!(index, plan.total_chars);

        self.typing_done_ms = plan.total_chars as f32 * delay + delay;
        self.next_reveal = 0;
        self.pending_visible.clear();
        self.next_visible = 0;
        self.phase = Phase::Typing;
        log::debug!(
            "typing question {} ({} chars)",
            self.question_index,
            plan.total_chars
        );
    }

    /// Append every unit whose due time has passed, in schedule order, and
    /// trigger appearance for units past their presentation lag.
    fn reveal_due(&mut self, surface: &mut impl Surface) {
        while self.next_reveal < self.schedule.len() {
            let sc = self.schedule[self.next_reveal];
            if sc.due_ms > self.elapsed_ms {
                break;
            }
            let unit = LetterUnit::new(sc.ch, sc.index, &mut self.rng, self.config.size_jitter);
            let id = surface.append_letter(self.slots[sc.slot], &unit);
            self.pending_visible.push((id, sc.due_ms + VISIBLE_LAG_MS));
            self.next_reveal += 1;
        }
        while self.next_visible < self.pending_visible.len() {
            let (id, due) = self.pending_visible[self.next_visible];
            if due > self.elapsed_ms {
                break;
            }
            surface.mark_visible(id);
            self.next_visible += 1;
        }
    }

    /// Trigger appearance for anything still pending when Typing ends.
    fn flush_visibility(&mut self, surface: &mut impl Surface) {
        while self.next_visible < self.pending_visible.len() {
            let (id, _) = self.pending_visible[self.next_visible];
            surface.mark_visible(id);
            self.next_visible += 1;
        }
    }

    /// Holding -> FadingOut. The next color pair is drawn now, not earlier,
    /// so the fade and the color transition start together.
    fn enter_fade_out(&mut self, surface: &mut impl Surface) {
        if self.config.color_transitions {
            let next = ColorPair::generate(&mut self.rng);
            surface.apply_colors(&next, self.config.fade_out_duration_ms);
            self.colors = next;
        }
        surface.begin_fade_out(self.config.fade_out_duration_ms);
        self.phase = Phase::FadingOut;
    }

    /// FadingOut -> Idle. Clears the faded content, advances the cyclic
    /// index, and bumps the generation.
    fn finish_fade_out(&mut self, surface: &mut impl Surface) {
        surface.clear_container();
        surface.end_fade_out();
        surface.set_container_opacity(0.0);
        self.question_index = (self.question_index + 1) % self.questions.len();
        self.generation = self.generation.wrapping_add(1);
        self.clear_cycle_state();
        self.phase = Phase::Idle;
    }

    fn clear_cycle_state(&mut self) {
        self.schedule.clear();
        self.pending_visible.clear();
        self.next_reveal = 0;
        self.next_visible = 0;
        self.slots.clear();
    }
}
