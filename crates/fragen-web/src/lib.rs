//! Browser entry points for the ambient question display.
//!
//! JS calls `app_init()` once, forwards pointer/touch events, and drives
//! `app_tick(dt_ms)` from `requestAnimationFrame`.

pub mod dom;
pub mod runner;

pub use runner::AppRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use fragen_engine::{DisplayConfig, InputEvent, QuestionList};

use crate::dom::DomSurface;

thread_local! {
    static RUNNER: RefCell<Option<AppRunner<DomSurface>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut AppRunner<DomSurface>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Display not initialized. Call app_init() first.");
        f(runner)
    })
}

/// Set up logging, grab the DOM surface, and build the runner with the
/// default question set. Does not start the cycle; call `app_start`.
#[wasm_bindgen]
pub fn app_init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let surface = DomSurface::new()?;
    let config = DisplayConfig {
        // Ambient jitter should differ between page loads.
        rng_seed: js_sys::Date::now() as u64,
        ..DisplayConfig::default()
    };
    let runner = AppRunner::new(surface, QuestionList::default_set(), config);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("fragen: initialized");
    Ok(())
}

/// Replace the question list (JSON array of strings) before or between
/// cycles. Invalid payloads keep the current list.
#[wasm_bindgen]
pub fn app_load_questions(json: &str) {
    with_runner(|r| r.load_questions(json));
}

/// Replace timing/feature configuration (JSON). Only honored before
/// `app_start`.
#[wasm_bindgen]
pub fn app_configure(json: &str) {
    with_runner(|r| r.configure(json));
}

#[wasm_bindgen]
pub fn app_start() {
    with_runner(|r| r.start());
}

#[wasm_bindgen]
pub fn app_stop() {
    with_runner(|r| r.stop());
}

/// Advance the display. `dt_ms` is the frame delta in milliseconds.
#[wasm_bindgen]
pub fn app_tick(dt_ms: f32) {
    with_runner(|r| r.tick(dt_ms));
}

#[wasm_bindgen]
pub fn app_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn app_touch_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::TouchMove { x, y }));
}

#[wasm_bindgen]
pub fn app_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}
