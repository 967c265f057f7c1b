//! DOM implementation of the render-surface contract.
//!
//! Writes the CSS contract the stylesheet animates: per-letter custom
//! properties (`--baseline-y`, `--initial-baseline-y`, `--letter-scale`,
//! `--interaction-x/y`), the `visible` and `fade-out` state classes, and the
//! body-level color transition.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use fragen_engine::{ColorPair, LetterId, LetterUnit, SlotId, Surface};

/// Id of the root container element in the host document.
pub const CONTAINER_ID: &str = "questionContainer";

struct DomLetter {
    id: LetterId,
    element: HtmlElement,
    visible: bool,
}

/// Surface over the live document. Owns handles to the slots and letters of
/// the cycle currently in flight.
pub struct DomSurface {
    document: Document,
    body: HtmlElement,
    container: HtmlElement,
    slots: Vec<(SlotId, HtmlElement)>,
    letters: Vec<DomLetter>,
    next_slot_id: u32,
    next_letter_id: u32,
}

impl DomSurface {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(CONTAINER_ID)
            .ok_or_else(|| JsValue::from_str("missing #questionContainer element"))?
            .dyn_into::<HtmlElement>()?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        Ok(Self {
            document,
            body,
            container,
            slots: Vec::new(),
            letters: Vec::new(),
            next_slot_id: 0,
            next_letter_id: 0,
        })
    }

    fn make_span(&self, class: &str) -> HtmlElement {
        let el: HtmlElement = self
            .document
            .create_element("span")
            .expect("span creation failed")
            .dyn_into()
            .expect("span is an HtmlElement");
        el.set_class_name(class);
        el
    }

    fn set_letter_content(el: &HtmlElement, ch: char) {
        if ch == ' ' {
            // A literal space would collapse; the stylesheet expects the
            // non-breaking form.
            el.set_inner_html("&nbsp;");
        } else {
            el.set_text_content(Some(&ch.to_string()));
        }
    }
}

impl Surface for DomSurface {
    fn measure_text(&mut self, text: &str) -> f32 {
        // Invisible, non-interactive clone of the production word markup,
        // inserted just long enough to read its rendered width.
        let measurer = self.make_span("word");
        let style = measurer.style();
        let _ = style.set_property("visibility", "hidden");
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("white-space", "nowrap");
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("pointer-events", "none");

        for ch in text.chars() {
            let letter = self.make_span("letter");
            // Match the stylesheet's per-letter spacing.
            let _ = letter.style().set_property("margin-right", "0.05em");
            Self::set_letter_content(&letter, ch);
            let _ = measurer.append_child(&letter);
        }

        let _ = self.container.append_child(&measurer);
        let width = measurer.offset_width() as f32;
        measurer.remove();
        width
    }

    fn clear_container(&mut self) {
        self.container.set_inner_html("");
        self.slots.clear();
        self.letters.clear();
    }

    fn set_container_opacity(&mut self, opacity: f32) {
        let _ = self
            .container
            .style()
            .set_property("opacity", &opacity.to_string());
    }

    fn create_word_slot(&mut self, width: f32) -> SlotId {
        let el = self.make_span("word");
        let style = el.style();
        // Fixed width from pre-measurement; later insertions cannot shift
        // already-placed content.
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("display", "inline-block");
        let _ = style.set_property("vertical-align", "baseline");
        // Match line-height so letters appearing cannot shift rows.
        let _ = style.set_property("min-height", "0.85em");
        let _ = self.container.append_child(&el);

        let id = SlotId(self.next_slot_id);
        self.next_slot_id += 1;
        self.slots.push((id, el));
        id
    }

    fn append_letter(&mut self, slot: SlotId, unit: &LetterUnit) -> LetterId {
        let class = if unit.is_space() { "letter space" } else { "letter" };
        let el = self.make_span(class);
        Self::set_letter_content(&el, unit.ch);

        let style = el.style();
        let _ = style.set_property("animation-delay", &format!("{}s", unit.animation_delay_s));
        let baseline = format!("{}px", unit.baseline_y);
        let _ = style.set_property("--baseline-y", &baseline);
        // Applied before the appear transition so the letter spawns with its
        // offset from the start.
        let _ = style.set_property("--initial-baseline-y", &baseline);
        if let Some(scale) = unit.scale {
            let _ = style.set_property("--letter-scale", &scale.to_string());
        }

        if let Some((_, slot_el)) = self.slots.iter().find(|(id, _)| *id == slot) {
            let _ = slot_el.append_child(&el);
        } else {
            log::warn!("letter appended to unknown slot {:?}", slot);
        }

        let id = LetterId(self.next_letter_id);
        self.next_letter_id += 1;
        self.letters.push(DomLetter {
            id,
            element: el,
            visible: false,
        });
        id
    }

    fn mark_visible(&mut self, letter: LetterId) {
        if let Some(l) = self.letters.iter_mut().find(|l| l.id == letter) {
            let _ = l.element.class_list().add_1("visible");
            l.visible = true;
        }
    }

    fn begin_fade_out(&mut self, duration_ms: f32) {
        let _ = self
            .container
            .style()
            .set_property("transition-duration", &format!("{}ms", duration_ms));
        let _ = self.container.class_list().add_1("fade-out");
    }

    fn end_fade_out(&mut self) {
        let _ = self.container.class_list().remove_1("fade-out");
    }

    fn apply_colors(&mut self, colors: &ColorPair, transition_ms: f32) {
        let style = self.body.style();
        let _ = style.set_property(
            "transition",
            &format!(
                "background-color {}ms ease-out, color {}ms ease-out",
                transition_ms, transition_ms
            ),
        );
        let _ = style.set_property("background-color", &colors.background.to_hex());
        let _ = style.set_property("color", &colors.text.to_hex());
    }

    fn visible_letter_centers(&self) -> Vec<(LetterId, Vec2)> {
        self.letters
            .iter()
            .filter(|l| l.visible)
            .map(|l| {
                let rect = l.element.get_bounding_client_rect();
                let center = Vec2::new(
                    (rect.left() + rect.width() / 2.0) as f32,
                    (rect.top() + rect.height() / 2.0) as f32,
                );
                (l.id, center)
            })
            .collect()
    }

    fn set_interaction_offset(&mut self, letter: LetterId, offset: Vec2) {
        if let Some(l) = self.letters.iter().find(|l| l.id == letter) {
            let style = l.element.style();
            let _ = style.set_property("--interaction-x", &format!("{}px", offset.x));
            let _ = style.set_property("--interaction-y", &format!("{}px", offset.y));
        }
    }

    fn clear_interaction_offset(&mut self, letter: LetterId) {
        if let Some(l) = self.letters.iter().find(|l| l.id == letter) {
            let style = l.element.style();
            let _ = style.remove_property("--interaction-x");
            let _ = style.remove_property("--interaction-y");
        }
    }
}
