//! Pointer input events the display reacts to.

/// Input event types the display understands.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch moved to surface coordinates (x, y). Treated like a cursor.
    TouchMove { x: f32, y: f32 },
    /// The cursor/touch left the surface.
    PointerLeave,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerLeave);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn touch_move_carries_coordinates() {
        let mut q = InputQueue::new();
        q.push(InputEvent::TouchMove { x: 1.5, y: 2.5 });
        match q.drain()[0] {
            InputEvent::TouchMove { x, y } => {
                assert_eq!(x, 1.5);
                assert_eq!(y, 2.5);
            }
            _ => panic!("expected TouchMove"),
        }
    }
}
