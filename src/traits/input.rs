/// Input button identifier (physical key position)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
}

/// A single raw input event, already translated from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    KeyDown(Button),
    KeyUp(Button),
}

/// The five event classes a controller can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    KeyDown,
    KeyUp,
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown { .. } => EventKind::PointerDown,
            InputEvent::PointerMove { .. } => EventKind::PointerMove,
            InputEvent::PointerUp => EventKind::PointerUp,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyUp(_) => EventKind::KeyUp,
        }
    }
}

/// Where input events come from. Implemented by the winit adapter in
/// production and by scripted sources in tests and the demo binary.
pub trait InputSource {
    /// Take the next pending event, oldest first
    fn poll(&mut self) -> Option<InputEvent>;
}

/// In-memory event source fed by hand. Useful for scripted walkthroughs.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: std::collections::VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
