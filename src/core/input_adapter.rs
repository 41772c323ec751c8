use std::collections::VecDeque;

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, InputEvent, InputSource};

/// Adapter that translates winit window events into the crate's input
/// events. Keys with no binding are dropped here, so the controller only
/// ever sees buttons it knows.
#[derive(Debug, Default)]
pub struct WinitInput {
    queue: VecDeque<InputEvent>,
    cursor: (f32, f32),
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one winit event; translated events are buffered until polled
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        let translated = match event.state {
                            ElementState::Pressed => InputEvent::KeyDown(button),
                            ElementState::Released => InputEvent::KeyUp(button),
                        };
                        self.queue.push_back(translated);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    let translated = match state {
                        ElementState::Pressed => InputEvent::PointerDown {
                            x: self.cursor.0,
                            y: self.cursor.1,
                        },
                        ElementState::Released => InputEvent::PointerUp,
                    };
                    self.queue.push_back(translated);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.queue.push_back(InputEvent::PointerMove {
                    x: self.cursor.0,
                    y: self.cursor.1,
                });
            }
            _ => {}
        }
    }

    /// Map winit physical key codes to navigation buttons
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::ArrowUp => Some(Button::ArrowUp),
            KeyCode::ArrowDown => Some(Button::ArrowDown),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            KeyCode::Space => Some(Button::Space),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
