use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::lifecycle::{InputEvent, Key, KeyAction};

/// Translate a winit window event into a queued input record
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
        WindowEvent::KeyboardInput { event, .. } => {
            let key = match event.physical_key {
                PhysicalKey::Code(code) => key_from_code(code),
                PhysicalKey::Unidentified(_) => Key::Other,
            };
            Some(InputEvent::Key {
                key,
                action: key_action(event.state, event.repeat),
            })
        }
        _ => None,
    }
}

/// Map a physical key code onto the keys the loop distinguishes
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Map a winit element state onto a key transition
pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match state {
        ElementState::Pressed if repeat => KeyAction::Repeat,
        ElementState::Pressed => KeyAction::Press,
        ElementState::Released => KeyAction::Release,
    }
}
