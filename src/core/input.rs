//! Input state tracking
//!
//! Translates winit events into what the camera consumes: the set of held
//! [`MoveKey`]s and a virtual pointer position. While the cursor is captured,
//! raw mouse motion is accumulated into the pointer so looking around is not
//! limited by the window edges.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::camera::MoveKey;

/// Key binding for a physical key, if it drives the camera
pub fn move_key_for(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::KeyW => Some(MoveKey::Forward),
        KeyCode::KeyS => Some(MoveKey::Back),
        KeyCode::KeyA => Some(MoveKey::Left),
        KeyCode::KeyD => Some(MoveKey::Right),
        KeyCode::Space => Some(MoveKey::Up),
        KeyCode::KeyC | KeyCode::KeyX => Some(MoveKey::Down),
        _ => None,
    }
}

/// Tracks keyboard and mouse input state
pub struct InputState {
    /// Currently pressed keys
    keys_pressed: HashSet<KeyCode>,
    /// Virtual pointer position, advanced by raw motion while captured
    pointer: (f64, f64),
    /// Whether mouse is captured
    mouse_captured: bool,
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            pointer: (0.0, 0.0),
            mouse_captured: false,
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(key_code),
                    state,
                    ..
                },
                ..
            } => self.set_key(*key_code, *state == ElementState::Pressed),
            // Keys released while unfocused never report a release
            WindowEvent::Focused(false) => self.keys_pressed.clear(),
            _ => {}
        }
    }

    /// Process device event for raw mouse motion
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.mouse_captured {
            self.pointer.0 += delta.0;
            self.pointer.1 += delta.1;
        }
    }

    fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_pressed.insert(key);
        } else {
            self.keys_pressed.remove(&key);
        }
    }

    /// Movement keys currently held
    pub fn move_keys(&self) -> HashSet<MoveKey> {
        self.keys_pressed
            .iter()
            .filter_map(|&code| move_key_for(code))
            .collect()
    }

    /// Current virtual pointer position
    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    /// Set mouse captured state
    pub fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_keys() {
        let mut input = InputState::new();
        assert!(input.move_keys().is_empty());

        input.set_key(KeyCode::KeyW, true);
        input.set_key(KeyCode::KeyX, true);
        input.set_key(KeyCode::KeyQ, true);
        assert!(input.keys_pressed.contains(&KeyCode::KeyQ));

        let held = input.move_keys();
        assert_eq!(held.len(), 2);
        assert!(held.contains(&MoveKey::Forward));
        assert!(held.contains(&MoveKey::Down));

        input.set_key(KeyCode::KeyW, false);
        assert!(!input.move_keys().contains(&MoveKey::Forward));
    }

    #[test]
    fn test_both_down_keys_map_to_down() {
        assert_eq!(move_key_for(KeyCode::KeyC), Some(MoveKey::Down));
        assert_eq!(move_key_for(KeyCode::KeyX), Some(MoveKey::Down));
        assert_eq!(move_key_for(KeyCode::Space), Some(MoveKey::Up));
        assert_eq!(move_key_for(KeyCode::Escape), None);
    }

    #[test]
    fn test_pointer_only_moves_when_captured() {
        let mut input = InputState::new();
        input.process_mouse_motion((10.0, -4.0));
        assert_eq!(input.pointer(), (0.0, 0.0));

        input.set_mouse_captured(true);
        input.process_mouse_motion((10.0, -4.0));
        input.process_mouse_motion((2.5, 1.0));
        assert_eq!(input.pointer(), (12.5, -3.0));
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut input = InputState::new();
        input.set_key(KeyCode::KeyD, true);
        input.process_event(&WindowEvent::Focused(false));
        assert!(input.move_keys().is_empty());
    }
}
