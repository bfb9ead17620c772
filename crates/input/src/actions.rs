//! Key bindings and the per-frame action snapshot.

use crate::{InputState, KeyCode};

/// Camera selections reachable from the number row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSelect {
    Axonometric,
    Top,
    Side,
    Front,
    Free,
    FirstPerson,
    Bottom,
    HelicopterFollow,
}

/// Draw mode selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawModeSelect {
    Wireframe,
    Filled,
}

/// Everything the simulation reacts to in one frame.
///
/// Held actions repeat every frame while their key is down; one-shot actions
/// fire only on the frame the key goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    // Held
    pub throttle_up: bool,
    pub descend: bool,
    pub accelerate: bool,
    pub brake: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub orbit_accelerate: bool,
    pub look_left: bool,
    pub look_right: bool,
    pub look_up: bool,
    pub look_down: bool,
    pub time_faster: bool,
    pub time_slower: bool,

    // One-shot
    pub spawn_crate: bool,
    pub regenerate: bool,
    pub toggle_pause: bool,
    pub toggle_auto: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub camera: Option<CameraSelect>,
    pub draw_mode: Option<DrawModeSelect>,
}

const CAMERA_KEYS: [(KeyCode, CameraSelect); 8] = [
    (KeyCode::Digit1, CameraSelect::Axonometric),
    (KeyCode::Digit2, CameraSelect::Top),
    (KeyCode::Digit3, CameraSelect::Side),
    (KeyCode::Digit4, CameraSelect::Front),
    (KeyCode::Digit5, CameraSelect::Free),
    (KeyCode::Digit6, CameraSelect::FirstPerson),
    (KeyCode::Digit7, CameraSelect::Bottom),
    (KeyCode::Digit8, CameraSelect::HelicopterFollow),
];

impl ControlInput {
    /// Snapshot the bound actions from the current key state.
    pub fn from_input(input: &InputState) -> Self {
        let held = |k| input.is_key_held(k);
        let pressed = |k| input.is_key_pressed(k);

        let camera = CAMERA_KEYS
            .iter()
            .find(|(key, _)| pressed(*key))
            .map(|&(_, select)| select);

        let draw_mode = if pressed(KeyCode::KeyW) {
            Some(DrawModeSelect::Wireframe)
        } else if pressed(KeyCode::KeyS) {
            Some(DrawModeSelect::Filled)
        } else {
            None
        };

        Self {
            throttle_up: held(KeyCode::ArrowUp),
            descend: held(KeyCode::ArrowDown),
            accelerate: held(KeyCode::KeyR),
            brake: held(KeyCode::KeyF),
            yaw_left: held(KeyCode::KeyD),
            yaw_right: held(KeyCode::KeyG),
            orbit_accelerate: held(KeyCode::ArrowLeft),
            look_left: held(KeyCode::KeyJ),
            look_right: held(KeyCode::KeyL),
            look_up: held(KeyCode::KeyI),
            look_down: held(KeyCode::KeyK),
            time_faster: held(KeyCode::Equal) || held(KeyCode::NumpadAdd),
            time_slower: held(KeyCode::Minus) || held(KeyCode::NumpadSubtract),

            spawn_crate: pressed(KeyCode::Space),
            regenerate: pressed(KeyCode::KeyM),
            toggle_pause: pressed(KeyCode::KeyP),
            toggle_auto: pressed(KeyCode::KeyZ),
            zoom_in: pressed(KeyCode::KeyQ),
            zoom_out: pressed(KeyCode::KeyA),
            camera,
            draw_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementState;

    #[test]
    fn held_keys_repeat_until_released() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
        assert!(ControlInput::from_input(&input).throttle_up);
        input.begin_frame();
        assert!(ControlInput::from_input(&input).throttle_up);
        input.process_keyboard(KeyCode::ArrowUp, ElementState::Released);
        assert!(!ControlInput::from_input(&input).throttle_up);
    }

    #[test]
    fn one_shot_actions_fire_once() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(ControlInput::from_input(&input).spawn_crate);
        input.begin_frame();
        // Still held, but no longer a fresh press.
        assert!(!ControlInput::from_input(&input).spawn_crate);
    }

    #[test]
    fn number_row_selects_camera() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::Digit6, ElementState::Pressed);
        let controls = ControlInput::from_input(&input);
        assert_eq!(controls.camera, Some(CameraSelect::FirstPerson));
        assert_eq!(controls.draw_mode, None);
    }

    #[test]
    fn release_all_clears_held_actions() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        input.release_all();
        let controls = ControlInput::from_input(&input);
        assert!(!controls.accelerate && !controls.yaw_left);
        assert!(input.is_key_released(KeyCode::KeyR));
    }
}
