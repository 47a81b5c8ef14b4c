//! Held-key tracking and the per-frame key bindings.
//!
//! | Keys | Action (while held) |
//! | --- | --- |
//! | ←/→ | spin camera around the plot |
//! | ↑/↓ | tilt camera |
//! | A/D, R/F, W/S | move camera along x, y, z |
//! | `=` / `-` | grid resolution up / down |
//! | `0` / `9` | isoline count up / down |
//! | Space (press) | freeze / unfreeze time |

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::camera::OrbitCamera;
use crate::params::ControlParams;
use crate::plot::HeightfieldPlot;

/// Set of currently held keys
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition; returns `true` on a fresh press (not a repeat)
    pub fn set(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key);
            false
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// `1.0` if `positive` is held, `-1.0` if `negative` is, `0.0` for both or neither
    fn axis(&self, positive: KeyCode, negative: KeyCode) -> f32 {
        self.is_held(positive) as i32 as f32 - self.is_held(negative) as i32 as f32
    }
}

/// Applies held keys to the camera and plot once per frame
#[derive(Debug, Clone, Default)]
pub struct Controls {
    params: ControlParams,
    freeze_time: bool,
}

impl Controls {
    pub fn new(params: ControlParams, freeze_time: bool) -> Self {
        Self {
            params,
            freeze_time,
        }
    }

    pub fn freeze_time(&self) -> bool {
        self.freeze_time
    }

    /// Handle a fresh key press that acts once rather than while held
    pub fn on_press(&mut self, key: KeyCode) {
        if key == KeyCode::Space {
            self.freeze_time = !self.freeze_time;
            log::info!(
                "time {}",
                if self.freeze_time { "frozen" } else { "running" }
            );
        }
    }

    /// Apply every held key for a frame of length `dt` seconds
    pub fn apply(
        &self,
        keys: &KeyState,
        dt: f32,
        camera: &mut OrbitCamera,
        plot: &mut HeightfieldPlot,
    ) {
        let rotate = dt * self.params.rotate_speed;
        camera.angle.x += rotate * keys.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
        camera.angle.y += rotate * keys.axis(KeyCode::ArrowUp, KeyCode::ArrowDown);

        let step = dt * self.params.move_speed;
        camera.shift.x += step * keys.axis(KeyCode::KeyD, KeyCode::KeyA);
        camera.shift.y += step * keys.axis(KeyCode::KeyR, KeyCode::KeyF);
        camera.shift.z += step * keys.axis(KeyCode::KeyS, KeyCode::KeyW);

        if keys.is_held(KeyCode::Equal) {
            plot.improve_grid();
        }
        if keys.is_held(KeyCode::Minus) {
            plot.degrade_grid();
        }
        if keys.is_held(KeyCode::Digit0) {
            plot.increase_isoline_count();
        }
        if keys.is_held(KeyCode::Digit9) {
            plot.decrease_isoline_count();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NoiseParams, PlotParams};

    fn plot() -> HeightfieldPlot {
        let noise = NoiseParams {
            seed: Some(1),
            ..Default::default()
        };
        HeightfieldPlot::new(PlotParams::default(), noise)
    }

    #[test]
    fn test_key_state_press_and_repeat() {
        let mut keys = KeyState::new();
        assert!(keys.set(KeyCode::Space, true));
        // OS key repeat
        assert!(!keys.set(KeyCode::Space, true));
        assert!(keys.is_held(KeyCode::Space));

        assert!(!keys.set(KeyCode::Space, false));
        assert!(!keys.is_held(KeyCode::Space));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut keys = KeyState::new();
        keys.set(KeyCode::ArrowLeft, true);
        keys.set(KeyCode::ArrowRight, true);

        let mut camera = OrbitCamera::default();
        let before = camera.clone();
        Controls::default().apply(&keys, 0.5, &mut camera, &mut plot());
        assert_eq!(camera, before);
    }

    #[test]
    fn test_camera_moves_with_dt() {
        let mut keys = KeyState::new();
        keys.set(KeyCode::ArrowLeft, true);
        keys.set(KeyCode::KeyW, true);

        let mut camera = OrbitCamera::default();
        let before = camera.clone();
        Controls::default().apply(&keys, 0.25, &mut camera, &mut plot());

        assert!((camera.angle.x - (before.angle.x + 0.25)).abs() < 1e-6);
        assert!((camera.shift.z - (before.shift.z - 0.25)).abs() < 1e-6);
        assert_eq!(camera.angle.y, before.angle.y);
    }

    #[test]
    fn test_grid_and_isoline_keys() {
        let mut keys = KeyState::new();
        keys.set(KeyCode::Equal, true);
        keys.set(KeyCode::Digit0, true);

        let mut camera = OrbitCamera::default();
        let mut plot = plot();
        let controls = Controls::default();
        controls.apply(&keys, 0.016, &mut camera, &mut plot);
        controls.apply(&keys, 0.016, &mut camera, &mut plot);

        assert_eq!(plot.grid_size(), 22);
        assert_eq!(plot.isoline_count(), 2);

        keys.set(KeyCode::Equal, false);
        keys.set(KeyCode::Minus, true);
        controls.apply(&keys, 0.016, &mut camera, &mut plot);
        assert_eq!(plot.grid_size(), 21);
    }

    #[test]
    fn test_space_toggles_freeze() {
        let mut controls = Controls::default();
        assert!(!controls.freeze_time());
        controls.on_press(KeyCode::Space);
        assert!(controls.freeze_time());
        controls.on_press(KeyCode::KeyQ);
        assert!(controls.freeze_time());
        controls.on_press(KeyCode::Space);
        assert!(!controls.freeze_time());
    }
}
