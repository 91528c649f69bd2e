/// Application configuration with the tutorial's defaults
use nalgebra::{Vector3, Vector4};

/// Key code for upper-case 'F'
pub const KEY_F_UPPER: u32 = 70;
/// Key code for lower-case 'f'
pub const KEY_F_LOWER: u32 = 102;
/// Key code that forces fullscreen exit
pub const KEY_EXIT_FULLSCREEN: u32 = 21;

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFullscreen,
    ExitFullscreen,
}

/// Maps physical key codes to actions. Unmapped keys are ignored.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub toggle_fullscreen: Vec<u32>,
    pub exit_fullscreen: Vec<u32>,
}

impl KeyBindings {
    pub fn action_for(&self, key_code: u32) -> Option<KeyAction> {
        if self.toggle_fullscreen.contains(&key_code) {
            Some(KeyAction::ToggleFullscreen)
        } else if self.exit_fullscreen.contains(&key_code) {
            Some(KeyAction::ExitFullscreen)
        } else {
            None
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_fullscreen: vec![KEY_F_UPPER, KEY_F_LOWER],
            exit_fullscreen: vec![KEY_EXIT_FULLSCREEN],
        }
    }
}

/// Everything the renderer and controllers read at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CSS selector of the drawing surface
    pub canvas_selector: String,
    pub clear_color: Vector4<f32>,
    pub clear_depth: f32,
    /// Vertical field of view in radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Translation applied before rotating the model
    pub model_translation: Vector3<f32>,
    pub rotation_axis: Vector3<f32>,
    /// Radians per second
    pub rotation_speed: f32,
    pub keys: KeyBindings,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "#glCanvas".to_string(),
            clear_color: Vector4::new(0.0, 0.0, 0.0, 1.0),
            clear_depth: 1.0,
            fov: std::f32::consts::PI / 4.0, // 45 degrees
            near: 0.1,
            far: 100.0,
            model_translation: Vector3::new(0.0, 0.0, -6.0),
            rotation_axis: Vector3::y(),
            rotation_speed: 1.0,
            keys: KeyBindings::default(),
            log_level: log::Level::Info,
        }
    }
}
