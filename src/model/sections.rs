//! Fixed configuration sections.
//!
//! Each struct is a flat record of typed fields. Defaults follow the
//! compositor's built-in values and apply whenever a key is absent from
//! the source text. Key names and ranges live in the descriptor tables
//! in [`crate::schema`], not here.

use serde::Serialize;

/// `general { }`: layout, gaps and borders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct General {
    pub border_size: i64,
    pub gaps_in: i64,
    pub gaps_out: i64,
    pub cursor_inactive_timeout: i64,
    pub layout: String,
    pub no_focus_fallback: bool,
    pub sensitivity: f64,
    pub allow_tearing: bool,
    pub resize_on_border: bool,
    pub active_border: String,
    pub inactive_border: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            border_size: 1,
            gaps_in: 5,
            gaps_out: 20,
            cursor_inactive_timeout: 0,
            layout: "dwindle".to_string(),
            no_focus_fallback: false,
            sensitivity: 1.0,
            allow_tearing: false,
            resize_on_border: false,
            active_border: "0xffffffff".to_string(),
            inactive_border: "0xff444444".to_string(),
        }
    }
}

/// `decoration { }`: rounding, blur, opacity and shadows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decoration {
    pub rounding: i64,
    pub blur_enabled: bool,
    pub blur_size: i64,
    pub blur_passes: i64,
    pub opacity: f64,
    pub inactive_opacity: f64,
    pub drop_shadow: bool,
    pub shadow_range: i64,
    pub shadow_color: String,
    pub dim_inactive: bool,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            rounding: 0,
            blur_enabled: true,
            blur_size: 8,
            blur_passes: 1,
            opacity: 1.0,
            inactive_opacity: 1.0,
            drop_shadow: true,
            shadow_range: 4,
            shadow_color: "0xee1a1a1a".to_string(),
            dim_inactive: false,
        }
    }
}

/// `animations { }`: global animation switches.
///
/// Curves and per-target animations are repeated entities on
/// [`Config`](super::Config), not fields here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animations {
    pub enabled: bool,
    pub first_launch_animation: bool,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            enabled: true,
            first_launch_animation: true,
        }
    }
}

/// `input { }`: keyboard and pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Input {
    pub kb_model: String,
    pub kb_layout: String,
    pub kb_variant: String,
    pub kb_options: String,
    pub numlock_by_default: bool,
    pub repeat_rate: i64,
    pub repeat_delay: i64,
    pub sensitivity: f64,
    pub natural_scroll: bool,
    pub scroll_method: String,
    pub scroll_button: i64,
    pub scroll_factor: f64,
    pub follow_mouse: i64,
    pub mouse_refocus: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            kb_model: String::new(),
            kb_layout: "us".to_string(),
            kb_variant: String::new(),
            kb_options: String::new(),
            numlock_by_default: false,
            repeat_rate: 25,
            repeat_delay: 600,
            sensitivity: 0.0,
            natural_scroll: false,
            scroll_method: "2fg".to_string(),
            scroll_button: 0,
            scroll_factor: 1.0,
            follow_mouse: 1,
            mouse_refocus: true,
        }
    }
}

/// `input { touchpad { } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Touchpad {
    pub disable_while_typing: bool,
    pub natural_scroll: bool,
    pub scroll_factor: f64,
    pub tap_to_click: bool,
    pub clickfinger_behavior: bool,
    pub drag_lock: bool,
    pub middle_button_emulation: bool,
}

impl Default for Touchpad {
    fn default() -> Self {
        Self {
            disable_while_typing: true,
            natural_scroll: false,
            scroll_factor: 1.0,
            tap_to_click: true,
            clickfinger_behavior: false,
            drag_lock: false,
            middle_button_emulation: false,
        }
    }
}

/// `gestures { }`: touchpad workspace swipes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gestures {
    pub workspace_swipe: bool,
    pub workspace_swipe_fingers: i64,
    pub workspace_swipe_distance: i64,
    pub workspace_swipe_invert: bool,
    pub workspace_swipe_cancel_ratio: f64,
    pub workspace_swipe_forever: bool,
}

impl Default for Gestures {
    fn default() -> Self {
        Self {
            workspace_swipe: false,
            workspace_swipe_fingers: 3,
            workspace_swipe_distance: 300,
            workspace_swipe_invert: true,
            workspace_swipe_cancel_ratio: 0.5,
            workspace_swipe_forever: false,
        }
    }
}

/// `misc { }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)] // mirrors the compositor's switches
pub struct Misc {
    pub disable_hyprland_logo: bool,
    pub disable_splash_rendering: bool,
    pub force_default_wallpaper: i64,
    pub vfr: bool,
    pub vrr: i64,
    pub mouse_move_enables_dpms: bool,
    pub key_press_enables_dpms: bool,
    pub animate_manual_resizes: bool,
    pub focus_on_activate: bool,
}

impl Default for Misc {
    fn default() -> Self {
        Self {
            disable_hyprland_logo: false,
            disable_splash_rendering: false,
            force_default_wallpaper: -1,
            vfr: true,
            vrr: 0,
            mouse_move_enables_dpms: false,
            key_press_enables_dpms: false,
            animate_manual_resizes: false,
            focus_on_activate: false,
        }
    }
}

/// `debug { }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct DebugSettings {
    pub overlay: bool,
    pub damage_blink: bool,
    pub disable_logs: bool,
    pub disable_time: bool,
    pub damage_tracking: i64,
    pub enable_stdout_logs: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            overlay: false,
            damage_blink: false,
            disable_logs: true,
            disable_time: true,
            damage_tracking: 2,
            enable_stdout_logs: false,
        }
    }
}

/// `xwayland { }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XWayland {
    pub enabled: bool,
    pub use_nearest_neighbor: bool,
    pub force_zero_scaling: bool,
}

impl Default for XWayland {
    fn default() -> Self {
        Self {
            enabled: true,
            use_nearest_neighbor: true,
            force_zero_scaling: false,
        }
    }
}

/// `opengl { }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGl {
    pub nvidia_anti_flicker: bool,
    pub force_introspection: i64,
}

impl Default for OpenGl {
    fn default() -> Self {
        Self {
            nvidia_anti_flicker: true,
            force_introspection: 2,
        }
    }
}

/// `cursor { }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cursor {
    pub no_hardware_cursors: bool,
    pub inactive_timeout: i64,
    pub hide_on_key_press: bool,
    pub no_warps: bool,
    pub enable_hyprcursor: bool,
    pub zoom_factor: f64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            no_hardware_cursors: false,
            inactive_timeout: 0,
            hide_on_key_press: false,
            no_warps: false,
            enable_hyprcursor: true,
            zoom_factor: 1.0,
        }
    }
}
