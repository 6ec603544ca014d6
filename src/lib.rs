//! hyprmax: a settings editor backend for Hyprland configuration files.
//!
//! Parses `hyprland.conf` into a typed model, validates edits against a
//! declarative schema and writes the model back in canonical form.

pub mod diagnostic;
pub mod lang;
pub mod load;
pub mod model;
pub mod persist;
pub mod schema;
pub mod serialize;
pub mod session;
pub mod settings;
pub mod time;
pub mod validate;
