//! Canonical text rendering of a [`Config`].
//!
//! The output is the structural inverse of [`parse`](crate::lang::parse)
//! followed by [`map_document`](crate::schema::map_document): re-reading it
//! yields an equal `Config`. Formatting is fixed (two-space indent,
//! `key = value`), so the source file's layout and comments are not kept.
//!
//! # Layout
//!
//! 1. `monitor` and `workspace` directives
//! 2. every fixed section with all of its fields, nested sections inside
//!    their parent, `bezier` and `animation` lines inside `animations { }`
//! 3. preserved unknown sections (inside their known parent, or at the root)
//! 4. `windowrule`, `layerrule` and `bind` directives
//!
//! A bind description without the `d` flag has no directive form; it is
//! written as a comment above the bind and does not survive a re-read.

use crate::model::{Animation, BezierCurve, Bind, Config, Monitor, RawSection, format_float};
use crate::schema::{self, SectionSchema};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

const INDENT: &str = "  ";
const HEADER: &str = "# Written by hyprmax. Manual formatting and comments are not preserved.";

/// Renders `config` as configuration text.
#[must_use]
pub fn serialize(config: &Config) -> String {
    let mut w = Writer::default();
    w.line(HEADER);

    if !config.monitors.is_empty() || !config.workspaces.is_empty() {
        w.blank();
        for monitor in &config.monitors {
            w.line(render_monitor(monitor));
        }
        for workspace in &config.workspaces {
            let mut parts = vec![workspace.name.as_str()];
            parts.extend(workspace.rules.iter().map(String::as_str));
            w.line(directive("workspace", &parts));
        }
    }

    for section in schema::sections().iter().filter(|s| s.path.len() == 1) {
        w.blank();
        w.section(config, section);
    }

    for raw in config.preserved.iter().filter(|r| r.parent.is_empty()) {
        w.blank();
        w.raw(raw);
    }

    if !config.window_rules.is_empty() || !config.layer_rules.is_empty() {
        w.blank();
        for rule in &config.window_rules {
            w.line(directive(
                "windowrule",
                &[rule.rule.as_str(), rule.value.as_str(), rule.target.as_str()],
            ));
        }
        for rule in &config.layer_rules {
            w.line(directive(
                "layerrule",
                &[rule.rule.as_str(), rule.value.as_str(), rule.target.as_str()],
            ));
        }
    }

    if !config.binds.is_empty() {
        w.blank();
        for bind in &config.binds {
            if !bind.description.is_empty() && !bind.has_description_flag() {
                w.line(format!("# {}", bind.description));
            }
            w.line(render_bind(bind));
        }
    }

    w.out
}

/// `monitor=NAME,RESOLUTION,POSITION,SCALE[,EXTRA...]`
#[must_use]
pub fn render_monitor(monitor: &Monitor) -> String {
    let mut parts = vec![
        monitor.name.as_str(),
        monitor.resolution.as_str(),
        monitor.position.as_str(),
        monitor.scale.as_str(),
    ];
    parts.extend(monitor.extra.iter().map(String::as_str));
    format!("monitor={}", parts.join(","))
}

/// `bind[FLAGS] = MODS, KEY, [DESCRIPTION, ]DISPATCHER[, PARAMS]`
///
/// The description is part of the line only with the `d` flag.
#[must_use]
pub fn render_bind(bind: &Bind) -> String {
    let mut parts = vec![bind.mods.as_str(), bind.key.as_str()];
    if bind.has_description_flag() {
        parts.push(&bind.description);
    }
    parts.push(&bind.dispatcher);
    if !bind.params.is_empty() {
        parts.push(&bind.params);
    }
    directive(&format!("bind{}", bind.flags), &parts)
}

/// `bezier = NAME, X0, Y0, X1, Y1`
#[must_use]
pub fn render_curve(curve: &BezierCurve) -> String {
    let points: Vec<String> = curve.points.iter().map(|p| format_float(*p)).collect();
    let mut parts = vec![curve.name.as_str()];
    parts.extend(points.iter().map(String::as_str));
    directive("bezier", &parts)
}

/// `animation = NAME, ONOFF, SPEED, CURVE[, STYLE]`
#[must_use]
pub fn render_animation(animation: &Animation) -> String {
    let speed = format_float(animation.speed);
    let mut parts = vec![
        animation.name.as_str(),
        if animation.enabled { "1" } else { "0" },
        speed.as_str(),
        animation.curve.as_str(),
    ];
    if let Some(style) = &animation.style {
        parts.push(style);
    }
    directive("animation", &parts)
}

fn directive(keyword: &str, parts: &[&str]) -> String {
    format!("{keyword} = {}", parts.join(", "))
}

#[derive(Default)]
struct Writer {
    out: String,
    depth: usize,
}

impl Writer {
    fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
        }
        self.out.push_str(text.trim_end());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, name: &str) {
        self.line(format!("{name} {{"));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn section(&mut self, config: &Config, section: &SectionSchema) {
        self.open(section.name());

        for field in section.fields {
            self.line(format!("{} = {}", field.key, field.read(config)));
        }

        if section.path == ["animations"] {
            for curve in &config.curves {
                self.line(render_curve(curve));
            }
            for animation in &config.animation_entries {
                self.line(render_animation(animation));
            }
        }

        for child in schema::sections().iter().filter(|s| is_child(section, s)) {
            self.section(config, child);
        }

        for raw in config.preserved.iter().filter(|r| r.parent == section.path) {
            self.raw(raw);
        }

        self.close();
    }

    fn raw(&mut self, raw: &RawSection) {
        self.open(&raw.name);
        for (key, value) in &raw.values {
            self.line(format!("{key} = {value}"));
        }
        for child in &raw.children {
            self.raw(child);
        }
        self.close();
    }
}

fn is_child(parent: &SectionSchema, candidate: &SectionSchema) -> bool {
    candidate.path.len() == parent.path.len() + 1 && candidate.path.starts_with(parent.path)
}
