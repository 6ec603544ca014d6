//! Repeated entities declared by single-line directives.

use serde::Serialize;

/// `monitor=NAME,RESOLUTION,POSITION,SCALE[,...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monitor {
    pub name: String,
    pub resolution: String,
    pub position: String,
    pub scale: String,
    /// Trailing options such as `transform, 1`, kept in order.
    pub extra: Vec<String>,
}

impl Monitor {
    /// Creates a monitor at scale `1` with no extra options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        resolution: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            resolution: resolution.into(),
            position: position.into(),
            scale: "1".to_string(),
            extra: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<String>) -> Self {
        self.scale = scale.into();
        self
    }
}

/// `workspace = NAME, RULE[, RULE...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub name: String,
    pub rules: Vec<String>,
}

impl Workspace {
    /// Returns the monitor this workspace is bound to, if any.
    #[must_use]
    pub fn monitor(&self) -> Option<&str> {
        self.rules
            .iter()
            .find_map(|rule| rule.strip_prefix("monitor:"))
            .map(str::trim)
    }
}

/// `windowrule = RULE, VALUE, TARGET`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowRule {
    pub rule: String,
    pub value: String,
    pub target: String,
}

impl WindowRule {
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        value: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            value: value.into(),
            target: target.into(),
        }
    }
}

/// `layerrule = RULE, VALUE, NAMESPACE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerRule {
    pub rule: String,
    pub value: String,
    pub target: String,
}

/// A key binding.
///
/// `flags` holds the letters appended to the `bind` keyword
/// (`bindel` has flags `el`). With the `d` flag the description is
/// part of the directive; otherwise it is editor metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bind {
    pub mods: String,
    pub key: String,
    pub dispatcher: String,
    pub params: String,
    pub flags: String,
    pub description: String,
}

impl Bind {
    #[must_use]
    pub fn new(
        mods: impl Into<String>,
        key: impl Into<String>,
        dispatcher: impl Into<String>,
        params: impl Into<String>,
    ) -> Self {
        Self {
            mods: mods.into(),
            key: key.into(),
            dispatcher: dispatcher.into(),
            params: params.into(),
            flags: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true if the description travels inside the directive.
    #[must_use]
    pub fn has_description_flag(&self) -> bool {
        self.flags.contains('d')
    }

    /// Splits the modifier field into its tokens.
    ///
    /// Tokens are separated by `+` or whitespace; an empty field yields none.
    pub fn modifiers(&self) -> impl Iterator<Item = &str> {
        self.mods
            .split(|c: char| c == '+' || c.is_whitespace())
            .filter(|token| !token.is_empty())
    }
}

/// `bezier = NAME, X0, Y0, X1, Y1`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BezierCurve {
    pub name: String,
    pub points: [f64; 4],
}

/// `animation = NAME, ONOFF, SPEED, CURVE[, STYLE]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub name: String,
    pub enabled: bool,
    pub speed: f64,
    pub curve: String,
    pub style: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_monitor_reads_rule() {
        let ws = Workspace {
            name: "1".into(),
            rules: vec!["default:true".into(), "monitor:DP-1".into()],
        };
        assert_eq!(ws.monitor(), Some("DP-1"));
    }

    #[test]
    fn workspace_without_monitor_rule() {
        let ws = Workspace {
            name: "special".into(),
            rules: vec!["gapsout:0".into()],
        };
        assert_eq!(ws.monitor(), None);
    }

    #[test]
    fn modifiers_split_on_plus_and_space() {
        let bind = Bind::new("SUPER+ALT SHIFT", "Q", "killactive", "");
        let mods: Vec<_> = bind.modifiers().collect();
        assert_eq!(mods, ["SUPER", "ALT", "SHIFT"]);
    }

    #[test]
    fn empty_modifiers_yield_nothing() {
        let bind = Bind::new("", "Print", "exec", "grim");
        assert_eq!(bind.modifiers().count(), 0);
    }

    #[test]
    fn description_flag_detected() {
        let bind = Bind::new("SUPER", "Return", "exec", "kitty").with_flags("d");
        assert!(bind.has_description_flag());
        assert!(!Bind::new("SUPER", "Return", "exec", "kitty").has_description_flag());
    }
}
