//! Directive decoding.
//!
//! Directives are validated for token count as soon as they are read:
//! a short directive means a malformed file, not a semantic issue, so it
//! never gets truncated or defaulted.

use crate::model::{Animation, BezierCurve, Bind, LayerRule, Monitor, WindowRule, Workspace};

use super::error::{Arity, SyntaxError};

/// A decoded directive line.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Monitor(Monitor),
    Workspace(Workspace),
    WindowRule(WindowRule),
    LayerRule(LayerRule),
    Bind(Bind),
    Bezier(BezierCurve),
    Animation(Animation),
}

/// Decodes the value part of a directive.
///
/// `keyword` must already be known to be a directive keyword (see
/// [`is_directive_keyword`](super::lexer::is_directive_keyword)).
///
/// # Errors
///
/// Returns [`SyntaxError::DirectiveArity`] if the token count is wrong and
/// [`SyntaxError::InvalidDirective`] if a typed token does not parse.
pub fn parse_directive(keyword: &str, value: &str, line: usize) -> Result<Directive, SyntaxError> {
    let ctx = Ctx { keyword, line };
    match keyword {
        "monitor" => ctx.monitor(value).map(Directive::Monitor),
        "workspace" => ctx.workspace(value).map(Directive::Workspace),
        "windowrule" => {
            let [rule, value, target] = ctx.triple(value)?;
            Ok(Directive::WindowRule(WindowRule::new(rule, value, target)))
        }
        "layerrule" => {
            let [rule, value, target] = ctx.triple(value)?;
            Ok(Directive::LayerRule(LayerRule {
                rule,
                value,
                target,
            }))
        }
        "bezier" => ctx.bezier(value).map(Directive::Bezier),
        "animation" => ctx.animation(value).map(Directive::Animation),
        _ => {
            let flags = keyword.strip_prefix("bind").unwrap_or_default();
            ctx.bind(flags, value).map(Directive::Bind)
        }
    }
}

struct Ctx<'a> {
    keyword: &'a str,
    line: usize,
}

impl Ctx<'_> {
    fn tokens<'v>(&self, value: &'v str, limit: usize, arity: Arity) -> Result<Vec<&'v str>, SyntaxError> {
        let tokens: Vec<&str> = value.splitn(limit, ',').map(str::trim).collect();
        if arity.accepts(tokens.len()) {
            Ok(tokens)
        } else {
            Err(SyntaxError::DirectiveArity {
                keyword: self.keyword.to_string(),
                line: self.line,
                expected: arity,
                found: tokens.len(),
            })
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> SyntaxError {
        SyntaxError::InvalidDirective {
            keyword: self.keyword.to_string(),
            line: self.line,
            reason: reason.into(),
        }
    }

    fn float(&self, what: &str, raw: &str) -> Result<f64, SyntaxError> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(format!("{what} '{raw}' is not a number")))
    }

    fn monitor(&self, value: &str) -> Result<Monitor, SyntaxError> {
        let tokens = self.tokens(value, usize::MAX, Arity::AtLeast(4))?;
        Ok(Monitor {
            name: tokens[0].to_string(),
            resolution: tokens[1].to_string(),
            position: tokens[2].to_string(),
            scale: tokens[3].to_string(),
            extra: tokens[4..].iter().map(ToString::to_string).collect(),
        })
    }

    fn workspace(&self, value: &str) -> Result<Workspace, SyntaxError> {
        let tokens = self.tokens(value, usize::MAX, Arity::AtLeast(2))?;
        Ok(Workspace {
            name: tokens[0].to_string(),
            rules: tokens[1..].iter().map(ToString::to_string).collect(),
        })
    }

    fn triple(&self, value: &str) -> Result<[String; 3], SyntaxError> {
        let tokens = self.tokens(value, usize::MAX, Arity::Exactly(3))?;
        Ok([
            tokens[0].to_string(),
            tokens[1].to_string(),
            tokens[2].to_string(),
        ])
    }

    fn bind(&self, flags: &str, value: &str) -> Result<Bind, SyntaxError> {
        if flags.contains('d') {
            let tokens = self.tokens(value, 5, Arity::AtLeast(4))?;
            let params = tokens.get(4).copied().unwrap_or_default();
            Ok(Bind::new(tokens[0], tokens[1], tokens[3], params)
                .with_flags(flags)
                .with_description(tokens[2]))
        } else {
            let tokens = self.tokens(value, 4, Arity::AtLeast(3))?;
            let params = tokens.get(3).copied().unwrap_or_default();
            Ok(Bind::new(tokens[0], tokens[1], tokens[2], params).with_flags(flags))
        }
    }

    fn bezier(&self, value: &str) -> Result<BezierCurve, SyntaxError> {
        let tokens = self.tokens(value, usize::MAX, Arity::Exactly(5))?;
        let mut points = [0.0; 4];
        for (slot, raw) in points.iter_mut().zip(&tokens[1..]) {
            *slot = self.float("control point", raw)?;
        }
        Ok(BezierCurve {
            name: tokens[0].to_string(),
            points,
        })
    }

    fn animation(&self, value: &str) -> Result<Animation, SyntaxError> {
        let tokens = self.tokens(value, 5, Arity::AtLeast(4))?;
        let enabled = match tokens[1] {
            "1" | "true" => true,
            "0" | "false" => false,
            other => return Err(self.invalid(format!("on/off value '{other}' must be 0 or 1"))),
        };
        let speed = self.float("speed", tokens[2])?;
        if speed < 0.0 {
            return Err(self.invalid(format!("speed '{}' must not be negative", tokens[2])));
        }
        Ok(Animation {
            name: tokens[0].to_string(),
            enabled,
            speed,
            curve: tokens[3].to_string(),
            style: tokens.get(4).map(ToString::to_string),
        })
    }
}
