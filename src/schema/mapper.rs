//! Maps a parsed [`Document`] onto a typed [`Config`].

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::lang::{Block, Directive, Document};
use crate::model::{Config, RawSection};

use super::coerce::coerce;
use super::error::MapError;

/// Mapper policy switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Unknown keys and sections are fatal.
    pub strict: bool,
    /// In lenient mode, keep unknown sections instead of discarding them.
    pub preserve_unknown: bool,
}

/// Mapper output: the typed model plus every non-fatal finding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapped {
    pub config: Config,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds a typed [`Config`] from a parsed document.
///
/// Starts from [`Config::default`], so absent keys keep their defaults.
/// Diagnostics come back in source line order.
///
/// # Errors
///
/// In strict mode, returns [`MapError`] for the first unknown section or key.
pub fn map_document(doc: &Document, options: MapOptions) -> Result<Mapped, MapError> {
    let mut mapper = Mapper {
        options,
        out: Mapped::default(),
    };

    for (name, block) in &doc.sections {
        mapper.section(&mut vec![name.as_str()], block)?;
    }

    for directive in &doc.directives {
        mapper.directive(directive.clone());
    }

    for assignment in &doc.top_level {
        tracing::warn!(
            line = assignment.line,
            key = assignment.key.as_str(),
            "ignoring top-level assignment"
        );
        mapper.out.diagnostics.push(Diagnostic::at(
            assignment.line,
            DiagnosticKind::UnhandledAssignment {
                key: assignment.key.clone(),
            },
        ));
    }

    for stray in &doc.stray {
        mapper.out.diagnostics.push(Diagnostic::at(
            stray.line,
            DiagnosticKind::UnrecognizedLine {
                text: stray.text.clone(),
            },
        ));
    }

    mapper.out.diagnostics.sort_by_key(|d| d.line);
    Ok(mapper.out)
}

struct Mapper {
    options: MapOptions,
    out: Mapped,
}

impl Mapper {
    fn section<'a>(&mut self, path: &mut Vec<&'a str>, block: &'a Block) -> Result<(), MapError> {
        let Some(schema) = super::find(path.as_slice()) else {
            return self.unknown_section(path, block);
        };

        for (key, entry) in &block.values {
            let Some(field) = schema.field(key) else {
                if self.options.strict {
                    return Err(MapError::UnknownKey {
                        section: schema.id(),
                        key: key.clone(),
                        line: entry.line,
                    });
                }
                tracing::debug!(section = %schema.id(), key = key.as_str(), "dropping unknown key");
                continue;
            };

            match coerce(field.kind, &entry.value) {
                Ok(value) => {
                    field.write(&mut self.out.config, value);
                }
                Err(err) => {
                    tracing::warn!(line = entry.line, section = %schema.id(), key = key.as_str(), "{err}");
                    self.out.diagnostics.push(Diagnostic::at(
                        entry.line,
                        DiagnosticKind::TypeCoercion {
                            section: schema.id(),
                            key: key.clone(),
                            value: err.value,
                            expected: err.expected,
                        },
                    ));
                }
            }
        }

        for (name, child) in &block.children {
            path.push(name);
            let result = self.section(path, child);
            path.pop();
            result?;
        }
        Ok(())
    }

    fn unknown_section(&mut self, path: &[&str], block: &Block) -> Result<(), MapError> {
        let name = path.join(".");
        if self.options.strict {
            return Err(MapError::UnknownSection {
                name,
                line: block.line,
            });
        }

        let preserved = self.options.preserve_unknown;
        if preserved {
            let (parent, own) = path.split_at(path.len() - 1);
            let mut raw = to_raw(own[0], block);
            raw.parent = parent.iter().map(ToString::to_string).collect();
            self.out.config.preserved.push(raw);
        }

        tracing::warn!(line = block.line, section = name.as_str(), preserved, "unknown section");
        self.out.diagnostics.push(Diagnostic::at(
            block.line,
            DiagnosticKind::UnknownSection { name, preserved },
        ));
        Ok(())
    }

    fn directive(&mut self, directive: Directive) {
        let config = &mut self.out.config;
        match directive {
            Directive::Monitor(m) => config.monitors.push(m),
            Directive::Workspace(w) => config.workspaces.push(w),
            Directive::WindowRule(r) => config.window_rules.push(r),
            Directive::LayerRule(r) => config.layer_rules.push(r),
            Directive::Bind(b) => config.binds.push(b),
            Directive::Bezier(c) => config.curves.push(c),
            Directive::Animation(a) => config.animation_entries.push(a),
        }
    }
}

fn to_raw(name: &str, block: &Block) -> RawSection {
    RawSection {
        parent: Vec::new(),
        name: name.to_string(),
        values: block
            .values
            .iter()
            .map(|(k, e)| (k.clone(), e.value.clone()))
            .collect(),
        children: block
            .children
            .iter()
            .map(|(n, b)| to_raw(n, b))
            .collect(),
    }
}
