//! Tests for the schema mapper and descriptor lookups.

use super::*;
use crate::diagnostic::DiagnosticKind;
use crate::lang::parse;
use crate::model::{Bind, Config, Monitor, Value};

fn map(text: &str) -> Mapped {
    map_with(text, MapOptions::default())
}

fn map_with(text: &str, options: MapOptions) -> Mapped {
    map_document(&parse(text).unwrap(), options).unwrap()
}

fn map_err(text: &str, options: MapOptions) -> MapError {
    map_document(&parse(text).unwrap(), options).unwrap_err()
}

const STRICT: MapOptions = MapOptions {
    strict: true,
    preserve_unknown: false,
};

const PRESERVE: MapOptions = MapOptions {
    strict: false,
    preserve_unknown: true,
};

mod sections {
    use super::*;

    #[test]
    fn general_block() {
        let mapped = map("general {\nborder_size=2\ngaps_in=5\ngaps_out=10\nlayout=dwindle\n}");
        let general = &mapped.config.general;

        assert_eq!(general.border_size, 2);
        assert_eq!(general.gaps_in, 5);
        assert_eq!(general.gaps_out, 10);
        assert_eq!(general.layout, "dwindle");
        assert!(mapped.diagnostics.is_empty());
    }

    #[test]
    fn decoration_block() {
        let mapped = map("decoration {\nrounding=10\nblur=true\nblur_size=3\nactive_opacity=0.95\n}");
        let decoration = &mapped.config.decoration;

        assert_eq!(decoration.rounding, 10);
        assert!(decoration.blur_enabled);
        assert_eq!(decoration.blur_size, 3);
        assert!((decoration.opacity - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_keys_keep_defaults() {
        let mapped = map("general {\ngaps_in = 7\n}");
        let defaults = Config::default();

        assert_eq!(mapped.config.general.gaps_in, 7);
        assert_eq!(mapped.config.general.gaps_out, defaults.general.gaps_out);
        assert_eq!(mapped.config.decoration, defaults.decoration);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(map("").config, Config::default());
    }

    #[test]
    fn touchpad_nests_inside_input() {
        let mapped = map("input {\n  kb_layout = de\n  touchpad {\n    tap-to-click = false\n    natural_scroll = true\n  }\n}");

        assert_eq!(mapped.config.input.kb_layout, "de");
        assert!(!mapped.config.touchpad.tap_to_click);
        assert!(mapped.config.touchpad.natural_scroll);
        assert!(!mapped.config.input.natural_scroll);
    }

    #[test]
    fn root_level_touchpad_is_unknown() {
        let mapped = map("touchpad {\nnatural_scroll = true\n}");
        assert!(!mapped.config.touchpad.natural_scroll);
        assert!(matches!(
            &mapped.diagnostics[0].kind,
            DiagnosticKind::UnknownSection { name, preserved: false } if name == "touchpad"
        ));
    }
}

mod coercion {
    use super::*;

    #[test]
    fn bad_value_keeps_default_and_reports() {
        let mapped = map("general {\nborder_size = thick\ngaps_in = 3\n}");

        assert_eq!(mapped.config.general.border_size, 1);
        assert_eq!(mapped.config.general.gaps_in, 3);
        assert_eq!(mapped.diagnostics.len(), 1);

        let diagnostic = &mapped.diagnostics[0];
        assert_eq!(diagnostic.line, Some(2));
        assert_eq!(
            diagnostic.kind,
            DiagnosticKind::TypeCoercion {
                section: "general".to_string(),
                key: "border_size".to_string(),
                value: "thick".to_string(),
                expected: "integer".to_string(),
            }
        );
    }

    #[test]
    fn boolean_parse_is_case_sensitive() {
        let mapped = map("decoration {\nblur = True\n}");
        assert!(mapped.config.decoration.blur_enabled);
        assert_eq!(mapped.diagnostics.len(), 1);
    }

    #[test]
    fn enum_value_must_match() {
        let mapped = map("general {\nlayout = spiral\n}");
        assert_eq!(mapped.config.general.layout, "dwindle");
        assert!(matches!(
            &mapped.diagnostics[0].kind,
            DiagnosticKind::TypeCoercion { expected, .. } if expected == "one of [dwindle, master]"
        ));
    }

    #[test]
    fn out_of_range_value_is_mapped() {
        let mapped = map("general {\nborder_size = 5000\n}");
        assert_eq!(mapped.config.general.border_size, 5000);
        assert!(mapped.diagnostics.is_empty());
    }
}

mod unknowns {
    use super::*;

    #[test]
    fn lenient_drops_unknown_key() {
        let mapped = map("general {\nno_such_key = 1\ngaps_in = 2\n}");
        assert_eq!(mapped.config.general.gaps_in, 2);
        assert!(mapped.diagnostics.is_empty());
    }

    #[test]
    fn strict_rejects_unknown_key() {
        let err = map_err("general {\nno_such_key = 1\n}", STRICT);
        assert_eq!(
            err,
            MapError::UnknownKey {
                section: "general".to_string(),
                key: "no_such_key".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn strict_rejects_unknown_section() {
        let err = map_err("\nplugin {\nfoo = bar\n}", STRICT);
        assert_eq!(
            err,
            MapError::UnknownSection {
                name: "plugin".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn lenient_discards_unknown_section() {
        let mapped = map("plugin {\nfoo = bar\n}");
        assert!(mapped.config.preserved.is_empty());
        assert_eq!(
            mapped.diagnostics[0].kind,
            DiagnosticKind::UnknownSection {
                name: "plugin".to_string(),
                preserved: false,
            }
        );
    }

    #[test]
    fn preserve_keeps_unknown_section() {
        let mapped = map_with("plugin {\nfoo = bar\n  inner {\n    x = 1\n  }\n}", PRESERVE);

        let raw = &mapped.config.preserved[0];
        assert!(raw.parent.is_empty());
        assert_eq!(raw.name, "plugin");
        assert_eq!(raw.values["foo"], "bar");
        assert_eq!(raw.children[0].name, "inner");
        assert_eq!(raw.children[0].values["x"], "1");
    }

    #[test]
    fn preserve_records_parent_path() {
        let mapped = map_with("input {\n  tablet {\n    output = DP-1\n  }\n}", PRESERVE);

        let raw = &mapped.config.preserved[0];
        assert_eq!(raw.parent, vec!["input".to_string()]);
        assert_eq!(raw.name, "tablet");
        assert!(matches!(
            &mapped.diagnostics[0].kind,
            DiagnosticKind::UnknownSection { name, preserved: true } if name == "input.tablet"
        ));
    }
}

mod top_level {
    use super::*;

    #[test]
    fn directives_fill_entity_lists() {
        let mapped = map("monitor=eDP-1,1920x1080,0x0,1\nbind = SUPER, Return, exec, kitty\n");

        assert_eq!(
            mapped.config.monitors,
            vec![Monitor::new("eDP-1", "1920x1080", "0x0")]
        );
        assert_eq!(
            mapped.config.binds,
            vec![Bind::new("SUPER", "Return", "exec", "kitty")]
        );
    }

    #[test]
    fn top_level_assignment_becomes_diagnostic() {
        let mapped = map("$mod = SUPER\n");
        assert_eq!(
            mapped.diagnostics[0].kind,
            DiagnosticKind::UnhandledAssignment {
                key: "$mod".to_string()
            }
        );
    }

    #[test]
    fn stray_line_becomes_diagnostic() {
        let mapped = map("exec-once waybar\n");
        assert_eq!(mapped.diagnostics[0].line, Some(1));
        assert!(matches!(
            mapped.diagnostics[0].kind,
            DiagnosticKind::UnrecognizedLine { .. }
        ));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn find_by_path() {
        assert_eq!(find(&["input", "touchpad"]).unwrap().title, "Touchpad");
        assert!(find(&["touchpad"]).is_none());
    }

    #[test]
    fn lookup_by_id_name_or_title() {
        assert_eq!(lookup("input.touchpad").unwrap().name(), "touchpad");
        assert_eq!(lookup("touchpad").unwrap().id(), "input.touchpad");
        assert_eq!(lookup("OpenGL").unwrap().name(), "opengl");
        assert_eq!(lookup("opengl").unwrap().title, "OpenGL");
        assert!(lookup("plugin").is_none());
    }

    #[test]
    fn field_reads_and_writes() {
        let (schema, descriptor) = field("decoration", "active_opacity").unwrap();
        assert_eq!(schema.name(), "decoration");

        let mut config = Config::default();
        assert!(descriptor.write(&mut config, Value::Float(0.8)));
        assert_eq!(descriptor.read(&config), Value::Float(0.8));
        assert!(!descriptor.write(&mut config, Value::Bool(true)));
        assert_eq!(descriptor.default_value(), Value::Float(1.0));
    }

    #[test]
    fn keys_are_unique_per_section() {
        for schema in sections() {
            for (i, a) in schema.fields.iter().enumerate() {
                assert!(
                    schema.fields[i + 1..].iter().all(|b| b.key != a.key),
                    "duplicate key {} in {}",
                    a.key,
                    schema.id()
                );
            }
        }
    }
}
