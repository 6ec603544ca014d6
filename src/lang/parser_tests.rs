//! Tests for the block parser and directive decoding.

use super::*;
use crate::model::{Animation, BezierCurve, Bind, Monitor, WindowRule};

fn directives(text: &str) -> Vec<Directive> {
    parse(text).unwrap().directives
}

mod blocks {
    use super::*;

    #[test]
    fn simple_block() {
        let doc = parse("general {\n    border_size = 2\n    gaps_in = 5\n}\n").unwrap();

        let general = &doc.sections["general"];
        assert_eq!(general.line, 1);
        assert_eq!(general.get("border_size"), Some("2"));
        assert_eq!(general.get("gaps_in"), Some("5"));
        assert_eq!(general.values["gaps_in"].line, 3);
    }

    #[test]
    fn nested_block() {
        let doc = parse("input {\n  kb_layout = us\n  touchpad {\n    natural_scroll = true\n  }\n}").unwrap();

        let input = &doc.sections["input"];
        assert_eq!(input.get("kb_layout"), Some("us"));
        assert_eq!(
            input.children["touchpad"].get("natural_scroll"),
            Some("true")
        );
        assert!(!doc.sections.contains_key("touchpad"));
    }

    #[test]
    fn single_line_block() {
        let doc = parse("decoration { rounding = 10 }").unwrap();
        assert_eq!(doc.sections["decoration"].get("rounding"), Some("10"));
    }

    #[test]
    fn repeated_key_keeps_last() {
        let doc = parse("general {\ngaps_in = 5\ngaps_in = 8\n}").unwrap();
        let entry = &doc.sections["general"].values["gaps_in"];
        assert_eq!(entry.value, "8");
        assert_eq!(entry.line, 3);
    }

    #[test]
    fn repeated_block_merges() {
        let doc = parse("general {\ngaps_in = 5\nborder_size = 1\n}\ngeneral {\ngaps_in = 9\n}").unwrap();
        let general = &doc.sections["general"];
        assert_eq!(general.get("gaps_in"), Some("9"));
        assert_eq!(general.get("border_size"), Some("1"));
    }

    #[test]
    fn empty_value_is_kept() {
        let doc = parse("input {\nkb_variant =\n}").unwrap();
        assert_eq!(doc.sections["input"].get("kb_variant"), Some(""));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let doc = parse("# header\n\ngeneral {\n  # inside\n  gaps_in = 3\n}\n").unwrap();
        assert_eq!(doc.sections["general"].values.len(), 1);
        assert!(doc.stray.is_empty());
    }
}

mod brace_errors {
    use super::*;

    #[test]
    fn unmatched_close() {
        let err = parse("general {\n}\n}").unwrap_err();
        assert_eq!(err, SyntaxError::UnmatchedClose { line: 3 });
    }

    #[test]
    fn unclosed_block_reports_innermost() {
        let err = parse("input {\n  touchpad {\n  }\n  kb_layout = us\n").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnclosedBlock {
                name: "input".to_string(),
                line: 1
            }
        );

        let err = parse("input {\n  touchpad {\n").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnclosedBlock {
                name: "touchpad".to_string(),
                line: 2
            }
        );
    }

    #[test]
    fn block_without_name() {
        let err = parse("{\n}").unwrap_err();
        assert_eq!(err, SyntaxError::MissingBlockName { line: 1 });
    }
}

mod top_level {
    use super::*;

    #[test]
    fn lenient_collects_assignment() {
        let doc = parse("$mod = SUPER\n").unwrap();
        assert_eq!(
            doc.top_level,
            vec![TopLevelAssignment {
                key: "$mod".to_string(),
                value: "SUPER".to_string(),
                line: 1
            }]
        );
    }

    #[test]
    fn strict_rejects_assignment() {
        let err = parse_with("$mod = SUPER\n", ParseOptions { strict: true }).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::TopLevelAssignment {
                key: "$mod".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn stray_lines_are_collected() {
        let doc = parse("general {\n}\nsomething odd\n").unwrap();
        assert_eq!(
            doc.stray,
            vec![StrayLine {
                text: "something odd".to_string(),
                line: 3
            }]
        );
    }
}

mod monitor {
    use super::*;

    #[test]
    fn parses_four_fields() {
        assert_eq!(
            directives("monitor=DP-1,1920x1080@144,0x0,1"),
            vec![Directive::Monitor(
                Monitor::new("DP-1", "1920x1080@144", "0x0").with_scale("1")
            )]
        );
    }

    #[test]
    fn keeps_trailing_options() {
        let parsed = directives("monitor = eDP-1, preferred, auto, 1.5, transform, 1");
        let Directive::Monitor(monitor) = &parsed[0] else {
            panic!("expected monitor, got {parsed:?}");
        };
        assert_eq!(monitor.scale, "1.5");
        assert_eq!(monitor.extra, vec!["transform", "1"]);
    }

    #[test]
    fn too_few_tokens_is_an_error() {
        let err = parse("\nmonitor=DP-1,1920x1080").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::DirectiveArity {
                keyword: "monitor".to_string(),
                line: 2,
                expected: Arity::AtLeast(4),
                found: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "line 2: 'monitor' expects at least 4 comma-separated values, found 2"
        );
    }
}

mod bind {
    use super::*;

    #[test]
    fn plain_bind() {
        assert_eq!(
            directives("bind = SUPER, Return, exec, kitty"),
            vec![Directive::Bind(Bind::new("SUPER", "Return", "exec", "kitty"))]
        );
    }

    #[test]
    fn params_are_optional() {
        assert_eq!(
            directives("bind = SUPER, Q, killactive"),
            vec![Directive::Bind(Bind::new("SUPER", "Q", "killactive", ""))]
        );
    }

    #[test]
    fn params_keep_inner_commas() {
        assert_eq!(
            directives("bind = SUPER, R, exec, notify-send a, b"),
            vec![Directive::Bind(Bind::new(
                "SUPER",
                "R",
                "exec",
                "notify-send a, b"
            ))]
        );
    }

    #[test]
    fn flags_are_kept() {
        assert_eq!(
            directives("bindel = , XF86AudioRaiseVolume, exec, wpctl set-volume @DEFAULT_SINK@ 5%+"),
            vec![Directive::Bind(
                Bind::new(
                    "",
                    "XF86AudioRaiseVolume",
                    "exec",
                    "wpctl set-volume @DEFAULT_SINK@ 5%+"
                )
                .with_flags("el")
            )]
        );
    }

    #[test]
    fn described_bind() {
        assert_eq!(
            directives("bindd = SUPER, Return, Open terminal, exec, kitty"),
            vec![Directive::Bind(
                Bind::new("SUPER", "Return", "exec", "kitty")
                    .with_flags("d")
                    .with_description("Open terminal")
            )]
        );
    }

    #[test]
    fn too_few_tokens() {
        let err = parse("bind = SUPER, Q").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::DirectiveArity {
                expected: Arity::AtLeast(3),
                found: 2,
                ..
            }
        ));

        let err = parse("bindd = SUPER, Q, Close").unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::DirectiveArity {
                expected: Arity::AtLeast(4),
                found: 3,
                ..
            }
        ));
    }
}

mod other_directives {
    use super::*;

    #[test]
    fn window_rule_needs_exactly_three() {
        assert_eq!(
            directives("windowrule = float, 1, class:pavucontrol"),
            vec![Directive::WindowRule(WindowRule::new(
                "float",
                "1",
                "class:pavucontrol"
            ))]
        );
        assert!(matches!(
            parse("windowrule = float, class:pavucontrol").unwrap_err(),
            SyntaxError::DirectiveArity {
                expected: Arity::Exactly(3),
                found: 2,
                ..
            }
        ));
        assert!(parse("windowrule = a, b, c, d").is_err());
    }

    #[test]
    fn workspace_rules() {
        let parsed = directives("workspace = 1, monitor:DP-1, default:true");
        let Directive::Workspace(ws) = &parsed[0] else {
            panic!("expected workspace, got {parsed:?}");
        };
        assert_eq!(ws.name, "1");
        assert_eq!(ws.monitor(), Some("DP-1"));
        assert!(parse("workspace = 1").is_err());
    }

    #[test]
    fn bezier_inside_animations_block() {
        let doc = parse("animations {\n  enabled = true\n  bezier = ease, 0.25, 0.1, 0.25, 1\n}").unwrap();
        assert_eq!(
            doc.directives,
            vec![Directive::Bezier(BezierCurve {
                name: "ease".to_string(),
                points: [0.25, 0.1, 0.25, 1.0]
            })]
        );
        assert_eq!(doc.sections["animations"].get("enabled"), Some("true"));
        assert!(doc.sections["animations"].get("bezier").is_none());
    }

    #[test]
    fn bezier_rejects_bad_points() {
        assert!(matches!(
            parse("bezier = ease, 0, x, 1, 1").unwrap_err(),
            SyntaxError::InvalidDirective { .. }
        ));
        assert!(parse("bezier = ease, 0, 0, 1").is_err());
    }

    #[test]
    fn animation_with_and_without_style() {
        assert_eq!(
            directives("animation = windows, 1, 7, ease, slide\nanimation = fade, 0, 3.5, default"),
            vec![
                Directive::Animation(Animation {
                    name: "windows".to_string(),
                    enabled: true,
                    speed: 7.0,
                    curve: "ease".to_string(),
                    style: Some("slide".to_string())
                }),
                Directive::Animation(Animation {
                    name: "fade".to_string(),
                    enabled: false,
                    speed: 3.5,
                    curve: "default".to_string(),
                    style: None
                }),
            ]
        );
    }

    #[test]
    fn directive_may_close_its_block() {
        let doc = parse("animations {\n  enabled = true\n  animation = fade, 1, 7, default }\ngeneral {\n  gaps_in = 4\n}\n").unwrap();

        assert_eq!(doc.sections["animations"].get("enabled"), Some("true"));
        assert_eq!(doc.sections["general"].get("gaps_in"), Some("4"));
        assert_eq!(
            doc.directives,
            vec![Directive::Animation(Animation {
                name: "fade".to_string(),
                enabled: true,
                speed: 7.0,
                curve: "default".to_string(),
                style: None
            })]
        );
    }

    #[test]
    fn animation_rejects_bad_switch_and_speed() {
        assert!(parse("animation = windows, maybe, 7, ease").is_err());
        assert!(parse("animation = windows, 1, -2, ease").is_err());
        assert!(parse("animation = windows, 1, 7").is_err());
    }

    #[test]
    fn directives_keep_source_order() {
        let parsed = directives("bind = SUPER, A, exec, a\nmonitor=,preferred,auto,1\nbind = SUPER, B, exec, b");
        assert!(matches!(parsed[0], Directive::Bind(_)));
        assert!(matches!(parsed[1], Directive::Monitor(_)));
        assert!(matches!(parsed[2], Directive::Bind(_)));
    }
}
