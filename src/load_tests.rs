//! Tests for the load operation.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use super::*;
use crate::persist::Target;
use crate::time::FixedClock;
use crate::validate::ValidationReason;

const SAMPLE: &str = include_str!("../config/testdata/hyprland.conf");

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap(),
    )
}

mod text {
    use super::*;

    #[test]
    fn sample_loads_cleanly() {
        let loaded = load_str(SAMPLE, LoadOptions::default()).unwrap();

        assert!(loaded.diagnostics.is_empty(), "{:?}", loaded.diagnostics);
        assert_eq!(loaded.config.general.border_size, 2);
        assert_eq!(loaded.config.monitors.len(), 2);
        assert_eq!(loaded.config.binds.len(), 8);
        assert_eq!(loaded.config.binds[6].description, "Toggle fullscreen");
        assert!(loaded.config.touchpad.natural_scroll);
        assert_eq!(loaded.config.curves[0].name, "myBezier");
        assert_eq!(loaded.config.animation_entries.len(), 3);
    }

    #[test]
    fn unclosed_block_is_fatal() {
        let err = load_str("general {\n  gaps_in = 5\n", LoadOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Syntax(SyntaxError::UnclosedBlock { line: 1, .. })
        ));
    }

    #[test]
    fn short_monitor_is_fatal() {
        let err = load_str("monitor=eDP-1", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Syntax(SyntaxError::DirectiveArity { .. })));
    }

    #[test]
    fn diagnostics_are_ordered_and_non_fatal() {
        let text = "general {\n  border_size = thick\n  gaps_in = 5000\n}\n$mod = SUPER\n";
        let loaded = load_str(text, LoadOptions::default()).unwrap();

        let kinds: Vec<&DiagnosticKind> = loaded.diagnostics.iter().map(|d| &d.kind).collect();
        assert!(matches!(kinds[0], DiagnosticKind::TypeCoercion { .. }));
        assert!(matches!(kinds[1], DiagnosticKind::UnhandledAssignment { .. }));
        assert!(matches!(
            kinds[2],
            DiagnosticKind::Validation(e) if e.reason == ValidationReason::OutOfRange {
                min: "0".to_string(),
                max: "1000".to_string()
            }
        ));
        assert!(loaded.has_validation_errors());
        assert_eq!(loaded.diagnostics[2].line, None);
        assert_eq!(loaded.config.general.border_size, 1);
    }

    #[test]
    fn mapper_findings_follow_source_lines() {
        let text = "$mod = SUPER\ngeneral {\n  gaps_in = 5000\n  border_size = thick\n}\nstray line\n";
        let loaded = load_str(text, LoadOptions::default()).unwrap();

        let lines: Vec<Option<usize>> = loaded.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![Some(1), Some(4), Some(6), None]);
        assert!(matches!(
            loaded.diagnostics[3].kind,
            DiagnosticKind::Validation(_)
        ));
    }

    #[test]
    fn strict_mode_rejects_unknowns() {
        let strict = LoadOptions {
            strict: true,
            preserve_unknown: false,
        };
        assert!(matches!(
            load_str("general {\n  wobble = 1\n}", strict).unwrap_err(),
            LoadError::Map(MapError::UnknownKey { .. })
        ));
        assert!(matches!(
            load_str("$mod = SUPER", strict).unwrap_err(),
            LoadError::Syntax(SyntaxError::TopLevelAssignment { .. })
        ));
    }
}

mod file {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let target = Target::at(dir.path().join("absent.conf"), true);

        let err = load(&target, LoadOptions::default(), &clock()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn backs_up_before_parsing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hyprland.conf");
        fs::write(&path, SAMPLE).unwrap();

        let loaded = load(&Target::at(&path, true), LoadOptions::default(), &clock()).unwrap();

        let backup = loaded.backup.unwrap();
        assert_eq!(backup, dir.path().join("hyprland.conf.20240102_030405.backup"));
        assert_eq!(fs::read_to_string(backup).unwrap(), SAMPLE);
    }

    #[test]
    fn backup_happens_even_when_parse_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hyprland.conf");
        fs::write(&path, "general {\n").unwrap();

        let err = load(&Target::at(&path, true), LoadOptions::default(), &clock()).unwrap_err();

        assert!(matches!(err, LoadError::Syntax(_)));
        assert!(dir.path().join("hyprland.conf.20240102_030405.backup").exists());
    }

    #[test]
    fn no_backup_when_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hyprland.conf");
        fs::write(&path, SAMPLE).unwrap();

        let loaded = load(&Target::at(&path, false), LoadOptions::default(), &clock()).unwrap();

        assert_eq!(loaded.backup, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
