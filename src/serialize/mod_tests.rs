//! Tests for the serializer.

use super::*;
use crate::lang::parse;
use crate::model::{LayerRule, WindowRule, Workspace};
use crate::schema::{MapOptions, map_document};

fn reparse(text: &str) -> Config {
    let options = MapOptions {
        strict: false,
        preserve_unknown: true,
    };
    map_document(&parse(text).unwrap(), options).unwrap().config
}

fn sample() -> Config {
    let mut config = Config::default();
    config.general.border_size = 2;
    config.general.gaps_in = 5;
    config.general.gaps_out = 10;
    config.general.layout = "master".to_string();
    config.general.active_border = "rgba(33ccffee) rgba(00ff99ee) 45deg".to_string();
    config.decoration.rounding = 10;
    config.decoration.blur_size = 3;
    config.decoration.opacity = 0.95;
    config.input.kb_variant = String::new();
    config.touchpad.natural_scroll = true;
    config.cursor.zoom_factor = 2.0;

    config.monitors.push(Monitor::new("eDP-1", "1920x1080", "0x0"));
    config.monitors.push(Monitor {
        name: "DP-2".to_string(),
        resolution: "2560x1440@144".to_string(),
        position: "1920x0".to_string(),
        scale: "1.25".to_string(),
        extra: vec!["transform".to_string(), "1".to_string()],
    });
    config.workspaces.push(Workspace {
        name: "1".to_string(),
        rules: vec!["monitor:DP-2".to_string(), "default:true".to_string()],
    });
    config.window_rules.push(WindowRule::new("float", "1", "class:pavucontrol"));
    config.layer_rules.push(LayerRule {
        rule: "blur".to_string(),
        value: "1".to_string(),
        target: "waybar".to_string(),
    });
    config.binds.push(Bind::new("SUPER", "Return", "exec", "kitty"));
    config.binds.push(Bind::new("SUPER", "Q", "killactive", ""));
    config.binds.push(
        Bind::new("SUPER", "E", "exec", "thunar")
            .with_flags("d")
            .with_description("File manager"),
    );
    config.binds.push(
        Bind::new("", "XF86AudioMute", "exec", "wpctl set-mute @DEFAULT_SINK@ toggle")
            .with_flags("l"),
    );
    config.curves.push(BezierCurve {
        name: "ease".to_string(),
        points: [0.25, 0.1, 0.25, 1.0],
    });
    config.animation_entries.push(Animation {
        name: "windows".to_string(),
        enabled: true,
        speed: 7.0,
        curve: "ease".to_string(),
        style: Some("slide".to_string()),
    });
    config.animation_entries.push(Animation {
        name: "fade".to_string(),
        enabled: false,
        speed: 3.5,
        curve: "default".to_string(),
        style: None,
    });
    config
}

mod round_trip {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(reparse(&serialize(&config)), config);
    }

    #[test]
    fn populated_config() {
        let config = sample();
        assert_eq!(reparse(&serialize(&config)), config);
    }

    #[test]
    fn serializing_twice_is_stable() {
        let once = serialize(&sample());
        let twice = serialize(&reparse(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn preserved_sections_come_back() {
        let text = "plugin {\n  hyprbars {\n    bar_height = 20\n  }\n}\ninput {\n  tablet {\n    output = DP-1\n  }\n}\n";
        let config = reparse(text);
        assert_eq!(config.preserved.len(), 2);

        let written = serialize(&config);
        assert_eq!(reparse(&written), config);
        assert!(written.contains("    bar_height = 20"));
    }
}

mod layout {
    use super::*;

    #[test]
    fn bind_line_without_description_flag() {
        let mut config = Config::default();
        config.binds.push(
            Bind::new("SUPER", "Return", "exec", "kitty").with_description("Launch terminal"),
        );

        let text = serialize(&config);
        assert!(text.contains("# Launch terminal\nbind = SUPER, Return, exec, kitty\n"));
    }

    #[test]
    fn described_bind_keeps_description_inline() {
        let bind = Bind::new("SUPER", "E", "exec", "thunar")
            .with_flags("d")
            .with_description("File manager");
        assert_eq!(render_bind(&bind), "bindd = SUPER, E, File manager, exec, thunar");
    }

    #[test]
    fn bind_without_params() {
        assert_eq!(
            render_bind(&Bind::new("SUPER", "Q", "killactive", "")),
            "bind = SUPER, Q, killactive"
        );
    }

    #[test]
    fn monitor_has_no_spaces() {
        assert_eq!(
            render_monitor(&Monitor::new("eDP-1", "1920x1080", "0x0")),
            "monitor=eDP-1,1920x1080,0x0,1"
        );
    }

    #[test]
    fn sections_use_two_space_indent() {
        let mut config = Config::default();
        config.general.border_size = 2;
        let text = serialize(&config);

        assert!(text.contains("general {\n  border_size = 2\n"));
        assert!(text.contains("input {\n"));
        assert!(text.contains("\n  touchpad {\n    disable_while_typing = true\n"));
        assert!(text.contains("decoration {\n  rounding = 0\n  blur = true\n"));
        assert!(text.contains("  active_opacity = 1.0\n"));
    }

    #[test]
    fn empty_string_has_no_trailing_space() {
        let text = serialize(&Config::default());
        assert!(text.contains("  kb_variant =\n"));
    }

    #[test]
    fn animation_lines_inside_block() {
        let text = serialize(&sample());
        let block_start = text.find("animations {").unwrap();
        let bezier = text.find("bezier = ease, 0.25, 0.1, 0.25, 1.0").unwrap();
        let animation = text.find("animation = fade, 0, 3.5, default").unwrap();
        assert!(block_start < bezier && bezier < animation);
    }
}
