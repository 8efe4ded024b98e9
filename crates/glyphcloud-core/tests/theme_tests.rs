// Host-side tests for palettes, color parsing and the frame counter.

use glyphcloud_core::{
    default_custom_palette, ConfigError, FpsCounter, Palette, PaletteChoice, Rgb, ThemeName,
};
use instant::Instant;
use std::time::Duration;

#[test]
fn hex_colors_parse_in_long_and_short_form() {
    assert_eq!(Rgb::from_hex("#e45e32"), Ok(Rgb::new(0xe4, 0x5e, 0x32)));
    assert_eq!(Rgb::from_hex("E45E32"), Ok(Rgb::new(0xe4, 0x5e, 0x32)));
    assert_eq!(Rgb::from_hex("#fff"), Ok(Rgb::new(255, 255, 255)));
    assert_eq!("#0a0".parse::<Rgb>(), Ok(Rgb::new(0, 0xaa, 0)));
    assert_eq!(Rgb::new(0x00, 0x2f, 0xa7).to_hex(), "#002fa7");
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#", "#12345", "#gggggg", "#1234567", "+123456"] {
        assert_eq!(
            Rgb::from_hex(bad),
            Err(ConfigError::InvalidColor(bad.to_string())),
            "{bad:?}"
        );
    }
}

#[test]
fn every_preset_has_four_colors_and_round_trips_its_name() {
    for name in ThemeName::ALL {
        let theme = name.theme();
        assert_eq!(theme.name, name);
        assert_eq!(theme.colors.len(), 4);
        assert_eq!(name.label().parse::<ThemeName>(), Ok(name));
    }
    assert_eq!("klein-blue".parse::<ThemeName>(), Ok(ThemeName::KleinBlue));
    assert!("bauhaus".parse::<ThemeName>().is_err());
}

#[test]
fn dunhuang_matches_its_palette() {
    let theme = ThemeName::Dunhuang.theme();
    assert_eq!(theme.background.to_hex(), "#2c1e18");
    let hex: Vec<String> = theme.colors.iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, ["#e45e32", "#2486b9", "#f2cf5b", "#e8b2a7"]);
}

#[test]
fn only_mondrian_has_a_light_backdrop() {
    for name in ThemeName::ALL {
        let palette = Palette::from(name.theme());
        assert_eq!(palette.is_light(), name == ThemeName::Mondrian, "{name}");
    }
}

#[test]
fn palette_colors_wrap_by_group_index() {
    let palette = Palette::new(Rgb::default(), vec![Rgb::new(1, 0, 0), Rgb::new(0, 1, 0)]).unwrap();
    assert_eq!(palette.color_for(0), Rgb::new(1, 0, 0));
    assert_eq!(palette.color_for(3), Rgb::new(0, 1, 0));
    assert_eq!(
        Palette::new(Rgb::default(), vec![]),
        Err(ConfigError::EmptyPalette)
    );
}

#[test]
fn palette_choice_cycles_presets_then_custom() {
    let saved = default_custom_palette();
    let first = PaletteChoice::Preset(ThemeName::Dunhuang);
    assert_eq!(first.cycle(&saved), PaletteChoice::Preset(ThemeName::KleinBlue));
    let last = PaletteChoice::Preset(ThemeName::Memphis);
    assert_eq!(last.cycle(&saved), PaletteChoice::Custom(saved.clone()));
    let custom = PaletteChoice::Custom(saved.clone());
    assert_eq!(custom.label(), "Custom");
    assert_eq!(custom.resolve().colors().len(), 4);
    assert_eq!(custom.cycle(&saved), PaletteChoice::Preset(ThemeName::Dunhuang));
}

#[test]
fn setting_a_color_past_the_end_pads_with_the_last_color() {
    let mut palette = Palette::new(Rgb::default(), vec![Rgb::new(1, 2, 3)]).unwrap();
    palette.set_color(2, Rgb::new(9, 9, 9));
    assert_eq!(
        palette.colors(),
        &[Rgb::new(1, 2, 3), Rgb::new(1, 2, 3), Rgb::new(9, 9, 9)]
    );
    palette.set_color(0, Rgb::new(7, 7, 7));
    assert_eq!(palette.color_for(0), Rgb::new(7, 7, 7));
}

#[test]
fn linear_conversion_keeps_endpoints() {
    assert_eq!(Rgb::new(0, 0, 0).to_linear(), [0.0, 0.0, 0.0]);
    let [r, g, b] = Rgb::new(255, 255, 255).to_linear();
    assert!((r - 1.0).abs() < 1e-6 && (g - 1.0).abs() < 1e-6 && (b - 1.0).abs() < 1e-6);
    let [mid, _, _] = Rgb::new(128, 0, 0).to_linear();
    assert!(mid > 0.2 && mid < 0.23);
}

#[test]
fn fps_counter_reports_once_per_second() {
    let start = Instant::now();
    let mut fps = FpsCounter::new(start);
    let frame = Duration::from_micros(16_667);
    let mut readings = Vec::new();
    for i in 1..=100u32 {
        if let Some(v) = fps.record(start + frame * i) {
            readings.push(v);
        }
    }
    assert_eq!(readings.len(), 1);
    assert!((59..=61).contains(&readings[0]), "{readings:?}");
    assert_eq!(fps.fps(), readings[0]);
}
