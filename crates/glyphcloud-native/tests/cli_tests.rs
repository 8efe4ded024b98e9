// Host-side tests for command-line parsing into a scene configuration.

#![allow(dead_code)]

mod cli {
    include!("../src/cli.rs");
}

use clap::Parser;
use cli::Args;
use glyphcloud_core::{
    default_custom_palette, ConfigError, PaletteChoice, Rgb, ShapeKind, Smoothing, ThemeName,
};

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["glyphcloud"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn defaults_match_the_initial_scene() {
    let config = parse(&[]).to_config().unwrap();
    assert_eq!(config.shape, Some(ShapeKind::Mobius));
    assert_eq!(config.density, 1200);
    assert_eq!(config.total(), 1200);
    assert_eq!(config.palette, PaletteChoice::Preset(ThemeName::Dunhuang));
    assert!(config.symbols.iter().all(|s| s == "I"));
    assert_eq!(config.smoothing, Smoothing::default());
    assert_eq!(config.seed, None);
}

#[test]
fn flags_fill_in_the_config() {
    let config = parse(&[
        "--shape",
        "dna",
        "--density",
        "800",
        "--theme",
        "klein-blue",
        "--symbols",
        "A,BCD,福,★",
        "--seed",
        "7",
        "--time-scaled",
    ])
    .to_config()
    .unwrap();
    assert_eq!(config.shape, Some(ShapeKind::Dna));
    assert_eq!(config.density, 800);
    assert_eq!(config.palette, PaletteChoice::Preset(ThemeName::KleinBlue));
    assert_eq!(config.symbols, ["A", "BC", "福", "★"].map(String::from));
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.smoothing, Smoothing::time_scaled());
}

#[test]
fn unknown_shape_falls_back_to_scatter() {
    let config = parse(&["--shape", "teapot"]).to_config().unwrap();
    assert_eq!(config.shape, None);
}

#[test]
fn density_is_clamped_to_the_slider_range() {
    assert_eq!(parse(&["--density", "20"]).to_config().unwrap().density, 500);
    assert_eq!(parse(&["--density", "9999"]).to_config().unwrap().density, 2000);
    assert_eq!(parse(&["--density", "1249"]).to_config().unwrap().density, 1200);
}

#[test]
fn strict_mode_rejects_out_of_range_density() {
    assert_eq!(
        parse(&["--strict", "--density", "20"]).to_config(),
        Err(ConfigError::DensityOutOfRange {
            density: 20,
            min: 500,
            max: 2000
        })
    );
    let config = parse(&["--strict", "--density", "1500"]).to_config().unwrap();
    assert_eq!(config.density, 1500);
}

#[test]
fn custom_colors_build_a_custom_palette() {
    let config = parse(&["--bg", "#101010", "--colors", "#f00,#0f0"])
        .to_config()
        .unwrap();
    let PaletteChoice::Custom(palette) = &config.palette else {
        panic!("expected a custom palette, got {:?}", config.palette);
    };
    assert_eq!(palette.background, Rgb::new(0x10, 0x10, 0x10));
    assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]);
    assert_eq!(&config.custom, palette);
}

#[test]
fn preset_start_keeps_the_default_custom_palette_for_later() {
    let config = parse(&["--theme", "memphis"]).to_config().unwrap();
    assert_eq!(config.palette, PaletteChoice::Preset(ThemeName::Memphis));
    assert_eq!(config.custom, default_custom_palette());
    assert_eq!(config.next_palette(), PaletteChoice::Custom(default_custom_palette()));
}

#[test]
fn background_alone_keeps_default_custom_colors() {
    let config = parse(&["--bg", "#222"]).to_config().unwrap();
    let palette = config.palette.resolve();
    assert_eq!(palette.background, Rgb::new(0x22, 0x22, 0x22));
    assert_eq!(palette.colors().len(), 4);
    assert_eq!(palette.colors()[0], Rgb::new(255, 255, 255));
}

#[test]
fn bad_values_surface_config_errors() {
    assert_eq!(
        parse(&["--theme", "bauhaus"]).to_config(),
        Err(ConfigError::UnknownTheme("bauhaus".into()))
    );
    assert_eq!(
        parse(&["--colors", "#12"]).to_config(),
        Err(ConfigError::InvalidColor("#12".into()))
    );
    assert_eq!(
        parse(&["--symbols", "A,B"]).to_config(),
        Err(ConfigError::SymbolCount {
            expected: 4,
            found: 2
        })
    );
}
