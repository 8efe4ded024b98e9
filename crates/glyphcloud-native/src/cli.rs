// Command-line configuration for the desktop viewer.

use clap::Parser;
use glyphcloud_core::constants::DEFAULT_DENSITY;
use glyphcloud_core::{
    default_custom_palette, parse_symbols, ConfigError, Palette, PaletteChoice, Rgb, SceneConfig,
    ShapeKind, Smoothing,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glyphcloud",
    version,
    about = "Symbol particle clouds that morph between parametric shapes"
)]
pub struct Args {
    /// Starting shape: mobius, star, klein, incense, crown, dna or relief.
    /// Anything else shows a plain cube scatter.
    #[arg(long, default_value = "mobius")]
    pub shape: String,

    /// Total particle budget, split evenly across the four symbols (500-2000).
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: usize,

    /// Preset theme: dunhuang, klein-blue, morandi, mondrian, rococo, matisse, memphis.
    #[arg(long, default_value = "dunhuang")]
    pub theme: String,

    /// Four comma-separated symbols, at most two characters each.
    #[arg(long, default_value = "I,I,I,I")]
    pub symbols: String,

    /// Custom backdrop color; switches to a custom palette.
    #[arg(long)]
    pub bg: Option<String>,

    /// Custom particle colors, comma-separated; switches to a custom palette.
    #[arg(long, value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Seed for reproducible clouds.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scale smoothing by frame time instead of a fixed per-frame factor.
    #[arg(long)]
    pub time_scaled: bool,

    /// Reject out-of-range values instead of clamping them.
    #[arg(long)]
    pub strict: bool,
}

impl Args {
    pub fn to_config(&self) -> Result<SceneConfig, ConfigError> {
        let shape = match self.shape.parse::<ShapeKind>() {
            Ok(shape) => Some(shape),
            Err(_) => {
                log::warn!("[cli] unknown shape {:?}, using cube scatter", self.shape);
                None
            }
        };

        let custom = if self.bg.is_some() || !self.colors.is_empty() {
            let defaults = default_custom_palette();
            let background = match &self.bg {
                Some(hex) => Rgb::from_hex(hex)?,
                None => defaults.background,
            };
            let colors = if self.colors.is_empty() {
                defaults.colors().to_vec()
            } else {
                self.colors
                    .iter()
                    .map(|c| Rgb::from_hex(c))
                    .collect::<Result<Vec<_>, _>>()?
            };
            Some(Palette::new(background, colors)?)
        } else {
            None
        };

        let smoothing = if self.time_scaled {
            Smoothing::time_scaled()
        } else {
            Smoothing::default()
        };

        let mut config = SceneConfig {
            shape,
            density: self.density,
            symbols: parse_symbols(&self.symbols)?,
            smoothing,
            seed: self.seed,
            ..SceneConfig::default()
        };
        config = match custom {
            Some(palette) => config.with_custom_palette(palette),
            None => config.with_palette(PaletteChoice::Preset(self.theme.parse()?)),
        };
        match config.validate() {
            Err(e) if self.strict => return Err(e),
            Err(e) => log::warn!("[cli] {e}; clamping"),
            Ok(()) => {}
        }
        Ok(config.with_density(self.density))
    }
}
