use crate::animator::Smoothing;
use crate::constants::{
    DEFAULT_DENSITY, DEFAULT_SYMBOL, DENSITY_MAX, DENSITY_MIN, DENSITY_STEP, MAX_SYMBOL_CHARS,
    SYMBOL_GROUPS,
};
use crate::error::ConfigError;
use crate::shape::ShapeKind;
use crate::theme::{default_custom_palette, Palette, PaletteChoice};

/// Everything the presentation layer can change about the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// `None` renders the fallback cube scatter.
    pub shape: Option<ShapeKind>,
    /// Total particle budget before splitting into symbol groups.
    pub density: usize,
    pub symbols: [String; SYMBOL_GROUPS],
    pub palette: PaletteChoice,
    /// The user's custom palette, kept while a preset is showing so the
    /// theme cycle can come back to it.
    pub custom: Palette,
    pub smoothing: Smoothing,
    /// Fixed seed for reproducible runs; only read when a field is created.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: Some(ShapeKind::Mobius),
            density: DEFAULT_DENSITY,
            symbols: std::array::from_fn(|_| DEFAULT_SYMBOL.to_string()),
            palette: PaletteChoice::default(),
            custom: default_custom_palette(),
            smoothing: Smoothing::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Particles per symbol group. The remainder of an uneven split is dropped.
    #[inline]
    pub fn per_group(&self) -> usize {
        self.density / SYMBOL_GROUPS
    }

    /// Particles actually drawn.
    #[inline]
    pub fn total(&self) -> usize {
        self.per_group() * SYMBOL_GROUPS
    }

    pub fn with_shape(mut self, shape: Option<ShapeKind>) -> Self {
        self.shape = shape;
        self
    }

    /// Set the density, clamped and snapped to the slider grid.
    pub fn with_density(mut self, density: usize) -> Self {
        let snapped = clamp_density(density);
        if snapped != density {
            log::info!("[config] density {density} adjusted to {snapped}");
        }
        self.density = snapped;
        self
    }

    pub fn with_palette(mut self, palette: PaletteChoice) -> Self {
        self.palette = palette;
        self
    }

    /// Remember `palette` as the custom palette and show it.
    pub fn with_custom_palette(mut self, palette: Palette) -> Self {
        self.palette = PaletteChoice::Custom(palette.clone());
        self.custom = palette;
        self
    }

    /// The palette the theme control moves to next.
    pub fn next_palette(&self) -> PaletteChoice {
        self.palette.cycle(&self.custom)
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_symbols(mut self, symbols: [&str; SYMBOL_GROUPS]) -> Self {
        for (i, s) in symbols.into_iter().enumerate() {
            self.set_symbol(i, s);
        }
        self
    }

    /// Replace one symbol, keeping at most [`MAX_SYMBOL_CHARS`] characters.
    /// Out-of-range indices are ignored.
    pub fn set_symbol(&mut self, index: usize, symbol: &str) {
        if let Some(slot) = self.symbols.get_mut(index) {
            *slot = truncate_symbol(symbol);
        }
    }

    /// Check values that bypassed the builder methods.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(DENSITY_MIN..=DENSITY_MAX).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange {
                density: self.density,
                min: DENSITY_MIN,
                max: DENSITY_MAX,
            });
        }
        if let PaletteChoice::Custom(palette) = &self.palette {
            if palette.colors().is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
        }
        Ok(())
    }
}

/// Clamp into the accepted range and round to the nearest step.
pub fn clamp_density(density: usize) -> usize {
    let clamped = density.clamp(DENSITY_MIN, DENSITY_MAX);
    let steps = (clamped - DENSITY_MIN + DENSITY_STEP / 2) / DENSITY_STEP;
    (DENSITY_MIN + steps * DENSITY_STEP).min(DENSITY_MAX)
}

pub fn truncate_symbol(symbol: &str) -> String {
    let truncated: String = symbol.chars().take(MAX_SYMBOL_CHARS).collect();
    if truncated.len() != symbol.len() {
        log::debug!("[config] symbol {symbol:?} truncated to {truncated:?}");
    }
    truncated
}

/// Parse a comma-separated list of exactly [`SYMBOL_GROUPS`] symbols.
pub fn parse_symbols(list: &str) -> Result<[String; SYMBOL_GROUPS], ConfigError> {
    let parts: Vec<&str> = list.split(',').collect();
    symbols_from(&parts)
}

pub fn symbols_from<S: AsRef<str>>(parts: &[S]) -> Result<[String; SYMBOL_GROUPS], ConfigError> {
    if parts.len() != SYMBOL_GROUPS {
        return Err(ConfigError::SymbolCount {
            expected: SYMBOL_GROUPS,
            found: parts.len(),
        });
    }
    Ok(std::array::from_fn(|i| truncate_symbol(parts[i].as_ref())))
}
