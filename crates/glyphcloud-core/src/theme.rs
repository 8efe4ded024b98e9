//! Color palettes for the particle groups and the backdrop.
//!
//! Presentation only: geometry never depends on color. Group `i` is tinted
//! with `colors[i % colors.len()]`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB` literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(Self::from_u32)
                .map_err(|_| invalid()),
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels in `[0, 1]`, still sRGB encoded.
    pub fn to_array(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Channels converted to linear light, for sRGB render targets.
    pub fn to_linear(self) -> [f32; 3] {
        self.to_array().map(srgb_to_linear)
    }

    /// Relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f32 {
        let [r, g, b] = self.to_linear();
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeName {
    Dunhuang,
    KleinBlue,
    Morandi,
    Mondrian,
    Rococo,
    Matisse,
    Memphis,
}

impl ThemeName {
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Dunhuang,
        ThemeName::KleinBlue,
        ThemeName::Morandi,
        ThemeName::Mondrian,
        ThemeName::Rococo,
        ThemeName::Matisse,
        ThemeName::Memphis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemeName::Dunhuang => "Dunhuang",
            ThemeName::KleinBlue => "Klein Blue",
            ThemeName::Morandi => "Morandi",
            ThemeName::Mondrian => "Mondrian",
            ThemeName::Rococo => "Rococo",
            ThemeName::Matisse => "Matisse",
            ThemeName::Memphis => "Memphis",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn theme(self) -> Theme {
        let (background, colors) = match self {
            ThemeName::Dunhuang => (0x2c1e18, [0xe45e32, 0x2486b9, 0xf2cf5b, 0xe8b2a7]),
            ThemeName::KleinBlue => (0x000000, [0x002fa7, 0x0044cc, 0xffffff, 0x002fa7]),
            ThemeName::Morandi => (0x3e3e3e, [0xaebab3, 0xd6c8c4, 0xc9c0d3, 0xe0d6c8]),
            ThemeName::Mondrian => (0xf0f0f0, [0xdd0000, 0x0000cc, 0xffe600, 0x000000]),
            ThemeName::Rococo => (0x2b2126, [0xf4c2c2, 0xb0e0e6, 0xfffdd0, 0xd8bfd8]),
            ThemeName::Matisse => (0x1a1a2e, [0xd93025, 0x1e90ff, 0x32cd32, 0xffd700]),
            ThemeName::Memphis => (0x222222, [0xff0099, 0x33ccff, 0xffff00, 0x66ff66]),
        };
        Theme {
            name: self,
            background: Rgb::from_u32(background),
            colors: colors.map(Rgb::from_u32),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        Self::ALL
            .into_iter()
            .find(|t| t.label().to_lowercase().replace(' ', "") == key)
            .ok_or_else(|| ConfigError::UnknownTheme(s.to_string()))
    }
}

/// A preset: backdrop plus four particle colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub background: Rgb,
    pub colors: [Rgb; 4],
}

/// Resolved colors handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(background: Rgb, colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { background, colors })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color for group `index`, wrapping around short palettes.
    pub fn color_for(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// Replace color `index`, growing a short palette by repeating its last color.
    pub fn set_color(&mut self, index: usize, color: Rgb) {
        if index >= self.colors.len() {
            let fill = self.colors.last().copied().unwrap_or(color);
            self.colors.resize(index + 1, fill);
        }
        self.colors[index] = color;
    }

    /// Light backdrops want light window chrome.
    pub fn is_light(&self) -> bool {
        self.background.luminance() > 0.5
    }
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        Self {
            background: theme.background,
            colors: theme.colors.to_vec(),
        }
    }
}

/// Either a named preset or a user-overridden palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteChoice {
    Preset(ThemeName),
    Custom(Palette),
}

impl Default for PaletteChoice {
    fn default() -> Self {
        PaletteChoice::Preset(ThemeName::Dunhuang)
    }
}

impl PaletteChoice {
    pub fn resolve(&self) -> Palette {
        match self {
            PaletteChoice::Preset(name) => name.theme().into(),
            PaletteChoice::Custom(palette) => palette.clone(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaletteChoice::Preset(name) => name.label(),
            PaletteChoice::Custom(_) => "Custom",
        }
    }

    /// Theme menu order: every preset, then `custom`, then back to the first preset.
    pub fn cycle(&self, custom: &Palette) -> Self {
        let last = ThemeName::ALL[ThemeName::ALL.len() - 1];
        match self {
            PaletteChoice::Preset(name) if *name == last => PaletteChoice::Custom(custom.clone()),
            PaletteChoice::Preset(name) => PaletteChoice::Preset(name.next()),
            PaletteChoice::Custom(_) => PaletteChoice::Preset(ThemeName::ALL[0]),
        }
    }
}

/// Starting colors for a fresh custom palette.
pub fn default_custom_palette() -> Palette {
    Palette {
        background: Rgb::from_u32(0x000000),
        colors: vec![
            Rgb::from_u32(0xffffff),
            Rgb::from_u32(0xff0000),
            Rgb::from_u32(0x00ff00),
            Rgb::from_u32(0x0000ff),
        ],
    }
}
