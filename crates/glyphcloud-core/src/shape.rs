use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// The figures a particle cloud can be asked to approximate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Mobius,
    Star,
    Klein,
    Incense,
    Crown,
    Dna,
    Relief,
}

impl ShapeKind {
    /// Menu order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Mobius,
        ShapeKind::Star,
        ShapeKind::Klein,
        ShapeKind::Incense,
        ShapeKind::Crown,
        ShapeKind::Dna,
        ShapeKind::Relief,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Mobius => "Möbius strip",
            ShapeKind::Star => "Five-pointed star",
            ShapeKind::Klein => "Klein bottle",
            ShapeKind::Incense => "Incense burner",
            ShapeKind::Crown => "Phoenix crown",
            ShapeKind::Dna => "DNA double helix",
            ShapeKind::Relief => "Relief",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match key.as_str() {
            "mobius" | "möbius" | "moebius" | "mobiusstrip" | "möbiusstrip" => Ok(ShapeKind::Mobius),
            "star" | "fivepointedstar" | "pentagram" => Ok(ShapeKind::Star),
            "klein" | "kleinbottle" => Ok(ShapeKind::Klein),
            "incense" | "incenseburner" | "censer" => Ok(ShapeKind::Incense),
            "crown" | "phoenixcrown" => Ok(ShapeKind::Crown),
            "dna" | "helix" | "doublehelix" | "dnadoublehelix" => Ok(ShapeKind::Dna),
            "relief" | "terrain" => Ok(ShapeKind::Relief),
            _ => Err(ConfigError::UnknownShape(s.to_string())),
        }
    }
}

/// Structural role of a sampled particle within its figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// Single-surface figures (Möbius, star, Klein bottle, relief).
    Surface,
    Strand,
    Rung,
    Body,
    Leg,
    Handle,
    Smoke,
    Cap,
    Fan,
    Crest,
    Tassel,
    Veil,
    /// Fallback cube scatter.
    Scatter,
}
