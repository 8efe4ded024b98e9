use thiserror::Error;

/// Problems with user-supplied scene configuration.
///
/// Defects inside the engine itself (mismatched buffers and the like) are not
/// represented here; those panic at the call site.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid hex color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("a palette needs at least one particle color")]
    EmptyPalette,
    #[error("expected {expected} symbols, got {found}")]
    SymbolCount { expected: usize, found: usize },
    #[error("density {density} outside {min}..={max}")]
    DensityOutOfRange {
        density: usize,
        min: usize,
        max: usize,
    },
}
