pub mod animator;
pub mod camera;
pub mod cloud;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod sampler;
pub mod shape;
pub mod stats;
pub mod theme;

pub use animator::{billboard_rotation, lerp_toward, ParticleGroup, Smoothing};
pub use camera::OrbitCamera;
pub use cloud::PointCloud;
pub use config::{clamp_density, parse_symbols, symbols_from, truncate_symbol, SceneConfig};
pub use error::ConfigError;
pub use field::{ChangeSet, Instance, ParticleField};
pub use sampler::{
    relief_height, sample, sample_named, sample_or_scatter, sample_point, sample_traced,
    sample_traced_or_scatter, sample_with, scatter_cube,
};
pub use shape::{Part, ShapeKind};
pub use stats::FpsCounter;
pub use theme::{default_custom_palette, Palette, PaletteChoice, Rgb, Theme, ThemeName};

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
