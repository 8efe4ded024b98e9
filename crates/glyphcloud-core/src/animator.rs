//! Per-group position smoothing and billboard orientation.

use crate::constants::{LERP_FACTOR, REFERENCE_HZ};
use crate::sampler::scatter_cube;
use crate::theme::Rgb;
use glam::{Mat3, Quat, Vec3};
use rand::Rng;
use std::time::Duration;

/// How far particles travel toward their targets on each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed fraction per rendered frame. Perceived speed follows the display
    /// rate: `k = 0.05` was tuned for ~60 Hz.
    PerFrame { k: f32 },
    /// Same curve as `PerFrame { k }` at `reference_hz`, rescaled by the real
    /// frame time so speed no longer depends on the display rate.
    TimeScaled { k: f32, reference_hz: f32 },
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::PerFrame { k: LERP_FACTOR }
    }
}

impl Smoothing {
    pub fn time_scaled() -> Self {
        Smoothing::TimeScaled {
            k: LERP_FACTOR,
            reference_hz: REFERENCE_HZ,
        }
    }

    /// Interpolation factor for a frame that took `dt`.
    pub fn factor(&self, dt: Duration) -> f32 {
        match *self {
            Smoothing::PerFrame { k } => k,
            Smoothing::TimeScaled { k, reference_hz } => {
                let frames = dt.as_secs_f32() * reference_hz;
                (1.0 - (1.0 - k).powf(frames)).clamp(0.0, 1.0)
            }
        }
    }
}

/// `current += (target - current) * k` for every coordinate.
///
/// # Panics
/// If the buffers differ in length.
pub fn lerp_toward(current: &mut [f32], target: &[f32], k: f32) {
    assert_eq!(
        current.len(),
        target.len(),
        "current/target buffer length mismatch"
    );
    for (c, t) in current.iter_mut().zip(target) {
        *c += (*t - *c) * k;
    }
}

/// Rotation turning a quad's local +Z toward `eye`, keeping local +Y close to `up`.
pub fn billboard_rotation(position: Vec3, eye: Vec3, up: Vec3) -> Quat {
    let mut forward = eye - position;
    if forward.length_squared() == 0.0 {
        forward = Vec3::Z;
    }
    forward = forward.normalize();

    let mut right = up.cross(forward);
    if right.length_squared() == 0.0 {
        // Looking straight along `up`: nudge forward off the axis.
        if up.z.abs() == 1.0 {
            forward.x += 1e-4;
        } else {
            forward.z += 1e-4;
        }
        forward = forward.normalize();
        right = up.cross(forward);
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// The particles sharing one symbol and color.
///
/// Owns its current positions exclusively; the target buffer is the group's
/// slice of the latest sampled cloud.
#[derive(Clone, Debug)]
pub struct ParticleGroup {
    pub symbol: String,
    pub color: Rgb,
    current: Vec<f32>,
    target: Vec<f32>,
    rotations: Vec<Quat>,
}

impl ParticleGroup {
    /// New group converging on `target`, starting from a cube scatter.
    pub fn new<R: Rng>(symbol: String, color: Rgb, target: &[f32], rng: &mut R) -> Self {
        let mut group = Self {
            symbol,
            color,
            current: Vec::new(),
            target: Vec::new(),
            rotations: Vec::new(),
        };
        group.reallocate(target, rng);
        group
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.current.len() / 3
    }

    pub fn current(&self) -> &[f32] {
        &self.current
    }

    pub fn target(&self) -> &[f32] {
        &self.target
    }

    pub fn positions(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.current)
    }

    pub fn rotations(&self) -> &[Quat] {
        &self.rotations
    }

    /// Swap in a new target of the same size; current positions are kept so
    /// the group morphs from wherever it is.
    ///
    /// # Panics
    /// If `target` does not match the group's size.
    pub fn retarget(&mut self, target: &[f32]) {
        assert_eq!(
            target.len(),
            self.current.len(),
            "retarget with a different particle count; reallocate instead"
        );
        self.target.clear();
        self.target.extend_from_slice(target);
    }

    /// Resize to `target`'s particle count. Old positions cannot be matched to
    /// the new layout, so the group restarts from a fresh cube scatter.
    pub fn reallocate<R: Rng>(&mut self, target: &[f32], rng: &mut R) {
        assert_eq!(target.len() % 3, 0, "target buffer is not xyz triples");
        let count = target.len() / 3;
        self.current = scatter_cube(count, rng).into_coords();
        self.target = target.to_vec();
        self.rotations = vec![Quat::IDENTITY; count];
    }

    /// Re-seed current positions with a cube scatter, keeping the target.
    pub fn rescatter<R: Rng>(&mut self, rng: &mut R) {
        self.current = scatter_cube(self.count(), rng).into_coords();
    }

    /// Advance positions one tick with factor `k`.
    pub fn step(&mut self, k: f32) {
        lerp_toward(&mut self.current, &self.target, k);
    }

    /// Point every particle at `eye`.
    pub fn face(&mut self, eye: Vec3) {
        let positions: &[Vec3] = bytemuck::cast_slice(&self.current);
        for (rotation, position) in self.rotations.iter_mut().zip(positions) {
            *rotation = billboard_rotation(*position, eye, Vec3::Y);
        }
    }

    /// Largest per-coordinate distance left to cover.
    pub fn max_deviation(&self) -> f32 {
        self.current
            .iter()
            .zip(&self.target)
            .map(|(c, t)| (t - c).abs())
            .fold(0.0, f32::max)
    }
}
