//! Stochastic point sampling for each figure.
//!
//! Every particle is drawn independently. Each one first consumes three
//! uniform draws `r1, r2, r3`; some figures then consume extra draws:
//!
//! - Star: one jitter draw.
//! - Dna: one rung test, plus one ratio draw for rung particles.
//! - Incense / Crown: the band draw and every structural draw.
//!
//! The mapping from draws to a point is pure, so a scripted draw source
//! reproduces a cloud exactly. See [`sample_with`].

use crate::cloud::PointCloud;
use crate::constants::{crown, dna, incense, klein, mobius, relief, scatter, star};
use crate::shape::{Part, ShapeKind};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Sample `count` particles for `shape` from `rng`.
pub fn sample<R: Rng>(shape: ShapeKind, count: usize, rng: &mut R) -> PointCloud {
    sample_with(shape, count, || rng.gen::<f32>())
}

/// Sample `count` particles pulling uniform draws from `next`.
///
/// `next` should yield values in `[0, 1]`.
pub fn sample_with<F>(shape: ShapeKind, count: usize, mut next: F) -> PointCloud
where
    F: FnMut() -> f32,
{
    let mut cloud = PointCloud::with_capacity(count);
    for _ in 0..count {
        cloud.push(sample_point(shape, &mut next).0);
    }
    cloud
}

/// Like [`sample`], keeping each particle's structural role.
pub fn sample_traced<R: Rng>(shape: ShapeKind, count: usize, rng: &mut R) -> Vec<(Vec3, Part)> {
    let mut next = || rng.gen::<f32>();
    (0..count).map(|_| sample_point(shape, &mut next)).collect()
}

/// Traced counterpart of [`sample_or_scatter`]; scatter points are tagged [`Part::Scatter`].
pub fn sample_traced_or_scatter<R: Rng>(
    shape: Option<ShapeKind>,
    count: usize,
    rng: &mut R,
) -> Vec<(Vec3, Part)> {
    match shape {
        Some(shape) => sample_traced(shape, count, rng),
        None => {
            let mut next = || rng.gen::<f32>();
            (0..count)
                .map(|_| (scatter_point(&mut next), Part::Scatter))
                .collect()
        }
    }
}

/// Sample `shape`, or the fallback cube scatter when there is none.
pub fn sample_or_scatter<R: Rng>(shape: Option<ShapeKind>, count: usize, rng: &mut R) -> PointCloud {
    match shape {
        Some(shape) => sample(shape, count, rng),
        None => scatter_cube(count, rng),
    }
}

/// Sample a figure by name. Unrecognized names fall back to the cube scatter.
pub fn sample_named<R: Rng>(name: &str, count: usize, rng: &mut R) -> PointCloud {
    match name.parse::<ShapeKind>() {
        Ok(shape) => sample(shape, count, rng),
        Err(_) => {
            log::warn!("[sampler] unknown shape {name:?}, using cube scatter");
            scatter_cube(count, rng)
        }
    }
}

/// Uniform scatter in a cube of side [`scatter::CUBE_SIDE`] centered at the origin.
pub fn scatter_cube<R: Rng>(count: usize, rng: &mut R) -> PointCloud {
    let mut next = || rng.gen::<f32>();
    let mut cloud = PointCloud::with_capacity(count);
    for _ in 0..count {
        cloud.push(scatter_point(&mut next));
    }
    cloud
}

/// Map one particle's draws to a point and its role.
pub fn sample_point<F>(shape: ShapeKind, next: &mut F) -> (Vec3, Part)
where
    F: FnMut() -> f32,
{
    let r1 = next();
    let r2 = next();
    let _r3 = next();
    match shape {
        ShapeKind::Mobius => (mobius_point(r1, r2), Part::Surface),
        ShapeKind::Star => {
            let jitter = next();
            (star_point(r1, r2, jitter), Part::Surface)
        }
        ShapeKind::Klein => (klein_point(r1, r2), Part::Surface),
        ShapeKind::Dna => dna_point(r1, r2, next),
        ShapeKind::Incense => incense_point(next),
        ShapeKind::Crown => crown_point(next),
        ShapeKind::Relief => (relief_point(r1, r2), Part::Surface),
    }
}

fn scatter_point<F: FnMut() -> f32>(next: &mut F) -> Vec3 {
    let x = (next() - 0.5) * scatter::CUBE_SIDE;
    let y = (next() - 0.5) * scatter::CUBE_SIDE;
    let z = (next() - 0.5) * scatter::CUBE_SIDE;
    Vec3::new(x, y, z)
}

/// Pick one of `n` slots from a uniform draw; a draw of exactly 1.0 maps to the last slot.
#[inline]
fn pick(r: f32, n: usize) -> usize {
    ((r * n as f32) as usize).min(n - 1)
}

fn mobius_point(r1: f32, r2: f32) -> Vec3 {
    let u = r1 * TAU;
    let v = (r2 - 0.5) * mobius::WIDTH;
    let half = v / 2.0;
    let w = 1.0 + half * (u / 2.0).cos();
    Vec3::new(
        w * u.cos() * mobius::SCALE,
        w * u.sin() * mobius::SCALE,
        half * (u / 2.0).sin() * mobius::SCALE,
    )
}

fn star_point(r1: f32, r2: f32, jitter: f32) -> Vec3 {
    let angle = r1 * TAU;
    let profile = star::BASE_RADIUS + (angle * star::LOBES).sin() * star::LOBE_AMPLITUDE;
    let h = (r2 - 0.5) * 2.0;
    let r = profile * (1.0 - h.abs() / star::TAPER_DIVISOR) + (jitter - 0.5) * star::JITTER;
    Vec3::new(r * angle.cos(), r * angle.sin(), h * star::DEPTH)
}

fn klein_point(r1: f32, r2: f32) -> Vec3 {
    let u = r1 * TAU;
    let v = r2 * TAU;
    let tube = klein::TUBE_BASE - klein::TUBE_VARIATION * u.cos();
    let bulb = klein::BULB * u.cos() * (1.0 + u.sin());
    let (x, y) = if u < PI {
        (
            bulb + tube * u.cos() * v.cos(),
            klein::HEIGHT * u.sin() + tube * u.sin() * v.cos(),
        )
    } else {
        (bulb + tube * (v + PI).cos(), klein::HEIGHT * u.sin())
    };
    let z = tube * v.sin();
    Vec3::new(x, y, z) * klein::SCALE + Vec3::new(0.0, klein::Y_SHIFT, 0.0)
}

fn dna_point<F: FnMut() -> f32>(r1: f32, r2: f32, next: &mut F) -> (Vec3, Part) {
    let angle = r1 * TAU * dna::TURNS;
    let height = (r1 - 0.5) * dna::HEIGHT;
    if next() < dna::RUNG_PROBABILITY {
        // Rungs cross the helix diameter at the strand-0 angle.
        let span = dna::RADIUS * (1.0 - 2.0 * next());
        return (
            Vec3::new(span * angle.cos(), height, span * angle.sin()),
            Part::Rung,
        );
    }
    let phase = if r2 > 0.5 { 0.0 } else { PI };
    (
        Vec3::new(
            dna::RADIUS * (angle + phase).cos(),
            height,
            dna::RADIUS * (angle + phase).sin(),
        ),
        Part::Strand,
    )
}

fn incense_point<F: FnMut() -> f32>(next: &mut F) -> (Vec3, Part) {
    use incense::*;

    let band = next();
    if band < BODY_END {
        // Flattened sphere; the offset sinks most of it below the rim.
        let theta = next() * TAU;
        let phi = next() * PI;
        let p = Vec3::new(
            BODY_RADIUS * phi.sin() * theta.cos(),
            BODY_RADIUS * phi.cos() * BODY_FLATTEN + BODY_Y_OFFSET,
            BODY_RADIUS * phi.sin() * theta.sin(),
        );
        (p, Part::Body)
    } else if band < LEGS_END {
        let leg = pick(next(), LEG_COUNT);
        let base_angle = leg as f32 * TAU / LEG_COUNT as f32;
        let h = next() * LEG_MAX_LENGTH;
        let spread = (next() - 0.5) * LEG_SPREAD;
        let r = LEG_RADIUS + h * LEG_FLARE;
        let p = Vec3::new(
            r * (base_angle + spread).cos(),
            LEG_TOP - h,
            r * (base_angle + spread).sin(),
        );
        (p, Part::Leg)
    } else if band < HANDLES_END {
        let handle = pick(next(), HANDLE_COUNT);
        let side = (handle as f32 * PI).cos();
        let t = next() * PI;
        let p = Vec3::new(
            (HANDLE_RADIUS + HANDLE_BULGE * t.sin()) * side,
            HANDLE_BASE_Y + HANDLE_HEIGHT * t.sin(),
            HANDLE_DEPTH * t.cos(),
        );
        (p, Part::Handle)
    } else {
        let wisp = pick(next(), SMOKE_WISPS) as f32;
        let y = SMOKE_BASE_Y + next() * SMOKE_RISE;
        // Drift amplitude grows with height so the wisps loosen as they rise.
        let drift_x = (y * SMOKE_DRIFT_FREQ_X + wisp).sin() * (y * SMOKE_DRIFT_GAIN_X);
        let drift_z = (y * SMOKE_DRIFT_FREQ_Z + wisp).cos() * (y * SMOKE_DRIFT_GAIN_Z);
        let spiral = y * SMOKE_SPIRAL_RATE;
        let scatter = (next() - 0.5) * (y * SMOKE_SCATTER_GAIN);
        let p = Vec3::new(
            drift_x + spiral.sin() * SMOKE_SPIRAL_RADIUS + scatter,
            y,
            drift_z + spiral.cos() * SMOKE_SPIRAL_RADIUS + scatter,
        );
        (p, Part::Smoke)
    }
}

fn crown_point<F: FnMut() -> f32>(next: &mut F) -> (Vec3, Part) {
    use crown::*;

    let band = next();
    if band < CAP_END {
        let theta = next() * TAU;
        let phi = next() * PI * CAP_POLAR_SPAN;
        let y = (CAP_BASE_Y + CAP_RADIUS * phi.cos() * CAP_FLATTEN).min(CAP_MAX_Y);
        let p = Vec3::new(
            CAP_RADIUS * phi.sin() * theta.cos(),
            y,
            CAP_RADIUS * phi.sin() * theta.sin(),
        );
        (p, Part::Cap)
    } else if band < ORNAMENTS_END {
        if next() > 0.5 {
            let theta = PI + (next() - 0.5) * PI;
            let y = FAN_BASE_Y + next() * FAN_HEIGHT;
            let p = Vec3::new(FAN_RADIUS * theta.cos(), y, FAN_RADIUS * theta.sin());
            (p, Part::Fan)
        } else {
            // Peaks at the front center (theta = 0).
            let theta = (next() - 0.5) * PI;
            let y = CREST_BASE_Y + theta.cos() * CREST_PEAK + next() * CREST_JITTER;
            let p = Vec3::new(CREST_RADIUS * theta.cos(), y, CREST_RADIUS * theta.sin());
            (p, Part::Crest)
        }
    } else if band < TASSELS_END {
        let side = if next() > 0.5 { 1.0 } else { -1.0 };
        let theta = FRAC_PI_2 * side + (next() - 0.5) * TASSEL_ARC;
        let drop = next() * TASSEL_DROP;
        let p = Vec3::new(
            TASSEL_RADIUS * theta.cos() + side * drop * TASSEL_SWAY,
            TASSEL_TOP - drop,
            TASSEL_RADIUS * theta.sin(),
        );
        (p, Part::Tassel)
    } else {
        let theta = (next() - 0.5) * PI * VEIL_ARC;
        let drop = next() * VEIL_DROP;
        let p = Vec3::new(
            VEIL_RADIUS * theta.cos(),
            VEIL_TOP - drop,
            VEIL_RADIUS * theta.sin(),
        );
        (p, Part::Veil)
    }
}

fn relief_point(r1: f32, r2: f32) -> Vec3 {
    let x = r1 * relief::HALF_EXTENT * 2.0 - relief::HALF_EXTENT;
    let z = r2 * relief::HALF_EXTENT * 2.0 - relief::HALF_EXTENT;
    Vec3::new(x, relief_height(x, z), z)
}

/// Terrain height at `(x, z)`: a radial ripple over a cosine checkerboard.
#[inline]
pub fn relief_height(x: f32, z: f32) -> f32 {
    ((x * x + z * z).sqrt() * relief::RIPPLE_FREQ).sin() + x.cos() * z.cos()
}
