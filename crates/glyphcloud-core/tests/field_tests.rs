// Host-side tests for the animation engine: smoothing convergence, the
// reallocation rule and per-frame orientation.

use glam::Vec3;
use glyphcloud_core::constants::{LERP_FACTOR, PARTICLE_SIZE, SYMBOL_GROUPS};
use glyphcloud_core::{
    lerp_toward, sample, ParticleField, ParticleGroup, PaletteChoice, Rgb, SceneConfig, ShapeKind,
    Smoothing, ThemeName,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn seeded_config() -> SceneConfig {
    SceneConfig::default().with_seed(Some(42))
}

fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f32::max)
}

#[test]
fn lerp_converges_monotonically_from_unit_deviation() {
    let mut rng = StdRng::seed_from_u64(1);
    let target: Vec<f32> = (0..300).map(|_| rng.gen_range(-5.0..5.0)).collect();
    let mut current: Vec<f32> = target
        .iter()
        .map(|t| t + if rng.gen::<bool>() { 1.0 } else { -1.0 })
        .collect();

    let mut prev = max_abs_diff(&current, &target);
    let mut settled_at = None;
    for step in 1..=200 {
        lerp_toward(&mut current, &target, LERP_FACTOR);
        let d = max_abs_diff(&current, &target);
        if settled_at.is_none() {
            assert!(d < prev, "deviation did not shrink at step {step}: {d} >= {prev}");
            if d < 1e-3 {
                settled_at = Some(step);
            }
        }
        prev = d;
    }
    let steps = settled_at.expect("never settled below 1e-3");
    // log(1e-3) / log(0.95) ~= 135
    assert!((130..=140).contains(&steps), "settled after {steps} steps");
}

#[test]
#[should_panic(expected = "length mismatch")]
fn lerp_rejects_mismatched_buffers() {
    let mut current = vec![0.0; 6];
    lerp_toward(&mut current, &[1.0; 9], LERP_FACTOR);
}

#[test]
#[should_panic(expected = "reallocate instead")]
fn retarget_rejects_a_different_count() {
    let mut rng = StdRng::seed_from_u64(2);
    let target = sample(ShapeKind::Star, 10, &mut rng);
    let mut group = ParticleGroup::new("A".into(), Rgb::default(), target.as_slice(), &mut rng);
    let bigger = sample(ShapeKind::Star, 11, &mut rng);
    group.retarget(bigger.as_slice());
}

#[test]
fn new_groups_start_scattered_not_at_origin() {
    let mut rng = StdRng::seed_from_u64(3);
    let target = sample(ShapeKind::Dna, 500, &mut rng);
    let group = ParticleGroup::new("A".into(), Rgb::default(), target.as_slice(), &mut rng);
    assert_eq!(group.current().len(), target.as_slice().len());
    let at_origin = group.positions().iter().filter(|p| **p == Vec3::ZERO).count();
    assert_eq!(at_origin, 0);
    assert!(group.positions().iter().all(|p| p.abs().max_element() <= 5.0));
}

#[test]
fn field_splits_density_into_four_equal_groups() {
    let field = ParticleField::new(seeded_config().with_density(1200));
    assert_eq!(field.groups().len(), SYMBOL_GROUPS);
    for group in field.groups() {
        assert_eq!(group.count(), 300);
        assert_eq!(group.current().len(), 900);
        assert_eq!(group.target().len(), 900);
        assert_eq!(group.rotations().len(), 300);
    }

    let mut odd = seeded_config();
    odd.density = 1203;
    let field = ParticleField::new(odd);
    assert_eq!(field.total(), 1200);
    assert!(field.groups().iter().all(|g| g.count() == 300));
}

#[test]
fn density_change_reallocates_groups() {
    let mut field = ParticleField::new(seeded_config());
    let changes = field.apply(field.config().clone().with_density(1600));
    assert!(changes.reallocated && changes.resampled);
    for group in field.groups() {
        assert_eq!(group.count(), 400);
        assert_eq!(group.current().len(), 1200);
        assert_eq!(group.target().len(), 1200);
    }
}

#[test]
fn shape_change_keeps_current_positions_and_swaps_targets() {
    let mut field = ParticleField::new(seeded_config());
    for _ in 0..30 {
        field.tick(Vec3::new(0.0, 0.0, 12.0), FRAME);
    }
    let before_current: Vec<Vec<f32>> = field.groups().iter().map(|g| g.current().to_vec()).collect();
    let before_target: Vec<Vec<f32>> = field.groups().iter().map(|g| g.target().to_vec()).collect();

    let changes = field.apply(field.config().clone().with_shape(Some(ShapeKind::Relief)));
    assert!(changes.resampled);
    assert!(!changes.reallocated);

    for (i, group) in field.groups().iter().enumerate() {
        assert_eq!(group.current(), before_current[i].as_slice());
        assert_ne!(group.target(), before_target[i].as_slice());
    }
}

#[test]
fn density_change_within_the_same_split_is_a_no_op() {
    let mut field = ParticleField::new(seeded_config());
    let mut config = field.config().clone();
    config.density += 3;
    let changes = field.apply(config);
    assert!(changes.is_empty());
}

#[test]
fn palette_and_symbol_changes_only_relabel() {
    let mut field = ParticleField::new(seeded_config());
    let before: Vec<Vec<f32>> = field.groups().iter().map(|g| g.target().to_vec()).collect();
    let config = field
        .config()
        .clone()
        .with_palette(PaletteChoice::Preset(ThemeName::Memphis))
        .with_symbols(["★", "☆", "福", "禄"]);
    let changes = field.apply(config);
    assert!(changes.relabeled && !changes.resampled && !changes.reallocated);

    let theme = ThemeName::Memphis.theme();
    for (i, group) in field.groups().iter().enumerate() {
        assert_eq!(group.color, theme.colors[i]);
        assert_eq!(group.target(), before[i].as_slice());
    }
    assert_eq!(field.groups()[2].symbol, "福");
}

#[test]
fn ticking_converges_the_whole_field() {
    let mut field = ParticleField::new(seeded_config().with_shape(Some(ShapeKind::Crown)));
    let start = field.max_deviation();
    assert!(start > 1.0);
    for _ in 0..300 {
        field.tick(Vec3::new(0.0, 0.0, 12.0), FRAME);
    }
    assert!(field.max_deviation() < 1e-3);
}

#[test]
fn time_scaled_smoothing_is_frame_rate_independent() {
    let config = seeded_config().with_smoothing(Smoothing::time_scaled());
    let mut slow = ParticleField::new(config.clone());
    let mut fast = ParticleField::new(config);
    let eye = Vec3::new(0.0, 0.0, 12.0);
    // One second at 30 Hz vs at 120 Hz.
    for _ in 0..30 {
        slow.tick(eye, Duration::from_secs_f32(1.0 / 30.0));
    }
    for _ in 0..120 {
        fast.tick(eye, Duration::from_secs_f32(1.0 / 120.0));
    }
    for (a, b) in slow.groups().iter().zip(fast.groups()) {
        assert!(max_abs_diff(a.current(), b.current()) < 1e-3);
    }
}

#[test]
fn tick_orients_every_particle_toward_the_eye() {
    let mut field = ParticleField::new(seeded_config().with_density(500));
    let eye = Vec3::new(4.0, 3.0, 10.0);
    field.tick(eye, FRAME);
    for group in field.groups() {
        for (p, q) in group.positions().iter().zip(group.rotations()) {
            let forward = *q * Vec3::Z;
            assert!((forward - (eye - *p).normalize()).length() < 1e-3);
        }
    }
}

#[test]
fn instances_carry_position_rotation_and_group_color() {
    let mut field = ParticleField::new(seeded_config().with_density(500));
    field.tick(Vec3::new(0.0, 0.0, 12.0), FRAME);
    let mut out = Vec::new();
    field.fill_instances(&mut out, false);
    assert_eq!(out.len(), field.total());

    let per_group = field.per_group();
    for (i, group) in field.groups().iter().enumerate() {
        let inst = out[i * per_group];
        assert_eq!(inst.position, group.positions()[0].to_array());
        assert_eq!(inst.rotation, group.rotations()[0].to_array());
        assert_eq!(inst.size, PARTICLE_SIZE);
        let [r, g, b] = group.color.to_array();
        assert_eq!(inst.color, [r, g, b, 1.0]);
    }
    assert_eq!(std::mem::size_of_val(&out[0]), 48);
}

#[test]
fn rescatter_keeps_targets() {
    let mut field = ParticleField::new(seeded_config());
    let target = field.groups()[0].target().to_vec();
    let current = field.groups()[0].current().to_vec();
    field.rescatter();
    assert_eq!(field.groups()[0].target(), target.as_slice());
    assert_ne!(field.groups()[0].current(), current.as_slice());
}

#[test]
fn unknown_shape_field_uses_scatter_targets() {
    let field = ParticleField::new(seeded_config().with_shape(None));
    for group in field.groups() {
        assert!(group.target().iter().all(|v| v.abs() <= 5.0));
    }
}

#[test]
fn resample_swaps_targets_at_the_same_size() {
    let mut field = ParticleField::new(seeded_config().with_shape(Some(ShapeKind::Klein)));
    let current = field.groups()[1].current().to_vec();
    let target = field.groups()[1].target().to_vec();
    field.resample();
    assert_eq!(field.groups()[1].current(), current.as_slice());
    assert_eq!(field.groups()[1].target().len(), target.len());
    assert_ne!(field.groups()[1].target(), target.as_slice());
}
