//! The animated scene: four symbol groups morphing toward sampled targets.
//!
//! Single-threaded and frame-driven. Each display frame calls [`ParticleField::tick`]
//! and then reads [`ParticleField::fill_instances`] for drawing, in that order.

use crate::animator::ParticleGroup;
use crate::cloud::PointCloud;
use crate::config::SceneConfig;
use crate::constants::{PARTICLE_SIZE, SYMBOL_GROUPS};
use crate::sampler::sample_or_scatter;
use crate::theme::Palette;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::time::Duration;

/// One drawable particle, laid out for a GPU instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub size: f32,
    pub rotation: [f32; 4],
    pub color: [f32; 4],
}

/// What [`ParticleField::apply`] had to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Group sizes changed; current buffers were rebuilt from a scatter.
    pub reallocated: bool,
    /// A fresh target cloud was sampled.
    pub resampled: bool,
    /// Symbols or colors changed.
    pub relabeled: bool,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        !(self.reallocated || self.resampled || self.relabeled)
    }
}

pub struct ParticleField {
    config: SceneConfig,
    palette: Palette,
    groups: SmallVec<[ParticleGroup; SYMBOL_GROUPS]>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let palette = config.palette.resolve();
        let per_group = config.per_group();
        let targets = sample_or_scatter(config.shape, config.total(), &mut rng);
        let groups = config
            .symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                ParticleGroup::new(
                    symbol.clone(),
                    palette.color_for(i),
                    targets.group_slice(i, per_group),
                    &mut rng,
                )
            })
            .collect();
        log::info!(
            "[field] {} x {} particles, shape={}",
            SYMBOL_GROUPS,
            per_group,
            shape_label(&config)
        );
        Self {
            config,
            palette,
            groups,
            rng,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    pub fn per_group(&self) -> usize {
        self.config.per_group()
    }

    pub fn total(&self) -> usize {
        self.config.total()
    }

    /// Move to `config`, doing only the work its differences require:
    ///
    /// - per-group count changed: reallocate every group and resample;
    /// - shape changed: resample targets, keep current positions (morph);
    /// - symbols or palette changed: relabel in place.
    pub fn apply(&mut self, config: SceneConfig) -> ChangeSet {
        let mut changes = ChangeSet::default();
        let count_changed = config.per_group() != self.config.per_group();
        let shape_changed = config.shape != self.config.shape;

        if count_changed || shape_changed {
            let per_group = config.per_group();
            let targets = sample_or_scatter(config.shape, config.total(), &mut self.rng);
            for (i, group) in self.groups.iter_mut().enumerate() {
                let slice = targets.group_slice(i, per_group);
                if count_changed {
                    group.reallocate(slice, &mut self.rng);
                } else {
                    group.retarget(slice);
                }
            }
            changes.reallocated = count_changed;
            changes.resampled = true;
            log::info!(
                "[field] shape={} per_group={} (reallocated={})",
                shape_label(&config),
                per_group,
                count_changed
            );
        }

        if config.symbols != self.config.symbols || config.palette != self.config.palette {
            self.palette = config.palette.resolve();
            for (i, (group, symbol)) in self.groups.iter_mut().zip(&config.symbols).enumerate() {
                group.symbol.clone_from(symbol);
                group.color = self.palette.color_for(i);
            }
            changes.relabeled = true;
            log::info!(
                "[field] symbols={:?} palette={}",
                config.symbols,
                config.palette.label()
            );
        }

        self.config = config;
        changes
    }

    /// Sample a fresh target cloud for the current shape without resizing.
    pub fn resample(&mut self) {
        let per_group = self.per_group();
        let targets: PointCloud =
            sample_or_scatter(self.config.shape, self.total(), &mut self.rng);
        for (i, group) in self.groups.iter_mut().enumerate() {
            group.retarget(targets.group_slice(i, per_group));
        }
    }

    /// Throw every particle back into a cube scatter; they re-converge from there.
    pub fn rescatter(&mut self) {
        for group in self.groups.iter_mut() {
            group.rescatter(&mut self.rng);
        }
        log::debug!("[field] rescattered");
    }

    /// Advance one frame: positions first, then orientations toward `eye`.
    pub fn tick(&mut self, eye: Vec3, dt: Duration) {
        let k = self.config.smoothing.factor(dt);
        for group in self.groups.iter_mut() {
            group.step(k);
            group.face(eye);
        }
    }

    /// Largest remaining per-coordinate distance across all groups.
    pub fn max_deviation(&self) -> f32 {
        self.groups
            .iter()
            .map(ParticleGroup::max_deviation)
            .fold(0.0, f32::max)
    }

    /// Replace `out` with one instance per particle, group by group.
    /// `linear` selects linear-light colors for sRGB targets.
    pub fn fill_instances(&self, out: &mut Vec<Instance>, linear: bool) {
        out.clear();
        out.reserve(self.total());
        for group in &self.groups {
            let [r, g, b] = if linear {
                group.color.to_linear()
            } else {
                group.color.to_array()
            };
            for (p, q) in group.positions().iter().zip(group.rotations()) {
                out.push(Instance {
                    position: p.to_array(),
                    size: PARTICLE_SIZE,
                    rotation: q.to_array(),
                    color: [r, g, b, 1.0],
                });
            }
        }
    }
}

fn shape_label(config: &SceneConfig) -> &'static str {
    config.shape.map(|s| s.label()).unwrap_or("scatter")
}
