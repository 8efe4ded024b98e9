use glam::Vec3;

/// Flat `x, y, z` coordinate buffer, three floats per particle.
///
/// A cloud has no identity beyond its contents; a configuration change
/// replaces it wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    coords: Vec<f32>,
}

impl PointCloud {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            coords: Vec::with_capacity(count * 3),
        }
    }

    /// Wrap an existing coordinate buffer. Panics unless its length is a
    /// multiple of three.
    pub fn from_coords(coords: Vec<f32>) -> Self {
        assert_eq!(
            coords.len() % 3,
            0,
            "point cloud buffer length {} is not a multiple of 3",
            coords.len()
        );
        Self { coords }
    }

    #[inline]
    pub fn push(&mut self, p: Vec3) {
        self.coords.extend_from_slice(&[p.x, p.y, p.z]);
    }

    /// Number of particles (not floats).
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.coords
    }

    /// Zero-copy view as points.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.coords)
    }

    pub fn into_coords(self) -> Vec<f32> {
        self.coords
    }

    /// Coordinates owned by group `index` when the cloud is split into
    /// consecutive groups of `per_group` particles.
    pub fn group_slice(&self, index: usize, per_group: usize) -> &[f32] {
        let start = index * per_group * 3;
        &self.coords[start..start + per_group * 3]
    }

    /// Axis-aligned `(min, max)`, or `None` for an empty cloud.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let points = self.points();
        let first = *points.first()?;
        Some(
            points
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
        )
    }

    pub fn centroid(&self) -> Option<Vec3> {
        if self.is_empty() {
            return None;
        }
        let sum: Vec3 = self.points().iter().copied().sum();
        Some(sum / self.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_slices_partition_the_buffer() {
        let mut cloud = PointCloud::with_capacity(4);
        for i in 0..4 {
            cloud.push(Vec3::splat(i as f32));
        }
        assert_eq!(cloud.len(), 4);
        assert_eq!(cloud.group_slice(0, 2), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(cloud.group_slice(1, 2), &[2.0, 2.0, 2.0, 3.0, 3.0, 3.0]);
        assert_eq!(cloud.points()[3], Vec3::splat(3.0));
    }

    #[test]
    fn bounds_and_centroid() {
        let cloud = PointCloud::from_coords(vec![-1.0, 0.0, 2.0, 3.0, 4.0, -2.0]);
        let (lo, hi) = cloud.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-1.0, 0.0, -2.0));
        assert_eq!(hi, Vec3::new(3.0, 4.0, 2.0));
        assert_eq!(cloud.centroid(), Some(Vec3::new(1.0, 2.0, 0.0)));
        assert_eq!(PointCloud::default().bounds(), None);
    }

    #[test]
    #[should_panic(expected = "not a multiple of 3")]
    fn ragged_buffer_is_rejected() {
        let _ = PointCloud::from_coords(vec![1.0, 2.0]);
    }
}
