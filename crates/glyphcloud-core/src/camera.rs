//! Orbit camera: the moving viewpoint particles turn to face.
//!
//! Damped spherical orbit around a fixed target, in the style of common web
//! orbit controls. Input accumulates into pending deltas that `update` bleeds
//! off by the damping factor each frame.

use crate::constants::{
    CAMERA_FOV_DEGREES, CAMERA_START, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING,
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLE_MARGIN, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_BASE, ORBIT_ZOOM_SPEED,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Azimuth around +Y, zero looking down -Z from +Z.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
    distance: f32,
    pending_theta: f32,
    pending_phi: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::from(CAMERA_START), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        let (theta, phi) = if offset.length_squared() == 0.0 {
            (0.0, PI / 2.0)
        } else {
            let n = offset.normalize();
            (n.x.atan2(n.z), n.y.clamp(-1.0, 1.0).acos())
        };
        Self {
            target,
            up: Vec3::Y,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            theta,
            phi: clamp_polar(phi),
            distance,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    /// Queue an orbit from a pointer drag of `(dx, dy)` pixels in a viewport
    /// `viewport_height` pixels tall.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= TAU * dx / h * ORBIT_ROTATE_SPEED;
        self.pending_phi -= TAU * dy / h * ORBIT_ROTATE_SPEED;
    }

    /// Zoom by wheel steps; positive moves closer. Applied immediately, clamped.
    pub fn zoom(&mut self, steps: f32) {
        let scale = ORBIT_ZOOM_BASE.powf(ORBIT_ZOOM_SPEED * steps);
        self.distance = (self.distance * scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Apply a damped share of the pending orbit. Call once per frame.
    pub fn update(&mut self) {
        self.theta += self.pending_theta * ORBIT_DAMPING;
        self.phi = clamp_polar(self.phi + self.pending_phi * ORBIT_DAMPING);
        self.pending_theta *= 1.0 - ORBIT_DAMPING;
        self.pending_phi *= 1.0 - ORBIT_DAMPING;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.phi.sin();
        self.target
            + self.distance * Vec3::new(s * self.theta.sin(), self.phi.cos(), s * self.theta.cos())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

#[inline]
fn clamp_polar(phi: f32) -> f32 {
    phi.clamp(ORBIT_POLE_MARGIN, PI - ORBIT_POLE_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_matches_start_position() {
        let cam = OrbitCamera::default();
        assert!((cam.eye() - Vec3::from(CAMERA_START)).length() < 1e-4);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1000.0);
        assert_eq!(cam.distance(), ORBIT_MIN_DISTANCE);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance(), ORBIT_MAX_DISTANCE);
    }

    #[test]
    fn drag_orbits_gradually_and_keeps_distance() {
        let mut cam = OrbitCamera::default();
        let start = cam.eye();
        cam.rotate(200.0, 0.0, 800.0);
        cam.update();
        let first = cam.eye();
        assert!((first - start).length() > 0.0);
        for _ in 0..200 {
            cam.update();
        }
        let settled = cam.eye();
        // Total swing is the full queued angle.
        let expected = -TAU * 200.0 / 800.0 * ORBIT_ROTATE_SPEED;
        let swung = settled.x.atan2(settled.z);
        assert!((swung - expected).abs() < 1e-3);
        assert!(((settled - cam.target).length() - 12.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_drag_stops_short_of_pole() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 100_000.0, 100.0);
        for _ in 0..500 {
            cam.update();
        }
        let eye = cam.eye();
        assert!(eye.is_finite());
        // Still off the axis: the horizontal offset has not collapsed.
        assert!(eye.z > 0.0);
        assert!(eye.y > 11.9);
        assert!(cam.view_matrix().is_finite());
    }
}
