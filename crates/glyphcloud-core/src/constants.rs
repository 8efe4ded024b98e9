// Shared tuning constants for sampling, animation and the viewer.
//
// Shape geometry is grouped per shape so that each figure's visual tuning
// surface can be read (and tested) on its own.

// Particle budget
pub const SYMBOL_GROUPS: usize = 4; // one group per symbol/color slot
pub const DENSITY_MIN: usize = 500;
pub const DENSITY_MAX: usize = 2000;
pub const DENSITY_STEP: usize = 100;
pub const DEFAULT_DENSITY: usize = 1200;
pub const MAX_SYMBOL_CHARS: usize = 2;
pub const DEFAULT_SYMBOL: &str = "I";

// Animation
pub const LERP_FACTOR: f32 = 0.05; // fraction of remaining distance covered per frame
pub const REFERENCE_HZ: f32 = 60.0; // display rate LERP_FACTOR was tuned against
pub const PARTICLE_SIZE: f32 = 0.4; // quad edge length in world units

// Viewer (orbit camera)
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 12.0];
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 0.5;
pub const ORBIT_ZOOM_SPEED: f32 = 0.7;
pub const ORBIT_ZOOM_BASE: f32 = 0.95; // distance multiplier per wheel step before speed scaling
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 30.0;
pub const ORBIT_POLE_MARGIN: f32 = 1e-3; // keeps the polar angle off the poles

/// Fallback formation: uniform cube centered at the origin.
pub mod scatter {
    pub const CUBE_SIDE: f32 = 10.0;
}

pub mod mobius {
    pub const SCALE: f32 = 4.0;
    pub const WIDTH: f32 = 0.6; // full span of the half-width parameter
}

pub mod star {
    pub const LOBES: f32 = 5.0;
    pub const BASE_RADIUS: f32 = 2.0;
    pub const LOBE_AMPLITUDE: f32 = 2.0;
    pub const TAPER_DIVISOR: f32 = 3.0; // radius shrinks by |h| / TAPER_DIVISOR
    pub const JITTER: f32 = 0.2; // full span, so +/- 0.1
    pub const DEPTH: f32 = 3.0;
}

pub mod klein {
    pub const BULB: f32 = 6.0;
    pub const HEIGHT: f32 = 16.0;
    pub const TUBE_BASE: f32 = 4.0;
    pub const TUBE_VARIATION: f32 = 2.0;
    pub const SCALE: f32 = 0.25;
    pub const Y_SHIFT: f32 = -2.0;
}

pub mod dna {
    pub const TURNS: f32 = 4.0;
    pub const RADIUS: f32 = 2.0;
    pub const HEIGHT: f32 = 10.0;
    pub const RUNG_PROBABILITY: f32 = 0.15;
}

pub mod incense {
    // Band edges over a uniform draw: body | legs | handles | smoke
    pub const BODY_END: f32 = 0.6;
    pub const LEGS_END: f32 = 0.7;
    pub const HANDLES_END: f32 = 0.8;

    pub const BODY_RADIUS: f32 = 2.5;
    pub const BODY_FLATTEN: f32 = 0.6;
    pub const BODY_Y_OFFSET: f32 = -0.5;

    pub const LEG_COUNT: usize = 3;
    pub const LEG_RADIUS: f32 = 1.5;
    pub const LEG_FLARE: f32 = 0.2; // outward drift per unit of leg length
    pub const LEG_MAX_LENGTH: f32 = 2.0;
    pub const LEG_SPREAD: f32 = 0.5; // angular spread, radians
    pub const LEG_TOP: f32 = -1.5;

    pub const HANDLE_COUNT: usize = 2;
    pub const HANDLE_RADIUS: f32 = 2.5;
    pub const HANDLE_BULGE: f32 = 0.5;
    pub const HANDLE_DEPTH: f32 = 0.5;
    pub const HANDLE_BASE_Y: f32 = 1.0;
    pub const HANDLE_HEIGHT: f32 = 1.5;

    pub const SMOKE_WISPS: usize = 3;
    pub const SMOKE_BASE_Y: f32 = 1.0;
    pub const SMOKE_RISE: f32 = 7.0;
    pub const SMOKE_DRIFT_FREQ_X: f32 = 0.8;
    pub const SMOKE_DRIFT_FREQ_Z: f32 = 0.5;
    pub const SMOKE_DRIFT_GAIN_X: f32 = 0.3; // drift amplitude per unit height
    pub const SMOKE_DRIFT_GAIN_Z: f32 = 0.2;
    pub const SMOKE_SPIRAL_RATE: f32 = 0.5;
    pub const SMOKE_SPIRAL_RADIUS: f32 = 0.5;
    pub const SMOKE_SCATTER_GAIN: f32 = 0.2; // lateral scatter span per unit height
}

pub mod crown {
    // Band edges over a uniform draw: cap | ornaments | tassels | veil
    pub const CAP_END: f32 = 0.3;
    pub const ORNAMENTS_END: f32 = 0.6;
    pub const TASSELS_END: f32 = 0.9;

    pub const CAP_RADIUS: f32 = 3.0;
    pub const CAP_POLAR_SPAN: f32 = 0.4; // fraction of PI swept from the pole
    pub const CAP_BASE_Y: f32 = 2.0;
    pub const CAP_FLATTEN: f32 = 0.5;
    pub const CAP_MAX_Y: f32 = 3.2;

    pub const FAN_RADIUS: f32 = 3.5;
    pub const FAN_BASE_Y: f32 = 3.5;
    pub const FAN_HEIGHT: f32 = 2.0;

    pub const CREST_RADIUS: f32 = 3.2;
    pub const CREST_BASE_Y: f32 = 3.5;
    pub const CREST_PEAK: f32 = 1.5;
    pub const CREST_JITTER: f32 = 1.0;

    pub const TASSEL_RADIUS: f32 = 3.4;
    pub const TASSEL_ARC: f32 = 0.3; // radians around +/- 90 degrees
    pub const TASSEL_TOP: f32 = 2.5;
    pub const TASSEL_DROP: f32 = 6.0;
    pub const TASSEL_SWAY: f32 = 0.1; // outward x offset per unit of drop

    pub const VEIL_RADIUS: f32 = 3.3;
    pub const VEIL_ARC: f32 = 0.8; // fraction of PI
    pub const VEIL_TOP: f32 = 2.5;
    pub const VEIL_DROP: f32 = 2.0;
}

pub mod relief {
    pub const HALF_EXTENT: f32 = 4.0;
    pub const RIPPLE_FREQ: f32 = 2.0;
}
