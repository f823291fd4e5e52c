pub type Float = f64;

/// Storage precision of the distribution buffer.
pub type Real = f32;

pub const DELTA_T: Float = 1.0;

pub const DELTA_X: Float = 1.0;

pub const LATTICE_DENSITY: Float = 1.0;

pub const CS_2: Float = 1.0 / 3.0 * DELTA_X * DELTA_X / DELTA_T / DELTA_T;

pub const CS_2_INV: Float = 3.0;

pub const CS_4_INV: Float = 9.0;

pub const OMEGA_MIN: Float = 0.0;

pub const OMEGA_MAX: Float = 2.0;

// T = K * v^2, so that 20 degrees gives a thermal speed of 400.
pub(crate) const THERMAL_CONSTANT: Float = 1.0 / 8000.0;

// Keeps the largest discrete speed component of the initial state below 1.
pub(crate) const STABILITY_FACTOR: Float = 1.6;

pub const DEFAULT_TRACER_SPACING: usize = 20;

pub(crate) const VERTICAL_EDGE_TOLERANCE: Float = 1.0e-6;

pub(crate) const CHUNKS_PER_THREAD: usize = 3;
