// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Default comparison epsilon for positions and matrix entries.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Default comparison epsilon for positions and matrix entries.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;
