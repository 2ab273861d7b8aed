// IntSar-3D math: rotation, basis, reflection and scalar helpers for 3D transforms
//
// Matrices, quaternions and vectors are glam's double-precision types.
// Every helper that fills an output comes in two forms: an owned one
// returning a fresh value and an `_into` one writing into a destination
// the caller already owns. No helper keeps state between calls.

// Module declarations
pub mod basis;
pub mod math;
pub mod plane;
pub mod rotation;
pub mod transform;

pub use basis::{
    get_forward, get_forward_into, get_right, get_right_into, get_translation,
    get_translation_into, get_up, get_up_into, matrices_equal, BasisRow,
};
pub use math::{
    approximately_equal, clamp, deg_to_rad, lerp, mix, normalized_to_screen, rad_to_deg,
    screen_to_normalized, DEGREES_TO_RADIANS, EPSILON, MAX_VALUE, MIN_VALUE, RADIANS_TO_DEGREES,
};
pub use plane::{reflection_matrix, reflection_matrix_into, Plane};
pub use rotation::{
    calc_degree, calc_degree_into, clamp_angle, quaternion_to_matrix, quaternion_to_matrix_into,
};
pub use transform::Transform;
