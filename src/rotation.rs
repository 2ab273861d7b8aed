// Quaternion conversion and billboard angle decomposition

use glam::{DMat4, DQuat, DVec3};

use crate::math::RADIANS_TO_DEGREES;

/// Writes the rotation matrix of `q` into `out`.
///
/// Uses the standard algebraic expansion, so `q` must be unit length: a
/// non-unit quaternion is not normalized and silently yields a
/// non-orthonormal matrix. Any translation previously held by `out` is
/// replaced by zero and the homogeneous cell is set to 1.
pub fn quaternion_to_matrix_into(q: DQuat, out: &mut DMat4) {
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    let xx = x * x;
    let xy = x * y;
    let xz = x * z;
    let xw = x * w;

    let yy = y * y;
    let yz = y * z;
    let yw = y * w;

    let zz = z * z;
    let zw = z * w;

    *out = DMat4::from_cols_array(&[
        1.0 - 2.0 * (yy + zz),
        2.0 * (xy + zw),
        2.0 * (xz - yw),
        0.0,
        2.0 * (xy - zw),
        1.0 - 2.0 * (xx + zz),
        2.0 * (yz + xw),
        0.0,
        2.0 * (xz + yw),
        2.0 * (yz - xw),
        1.0 - 2.0 * (xx + yy),
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]);
}

/// Rotation matrix of the unit quaternion `q`. See [`quaternion_to_matrix_into`].
pub fn quaternion_to_matrix(q: DQuat) -> DMat4 {
    let mut m = DMat4::IDENTITY;
    quaternion_to_matrix_into(q, &mut m);
    m
}

/// Wraps an angle in degrees into `[-180, 180]`.
///
/// Values already in range are returned untouched, so both 180 and -180
/// are fixed points. Anything above 180 lands in `(-180, 180]` and anything
/// below -180 lands in `[-180, 180)`. Non-finite input is returned as-is.
pub fn clamp_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    if angle > 180.0 {
        angle - 360.0 * ((angle - 180.0) / 360.0).ceil()
    } else if angle < -180.0 {
        angle + 360.0 * ((-180.0 - angle) / 360.0).ceil()
    } else {
        angle
    }
}

/// World axis rotated by `q`, flattened by zeroing one component.
struct Projection {
    reference: DVec3,
    flattened: DVec3,
}

impl Projection {
    fn new(q: DQuat, reference: DVec3, zero_axis: usize) -> Self {
        let mut v = q * reference;
        v[zero_axis] = 0.0;
        let flattened = v.normalize_or_zero();
        if flattened == DVec3::ZERO {
            log::trace!("rotated {reference} has no extent after flattening axis {zero_axis}");
        }
        Self {
            reference,
            flattened,
        }
    }

    /// Unsigned angle to the reference axis in degrees.
    ///
    /// The dot product is clamped before `acos`: rounding pushes it past
    /// ±1 for near-parallel vectors even with unit inputs.
    fn angle(&self) -> f64 {
        let dot = self.reference.dot(self.flattened).clamp(-1.0, 1.0);
        dot.acos() * RADIANS_TO_DEGREES
    }
}

/// Writes the billboard angles of `q` into `out`, in degrees.
///
/// Each component measures how far `q` tilts one world axis, independently
/// of the others:
///
/// - `x`: world Y rotated, X zeroed, compared to Y. Reflected to `180 - a`
///   when the projection points toward -Z.
/// - `y`: world Z rotated, Y zeroed, compared to Z. Reflected to `360 - a`
///   when the projection points toward -X.
/// - `z`: world X rotated, Z zeroed, compared to X. Reflected to `360 - a`
///   when the projection points toward -Y.
///
/// All three are then wrapped with [`clamp_angle`]. When a rotated axis
/// lies entirely along the zeroed direction the projection degenerates to
/// the zero vector and that component reads 90. `q` must be unit length.
pub fn calc_degree_into(q: DQuat, out: &mut DVec3) {
    let around_x = Projection::new(q, DVec3::Y, 0);
    let mut angle_x = around_x.angle();
    if around_x.flattened.z < 0.0 {
        angle_x = 180.0 - angle_x;
    }

    let around_y = Projection::new(q, DVec3::Z, 1);
    let mut angle_y = around_y.angle();
    if around_y.flattened.x < 0.0 {
        angle_y = 360.0 - angle_y;
    }

    let around_z = Projection::new(q, DVec3::X, 2);
    let mut angle_z = around_z.angle();
    if around_z.flattened.y < 0.0 {
        angle_z = 360.0 - angle_z;
    }

    *out = DVec3::new(
        clamp_angle(angle_x),
        clamp_angle(angle_y),
        clamp_angle(angle_z),
    );
}

/// Billboard angles of `q` in degrees. See [`calc_degree_into`].
pub fn calc_degree(q: DQuat) -> DVec3 {
    let mut angles = DVec3::ZERO;
    calc_degree_into(q, &mut angles);
    angles
}
