// Planes and plane reflection

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3};

/// Plane in implicit form `a*x + b*y + c*z + d = 0`.
///
/// The reflection math assumes `(a, b, c)` is unit length. [`Plane::new`]
/// takes the coefficients verbatim; [`Plane::from_normal_and_point`]
/// normalizes for you.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Plane {
    /// Creates a plane from raw coefficients.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` facing `normal`. Returns `None` for a zero normal.
    pub fn from_normal_and_point(normal: DVec3, point: DVec3) -> Option<Self> {
        let n = normal.try_normalize()?;
        Some(Self::new(n.x, n.y, n.z, -n.dot(point)))
    }

    /// The `(a, b, c)` coefficients.
    pub fn normal(&self) -> DVec3 {
        DVec3::new(self.a, self.b, self.c)
    }

    /// Signed distance from the plane to `point`, valid for unit normals.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal().dot(point) + self.d
    }
}

/// Writes the affine matrix mirroring points across `plane` into `out`.
///
/// Built in closed form from the unit normal `n` and offset `d`: the linear
/// block is `I - 2 n nᵀ` and the translation row is `-2 d n`. The normal is
/// neither checked nor normalized; a non-unit normal gives a matrix that is
/// not a reflection.
pub fn reflection_matrix_into(plane: &Plane, out: &mut DMat4) {
    let Plane { a, b, c, d } = *plane;
    let ab2 = -2.0 * a * b;
    let ac2 = -2.0 * a * c;
    let bc2 = -2.0 * b * c;

    *out = DMat4::from_cols_array(&[
        1.0 - 2.0 * a * a,
        ab2,
        ac2,
        0.0,
        ab2,
        1.0 - 2.0 * b * b,
        bc2,
        0.0,
        ac2,
        bc2,
        1.0 - 2.0 * c * c,
        0.0,
        -2.0 * a * d,
        -2.0 * b * d,
        -2.0 * c * d,
        1.0,
    ]);
}

/// Reflection matrix across `plane`. See [`reflection_matrix_into`].
pub fn reflection_matrix(plane: &Plane) -> DMat4 {
    let mut m = DMat4::IDENTITY;
    reflection_matrix_into(plane, &mut m);
    m
}
