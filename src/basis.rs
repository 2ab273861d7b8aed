// Basis and translation extraction from composed transforms

use glam::{DMat4, DVec3};

/// Named rows of a transform matrix.
///
/// A "row" is one group of four cells in the flat 16-cell layout returned by
/// `DMat4::to_cols_array`: row `i` covers cells `4 * i .. 4 * i + 4`, which is
/// glam's `col(i)`. Rows 0..=2 hold the right, up and forward basis vectors
/// (each multiplied by that axis' scale) and row 3 holds the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisRow {
    Right = 0,
    Up = 1,
    Forward = 2,
    Translation = 3,
}

impl BasisRow {
    /// Index of the row in the flat layout, in units of four cells.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Copies the first three cells of this row out of `m`.
    #[inline]
    pub fn read(self, m: &DMat4) -> DVec3 {
        m.col(self.index()).truncate()
    }

    /// Overwrites the first three cells of this row, leaving the fourth alone.
    pub fn write(self, m: &mut DMat4, v: DVec3) {
        let row = m.col_mut(self.index());
        row.x = v.x;
        row.y = v.y;
        row.z = v.z;
    }
}

fn direction_into(m: &DMat4, row: BasisRow, out: &mut DVec3) {
    let raw = row.read(m);
    *out = raw.normalize_or_zero();
    if *out == DVec3::ZERO {
        log::trace!("{row:?} row {raw} is degenerate, yielding zero vector");
    }
}

/// Writes the normalized forward (row 2) direction of `m` into `out`.
///
/// Scale baked into the row is stripped. A zero-length row produces the
/// zero vector rather than NaN.
pub fn get_forward_into(m: &DMat4, out: &mut DVec3) {
    direction_into(m, BasisRow::Forward, out);
}

/// Normalized forward (row 2) direction of `m`. See [`get_forward_into`].
pub fn get_forward(m: &DMat4) -> DVec3 {
    let mut v = DVec3::ZERO;
    get_forward_into(m, &mut v);
    v
}

/// Writes the normalized up (row 1) direction of `m` into `out`.
pub fn get_up_into(m: &DMat4, out: &mut DVec3) {
    direction_into(m, BasisRow::Up, out);
}

/// Normalized up (row 1) direction of `m`.
pub fn get_up(m: &DMat4) -> DVec3 {
    let mut v = DVec3::ZERO;
    get_up_into(m, &mut v);
    v
}

/// Writes the normalized right (row 0) direction of `m` into `out`.
pub fn get_right_into(m: &DMat4, out: &mut DVec3) {
    direction_into(m, BasisRow::Right, out);
}

/// Normalized right (row 0) direction of `m`.
pub fn get_right(m: &DMat4) -> DVec3 {
    let mut v = DVec3::ZERO;
    get_right_into(m, &mut v);
    v
}

/// Copies the translation row (row 3) of `transform` into `out` as-is.
///
/// This is a plain copy, not a decomposition: it assumes the translation
/// lives exactly in row 3.
pub fn get_translation_into(transform: &DMat4, out: &mut DVec3) {
    *out = BasisRow::Translation.read(transform);
}

/// Translation row (row 3) of `transform`.
pub fn get_translation(transform: &DMat4) -> DVec3 {
    BasisRow::Translation.read(transform)
}

/// Exact cell-by-cell comparison of two matrices.
///
/// No tolerance is applied: matrices built through different arithmetic
/// paths that are only approximately equal compare unequal. Use
/// `DMat4::abs_diff_eq` when a tolerance is wanted. `-0.0` equals `0.0`
/// and any NaN cell makes the matrices unequal.
pub fn matrices_equal(m1: &DMat4, m2: &DMat4) -> bool {
    let a = m1.to_cols_array();
    let b = m2.to_cols_array();
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    #[test]
    fn identity_basis() {
        let m = DMat4::IDENTITY;
        assert_eq!(get_right(&m), DVec3::X);
        assert_eq!(get_up(&m), DVec3::Y);
        assert_eq!(get_forward(&m), DVec3::Z);
    }

    #[test]
    fn basis_strips_scale() {
        let m = DMat4::from_scale_rotation_translation(
            DVec3::new(2.0, 3.0, 4.0),
            DQuat::IDENTITY,
            DVec3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(get_right(&m), DVec3::X);
        assert_eq!(get_up(&m), DVec3::Y);
        assert_eq!(get_forward(&m), DVec3::Z);
    }

    #[test]
    fn degenerate_row_yields_zero_vector() {
        let m = DMat4::from_scale(DVec3::new(1.0, 0.0, 1.0));
        let up = get_up(&m);
        assert_eq!(up, DVec3::ZERO);
        assert!(!up.is_nan());
    }

    #[test]
    fn into_form_overwrites_destination() {
        let mut out = DVec3::new(9.0, 9.0, 9.0);
        get_forward_into(&DMat4::IDENTITY, &mut out);
        assert_eq!(out, DVec3::Z);
        get_translation_into(&DMat4::from_translation(DVec3::new(1.0, -2.0, 3.0)), &mut out);
        assert_eq!(out, DVec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn translation_is_copied_verbatim() {
        let m = DMat4::from_scale_rotation_translation(
            DVec3::splat(5.0),
            DQuat::from_rotation_y(1.0),
            DVec3::new(-4.0, 0.25, 12.0),
        );
        assert_eq!(get_translation(&m), DVec3::new(-4.0, 0.25, 12.0));
    }

    #[test]
    fn row_write_preserves_fourth_cell() {
        let mut m = DMat4::IDENTITY;
        BasisRow::Translation.write(&mut m, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.to_cols_array()[12..16], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(BasisRow::Translation.read(&m), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn matrices_equal_is_exact() {
        let a = DMat4::IDENTITY;
        let mut cells = a.to_cols_array();
        assert!(matrices_equal(&a, &DMat4::from_cols_array(&cells)));

        cells[5] = f64::from_bits(cells[5].to_bits() + 1);
        let b = DMat4::from_cols_array(&cells);
        assert!(!matrices_equal(&a, &b));
        assert!(a.abs_diff_eq(b, 1e-12));
    }
}
