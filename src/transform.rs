// Position/rotation/scale transform built on the matrix helpers

use glam::{DMat4, DQuat, DVec3};

use crate::basis::{self, BasisRow};
use crate::rotation;

/// Represents a 3D transformation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a new transform
    pub fn new(position: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }

    /// Generate transformation matrix
    ///
    /// Basis rows are the rotation rows scaled per axis and row 3 is the
    /// position.
    pub fn matrix(&self) -> DMat4 {
        let mut m = DMat4::IDENTITY;
        self.write_matrix(&mut m);
        m
    }

    /// Writes the transformation matrix into `out`.
    pub fn write_matrix(&self, out: &mut DMat4) {
        rotation::quaternion_to_matrix_into(self.rotation, out);
        let scales = [self.scale.x, self.scale.y, self.scale.z];
        for (row, s) in [BasisRow::Right, BasisRow::Up, BasisRow::Forward]
            .into_iter()
            .zip(scales)
        {
            let scaled = row.read(out) * s;
            row.write(out, scaled);
        }
        BasisRow::Translation.write(out, self.position);
    }

    /// Unit forward direction, scale removed.
    pub fn forward(&self) -> DVec3 {
        basis::get_forward(&self.matrix())
    }

    /// Unit up direction, scale removed.
    pub fn up(&self) -> DVec3 {
        basis::get_up(&self.matrix())
    }

    /// Unit right direction, scale removed.
    pub fn right(&self) -> DVec3 {
        basis::get_right(&self.matrix())
    }

    /// Translation as read back from the composed matrix.
    pub fn translation(&self) -> DVec3 {
        basis::get_translation(&self.matrix())
    }

    /// Billboard angles of the rotation, in degrees.
    pub fn billboard_angles(&self) -> DVec3 {
        rotation::calc_degree(self.rotation)
    }
}
