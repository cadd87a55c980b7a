use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Affine transformations shared by 3D meshes and 2D primitive groups.
///
/// 2D implementors use the XY block of the matrix and ignore Z.
pub trait TransformOps: Sized + Clone {
    /// Returns a new Self with `matrix` applied after any transform it already carries.
    fn transform(&self, matrix: &Matrix4<Real>) -> Self;

    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self {
        self.transform(&Translation3::from(vector).to_homogeneous())
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Rotates by x_degrees, y_degrees, z_degrees about the origin
    fn rotate(&self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians());

        let rot = rz * ry * rx;
        self.transform(&rot.to_homogeneous())
    }

    /// Rotates about the Z axis passing through `pivot`.
    ///
    /// In a y-down drawing frame a positive angle turns clockwise on screen, the same
    /// convention as the SVG `rotate(a, cx, cy)` transform.
    fn rotate_about(&self, z_deg: Real, pivot: Point3<Real>) -> Self {
        let to_origin = Translation3::from(-pivot.coords).to_homogeneous();
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), z_deg.to_radians())
            .to_homogeneous();
        let back = Translation3::from(pivot.coords).to_homogeneous();
        self.transform(&(back * rz * to_origin))
    }

    /// Scales by scale_x, scale_y, scale_z
    fn scale(&self, sx: Real, sy: Real, sz: Real) -> Self {
        let mat4 = Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz));
        self.transform(&mat4)
    }
}
