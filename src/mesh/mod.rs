//! `Mesh` struct: a triangle soup with a lazily computed bounding box.

use crate::float_types::{
    Real,
    parry3d::bounding_volume::Aabb,
};
use crate::mesh::vertex::Vertex;
use crate::traits::TransformOps;
use crate::triangulated::Triangulated3D;
use nalgebra::{Matrix4, Point3};
use std::{fmt::Debug, sync::OnceLock};

pub mod shapes;
pub mod vertex;

#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// Triangles, counter-clockwise when seen from outside
    pub triangles: Vec<[Vertex; 3]>,

    /// Lazily calculated AABB that spans `triangles`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub const fn new() -> Self {
        Mesh { triangles: Vec::new(), bounding_box: OnceLock::new(), metadata: None }
    }

    /// Build a Mesh from an existing triangle list
    pub fn from_triangles(triangles: Vec<[Vertex; 3]>, metadata: Option<S>) -> Self {
        Mesh { triangles, bounding_box: OnceLock::new(), metadata }
    }

    /// Helper to collect all vertices of the mesh.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.triangles.iter().flat_map(|t| t.iter().copied()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a [`parry3d::bounding_volume::Aabb`] indicating the 3D bounds of all `triangles`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut vertices = self.triangles.iter().flatten();
            let Some(first) = vertices.next() else {
                return Aabb::new(Point3::origin(), Point3::origin());
            };
            let (mins, maxs) = vertices.fold((first.pos, first.pos), |(lo, hi), v| {
                (lo.inf(&v.pos), hi.sup(&v.pos))
            });
            Aabb::new(mins, maxs)
        })
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }
}

impl<S: Clone + Send + Sync + Debug> TransformOps for Mesh<S> {
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        // singular matrices flatten the mesh; normals are then left as they were
        let normal_matrix = mat.try_inverse().map(|inv| inv.transpose());
        let mut mesh = self.clone();

        for tri in &mut mesh.triangles {
            for vert in tri.iter_mut() {
                vert.pos = mat.transform_point(&vert.pos);
                if let Some(n) = &normal_matrix {
                    let normal = n.transform_vector(&vert.normal);
                    vert.normal = normal.try_normalize(Real::EPSILON).unwrap_or(vert.normal);
                }
            }
        }

        mesh.invalidate_bounding_box();
        mesh
    }
}

impl<S: Clone + Send + Sync + Debug> Triangulated3D for Mesh<S> {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for tri in &self.triangles {
            f(*tri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn translation_moves_the_bounding_box() {
        let ico: Mesh<()> = Mesh::icosahedron(1.0, None);
        let before = ico.bounding_box();
        let moved = ico.translate(3.0, -2.0, 0.5);
        let after = moved.bounding_box();
        assert!((after.mins - before.mins - Vector3::new(3.0, -2.0, 0.5)).norm() < 1e-12);
        assert_eq!(moved.triangle_count(), 20);
    }

    #[test]
    fn scaling_keeps_unit_normals() {
        let ico: Mesh<()> = Mesh::icosahedron(1.0, None).scale(2.0, 1.0, 0.5);
        for v in ico.vertices() {
            assert!((v.normal.norm() - 1.0).abs() < 1e-9);
        }
    }
}
