//! 3D primitives as `Mesh`s

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

/// Unit-circumradius icosahedron: 12 vertices
fn icosahedron_points() -> [Vector3<Real>; 12] {
    // golden ratio
    let phi: Real = (1.0 + (5.0 as Real).sqrt()) * 0.5;
    // normalise so the circum-radius is 1
    let inv_len = (1.0 + phi * phi).sqrt().recip();
    let a = inv_len;
    let b = phi * inv_len;

    [
        Vector3::new(-a, b, 0.0),
        Vector3::new(a, b, 0.0),
        Vector3::new(-a, -b, 0.0),
        Vector3::new(a, -b, 0.0),
        Vector3::new(0.0, -a, b),
        Vector3::new(0.0, a, b),
        Vector3::new(0.0, -a, -b),
        Vector3::new(0.0, a, -b),
        Vector3::new(b, 0.0, -a),
        Vector3::new(b, 0.0, a),
        Vector3::new(-b, 0.0, -a),
        Vector3::new(-b, 0.0, a),
    ]
}

// 20 faces (counter-clockwise when viewed from outside)
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Flat-shaded triangle on the unit sphere scaled by `radius`, wound outward.
fn sphere_triangle(a: Vector3<Real>, b: Vector3<Real>, c: Vector3<Real>, radius: Real) -> [Vertex; 3] {
    let (pa, pb, pc) = (a * radius, b * radius, c * radius);
    let mut normal = (pb - pa).cross(&(pc - pa));
    let centroid = (pa + pb + pc) / 3.0;
    let outward = normal.dot(&centroid) >= 0.0;
    if !outward {
        normal = -normal;
    }
    let normal = normal.try_normalize(Real::EPSILON).unwrap_or_else(|| centroid.normalize());
    let v = |p: Vector3<Real>| Vertex::new(Point3::from(p), normal);
    if outward { [v(pa), v(pb), v(pc)] } else { [v(pa), v(pc), v(pb)] }
}

impl<S: Clone + Debug + Send + Sync> Mesh<S> {
    /// Regular icosahedron with circumradius `radius`
    pub fn icosahedron(radius: Real, metadata: Option<S>) -> Mesh<S> {
        Self::icosphere(radius, 1, metadata)
    }

    /// Geodesic sphere made by repeatedly splitting every icosahedron face in four
    /// and pushing the new vertices out onto the sphere.
    ///
    /// `subdivisions` counts like a modelling tool's ico-sphere level: `1` is the bare
    /// icosahedron (20 faces), each further level quadruples the face count. `0` is
    /// treated as `1`.
    ///
    /// ```
    /// # use shapegen::mesh::Mesh;
    /// let ico: Mesh<()> = Mesh::icosphere(1.0, 2, None);
    /// assert_eq!(ico.triangles.len(), 80);
    /// ```
    pub fn icosphere(radius: Real, subdivisions: usize, metadata: Option<S>) -> Mesh<S> {
        let pts = icosahedron_points();
        let mut faces: Vec<[Vector3<Real>; 3]> = ICOSAHEDRON_FACES
            .iter()
            .map(|&[i, j, k]| [pts[i], pts[j], pts[k]])
            .collect();

        for _ in 1..subdivisions.max(1) {
            faces = faces
                .iter()
                .flat_map(|&[a, b, c]| {
                    let ab = (a + b).normalize();
                    let bc = (b + c).normalize();
                    let ca = (c + a).normalize();
                    [[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]
                })
                .collect();
        }

        let triangles = faces
            .into_iter()
            .map(|[a, b, c]| sphere_triangle(a, b, c, radius))
            .collect();

        Mesh::from_triangles(triangles, metadata)
    }
}
