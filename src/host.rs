//! Adapter seams between the pure generators and whatever materializes their output.
//!
//! Generators only ever *describe* geometry. A [`SceneHost`] turns ring placements
//! into scene objects, a [`DocumentHost`] turns a finished primitive tree into a
//! document. [`MeshScene`] is the in-memory scene shipped with the crate; the SVG
//! document host lives in `io::svg`.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::vertex::Vertex;
use crate::sketch::Group;
use crate::traits::TransformOps;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;
use std::convert::Infallible;

/// Creates primitive meshes in a 3D scene.
pub trait SceneHost {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether the scene can take new objects right now.
    fn is_ready(&self) -> bool {
        true
    }

    /// Create an icosphere centred on `location` and give it `name`.
    fn add_icosphere(
        &mut self,
        location: Point3<Real>,
        radius: Real,
        subdivisions: usize,
        name: &str,
    ) -> Result<(), Self::Error>;
}

/// Receives a finished tree of 2D primitives.
pub trait DocumentHost {
    type Error: std::error::Error + Send + Sync + 'static;

    fn add_group(&mut self, group: &Group) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum HostError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("host rejected the request: {0}")]
    Host(#[source] E),
}

/// A scene that keeps every created object as a named mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshScene {
    pub objects: Vec<Mesh<String>>,
    closed: bool,
}

impl MeshScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that refuses new objects, like a host with nothing active.
    pub fn closed() -> Self {
        Self { objects: Vec::new(), closed: true }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Mesh<String>> {
        self.objects.iter().find(|m| m.metadata.as_deref() == Some(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().filter_map(|m| m.metadata.as_deref())
    }
}

impl SceneHost for MeshScene {
    type Error = Infallible;

    fn is_ready(&self) -> bool {
        !self.closed
    }

    fn add_icosphere(
        &mut self,
        location: Point3<Real>,
        radius: Real,
        subdivisions: usize,
        name: &str,
    ) -> Result<(), Self::Error> {
        let mesh = Mesh::icosphere(radius, subdivisions, Some(name.to_string()))
            .translate(location.x, location.y, location.z);
        log::trace!("scene object '{name}' at ({}, {}, {})", location.x, location.y, location.z);
        self.objects.push(mesh);
        Ok(())
    }
}

/// The whole scene as one triangle soup, objects in creation order.
impl Triangulated3D for MeshScene {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for object in &self.objects {
            object.visit_triangles(&mut f);
        }
    }
}
