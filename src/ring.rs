//! Circular arrays of icospheres.
//!
//! Point `i` of an `n`-point ring of radius `r` sits at
//! `(r·sin(2πi/n), r·cos(2πi/n), 0)`: point 0 is on the +Y axis and the ring runs
//! clockwise when seen from +Z.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::host::{HostError, SceneHost};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;
pub const MIN_RADIUS: Real = 0.01;
pub const MAX_RADIUS: Real = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingOptions {
    /// Number of icospheres
    pub count: usize,
    /// Radius of the circle they sit on
    pub radius: Real,
    /// Radius of every icosphere
    pub sphere_radius: Real,
    /// Ico-sphere level, 1 being a bare icosahedron
    pub subdivisions: usize,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self { count: 5, radius: 5.0, sphere_radius: 1.0, subdivisions: 2 }
    }
}

impl RingOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_COUNT..=MAX_COUNT).contains(&self.count) {
            return Err(ValidationError::RingCount {
                got: self.count,
                min: MIN_COUNT,
                max: MAX_COUNT,
            });
        }
        if !(MIN_RADIUS..=MAX_RADIUS).contains(&self.radius) {
            return Err(ValidationError::RingRadius {
                got: self.radius,
                min: MIN_RADIUS,
                max: MAX_RADIUS,
            });
        }
        if !(self.sphere_radius.is_finite() && self.sphere_radius > 0.0) {
            return Err(ValidationError::NonPositive {
                name: "sphere radius",
                value: self.sphere_radius,
            });
        }
        Ok(())
    }
}

/// One requested icosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub index: usize,
    pub name: String,
    pub location: Point3<Real>,
}

/// `count` points evenly spaced on a circle of `radius` in the XY plane.
///
/// ```
/// # use shapegen::ring::ring_points;
/// let pts = ring_points(4, 2.0);
/// assert!((pts[0].y - 2.0).abs() < 1e-12);
/// assert!((pts[1].x - 2.0).abs() < 1e-12);
/// ```
pub fn ring_points(count: usize, radius: Real) -> Vec<Point3<Real>> {
    if count == 0 {
        return Vec::new();
    }
    let angle_inc = TAU / count as Real;
    (0..count)
        .map(|i| {
            let angle = angle_inc * i as Real;
            Point3::new(radius * angle.sin(), radius * angle.cos(), 0.0)
        })
        .collect()
}

/// Validated, named placements for every icosphere of the ring.
pub fn placements(options: &RingOptions) -> Result<Vec<Placement>, ValidationError> {
    options.validate()?;
    Ok(ring_points(options.count, options.radius)
        .into_iter()
        .enumerate()
        .map(|(index, location)| Placement { index, name: format!("Ico {index}"), location })
        .collect())
}

/// Ask `host` to create the ring. Returns the number of objects created.
pub fn place_icospheres<H: SceneHost>(
    host: &mut H,
    options: &RingOptions,
) -> Result<usize, HostError<H::Error>> {
    if !host.is_ready() {
        return Err(ValidationError::NoActiveScene.into());
    }
    let placements = placements(options)?;
    log::debug!(
        "placing {} icospheres on a ring of radius {}",
        placements.len(),
        options.radius
    );
    for placement in &placements {
        host.add_icosphere(
            placement.location,
            options.sphere_radius,
            options.subdivisions,
            &placement.name,
        )
        .map_err(HostError::Host)?;
    }
    Ok(placements.len())
}
