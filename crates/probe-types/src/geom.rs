use serde::{Deserialize, Serialize};

/// A location in 3D model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another point.
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// The smallest axis-aligned box containing a solid's geometry.
/// Derived once per request from the kernel's outline; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundBox {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Whether the point lies inside or on the box.
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.y >= self.min.y
            && p.z >= self.min.z
            && p.x <= self.max.x
            && p.y <= self.max.y
            && p.z <= self.max.z
    }
}

/// One topological edge of a contour loop.
/// Endpoints are evaluated at curve parameters 0.0 and 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub edge_id: i32,
    pub length: f64,
    pub start: Point3,
    pub end: Point3,
}

/// Which side of a surface region a contour loop bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContourTraversal {
    /// Outer boundary of the surface region.
    External,
    /// Inner hole boundary.
    Internal,
}

/// An ordered closed loop of edges bounding a region of a surface.
///
/// `traversal` stays `None` when the kernel reports a code mapping to
/// neither recognized direction. Edge order is loop traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourData {
    pub surface_id: i32,
    pub traversal: Option<ContourTraversal>,
    pub edges: Vec<EdgeData>,
}

impl ContourData {
    pub fn new(surface_id: i32, traversal: Option<ContourTraversal>) -> Self {
        Self {
            surface_id,
            traversal,
            edges: Vec::new(),
        }
    }
}

/// Summary of one surface entity of a solid.
/// Extents are kernel-evaluated; min ≤ max is expected but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceData {
    pub surface_id: i32,
    pub area: f64,
    pub min_extent: Point3,
    pub max_extent: Point3,
}

/// A named point entity resolved into its owning sub-model's frame.
/// The name may be empty and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointData {
    pub name: String,
    pub location: Point3,
}
