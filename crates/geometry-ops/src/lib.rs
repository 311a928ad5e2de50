pub mod bounds;
pub mod edges;
pub mod error;
pub mod instrument;
pub mod points;
pub mod surfaces;
pub mod walk;

pub use error::GeomError;
pub use instrument::InstrumentSink;
pub use walk::ItemWalk;

use std::collections::HashMap;
use std::time::Instant;

use kernel_api::ModelKernel;
use probe_types::{BoundBox, ContourData, PointData, SurfaceData};
use tracing::debug;

/// Geometry extraction over a resolved kernel session.
///
/// Stateless apart from an optional injected instrumentation sink; every
/// request builds its own result containers and nothing is cached between
/// calls. Must not be invoked concurrently against one session handle.
pub struct GeometryOps<'a> {
    instrument: Option<&'a dyn InstrumentSink>,
}

impl GeometryOps<'static> {
    pub fn new() -> Self {
        Self { instrument: None }
    }
}

impl Default for GeometryOps<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GeometryOps<'a> {
    pub fn with_instrument(sink: &'a dyn InstrumentSink) -> Self {
        Self {
            instrument: Some(sink),
        }
    }

    /// The axis-aligned bounding box of a solid model.
    pub fn bounding_box(
        &self,
        filename: &str,
        session: Option<&dyn ModelKernel>,
    ) -> Result<BoundBox, GeomError> {
        self.run("file.bound_box", filename, session, |kernel| {
            bounds::bounding_box(kernel, filename)
        })
    }

    /// Per-surface summaries of a model, in kernel enumeration order.
    pub fn get_surfaces(
        &self,
        filename: &str,
        session: Option<&dyn ModelKernel>,
    ) -> Result<Vec<SurfaceData>, GeomError> {
        self.run("geometry.get_surfaces", filename, session, |kernel| {
            surfaces::collect_surfaces(kernel, filename)
        })
    }

    /// Contour loops with ordered edge data for the requested surfaces.
    /// Fails when `surface_ids` is empty; stale ids are skipped silently.
    pub fn get_edges(
        &self,
        filename: &str,
        surface_ids: &[i32],
        session: Option<&dyn ModelKernel>,
    ) -> Result<Vec<ContourData>, GeomError> {
        self.run("geometry.get_edges", filename, session, |kernel| {
            edges::contours_for_surfaces(kernel, filename, surface_ids)
        })
    }

    /// Transformed point items of the top assembly's direct components,
    /// grouped by sub-model filename. `None` when the top model is not an
    /// assembly.
    pub fn get_points(
        &self,
        session: Option<&dyn ModelKernel>,
    ) -> Result<Option<HashMap<String, Vec<PointData>>>, GeomError> {
        self.run("geometry.get_points", "", session, points::assembly_points)
    }

    /// Precondition check, instrumentation, and timing shared by every
    /// operation. The timer fires on the error path too.
    fn run<T>(
        &self,
        label: &str,
        detail: &str,
        session: Option<&dyn ModelKernel>,
        op: impl FnOnce(&dyn ModelKernel) -> Result<T, GeomError>,
    ) -> Result<T, GeomError> {
        debug!(operation = label, detail = detail, "geometry request");
        if let Some(sink) = self.instrument {
            if detail.is_empty() {
                sink.debug_message(label);
            } else {
                sink.debug_message(&format!("{label}: {detail}"));
            }
        }

        let start = Instant::now();
        let result = match session {
            Some(kernel) => op(kernel),
            None => Err(GeomError::NoSession),
        };

        if let Some(sink) = self.instrument {
            sink.timer_message(label, start.elapsed());
        }
        result
    }
}
