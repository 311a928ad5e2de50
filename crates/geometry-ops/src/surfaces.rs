use std::ops::ControlFlow;

use kernel_api::{ItemKind, ModelKernel};
use probe_types::SurfaceData;

use crate::error::GeomError;
use crate::walk::ItemWalk;

/// Collect a summary of every surface of a model, in kernel enumeration
/// order. Top level only; sub-assembly surfaces are not visited.
pub fn collect_surfaces(
    kernel: &dyn ModelKernel,
    filename: &str,
) -> Result<Vec<SurfaceData>, GeomError> {
    let model = kernel.model_by_filename(filename)?;

    let mut result = Vec::new();
    ItemWalk::new(ItemKind::Surface).run(kernel, &model, |k, m, item| {
        let area = k.surface_area(m, item.id)?;
        let (min_extent, max_extent) = k.surface_extents(m, item.id)?;
        result.push(SurfaceData {
            surface_id: item.id,
            area,
            min_extent,
            max_extent,
        });
        Ok(ControlFlow::Continue(()))
    })?;

    Ok(result)
}
