use kernel_api::{
    ItemKind, ModelKernel, CONTOUR_TRAV_EXTERNAL, CONTOUR_TRAV_INTERNAL,
};
use probe_types::{ContourData, ContourTraversal, EdgeData};

use crate::error::GeomError;

/// Resolve the contour loops and ordered edges of the requested surfaces.
///
/// Output is flat: ordered by requested surface, then kernel contour order,
/// then loop edge order. Ids that do not resolve to a surface are skipped
/// without error, so callers may pass stale ids.
pub fn contours_for_surfaces(
    kernel: &dyn ModelKernel,
    filename: &str,
    surface_ids: &[i32],
) -> Result<Vec<ContourData>, GeomError> {
    if surface_ids.is_empty() {
        return Err(GeomError::NoSurfaceIds);
    }

    let model = kernel.model_by_filename(filename)?;

    let mut result = Vec::new();
    for &surface_id in surface_ids {
        // Best-effort filter: a stale or unknown id produces nothing.
        if kernel
            .item_by_id(&model, ItemKind::Surface, surface_id)?
            .is_none()
        {
            continue;
        }

        for contour in kernel.list_contours(&model, surface_id)? {
            let traversal = match kernel.contour_traversal(&model, &contour)? {
                CONTOUR_TRAV_EXTERNAL => Some(ContourTraversal::External),
                CONTOUR_TRAV_INTERNAL => Some(ContourTraversal::Internal),
                _ => None,
            };
            let mut data = ContourData::new(surface_id, traversal);

            for edge_id in kernel.list_contour_edges(&model, &contour)? {
                let length = kernel.edge_length(&model, edge_id)?;
                let start = kernel.edge_point_at(&model, edge_id, 0.0)?;
                let end = kernel.edge_point_at(&model, edge_id, 1.0)?;
                data.edges.push(EdgeData {
                    edge_id,
                    length,
                    start,
                    end,
                });
            }

            result.push(data);
        }
    }

    Ok(result)
}
