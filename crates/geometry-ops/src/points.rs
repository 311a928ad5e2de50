use std::collections::HashMap;

use kernel_api::{FeatureKind, ItemKind, ModelKernel};
use probe_types::{ModelKind, PointData};

use crate::error::GeomError;

/// Resolve every point item of the top assembly's direct components into
/// the assembly's coordinate frame, grouped by sub-model filename.
///
/// Returns `None` when the top model is not an assembly. Any kernel failure
/// aborts the whole operation with no partial result.
pub fn assembly_points(
    kernel: &dyn ModelKernel,
) -> Result<Option<HashMap<String, Vec<PointData>>>, GeomError> {
    let top = kernel.top_model()?;
    if kernel.model_kind(&top)? != ModelKind::Assembly {
        return Ok(None);
    }

    let mut result = HashMap::new();
    for feature in kernel.list_features(&top, FeatureKind::Component)? {
        // Listings can over-report; skip non-components.
        if feature.kind != FeatureKind::Component {
            continue;
        }

        let descriptor = kernel.feature_model_descriptor(&top, feature.id)?;
        let child = kernel.model_from_descriptor(&descriptor)?;

        // Absolute placement of the direct child: single-element path,
        // parent accumulation on.
        let transform = kernel.placement_transform(&top, &[feature.id], true)?;

        let mut group = Vec::new();
        for item in kernel.list_items(&child, ItemKind::Point)? {
            let raw = kernel.point_coords(&child, item.id)?;
            let location = kernel.transform_point(&transform, raw)?;
            group.push(PointData {
                name: item.name.unwrap_or_default(),
                location,
            });
        }

        // Keyed by filename alone: a later component referencing the same
        // file overwrites the earlier group.
        result.insert(kernel.model_filename(&child)?, group);
    }

    Ok(Some(result))
}
