use kernel_api::ModelKernel;
use probe_types::BoundBox;

use crate::error::GeomError;

/// Resolve a model and convert its kernel-computed outline into a box.
pub fn bounding_box(kernel: &dyn ModelKernel, filename: &str) -> Result<BoundBox, GeomError> {
    let model = kernel.model_by_filename(filename)?;

    if !kernel.model_kind(&model)?.is_solid() {
        return Err(GeomError::NotASolid {
            filename: kernel.model_filename(&model)?,
        });
    }

    let (min, max) = kernel
        .geom_outline(&model)?
        .ok_or(GeomError::OutlineNotFound)?;

    Ok(BoundBox::new(min, max))
}
