use std::ops::ControlFlow;

use kernel_api::{FeatureKind, ItemKind, ItemRef, ModelHandle, ModelKernel};
use probe_types::ModelKind;

use crate::error::GeomError;

/// A reusable walk over all items of one kind in a model.
///
/// Collectors customize the walk with a per-item closure returning a
/// continue/stop signal; the walk enumerates in kernel order, stops
/// immediately on `Break`, and propagates closure failures unchanged.
pub struct ItemWalk {
    kind: ItemKind,
    recurse: bool,
}

impl ItemWalk {
    /// Walk the model's own items only.
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            recurse: false,
        }
    }

    /// Walk the model's items, then descend into each component feature's
    /// sub-model when the model is an assembly.
    pub fn recursive(kind: ItemKind) -> Self {
        Self {
            kind,
            recurse: true,
        }
    }

    /// Run the walk. The action receives the kernel, the model that owns
    /// the current item, and the item itself.
    pub fn run<F>(
        &self,
        kernel: &dyn ModelKernel,
        model: &ModelHandle,
        mut action: F,
    ) -> Result<(), GeomError>
    where
        F: FnMut(&dyn ModelKernel, &ModelHandle, &ItemRef) -> Result<ControlFlow<()>, GeomError>,
    {
        self.walk(kernel, model, &mut action)?;
        Ok(())
    }

    fn walk(
        &self,
        kernel: &dyn ModelKernel,
        model: &ModelHandle,
        action: &mut dyn FnMut(
            &dyn ModelKernel,
            &ModelHandle,
            &ItemRef,
        ) -> Result<ControlFlow<()>, GeomError>,
    ) -> Result<ControlFlow<()>, GeomError> {
        for item in kernel.list_items(model, self.kind)? {
            if action(kernel, model, &item)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        if self.recurse && kernel.model_kind(model)? == ModelKind::Assembly {
            for feature in kernel.list_features(model, FeatureKind::Component)? {
                // Listings can over-report; skip non-components.
                if feature.kind != FeatureKind::Component {
                    continue;
                }
                let descriptor = kernel.feature_model_descriptor(model, feature.id)?;
                let child = kernel.model_from_descriptor(&descriptor)?;
                if self.walk(kernel, &child, action)?.is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}
