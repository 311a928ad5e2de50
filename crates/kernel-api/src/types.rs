use serde::{Deserialize, Serialize};

// Re-export shared types from probe-types
pub use probe_types::{ItemKind, ModelKind, Point3};

/// Opaque handle to a loaded model in the kernel session.
/// Valid only for the current session; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub(crate) u64);

/// Opaque handle to one contour loop of a surface.
/// Contours carry no kernel-assigned id; they exist only as session objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourRef(pub(crate) u64);

/// Opaque reference to a model descriptor attached to a component feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor(pub(crate) u64);

/// Opaque handle to a kernel-computed placement transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRef(pub(crate) u64);

/// Identifying data of one model item, read off the kernel object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: i32,
    pub name: Option<String>,
}

/// The kind of a feature as the kernel reports it.
///
/// Kernels can over-report when listing by type, so component listings may
/// still contain `Other` entries; callers filter rather than error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Component,
    Other,
}

/// Identifying data of one feature of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRef {
    pub id: i32,
    pub kind: FeatureKind,
}

/// Kernel-native contour traversal code for an outer boundary loop.
pub const CONTOUR_TRAV_EXTERNAL: i32 = 1;
/// Kernel-native contour traversal code for an inner hole loop.
pub const CONTOUR_TRAV_INTERNAL: i32 = 2;

/// Errors from kernel accessor calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("file not found: {filename}")]
    FileNotFound { filename: String },

    #[error("no top model in session")]
    NoTopModel,

    #[error("stale kernel handle")]
    StaleHandle,

    #[error("entity not found: {kind:?} {id}")]
    EntityNotFound { kind: ItemKind, id: i32 },

    #[error("feature not found: {id}")]
    FeatureNotFound { id: i32 },

    #[error("evaluation failed: {reason}")]
    EvaluationFailed { reason: String },

    #[error("kernel error: {message}")]
    Other { message: String },
}
