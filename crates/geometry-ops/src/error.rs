use kernel_api::KernelError;

/// Uniform error type for geometry operations.
///
/// Precondition errors are raised before any kernel call; kernel failures
/// are wrapped with their cause preserved. Nothing is retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeomError {
    #[error("no session found")]
    NoSession,

    #[error("no surface ids parameter given")]
    NoSurfaceIds,

    #[error("file '{filename}' must be a solid")]
    NotASolid { filename: String },

    #[error("no outline found for part")]
    OutlineNotFound,

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}
