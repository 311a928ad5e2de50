use crate::types::*;

/// Read-only accessor boundary over an external CAD kernel session.
///
/// Every method is a blocking call into the session. Returned handles are
/// owned by the session and must not be cached beyond the current request.
/// Implementations are expected to serialize access per session; callers
/// must not invoke one session concurrently.
pub trait ModelKernel {
    /// Resolve an already-loaded model by filename.
    fn model_by_filename(&self, filename: &str) -> Result<ModelHandle, KernelError>;

    /// The session's current top-level model.
    fn top_model(&self) -> Result<ModelHandle, KernelError>;

    /// The top-level kind of a model.
    fn model_kind(&self, model: &ModelHandle) -> Result<ModelKind, KernelError>;

    /// The filename a model was loaded from.
    fn model_filename(&self, model: &ModelHandle) -> Result<String, KernelError>;

    /// The kernel-computed axis-aligned outline of a solid, as (min, max)
    /// corners. `None` when the kernel has no outline for the model.
    fn geom_outline(&self, model: &ModelHandle)
        -> Result<Option<(Point3, Point3)>, KernelError>;

    /// All items of the given kind, in kernel enumeration order.
    fn list_items(&self, model: &ModelHandle, kind: ItemKind)
        -> Result<Vec<ItemRef>, KernelError>;

    /// Look up one item by kind and id. `None` when no item of that kind
    /// has the id.
    fn item_by_id(&self, model: &ModelHandle, kind: ItemKind, id: i32)
        -> Result<Option<ItemRef>, KernelError>;

    /// Evaluate the area of a surface item.
    fn surface_area(&self, model: &ModelHandle, surface_id: i32) -> Result<f64, KernelError>;

    /// Evaluate the XYZ extent corners of a surface item.
    fn surface_extents(&self, model: &ModelHandle, surface_id: i32)
        -> Result<(Point3, Point3), KernelError>;

    /// The contour loops of a surface, in kernel order.
    fn list_contours(&self, model: &ModelHandle, surface_id: i32)
        -> Result<Vec<ContourRef>, KernelError>;

    /// The raw kernel traversal code of a contour.
    /// See [`CONTOUR_TRAV_EXTERNAL`] and [`CONTOUR_TRAV_INTERNAL`].
    fn contour_traversal(&self, model: &ModelHandle, contour: &ContourRef)
        -> Result<i32, KernelError>;

    /// Edge ids of a contour, in loop traversal order.
    fn list_contour_edges(&self, model: &ModelHandle, contour: &ContourRef)
        -> Result<Vec<i32>, KernelError>;

    /// Evaluate the length of an edge curve.
    fn edge_length(&self, model: &ModelHandle, edge_id: i32) -> Result<f64, KernelError>;

    /// Evaluate the 3D position on an edge curve at parameter `t` in [0, 1].
    fn edge_point_at(&self, model: &ModelHandle, edge_id: i32, t: f64)
        -> Result<Point3, KernelError>;

    /// Features of a model listed by type, in kernel order. Listings may
    /// over-report; check each [`FeatureRef::kind`].
    fn list_features(&self, model: &ModelHandle, kind: FeatureKind)
        -> Result<Vec<FeatureRef>, KernelError>;

    /// The model descriptor a component feature references.
    fn feature_model_descriptor(&self, model: &ModelHandle, feature_id: i32)
        -> Result<ModelDescriptor, KernelError>;

    /// Resolve the loaded model a descriptor points at.
    fn model_from_descriptor(&self, descriptor: &ModelDescriptor)
        -> Result<ModelHandle, KernelError>;

    /// The placement transform of the component path (component feature ids,
    /// outermost first). With `accumulate_parents` the transform is absolute
    /// in the top assembly's frame rather than local.
    fn placement_transform(
        &self,
        assembly: &ModelHandle,
        component_path: &[i32],
        accumulate_parents: bool,
    ) -> Result<TransformRef, KernelError>;

    /// The raw, untransformed coordinates of a point item.
    fn point_coords(&self, model: &ModelHandle, point_id: i32) -> Result<Point3, KernelError>;

    /// Apply a placement transform to a point. The kernel does the math;
    /// callers never compose transforms themselves.
    fn transform_point(&self, transform: &TransformRef, point: Point3)
        -> Result<Point3, KernelError>;
}
