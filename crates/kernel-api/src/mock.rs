//! MockKernel — deterministic test double implementing ModelKernel.
//!
//! Holds synthetic models built through an explicit builder API, with
//! predictable enumeration order and optional evaluation-failure injection.
//! Used by geometry-ops for unit and scenario testing.

use std::collections::HashMap;

use crate::traits::ModelKernel;
use crate::types::*;

/// A mock surface with pre-evaluated area and extents.
#[derive(Debug, Clone)]
struct MockSurface {
    id: i32,
    area: f64,
    extents: (Point3, Point3),
    contours: Vec<u64>,
}

/// A mock contour loop: raw traversal code plus edge ids in loop order.
#[derive(Debug, Clone)]
struct MockContour {
    model: u64,
    traversal_code: i32,
    edges: Vec<i32>,
}

/// A mock edge, always a straight segment between its endpoints.
#[derive(Debug, Clone)]
struct MockEdge {
    id: i32,
    start: Point3,
    end: Point3,
}

/// A mock named point item.
#[derive(Debug, Clone)]
struct MockPoint {
    id: i32,
    name: String,
    position: Point3,
}

/// A rigid placement: rotation rows applied before translation.
#[derive(Debug, Clone)]
struct MockPlacement {
    rotation: [[f64; 3]; 3],
    translation: [f64; 3],
}

impl MockPlacement {
    fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0, 0.0, 0.0],
        }
    }

    fn apply(&self, p: Point3) -> Point3 {
        let r = &self.rotation;
        Point3::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2] * p.z + self.translation[0],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2] * p.z + self.translation[1],
            r[2][0] * p.x + r[2][1] * p.y + r[2][2] * p.z + self.translation[2],
        )
    }
}

/// A component feature of a mock assembly. Its placement lives in the
/// kernel-wide transform table, keyed by the descriptor slot.
#[derive(Debug, Clone)]
struct MockComponent {
    feature_id: i32,
    descriptor: u64,
}

/// One synthetic model in the session.
#[derive(Debug, Clone)]
struct MockModel {
    filename: String,
    kind: ModelKind,
    outline: Option<(Point3, Point3)>,
    surfaces: Vec<MockSurface>,
    edges: Vec<MockEdge>,
    points: Vec<MockPoint>,
    components: Vec<MockComponent>,
    /// Feature ids that show up in component listings but are not components.
    stray_features: Vec<i32>,
}

impl MockModel {
    fn new(filename: &str, kind: ModelKind) -> Self {
        Self {
            filename: filename.to_string(),
            kind,
            outline: None,
            surfaces: Vec::new(),
            edges: Vec::new(),
            points: Vec::new(),
            components: Vec::new(),
            stray_features: Vec::new(),
        }
    }

    fn surface(&self, id: i32) -> Option<&MockSurface> {
        self.surfaces.iter().find(|s| s.id == id)
    }

    fn edge(&self, id: i32) -> Option<&MockEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

/// Deterministic test double for the kernel session.
pub struct MockKernel {
    next_handle: u64,
    models: HashMap<u64, MockModel>,
    /// Handles in creation order, for stable filename resolution.
    model_order: Vec<u64>,
    contours: HashMap<u64, MockContour>,
    descriptors: HashMap<u64, u64>,
    transforms: HashMap<u64, MockPlacement>,
    top: Option<u64>,
    fail_evaluations: Option<String>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            models: HashMap::new(),
            model_order: Vec::new(),
            contours: HashMap::new(),
            descriptors: HashMap::new(),
            transforms: HashMap::new(),
            top: None,
            fail_evaluations: None,
        }
    }

    fn alloc(&mut self) -> u64 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }

    fn add_model(&mut self, filename: &str, kind: ModelKind) -> ModelHandle {
        let h = self.alloc();
        self.models.insert(h, MockModel::new(filename, kind));
        self.model_order.push(h);
        if self.top.is_none() {
            self.top = Some(h);
        }
        ModelHandle(h)
    }

    /// Add a part model. The first model added becomes the top model.
    pub fn add_part(&mut self, filename: &str) -> ModelHandle {
        self.add_model(filename, ModelKind::Part)
    }

    /// Add an assembly model. The first model added becomes the top model.
    pub fn add_assembly(&mut self, filename: &str) -> ModelHandle {
        self.add_model(filename, ModelKind::Assembly)
    }

    /// Add a drawing model (no solid geometry).
    pub fn add_drawing(&mut self, filename: &str) -> ModelHandle {
        self.add_model(filename, ModelKind::Drawing)
    }

    /// Make `model` the session's top model.
    pub fn set_top_model(&mut self, model: &ModelHandle) {
        self.top = Some(model.0);
    }

    fn model_mut(&mut self, model: &ModelHandle) -> &mut MockModel {
        self.models.get_mut(&model.0).expect("unknown model handle")
    }

    /// Set the kernel-computed outline of a model.
    pub fn set_outline(&mut self, model: &ModelHandle, min: [f64; 3], max: [f64; 3]) {
        self.model_mut(model).outline = Some((
            Point3::new(min[0], min[1], min[2]),
            Point3::new(max[0], max[1], max[2]),
        ));
    }

    /// Add a surface with pre-evaluated area and extent corners.
    pub fn add_surface(
        &mut self,
        model: &ModelHandle,
        id: i32,
        area: f64,
        min: [f64; 3],
        max: [f64; 3],
    ) {
        self.model_mut(model).surfaces.push(MockSurface {
            id,
            area,
            extents: (
                Point3::new(min[0], min[1], min[2]),
                Point3::new(max[0], max[1], max[2]),
            ),
            contours: Vec::new(),
        });
    }

    /// Add a contour loop to a surface. Edges are attached separately.
    pub fn add_contour(
        &mut self,
        model: &ModelHandle,
        surface_id: i32,
        traversal_code: i32,
    ) -> ContourRef {
        let h = self.alloc();
        self.contours.insert(
            h,
            MockContour {
                model: model.0,
                traversal_code,
                edges: Vec::new(),
            },
        );
        let m = self.model_mut(model);
        let surface = m
            .surfaces
            .iter_mut()
            .find(|s| s.id == surface_id)
            .expect("unknown surface id");
        surface.contours.push(h);
        ContourRef(h)
    }

    /// Add a straight edge to a contour, in loop order.
    pub fn add_edge(
        &mut self,
        model: &ModelHandle,
        contour: &ContourRef,
        edge_id: i32,
        start: [f64; 3],
        end: [f64; 3],
    ) {
        self.model_mut(model).edges.push(MockEdge {
            id: edge_id,
            start: Point3::new(start[0], start[1], start[2]),
            end: Point3::new(end[0], end[1], end[2]),
        });
        self.contours
            .get_mut(&contour.0)
            .expect("unknown contour handle")
            .edges
            .push(edge_id);
    }

    /// Add a named point item.
    pub fn add_point(&mut self, model: &ModelHandle, id: i32, name: &str, position: [f64; 3]) {
        self.model_mut(model).points.push(MockPoint {
            id,
            name: name.to_string(),
            position: Point3::new(position[0], position[1], position[2]),
        });
    }

    /// Add a component feature placing `child` with a pure translation.
    pub fn add_component(
        &mut self,
        assembly: &ModelHandle,
        feature_id: i32,
        child: &ModelHandle,
        translation: [f64; 3],
    ) {
        let placement = MockPlacement {
            translation,
            ..MockPlacement::identity()
        };
        self.add_component_placed(assembly, feature_id, child, placement);
    }

    /// Add a component feature placing `child` with rotation rows and a
    /// translation.
    pub fn add_component_with_rotation(
        &mut self,
        assembly: &ModelHandle,
        feature_id: i32,
        child: &ModelHandle,
        rotation: [[f64; 3]; 3],
        translation: [f64; 3],
    ) {
        self.add_component_placed(
            assembly,
            feature_id,
            child,
            MockPlacement {
                rotation,
                translation,
            },
        );
    }

    fn add_component_placed(
        &mut self,
        assembly: &ModelHandle,
        feature_id: i32,
        child: &ModelHandle,
        placement: MockPlacement,
    ) {
        let descriptor = self.alloc();
        self.descriptors.insert(descriptor, child.0);
        self.transforms.insert(descriptor, placement);
        self.model_mut(assembly).components.push(MockComponent {
            feature_id,
            descriptor,
        });
    }

    /// Add a feature that shows up in component listings without being a
    /// component, the way over-reporting kernels do.
    pub fn add_stray_feature(&mut self, assembly: &ModelHandle, feature_id: i32) {
        self.model_mut(assembly).stray_features.push(feature_id);
    }

    /// Make every evaluation call fail with the given reason.
    pub fn fail_evaluations(&mut self, reason: &str) {
        self.fail_evaluations = Some(reason.to_string());
    }

    fn model(&self, model: &ModelHandle) -> Result<&MockModel, KernelError> {
        self.models.get(&model.0).ok_or(KernelError::StaleHandle)
    }

    fn contour(&self, model: &ModelHandle, contour: &ContourRef)
        -> Result<&MockContour, KernelError> {
        match self.contours.get(&contour.0) {
            Some(c) if c.model == model.0 => Ok(c),
            _ => Err(KernelError::StaleHandle),
        }
    }

    fn check_eval(&self) -> Result<(), KernelError> {
        match &self.fail_evaluations {
            Some(reason) => Err(KernelError::EvaluationFailed {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelKernel for MockKernel {
    fn model_by_filename(&self, filename: &str) -> Result<ModelHandle, KernelError> {
        self.model_order
            .iter()
            .find(|h| self.models[h].filename == filename)
            .map(|&h| ModelHandle(h))
            .ok_or_else(|| KernelError::FileNotFound {
                filename: filename.to_string(),
            })
    }

    fn top_model(&self) -> Result<ModelHandle, KernelError> {
        self.top.map(ModelHandle).ok_or(KernelError::NoTopModel)
    }

    fn model_kind(&self, model: &ModelHandle) -> Result<ModelKind, KernelError> {
        Ok(self.model(model)?.kind)
    }

    fn model_filename(&self, model: &ModelHandle) -> Result<String, KernelError> {
        Ok(self.model(model)?.filename.clone())
    }

    fn geom_outline(
        &self,
        model: &ModelHandle,
    ) -> Result<Option<(Point3, Point3)>, KernelError> {
        self.check_eval()?;
        Ok(self.model(model)?.outline)
    }

    fn list_items(
        &self,
        model: &ModelHandle,
        kind: ItemKind,
    ) -> Result<Vec<ItemRef>, KernelError> {
        let m = self.model(model)?;
        let items = match kind {
            ItemKind::Surface => m
                .surfaces
                .iter()
                .map(|s| ItemRef {
                    id: s.id,
                    name: None,
                })
                .collect(),
            ItemKind::Edge => m
                .edges
                .iter()
                .map(|e| ItemRef {
                    id: e.id,
                    name: None,
                })
                .collect(),
            ItemKind::Point => m
                .points
                .iter()
                .map(|p| ItemRef {
                    id: p.id,
                    name: Some(p.name.clone()),
                })
                .collect(),
            ItemKind::Axis | ItemKind::Csys => Vec::new(),
        };
        Ok(items)
    }

    fn item_by_id(
        &self,
        model: &ModelHandle,
        kind: ItemKind,
        id: i32,
    ) -> Result<Option<ItemRef>, KernelError> {
        let m = self.model(model)?;
        let item = match kind {
            ItemKind::Surface => m.surface(id).map(|s| ItemRef {
                id: s.id,
                name: None,
            }),
            ItemKind::Edge => m.edge(id).map(|e| ItemRef {
                id: e.id,
                name: None,
            }),
            ItemKind::Point => m.points.iter().find(|p| p.id == id).map(|p| ItemRef {
                id: p.id,
                name: Some(p.name.clone()),
            }),
            ItemKind::Axis | ItemKind::Csys => None,
        };
        Ok(item)
    }

    fn surface_area(&self, model: &ModelHandle, surface_id: i32) -> Result<f64, KernelError> {
        self.check_eval()?;
        self.model(model)?
            .surface(surface_id)
            .map(|s| s.area)
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Surface,
                id: surface_id,
            })
    }

    fn surface_extents(
        &self,
        model: &ModelHandle,
        surface_id: i32,
    ) -> Result<(Point3, Point3), KernelError> {
        self.check_eval()?;
        self.model(model)?
            .surface(surface_id)
            .map(|s| s.extents)
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Surface,
                id: surface_id,
            })
    }

    fn list_contours(
        &self,
        model: &ModelHandle,
        surface_id: i32,
    ) -> Result<Vec<ContourRef>, KernelError> {
        self.model(model)?
            .surface(surface_id)
            .map(|s| s.contours.iter().map(|&h| ContourRef(h)).collect())
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Surface,
                id: surface_id,
            })
    }

    fn contour_traversal(
        &self,
        model: &ModelHandle,
        contour: &ContourRef,
    ) -> Result<i32, KernelError> {
        Ok(self.contour(model, contour)?.traversal_code)
    }

    fn list_contour_edges(
        &self,
        model: &ModelHandle,
        contour: &ContourRef,
    ) -> Result<Vec<i32>, KernelError> {
        Ok(self.contour(model, contour)?.edges.clone())
    }

    fn edge_length(&self, model: &ModelHandle, edge_id: i32) -> Result<f64, KernelError> {
        self.check_eval()?;
        self.model(model)?
            .edge(edge_id)
            .map(|e| e.start.distance_to(&e.end))
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Edge,
                id: edge_id,
            })
    }

    fn edge_point_at(
        &self,
        model: &ModelHandle,
        edge_id: i32,
        t: f64,
    ) -> Result<Point3, KernelError> {
        self.check_eval()?;
        self.model(model)?
            .edge(edge_id)
            .map(|e| {
                Point3::new(
                    e.start.x + t * (e.end.x - e.start.x),
                    e.start.y + t * (e.end.y - e.start.y),
                    e.start.z + t * (e.end.z - e.start.z),
                )
            })
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Edge,
                id: edge_id,
            })
    }

    fn list_features(
        &self,
        model: &ModelHandle,
        kind: FeatureKind,
    ) -> Result<Vec<FeatureRef>, KernelError> {
        let m = self.model(model)?;
        let mut features: Vec<FeatureRef> = match kind {
            FeatureKind::Component => m
                .components
                .iter()
                .map(|c| FeatureRef {
                    id: c.feature_id,
                    kind: FeatureKind::Component,
                })
                .collect(),
            FeatureKind::Other => Vec::new(),
        };
        // Over-reporting: strays ride along in component listings.
        if kind == FeatureKind::Component {
            features.extend(m.stray_features.iter().map(|&id| FeatureRef {
                id,
                kind: FeatureKind::Other,
            }));
        }
        Ok(features)
    }

    fn feature_model_descriptor(
        &self,
        model: &ModelHandle,
        feature_id: i32,
    ) -> Result<ModelDescriptor, KernelError> {
        self.model(model)?
            .components
            .iter()
            .find(|c| c.feature_id == feature_id)
            .map(|c| ModelDescriptor(c.descriptor))
            .ok_or(KernelError::FeatureNotFound { id: feature_id })
    }

    fn model_from_descriptor(
        &self,
        descriptor: &ModelDescriptor,
    ) -> Result<ModelHandle, KernelError> {
        self.descriptors
            .get(&descriptor.0)
            .map(|&h| ModelHandle(h))
            .ok_or(KernelError::StaleHandle)
    }

    fn placement_transform(
        &self,
        assembly: &ModelHandle,
        component_path: &[i32],
        accumulate_parents: bool,
    ) -> Result<TransformRef, KernelError> {
        self.check_eval()?;
        let m = self.model(assembly)?;
        let first = component_path
            .first()
            .ok_or(KernelError::Other {
                message: "empty component path".to_string(),
            })?;
        let component = m
            .components
            .iter()
            .find(|c| c.feature_id == *first)
            .ok_or(KernelError::FeatureNotFound { id: *first })?;
        // Mock placements are stored absolute; for a direct child the local
        // and accumulated transforms coincide.
        let _ = accumulate_parents;
        Ok(TransformRef(component.descriptor))
    }

    fn point_coords(&self, model: &ModelHandle, point_id: i32) -> Result<Point3, KernelError> {
        self.check_eval()?;
        self.model(model)?
            .points
            .iter()
            .find(|p| p.id == point_id)
            .map(|p| p.position)
            .ok_or(KernelError::EntityNotFound {
                kind: ItemKind::Point,
                id: point_id,
            })
    }

    fn transform_point(
        &self,
        transform: &TransformRef,
        point: Point3,
    ) -> Result<Point3, KernelError> {
        self.check_eval()?;
        let placement = self
            .transforms
            .get(&transform.0)
            .ok_or(KernelError::StaleHandle)?;
        Ok(placement.apply(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(kernel: &mut MockKernel) -> ModelHandle {
        let m = kernel.add_part("bracket.prt");
        kernel.set_outline(&m, [0.0, 0.0, 0.0], [10.0, 5.0, 2.0]);
        kernel.add_surface(&m, 10, 50.0, [0.0, 0.0, 0.0], [10.0, 5.0, 0.0]);
        kernel.add_surface(&m, 20, 20.0, [0.0, 0.0, 0.0], [10.0, 0.0, 2.0]);
        m
    }

    #[test]
    fn resolves_models_by_filename() {
        let mut kernel = MockKernel::new();
        let m = bracket(&mut kernel);
        assert_eq!(kernel.model_by_filename("bracket.prt").unwrap(), m);
        assert!(matches!(
            kernel.model_by_filename("missing.prt"),
            Err(KernelError::FileNotFound { .. })
        ));
    }

    #[test]
    fn first_model_becomes_top() {
        let mut kernel = MockKernel::new();
        let m = bracket(&mut kernel);
        let other = kernel.add_part("other.prt");
        assert_eq!(kernel.top_model().unwrap(), m);
        kernel.set_top_model(&other);
        assert_eq!(kernel.top_model().unwrap(), other);
    }

    #[test]
    fn surfaces_enumerate_in_insertion_order() {
        let mut kernel = MockKernel::new();
        let m = bracket(&mut kernel);
        let items = kernel.list_items(&m, ItemKind::Surface).unwrap();
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn contour_edges_keep_loop_order() {
        let mut kernel = MockKernel::new();
        let m = bracket(&mut kernel);
        let c = kernel.add_contour(&m, 10, CONTOUR_TRAV_EXTERNAL);
        kernel.add_edge(&m, &c, 101, [0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
        kernel.add_edge(&m, &c, 102, [10.0, 0.0, 0.0], [10.0, 5.0, 0.0]);
        assert_eq!(kernel.list_contour_edges(&m, &c).unwrap(), vec![101, 102]);
        assert_eq!(kernel.edge_length(&m, 101).unwrap(), 10.0);
        let mid = kernel.edge_point_at(&m, 101, 0.5).unwrap();
        assert_eq!(mid, Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn component_placement_transforms_points() {
        let mut kernel = MockKernel::new();
        let asm = kernel.add_assembly("top.asm");
        let child = kernel.add_part("leg.prt");
        kernel.add_component(&asm, 7, &child, [1.0, 2.0, 3.0]);

        let features = kernel.list_features(&asm, FeatureKind::Component).unwrap();
        assert_eq!(features.len(), 1);
        let descr = kernel.feature_model_descriptor(&asm, 7).unwrap();
        assert_eq!(kernel.model_from_descriptor(&descr).unwrap(), child);

        let tf = kernel.placement_transform(&asm, &[7], true).unwrap();
        let p = kernel
            .transform_point(&tf, Point3::new(0.5, 0.5, 0.5))
            .unwrap();
        assert_eq!(p, Point3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn stray_features_ride_along_in_component_listings() {
        let mut kernel = MockKernel::new();
        let asm = kernel.add_assembly("top.asm");
        let child = kernel.add_part("leg.prt");
        kernel.add_component(&asm, 7, &child, [0.0, 0.0, 0.0]);
        kernel.add_stray_feature(&asm, 99);

        let features = kernel.list_features(&asm, FeatureKind::Component).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1].kind, FeatureKind::Other);
    }

    #[test]
    fn failure_injection_poisons_evaluations() {
        let mut kernel = MockKernel::new();
        let m = bracket(&mut kernel);
        kernel.fail_evaluations("kernel went away");
        assert!(matches!(
            kernel.surface_area(&m, 10),
            Err(KernelError::EvaluationFailed { .. })
        ));
        assert!(matches!(
            kernel.geom_outline(&m),
            Err(KernelError::EvaluationFailed { .. })
        ));
    }
}
