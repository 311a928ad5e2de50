use serde::{Deserialize, Serialize};

/// The kinds of model items the kernel can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    Surface,
    Edge,
    Point,
    Axis,
    Csys,
}

/// The top-level kind of a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModelKind {
    /// A single manufactured part.
    Part,
    /// Placed component sub-models, each with its own transform.
    Assembly,
    /// A 2D drawing; carries no solid geometry.
    Drawing,
}

impl ModelKind {
    /// Parts and assemblies both carry solid geometry; drawings do not.
    pub fn is_solid(&self) -> bool {
        matches!(self, ModelKind::Part | ModelKind::Assembly)
    }
}
