pub mod geom;
pub mod model;

pub use geom::*;
pub use model::*;
