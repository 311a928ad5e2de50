pub mod mock;
pub mod traits;
pub mod types;

pub use mock::MockKernel;
pub use traits::*;
pub use types::*;
