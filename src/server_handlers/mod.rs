pub mod docs;
pub mod plan;

pub use docs::*;
pub use plan::*;
