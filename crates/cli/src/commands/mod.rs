pub mod evaluate;
pub mod render;

pub use evaluate::*;
pub use render::*;
