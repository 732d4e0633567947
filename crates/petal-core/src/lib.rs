pub mod constants;
pub mod field;
pub mod surface;

pub use constants::*;
pub use field::*;
pub use surface::*;
