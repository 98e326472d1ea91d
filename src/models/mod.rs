mod field;
mod scheme;

pub use field::*;
pub use scheme::*;
