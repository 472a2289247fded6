//! Pure data types for the order form. No I/O happens here.

pub mod fruit;
pub mod order;
pub mod selection;

pub use fruit::*;
pub use order::*;
pub use selection::*;
