mod category;
mod customer;
pub mod fields;
mod product;

pub use category::*;
pub use customer::*;
pub use product::*;
