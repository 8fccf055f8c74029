pub mod aggregate;
pub mod filter;
pub mod product;

pub use aggregate::*;
pub use filter::*;
pub use product::*;
