pub mod aggregate;
pub mod merge;
pub mod query;

pub use aggregate::*;
pub use merge::*;
pub use query::*;
