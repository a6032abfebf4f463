pub mod aggregate;
pub mod comparison;
pub mod series;

pub use aggregate::*;
pub use comparison::*;
pub use series::*;
