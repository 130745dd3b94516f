pub mod geo;
pub mod password;
pub mod validation;

pub use geo::*;
pub use password::*;
pub use validation::*;
