pub mod assessment;
pub mod error;
pub mod reporting;

pub use assessment::*;
pub use error::*;
pub use reporting::*;
