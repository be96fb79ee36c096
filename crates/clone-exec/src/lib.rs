pub mod contracts;
pub mod executor;
pub mod submit;

pub use contracts::*;
pub use executor::*;
pub use submit::*;
