//! Revenue aggregate: calendar value objects, the monthly series and its generator.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
