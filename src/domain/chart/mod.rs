//! Chart aggregate: Plotly figure descriptors and the builder that maps a
//! monthly series onto them.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
