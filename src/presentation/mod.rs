pub mod listeners;
pub mod wasm_api;

pub use listeners::*;
pub use wasm_api::*;
