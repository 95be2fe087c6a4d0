pub mod chart;
pub mod errors;
pub mod logging;
pub mod revenue;
