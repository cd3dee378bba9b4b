pub mod astro;
pub mod calculator;
pub mod error;
pub mod format;
pub mod scenario;
pub mod shell;

pub use calculator::{compute, OrbitQuery, OrbitResult};
pub use error::{Field, InvalidReason, OrbitError};
