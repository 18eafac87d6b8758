pub mod error;
pub mod io;
pub mod math;

pub use error::{Error, Result};
pub use math::monte_carlo;
