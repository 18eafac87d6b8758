pub mod monte_carlo;

pub use monte_carlo::monte_carlo_integration::{monte_carlo_integration, try_monte_carlo_integration};
