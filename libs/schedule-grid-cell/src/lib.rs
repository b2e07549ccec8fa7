pub mod models;
pub mod services;

// Re-export the grid surface for external use
pub use models::*;
pub use services::*;
