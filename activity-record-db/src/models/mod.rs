pub mod identifiable;
pub mod activity;

// Re-exports
pub use identifiable::*;
pub use activity::*;
