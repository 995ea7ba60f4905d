pub mod activity_filter;
pub mod activity_input;
pub mod activity_output;

// Re-exports
pub use activity_filter::*;
pub use activity_input::*;
pub use activity_output::*;
