pub mod bytes;
pub mod errors;
pub mod uint;

// Re-export error types for public API
pub use errors::DecodeError;
