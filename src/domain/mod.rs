pub mod error;

// Postal dataset records and the unified row
pub mod postal;
