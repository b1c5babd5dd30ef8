//! Adapter implementations
//!
//! Adapters implement the port traits:
//! - In-process memory for the UserRepository port

pub mod memory;
