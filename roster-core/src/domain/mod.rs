//! Core domain entities
//!
//! Plain data and the in-memory registry that holds it. No I/O here.

mod registry;
pub mod result;
mod user;

pub use registry::UserRegistry;
pub use user::{User, DEFAULT_EMAIL};
