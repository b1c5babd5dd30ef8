//! Port definitions
//!
//! Services depend only on these traits, not on concrete storage.

mod repository;

pub use repository::UserRepository;
