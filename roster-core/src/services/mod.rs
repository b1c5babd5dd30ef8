//! Service layer - use cases over the repository port

mod seed;
mod user;

pub use seed::{SeedReport, SeedService};
pub use user::{Registration, RegistrySummary, UserService};
