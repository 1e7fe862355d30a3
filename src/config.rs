//! Settings schema and loading.
//!
//! Everything tunable at runtime lives in the `Settings` tree; `load.rs`
//! pulls it from the config file and environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
