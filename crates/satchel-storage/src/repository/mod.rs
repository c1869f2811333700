//! # Repositories
//!
//! SQLite-backed repository implementations. One repository exists: the
//! key-value store behind the cart snapshot.

pub mod kv;
