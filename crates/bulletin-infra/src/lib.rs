//! # Bulletin Infrastructure
//!
//! Concrete implementations of the ports defined in `bulletin-core`.
//! This crate contains the database adapters: the PostgreSQL repository
//! used in production and the in-memory fallback used when no database is
//! configured.

pub mod database;

pub use database::{
    DatabaseConfig, DatabaseConnections, InMemoryPostRepository, PostgresPostRepository,
};
