//! # Crier - a minimal content-sharing backend
//!
//! Crier lets users share posts (URLs or free-form text) and exposes them
//! through a GraphQL API: list users, fetch posts by id, search and paginate
//! a feed, and list a user's drafts. Storage is a SQLite database reached
//! through sqlx; every resolver is a single call against it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Insert the fixture users and posts
//! crier seed
//!
//! # Serve the GraphQL API (playground at http://localhost:8080)
//! crier serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Runtime configuration
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (User, Post)
//! - [`storage`]: SQLite-backed repositories
//! - [`seed`]: Fixture seeder

/// Command-line interface definitions using clap.
pub mod cli;

/// Runtime configuration shared by the command handlers.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `CrierError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
pub mod graphql;

/// Data models.
///
/// Includes `User`, `Post`, and their create/update payloads.
pub mod model;

/// SQLite-backed storage layer.
///
/// One repository per entity over a shared connection pool.
pub mod storage;

/// One-shot fixture seeder.
pub mod seed;

pub mod logging;
