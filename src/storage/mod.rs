//! Relational storage layer for crier.
//!
//! Users and posts live in two SQLite tables reached through a shared
//! [`sqlx::SqlitePool`]. The pool is opened once at process start and handed
//! to every operation; SQLite owns query planning, indexing, and transaction
//! isolation.
//!
//! ## Components
//!
//! - [`connect`]: open a pool and bootstrap the schema
//! - [`UserRepository`]: CRUD operations for users
//! - [`PostRepository`]: CRUD operations for posts

pub(crate) mod db;
mod posts;
mod users;

pub use db::{connect, init_schema};
pub use posts::PostRepository;
pub use users::UserRepository;
