//! GraphQL schema and resolvers for crier.
//!
//! Every operation is a thin pass-through: the resolver translates its
//! arguments into a single repository call and returns the result. Not-found
//! lookups surface as null on reads and as errors on writes.
//!
//! ## Schema
//!
//! - **Queries**: `allUsers`, `postById`, `feed`, `draftsByUser`
//! - **Mutations**: `signupUser`, `createDraft`, `updatePost`, `deletePost`

mod schema;
mod server;
mod types;

pub use schema::{CrierSchema, build_schema};
pub use server::run_server;
pub use types::*;
