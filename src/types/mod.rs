//! Core type definitions
//!
//! Strongly-typed identifiers and request parameters shared by the GraphQL layer,
//! the operation set and both client façades.

pub mod discussion;
pub mod repository;
pub mod search;

pub use discussion::*;
pub use repository::*;
pub use search::*;
