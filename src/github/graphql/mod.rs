pub mod category;
pub mod discussion;
pub mod graphql_types;
pub mod label;
pub mod search;
