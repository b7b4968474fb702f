pub mod configuration;
pub mod discussions;

pub use configuration::{AuthParams, Configuration, RequiredConfiguration};
pub use discussions::*;
