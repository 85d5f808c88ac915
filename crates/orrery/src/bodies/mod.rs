pub mod catalog;
pub mod manifest;

pub use catalog::{BodyDesc, BodyFacts};
pub use manifest::SystemManifest;
