//! SeaORM entities for the byline schema.

pub mod author;
pub mod post;
