//! SeaORM entities, one per collection.

pub mod comment;
pub mod post;
