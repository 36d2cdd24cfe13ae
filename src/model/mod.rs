//! Schema model produced by the parser

mod elements;
mod schema;

pub use elements::*;
pub use schema::Schema;
