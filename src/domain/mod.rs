pub mod entities;
pub mod schema;
