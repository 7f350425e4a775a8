pub mod error;
pub mod extract;
pub mod pagination;
pub mod query;
pub mod response;
pub mod shape;
