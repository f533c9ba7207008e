mod repository;
mod service;

pub use repository::*;
pub use service::*;
