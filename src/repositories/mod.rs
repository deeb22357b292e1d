mod json_repository;
mod traits;

pub use json_repository::JsonFileRepository;
pub use traits::Repository;
