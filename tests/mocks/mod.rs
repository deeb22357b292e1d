mod mock_repository;

#[allow(unused_imports)]
pub use mock_repository::MockRepository;
