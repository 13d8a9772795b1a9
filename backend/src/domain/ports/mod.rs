//! Domain ports for the hexagonal boundary.

mod response_repository;

#[cfg(test)]
pub use response_repository::MockResponseRepository;
pub use response_repository::{ResponseRepository, ResponseRepositoryError};
