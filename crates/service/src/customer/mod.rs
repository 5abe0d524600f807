//! Customer module: domain, repository contract, storage adapters, service.
//!
//! The service holds every business rule; repositories and the password
//! encoder are injected by the composition root.

pub mod domain;
pub mod errors;
pub mod hashing;
pub mod repository;
pub mod repo;
pub mod service;

pub use errors::CustomerError;
pub use service::CustomerService;
