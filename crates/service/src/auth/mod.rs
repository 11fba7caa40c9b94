//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Login, token issuance and password hashing shared by hotels and customers.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Principal;
pub use service::AuthService;
