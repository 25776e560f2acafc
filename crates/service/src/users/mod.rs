//! Users module: three-layer architecture (domain, repository, service).
//!
//! The repository is backed by the generic in-memory `EntityStore`.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{NewUserInput, User, UserFields};
pub use repository::UserRepository;
pub use service::UserService;
