//! Service layer for the users resource.
//! - `storage` holds the generic in-memory entity store.
//! - `users` adds the domain types, input validation and the business service.
//! - Errors are reported through `errors::ServiceError`.

pub mod errors;
pub mod pagination;
pub mod storage;
pub mod users;
