//! Service layer providing the contact operations on top of `models`.
//! - Functions are generic over `sea_orm::ConnectionTrait`, so callers decide
//!   whether they run on the pool or inside a request-scoped transaction.
//! - "Not found" is reported as `None`; duplicates are detected up front by
//!   [`contact::duplicates`].

pub mod errors;
pub mod contact;
#[cfg(test)]
pub mod test_support;
