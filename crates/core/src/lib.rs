//! `wizcoin-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the purse and demo crates (no IO).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
