//! Data Transfer Objects for REST request/response serialization.
//!
//! Contracts are kept separate from the storage entities in
//! [`crate::domain`]; each direction has an explicit `From` mapping.

pub mod quiz_dto;

pub use quiz_dto::*;
