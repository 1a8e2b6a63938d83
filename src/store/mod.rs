//! Data access, one module per resource. Every call returns an explicit
//! result (`Vec<T>`, `Option<T>`, or an affected-row count) over a shared
//! error type; handlers decide the status mapping.

pub mod actors;
pub mod bookings;
pub mod movies;
pub mod users;

use thiserror::Error;

/// Failure from the relational store.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] sqlx::Error);
