/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account_numbers;
pub mod bank_accounts;
pub mod client;
pub mod counterparties;
pub mod entities;
pub mod error;
pub mod institutions;
pub mod transfers;

pub use error::{ApiError, ColumnError, Result};

pub use client::{
    COLUMN_API_ADDRESS, ClientConfig, ColumnClient, IDEMPOTENCY_HEADER, new_idempotency_key,
};
