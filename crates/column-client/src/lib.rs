/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Column client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod blocking;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    COLUMN_API_ADDRESS,
    ClientConfig,
    ColumnClient,
    ColumnError,
    IDEMPOTENCY_HEADER,
    Result,
    new_idempotency_key,
};

// Re-export all types
pub use types::*;
