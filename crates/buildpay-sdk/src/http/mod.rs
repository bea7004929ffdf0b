/*
[INPUT]:  SDK configuration and API endpoint definitions
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing transport behavior
*/

pub mod customer;
pub mod error;
pub mod transaction;
pub(crate) mod transport;

pub use customer::CustomerApi;
pub use error::{BuildPayError, Result};
pub use transaction::TransactionApi;
