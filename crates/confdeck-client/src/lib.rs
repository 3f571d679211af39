//! confdeck-client - Backend transport for ConfDeck
//!
//! Wire-protocol types, the `Backend` capability trait, and the reqwest
//! implementation speaking the `/api/file` + `/api/restart` contract.

pub mod backend;
pub mod http;
pub mod protocol;

pub use backend::{Backend, LocalBackend};
pub use http::HttpBackend;
pub use protocol::{AckResponse, ErrorBody, FileResponse, SaveRequest};
