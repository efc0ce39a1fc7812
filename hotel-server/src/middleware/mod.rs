//! HTTP middleware

mod logging;

pub use logging::{REQUEST_ID_HEADER, logging_middleware};
