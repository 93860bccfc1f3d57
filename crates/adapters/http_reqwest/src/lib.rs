//! # wordclock-adapter-http-reqwest
//!
//! HTTP transport for the word clock, built on `reqwest`.
//!
//! ## Responsibilities
//! - Route each request to the station or access-point address of the device
//! - POST JSON bodies with `Content-Type: application/json`
//! - Turn status codes and bodies into domain outcomes
//!
//! ## Dependency rule
//! Same as other adapters: depends on `wordclock-app` and `wordclock-domain`.

pub mod config;
pub mod error;
pub mod transport;

pub use config::HttpConfig;
pub use error::HttpError;
pub use transport::ReqwestTransport;
