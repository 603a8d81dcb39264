mod config;
mod error;
mod http;
mod provider;
mod receipt;
mod transaction;


pub use config::*;
pub use error::*;
pub use http::*;
pub use provider::*;
pub use receipt::*;
pub use transaction::*;
