// nxs-net/src/lib.rs
pub mod http;
pub mod transport;
pub mod validation;

pub use http::HttpTransport;
pub use nxs_common::{
    config::{Config, Credentials},
    error::{NxsError, Result},
};
pub use transport::{Payload, Transport};
pub use validation::validate_url;
