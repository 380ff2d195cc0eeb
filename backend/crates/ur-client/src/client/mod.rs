pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod wire;

pub use api::RegistryApi;
pub use client::RegistryClient;
pub use error::{ClientError, Result as ClientResult};
