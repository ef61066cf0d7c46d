mod auth;
mod client;
pub(crate) mod envelope;
mod path;

pub use client::{RestClient, RestClientBuilder};
pub use path::ResourcePath;
