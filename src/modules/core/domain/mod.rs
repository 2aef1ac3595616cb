//! Domain models for Spyglass configuration

mod device;
mod params;
mod query;

pub use device::Device;
pub use params::{DocsConfig, DocsMode, Params, PathsConfig, WebConfig};
pub use query::QueryTypeConfig;
