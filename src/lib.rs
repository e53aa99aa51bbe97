// Library exports for the CLI and the integration tests
pub mod batch;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod icon;
pub mod layout;
pub mod output;
pub mod source;
pub mod splash;
pub mod targets;
