#![warn(missing_docs)]

//! Launch configuration of an Anvil development node
//!
//! Converts a set of launch options into `anvil` command-line arguments and
//! resolves the endpoint the node will listen on.

mod args;
mod config;
mod error;
mod instance;

pub use self::{
    config::{AnvilConfig, PruneHistory},
    error::ConfigError,
    instance::{AnvilInstanceConfig, DEFAULT_HOST, find_free_port},
};
