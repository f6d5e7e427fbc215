//! Library side of the `apigw-proxy` binary: settings, file loading and
//! the `check` command.

pub mod check;
pub mod config;
pub mod source;
