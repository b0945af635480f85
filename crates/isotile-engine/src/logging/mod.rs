//! Logging setup.
//!
//! The engine itself only talks to the `log` facade: paint summaries go to
//! `debug`, per-tile scheduling decisions to `trace`. Binaries and tests pick
//! the backend through [`init_logging`].

mod init;

pub use init::{LoggingConfig, init_logging};
