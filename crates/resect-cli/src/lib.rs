//! Library side of the `resect` command-line viewer.

pub mod commands;
pub mod logging;
pub mod render;
