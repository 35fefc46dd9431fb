//! CLI command implementations
//!
//! Wires configuration, the event payload, the git workspace, and the
//! hosting service into the backport engine.

mod run;

pub use run::{run_backport_command, BackportArgs};
