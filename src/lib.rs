//! Greed (workspace facade crate).
//!
//! Re-exports the workspace crates as `greed::{core,input,term,types}` so the
//! binary, benches and integration tests have one import root while the
//! implementation lives in dedicated crates under `crates/`.

pub use greed_core as core;
pub use greed_input as input;
pub use greed_term as term;
pub use greed_types as types;
