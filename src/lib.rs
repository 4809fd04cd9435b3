//! Klondike solitaire (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so front ends and tests
//! can depend on `klondike::{core, engine, adapter, types}` alone.

pub use klondike_adapter as adapter;
pub use klondike_core as core;
pub use klondike_engine as engine;
pub use klondike_types as types;
