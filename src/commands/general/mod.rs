//! General purpose commands that don't talk to OMDb.

/// Submodule defining the `joke` command.
pub mod joke;
