//! This module aggregates the building blocks the commands are made of.

/// Splitting long replies to fit Discord's message limit.
pub mod chunking;
/// Rendering OMDb records as message text.
pub mod format;
/// Records and HTTP client for the OMDb API.
pub mod omdb;
