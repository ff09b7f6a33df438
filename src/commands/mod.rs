//! This module aggregates all the command modules for the bot.

/// General purpose commands (e.g., joke).
pub mod general;
/// Commands for looking up movies on OMDb.
pub mod movies;
