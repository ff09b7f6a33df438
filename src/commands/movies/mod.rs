//! Commands for looking up movies on OMDb, and the plumbing they share for
//! turning an API result into the messages to send.

/// Submodule defining the `id` command.
pub mod id;
/// Submodule defining the `name` command.
pub mod name;
/// Submodule defining the `search` command.
pub mod search;

use tracing::{debug, error};

use crate::utils::chunking::{char_len, split_for_limit};
use crate::utils::format::{format_details, format_search_results};
use crate::utils::omdb::{ApiResponse, MovieQuery, MovieSource, OmdbError};
use crate::{CommandResult, Context};

/// Sent when OMDb couldn't be reached or answered with something unreadable.
pub const FALLBACK_MESSAGE: &str =
    "The movie database is not responding right now. Please let the bot's developer know.";

/// Sent when a search succeeds but has nothing to show.
pub const NO_RESULTS_MESSAGE: &str = "No results found.";

/// Resolves an OMDb result into the text to reply with.
///
/// Records are only formatted when OMDb reports success; otherwise its own error
/// message is passed on verbatim, and a failed request becomes [`FALLBACK_MESSAGE`].
pub fn compose_reply<T>(
    result: Result<ApiResponse<T>, OmdbError>,
    format: impl FnOnce(&T) -> String,
) -> String {
    match result {
        Ok(ApiResponse::Found(record)) => {
            let formatted = format(&record);
            if formatted.trim().is_empty() {
                NO_RESULTS_MESSAGE.to_string()
            } else {
                formatted
            }
        }
        Ok(ApiResponse::Failed(message)) => {
            debug!("OMDb reported an error: {}", message);
            message
        }
        Err(e) => {
            error!("Failed to get a response from OMDb: {}", e);
            FALLBACK_MESSAGE.to_string()
        }
    }
}

/// Looks up a single title and renders the reply.
pub async fn details_reply<S>(source: &S, query: MovieQuery) -> String
where
    S: MovieSource + ?Sized,
{
    compose_reply(source.movie_details(query).await, format_details)
}

/// Searches titles and renders the reply.
pub async fn search_reply<S>(source: &S, term: String) -> String
where
    S: MovieSource + ?Sized,
{
    compose_reply(source.search(term).await, format_search_results)
}

/// Breaks a reply into the messages to send, in order.
///
/// A reply that fits within `limit` characters goes out as one message. Blank
/// messages are dropped since Discord refuses empty messages.
pub fn prepare_messages(response: &str, limit: usize) -> Vec<String> {
    if response.trim().is_empty() {
        return Vec::new();
    }

    if char_len(response) <= limit {
        return vec![response.to_string()];
    }

    let chunks = split_for_limit(response, limit);
    debug!(
        "Reply of {} characters split into {} chunks",
        char_len(response),
        chunks.len()
    );

    chunks
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Sends a potentially long response, split into chunks that respect the
/// configured message limit.
///
/// Chunks are sent one at a time; if a send fails, the ones before it have
/// already been delivered.
pub async fn chunk_response<S: AsRef<str>>(ctx: Context<'_>, response: S) -> CommandResult {
    for message in prepare_messages(response.as_ref(), ctx.data().message_limit) {
        ctx.say(message).await?;
    }

    Ok(())
}
