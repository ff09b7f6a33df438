use tracing::info;

use super::*;

/// Returns a list of movies given a movie name.
#[poise::command(slash_command, prefix_command, category = "Movies")]
pub async fn search(
    ctx: Context<'_>,
    #[description = "Movie name to search for"]
    #[rest]
    query: String,
) -> CommandResult {
    ctx.defer().await?;

    info!("{} searched for '{}'", ctx.author().name, query);

    let response = search_reply(&ctx.data().omdb, query).await;

    chunk_response(ctx, response).await
}
