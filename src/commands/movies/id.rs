use tracing::info;

use super::*;

/// Returns movie information given an IMDb ID (e.g. tt1375666).
#[poise::command(slash_command, prefix_command, category = "Movies")]
pub async fn id(
    ctx: Context<'_>,
    #[description = "IMDb ID"]
    #[rest]
    imdb_id: String,
) -> CommandResult {
    ctx.defer().await?;

    info!("{} looked up IMDb ID '{}'", ctx.author().name, imdb_id);

    let response = details_reply(&ctx.data().omdb, MovieQuery::ImdbId(imdb_id)).await;

    chunk_response(ctx, response).await
}
