use tracing::info;

use super::*;

/// Returns movie information given a movie name.
#[poise::command(slash_command, prefix_command, category = "Movies")]
pub async fn name(
    ctx: Context<'_>,
    #[description = "Movie name"]
    #[rest]
    title: String,
) -> CommandResult {
    ctx.defer().await?;

    info!("{} looked up title '{}'", ctx.author().name, title);

    let response = details_reply(&ctx.data().omdb, MovieQuery::Title(title)).await;

    chunk_response(ctx, response).await
}
