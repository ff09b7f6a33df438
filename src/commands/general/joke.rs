use tracing::debug;

use crate::{CommandResult, Context};

/// Bad movie jokes. Punchlines sit behind spoiler tags.
const BAD_JOKES: [&str; 8] = [
    "Why did the scarecrow win an Oscar?\n||Because he was outstanding in his field.||",
    "What do you call a fake noodle in a heist movie?\n||An im-pasta.||",
    "Why don't skeletons watch horror movies?\n||They don't have the guts.||",
    "How does Darth Vader like his toast?\n||On the dark side.||",
    "Why did the movie theater get so hot?\n||Too many fans.||",
    "What's a ghost's favourite film genre?\n||Boo-graphies.||",
    "A projectionist walks into a bar.\nThe bartender says 'Long reel?'",
    "Why was the cinema so quiet during the silent film marathon?\n||Nobody had anything to say about it.||",
];

fn pick_joke() -> &'static str {
    BAD_JOKES[rand::random_range(0..BAD_JOKES.len())]
}

/// See for yourself.
#[poise::command(slash_command, prefix_command, category = "General")]
pub async fn joke(ctx: Context<'_>) -> CommandResult {
    let joke = pick_joke();
    debug!("Telling joke: {:?}", joke);

    ctx.say(joke).await?;

    Ok(())
}
