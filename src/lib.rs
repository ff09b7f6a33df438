//! moobot: a Discord bot for looking up movies on OMDb.

use poise::serenity_prelude as serenity;

pub mod commands;
pub mod config;
pub mod utils;

use commands::{
    general::joke::*,
    movies::{id::*, name::*, search::*},
};
use config::Config;
use utils::omdb::{OmdbClient, OmdbError};

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

/// User data, stored and accessible in all command invocations.
pub struct Data {
    pub omdb: OmdbClient,
    /// Longest message, in characters, the bot will send in one go.
    pub message_limit: usize,
}

impl Data {
    pub fn new(config: &Config) -> Result<Self, OmdbError> {
        Ok(Self {
            omdb: OmdbClient::new(config)?,
            message_limit: config.message_limit,
        })
    }
}

#[poise::command(slash_command, prefix_command, category = "General")]
async fn help(
    ctx: Context<'_>,
    #[description = "Specific command to show help about"]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> CommandResult {
    poise::builtins::help(
        ctx,
        command.as_deref(),
        poise::builtins::HelpConfiguration {
            show_context_menu_commands: true,
            ..Default::default()
        },
    )
    .await
    .map_err(|e| e.into())
}

#[poise::command(prefix_command, hide_in_help)]
async fn register(ctx: Context<'_>) -> Result<(), Error> {
    poise::builtins::register_application_commands_buttons(ctx)
        .await
        .map_err(|e| e.into())
}

/// Every command the bot serves.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        // Default commands
        register(),
        help(),
        // Movie commands
        name(),
        id(),
        search(),
        // General commands
        joke(),
    ]
}

/// Gateway intents the bot needs. Prefix commands require message content.
pub fn intents() -> serenity::GatewayIntents {
    serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT
}
