use ::serenity::all::ClientBuilder;
use dotenv::dotenv;
use poise::serenity_prelude as serenity;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use moobot::{Data, Error, config::Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize logging with debug level for our crate
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moobot=debug,warn")),
        )
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_target(true)
        .with_ansi(true)
        .pretty()
        .init();

    dotenv().ok();

    let config = Config::from_env()?;
    let data = Data::new(&config)?;
    let guild_id = config.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: moobot::commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("{} has connected to Discord!", ready.user.name);

                let commands = &framework.options().commands;
                match guild_id {
                    Some(id) => {
                        info!("Registering commands in guild {}", id);
                        poise::builtins::register_in_guild(ctx, commands, serenity::GuildId::new(id))
                            .await?;
                    }
                    None => {
                        info!("Registering commands globally");
                        poise::builtins::register_globally(ctx, commands).await?;
                    }
                }

                Ok(data)
            })
        });

    let mut client = ClientBuilder::new(&config.discord_token, moobot::intents())
        .framework(framework.build())
        .await?;

    client.start().await.map_err(Into::into)
}
