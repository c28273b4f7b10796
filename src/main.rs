mod api;
mod commands;
#[cfg(test)]
mod fakes;
mod site;

use clap::{Parser, Subcommand};
use std::sync::Arc;
use tayf_core::{
    config::{self, Config, LoggingConfig},
    i18n::Language,
};
use tayf_feeds::{apod::ApodClient, launches::LaunchClient};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use site::Site;

#[derive(Parser)]
#[command(
    name = "tayf",
    version,
    about = "İTÜ TAYF: bilingual team site with live launch and astronomy-picture widgets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, env = "TAYF_CONFIG", default_value = "tayf.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// Fetch upcoming launches once and print the cards.
    Launches {
        /// Display language (tr, en).
        #[arg(short, long)]
        lang: Option<String>,
        /// Viewport width the card count is computed for.
        #[arg(short, long)]
        width: Option<u32>,
        /// Show the expanded list.
        #[arg(long)]
        all: bool,
    },
    /// Fetch today's astronomy picture once and print it.
    Apod {
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// List text keys that fall back to the primary language.
    Keys {
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// Show effective configuration and probe both feeds.
    Status,
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// The returned guard flushes the log file and must live until exit.
fn init_logging(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    if cfg.dir.is_empty() {
        registry.init();
        return None;
    }

    let appender = tracing_appender::rolling::daily(&cfg.dir, "tayf.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    registry
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Some(guard)
}

/// Language from a CLI flag, or the configured default.
fn pick_lang(flag: Option<&str>, cfg: &Config) -> anyhow::Result<Language> {
    match flag {
        Some(code) => Ok(code.parse()?),
        None => Ok(cfg.site.default_language),
    }
}

/// Build the site over the real feed clients.
fn build_site(cfg: &Config) -> anyhow::Result<Site> {
    let launches = LaunchClient::from_config(&cfg.feeds)?;
    let apod = ApodClient::from_config(&cfg.feeds)?;
    Ok(Site::new(cfg, Arc::new(launches), Arc::new(apod))?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_logging(&cfg.logging);

    match cli.command {
        Commands::Serve => {
            let site = build_site(&cfg)?;
            info!(
                "{}: default language {}, launches feed {}",
                cfg.site.name, cfg.site.default_language, cfg.feeds.launches_url
            );
            api::serve(&cfg.server.addr(), site).await?;
        }
        Commands::Launches { lang, width, all } => {
            let lang = pick_lang(lang.as_deref(), &cfg)?;
            let site = build_site(&cfg)?;
            let width = width.unwrap_or(site.default_width);
            print!("{}", commands::launches(&site, lang, width, all).await);
        }
        Commands::Apod { lang } => {
            let lang = pick_lang(lang.as_deref(), &cfg)?;
            let site = build_site(&cfg)?;
            print!("{}", commands::apod(&site, lang).await);
        }
        Commands::Keys { lang } => {
            let lang: Language = lang.parse()?;
            let table = cfg.site.text_table()?;
            print!("{}", commands::keys(&table, lang));
        }
        Commands::Status => {
            let site = build_site(&cfg)?;
            print!("{}", commands::status(&cli.config, &cfg, &site).await);
        }
    }

    Ok(())
}
