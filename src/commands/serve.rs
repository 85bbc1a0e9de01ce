//! Runs the HTTP server.
//!
//! Configuration is resolved file → environment → flags, then the pool, the
//! gateway and the renderer are built once and handed to the router as
//! state. Nothing is global.

use crate::db::db::{self, Db};
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::logging;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::web::{self, AppState};
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::Path;
use tokio::net::TcpListener;

const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Args, Default)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file (":memory:" for a throwaway database)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Number of pooled database connections
    #[arg(long)]
    pub pool_size: Option<usize>,

    /// Directory with *.html templates overriding the built-in ones
    #[arg(short, long)]
    pub templates: Option<String>,
}

impl ServeArgs {
    /// Layers the flags that were given over `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = self.database {
            config.database.path = Some(database);
        }
        if let Some(pool_size) = self.pool_size {
            config.database.pool_size = pool_size;
        }
        if let Some(templates) = self.templates {
            config.templates = Some(templates);
        }
        config
    }
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    logging::init();
    msg_info!(Message::ServerStarting(env!("CARGO_PKG_VERSION").to_string()));

    let config = args.apply(load_config()?).validate()?;
    let state = build_state(&config)?;

    let address = config.server.address();
    let listener = TcpListener::bind(&address).await?;
    msg_success!(Message::ServerListening(address));

    web::serve(listener, state).await?;
    msg_info!(Message::ServerStopped);
    Ok(())
}

/// Builds the pool, gateway and renderer described by `config`.
pub fn build_state(config: &Config) -> Result<AppState> {
    let db = match config.database.path.as_deref() {
        Some(IN_MEMORY) => {
            msg_warning!(Message::DatabaseInMemory);
            Db::open_in_memory()?
        }
        configured => Db::open(&db::resolve_path(configured)?, config.database.pool_size)?,
    };
    msg_info!(Message::DatabaseOpened(db.location().to_string(), db.pool_size()));

    let view = match config.templates.as_deref() {
        Some(dir) => {
            let view = View::from_dir(Path::new(dir))?;
            msg_info!(Message::TemplatesLoaded(dir.to_string(), view.names().len()));
            view
        }
        None => {
            msg_info!(Message::TemplatesBuiltin);
            View::builtin()
        }
    };

    Ok(AppState::new(Tasks::new(db), view))
}

fn load_config() -> Result<Config> {
    let path = Config::path();
    if path.exists() {
        msg_info!(Message::ConfigLoaded(path.display().to_string()));
    } else {
        msg_info!(Message::ConfigDefaults);
    }
    Config::read()?.apply_env()
}
