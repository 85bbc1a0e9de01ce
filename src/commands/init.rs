//! Writes the default configuration file.
//!
//! The file lands in the platform data directory and can then be edited by
//! hand. An existing file is left alone unless `--force` is given.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,

    /// Remove the configuration file instead of creating it
    #[arg(short, long, conflicts_with = "force")]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let path = Config::path();

    if init_args.delete {
        if path.exists() {
            fs::remove_file(&path)?;
        }
        msg_success!(Message::ConfigDeleted(path.display().to_string()));
        return Ok(());
    }

    if path.exists() && !init_args.force {
        msg_info!(Message::ConfigExists(path.display().to_string()));
        return Ok(());
    }

    let saved = Config::default().save()?;
    msg_success!(Message::ConfigSaved(saved.display().to_string()));
    Ok(())
}
