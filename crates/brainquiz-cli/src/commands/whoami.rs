//! The `brainquiz whoami` command.

use std::path::PathBuf;

use anyhow::Result;

use brainquiz_sources::config::load_config_from;
use brainquiz_sources::{check_session, SourceError};

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let client = config.api_client()?.ok_or(SourceError::NotConfigured)?;

    let check = check_session(&client, &config.cache(), config.offline_grace()).await?;
    let user = &check.user;
    let name = user.nome.as_deref().unwrap_or("unknown user");
    match &user.email {
        Some(email) => println!("Logged in as {name} <{email}>"),
        None => println!("Logged in as {name}"),
    }
    if user.is_admin() {
        println!("Role: administrator");
    }
    if check.offline {
        println!("(offline: backend unreachable, using cached login)");
    }
    Ok(())
}
