use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use placeholder_core::{ClientConfig, PlaceholderClient, User};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    tracing::debug!(base_url = %cli.base_url, output_dir = %cli.output_dir.display(), "configured");
    let config = ClientConfig::new(&cli.base_url).with_output_dir(cli.output_dir);
    let client = PlaceholderClient::new(config);

    match cli.command {
        Command::ListUsers => print_json(&client.list_users()?)?,
        Command::User { id } => println!("{}", client.user_by_id(&id)?),
        Command::UserByName { username } => println!("{}", client.user_by_username(&username)?),
        Command::CreateUser { file } => client.create_user(&read_user(&file)?)?,
        Command::UpdateUser { id, file } => client.update_user(&read_user(&file)?, &id)?,
        Command::DeleteUser { id } => client.delete_user(&id)?,
        Command::OpenTodos { user_id } => print_json(&client.list_open_todos(&user_id)?)?,
        Command::Posts { user_id } => print_json(&client.user_posts(&user_id)?)?,
        Command::Comments { post_id } => print_json(&client.post_comments(post_id)?)?,
        Command::LastPostComments { user_id } => {
            let path = client.last_post_comments_to_file(&user_id)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn read_user(path: &Path) -> Result<User> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a user document", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
