use std::path::PathBuf;

use clap::{Parser, Subcommand};
use placeholder_core::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// API root, without a trailing path.
    #[clap(long, env = "PLACEHOLDER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for files written by `last-post-comments`.
    #[clap(long, env = "PLACEHOLDER_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all users.
    ListUsers,

    /// Print the raw JSON of one user.
    User { id: String },

    /// Print the raw JSON of the users with this username.
    UserByName { username: String },

    /// Create a user from a JSON file.
    CreateUser { file: PathBuf },

    /// Replace a user with the contents of a JSON file.
    UpdateUser { id: String, file: PathBuf },

    /// Delete a user.
    DeleteUser { id: String },

    /// List the todos of a user that are not completed yet.
    #[clap(alias = "todos")]
    OpenTodos { user_id: String },

    /// List the posts of a user.
    Posts { user_id: String },

    /// List the comments on a post.
    Comments { post_id: u64 },

    /// Save the comments on the user's latest post to the output directory.
    LastPostComments { user_id: String },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["placeholder", "list-users"]).unwrap();
        assert_eq!(cli.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(cli.output_dir, PathBuf::from("Files"));
        assert!(matches!(cli.command, Command::ListUsers));
    }

    #[test]
    fn parses_last_post_comments() {
        let cli = Cli::try_parse_from([
            "placeholder",
            "--base-url",
            "http://localhost:3000",
            "last-post-comments",
            "42",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://localhost:3000");
        assert!(matches!(&cli.command, Command::LastPostComments { user_id } if user_id == "42"));
    }

    #[test]
    fn comments_needs_numeric_post_id() {
        assert!(Cli::try_parse_from(["placeholder", "comments", "seven"]).is_err());
    }
}
