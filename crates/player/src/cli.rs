//! Command-line interface definition

use clap::{Parser, Subcommand};

use crate::config::StorageScope;

#[derive(Debug, Parser)]
#[command(name = "ttrpgz")]
#[command(about = "Character sheets and campaigns for tabletop role-playing games")]
#[command(
    long_about = "TTRPGZ keeps your character sheets and campaigns at hand from the terminal.\n\n\
Environment Variables:\n\
  TTRPGZ_COGNITO_URL        Identity provider endpoint\n\
  TTRPGZ_CLIENT_ID          Identity provider app client id\n\
  TTRPGZ_API_URL            Backend API base URL (default http://localhost:3000/api)\n\
  TTRPGZ_STORAGE            Token storage scope: local or session\n\
  TTRPGZ_STORAGE_PATH       Token file for local storage\n\
  TTRPGZ_HTTP_TIMEOUT_SECS  HTTP request timeout (default 30)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Where to keep session tokens (overrides TTRPGZ_STORAGE)
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageScope>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Sign in with a username and password
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show who is signed in
    Whoami,
    /// Print a valid access token, refreshing it if needed
    Token,
    /// List your characters
    Characters,
    /// List your campaigns
    Campaigns,
    /// Show a character sheet
    Character {
        /// Character id
        id: String,
    },
    /// Resolve a page path and run the navigation guard
    Navigate {
        /// Page path, e.g. /character/1
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_and_global_storage_flag() {
        let args = Args::try_parse_from([
            "ttrpgz",
            "login",
            "--username",
            "varis",
            "-p",
            "hunter2",
            "--storage",
            "session",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Commands::Login {
                username: "varis".into(),
                password: "hunter2".into()
            }
        );
        assert_eq!(args.storage, Some(StorageScope::Session));
    }

    #[test]
    fn parses_character_id() {
        let args = Args::try_parse_from(["ttrpgz", "character", "7"]).unwrap();
        assert_eq!(args.command, Commands::Character { id: "7".into() });
        assert_eq!(args.storage, None);
    }
}
