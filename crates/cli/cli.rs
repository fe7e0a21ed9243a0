use browser::{Topic, TypeFilter};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(about = "Browse and manage lab equipment, staff and lab assistants")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, short = 'V')]
    pub version: bool,

    #[arg(long, global = true)]
    pub debug: bool,

    /// Answer yes to every confirmation
    #[arg(long, short, global = true)]
    pub yes: bool,
}

fn parse_topic(value: &str) -> Result<Topic, String> {
    Topic::parse(value).map_err(|e| e.to_string())
}

fn parse_type(value: &str) -> Result<TypeFilter, String> {
    value.parse::<TypeFilter>().map_err(|e| e.to_string())
}

#[derive(Subcommand, strum::Display, Debug, Clone)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        url: Option<String>,

        #[arg(long, short)]
        username: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Search records of a topic
    Search {
        #[arg(value_parser = parse_topic)]
        topic: Option<Topic>,

        #[arg(long, short)]
        query: Option<String>,

        #[arg(long = "type", short = 't', value_parser = parse_type)]
        equipment_type: Option<TypeFilter>,

        #[arg(long)]
        json: bool,
    },
    /// List the equipment types usable with `--type`
    Types,
    /// Show the details of a record
    Open {
        #[arg(value_parser = parse_topic)]
        topic: Topic,

        id: String,
    },
    /// Delete a record; deleting staff frees their equipment
    Delete {
        #[arg(value_parser = parse_topic)]
        topic: Topic,

        id: String,
    },
    /// Assign a staff member to an equipment
    Assign {
        equipment_id: String,

        /// Narrow the staff list
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Interactive browser
    Browse {
        #[arg(value_parser = parse_topic)]
        topic: Option<Topic>,
    },
    Config {
        #[command(subcommand)]
        subcommands: ConfigCommands,
    },
}

#[derive(Subcommand, strum::Display, Debug, Clone)]
pub enum ConfigCommands {
    Reset,
    Show,
}

impl Commands {
    /// Whether the command has to talk to the API, and so needs a base URL.
    pub fn needs_api(&self) -> bool {
        !matches!(self, Self::Types | Self::Logout)
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn command(args: &[&str]) -> Commands {
        let mut argv = vec!["labdesk"];
        argv.extend_from_slice(args);

        Args::parse_from(argv).command.unwrap()
    }

    #[test]
    fn local_commands_skip_api_setup() {
        assert!(!command(&["types"]).needs_api());
        assert!(!command(&["logout"]).needs_api());
        assert!(command(&["search", "staff"]).needs_api());
        assert!(command(&["config", "show"]).needs_api());
    }
}
