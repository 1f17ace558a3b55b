use clap::{Parser, Subcommand};
use todo_core::config::{TODO_API_URL, USER_API_URL};

#[derive(Debug, Parser)]
#[command(name = "todo-views", version, about = "Terminal host for the user list and todo views")]
pub struct Cli {
    /// HTTP timeout in seconds.
    #[arg(long, global = true, default_value_t = 10)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the user list once it has loaded.
    Users {
        /// Base URL serving `/user`. The bundled mock-server listens on its
        /// `PORT` (3000 by default), so point this there when using it.
        #[arg(long, env = "USER_API_URL", default_value = USER_API_URL)]
        api: String,
    },
    /// Manage todos interactively; commands are read from stdin.
    Todos {
        #[arg(long, env = "TODO_API_URL", default_value = TODO_API_URL)]
        api: String,
    },
}
