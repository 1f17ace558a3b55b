use std::io::BufRead;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc::UnboundedSender;
use todo_core::{Component, Timings, TodoClient, TodoEvent, TodoList, UserClient, UserList};
use todo_host::cli::{Cli, Command};
use todo_host::commands::{self, HELP};
use todo_host::render::{render_todos, render_users};
use todo_host::{Executor, Runtime, Signal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let executor = Executor::new(Duration::from_secs(cli.timeout));
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    match cli.command {
        Command::Users { api } => {
            info!(%api, "showing users");
            let list = UserList::new(UserClient::new(&api), Timings::default());
            let runtime = Runtime::<UserList>::new(executor);
            rt.block_on(runtime.run(
                list,
                |list| print!("{}", render_users(&list.view())),
                |list| !list.is_loading(),
            ));
        }
        Command::Todos { api } => {
            info!(%api, "managing todos");
            let list = TodoList::new(TodoClient::new(&api), Timings::default());
            let runtime = Runtime::<TodoList>::new(executor);
            let tx = runtime.sender();
            std::thread::Builder::new()
                .name("stdin".to_string())
                .spawn(move || read_commands(tx))
                .context("failed to spawn stdin reader")?;
            println!("{HELP}");
            rt.block_on(runtime.run(
                list,
                |list| print!("\n{}", render_todos(&list.view())),
                |_| false,
            ));
        }
    }
    Ok(())
}

fn read_commands(tx: UnboundedSender<Signal<TodoEvent>>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read stdin");
                break;
            }
        };
        match commands::parse(&line, now_ms()) {
            Ok(commands::Command::Events(events)) => {
                for event in events {
                    if tx.send(Signal::Event(event)).is_err() {
                        return;
                    }
                }
            }
            Ok(commands::Command::Help) => println!("{HELP}"),
            Ok(commands::Command::Quit) => break,
            Err(e) => eprintln!("{e}"),
        }
    }
    let _ = tx.send(Signal::Quit);
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}
