use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use taskz::api::{CmdMessage, CmdResult, MessageLevel, Response, TaskzApi};
use taskz::config::TaskzConfig;
use taskz::error::{Result, TaskzError};
use taskz::index::ListedTask;
use taskz::store::fs::FileStore;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const HOME_ENV: &str = "TASKZ_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);
    let mut api = init_api(&cli)?;

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            let response = api.submit(line);
            print_response(&response);
            if response.is_shutdown() {
                break;
            }
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.map_err(TaskzError::Io)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = api.submit(line);
        print_response(&response);
        if response.is_shutdown() {
            break;
        }
    }
    Ok(())
}

fn install_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "taskz", "taskz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TaskzError::Store("Could not determine data directory".to_string()))
}

fn init_api(cli: &Cli) -> Result<TaskzApi<FileStore>> {
    let dir = data_dir()?;
    let config = match TaskzConfig::load_or_init(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config");
            TaskzConfig::default()
        }
    };
    let data_file = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.data_file_in(&dir));
    let mut api = TaskzApi::new(FileStore::new(data_file));
    debug!(data_file = %api.store().path().display(), "session starting");
    if config.load_on_start {
        if let Err(e) = api.load() {
            print_messages(&[
                CmdMessage::warning(e.to_string()),
                CmdMessage::warning("Starting with an empty list."),
            ]);
        }
    }
    Ok(api)
}

fn print_response(response: &Response) {
    match response {
        Response::Message(result) => print_result(result),
        Response::Error(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        Response::Shutdown => println!("{}", response.text()),
    }
}

fn print_result(result: &CmdResult) {
    print_tasks(&result.listed_tasks);
    print_messages(&result.messages);
}

fn print_tasks(tasks: &[ListedTask]) {
    for entry in tasks {
        let line = entry.to_string();
        if entry.task.is_high_priority() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
