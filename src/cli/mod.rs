// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use termcolor::StandardStream;
use tracing::debug;

pub mod args;
pub mod bookmark_commands;
pub mod completion;
pub mod error;

/// Runs `cli`, opening the store only for commands that need it
pub fn execute_command(stderr: StandardStream, cli: Cli, settings: &Settings) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    match &cli.command {
        Some(Commands::Completion { shell }) => return handle_completion(shell),
        Some(Commands::CreateDb { path }) => return bookmark_commands::create_db(path),
        None => return Ok(()),
        Some(_) => {}
    }

    debug!("Opening store at {}", settings.db_url);
    let services = ServiceContainer::new(settings)?;
    execute_command_with_services(stderr, cli, &services)
}

pub fn execute_command_with_services(
    mut stderr: StandardStream,
    cli: Cli,
    services: &ServiceContainer,
) -> CliResult<()> {
    let service = services.bookmark_service.as_ref();
    match cli.command {
        Some(Commands::Add {
            url,
            name,
            name_flag,
            no_web,
        }) => bookmark_commands::add(service, &url, name_flag.or(name).as_deref(), no_web),
        Some(Commands::List { is_json, is_md }) => bookmark_commands::list(service, is_json, is_md),
        Some(Commands::Show { ids }) => bookmark_commands::show(&mut stderr, service, &ids),
        Some(Commands::Open { ids }) => bookmark_commands::open(&mut stderr, service, &ids),
        Some(Commands::Update { id, name, url }) => {
            bookmark_commands::update(service, id, name.as_deref(), url.as_deref())
        }
        Some(Commands::Delete { ids }) => bookmark_commands::delete(&mut stderr, service, &ids),
        Some(Commands::DeleteAll { yes }) => bookmark_commands::delete_all(service, yes),
        Some(Commands::Export { path }) => bookmark_commands::export(&mut stderr, service, &path),
        Some(Commands::Import { path }) => bookmark_commands::import(&mut stderr, service, &path),
        Some(Commands::CreateDb { path }) => bookmark_commands::create_db(&path),
        Some(Commands::Completion { shell }) => handle_completion(&shell),
        None => Ok(()),
    }
}

fn handle_completion(shell: &str) -> CliResult<()> {
    // Usage hints go to stderr so stdout stays a clean script
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for bookmarker");
            eprintln!("# - eval \"$(bookmarker completion bash)\"   # one-time use");
            eprintln!("# - bookmarker completion bash >> ~/.bashrc  # add to bashrc");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for bookmarker");
            eprintln!("# - bookmarker completion zsh > ~/.zfunc/_bookmarker  # save to fpath directory");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for bookmarker");
            eprintln!("# - bookmarker completion fish > ~/.config/fish/completions/bookmarker.fish");
        }
        _ => {}
    }

    completion::generate_completion(shell).map_err(|e| {
        CliError::CommandFailed(format!("Failed to generate completion script: {}", e))
    })
}
