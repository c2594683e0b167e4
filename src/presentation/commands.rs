//! Subcommand handlers
//!
//! Engine rejections are rendered and turned into exit code 1; store and
//! config faults propagate as errors.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ServiceDescriptionUseCase;
use crate::config::{Config, ConfigWarning};
use crate::domain::entities::Client;
use crate::domain::ports::ClientRepository;
use crate::error::{ErrorKind, SyncError};

use super::cli::{Cli, ClientCommands, Commands};
use super::factory;
use super::output::{self, OutputFormat};

/// Run a parsed command line against the configured store.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let (config, warnings) = Config::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    crate::logging::init(&config.logging, cli.verbose);
    report_config_warnings(&warnings);

    let format = OutputFormat::from_json_flag(cli.json);
    let repository = factory::create_repository(factory::store_root(&config, cli.store));
    let use_case = factory::create_use_case(repository.clone(), &config, cli.json);

    execute(cli.command, &use_case, repository, format)
}

fn execute(
    command: Commands,
    use_case: &ServiceDescriptionUseCase,
    repository: Arc<dyn ClientRepository>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let rendered = match command {
        Commands::Client { action } => return client_command(action, repository.as_ref(), format),
        Commands::List { client } => {
            let Some(client) = repository.load_client(&client)? else {
                return rejected(format, SyncError::ClientNotFound { client_id: client });
            };
            Ok(output::render_client(format, &client))
        }
        Commands::Add {
            client,
            url,
            ignore_warnings,
        } => use_case
            .add_wsdl_description(&client, &url, ignore_warnings)
            .map(|outcome| output::render_outcome(format, "registered", &outcome)),
        Commands::Update {
            id,
            url,
            ignore_warnings,
        } => use_case
            .update_wsdl_url(id, &url, ignore_warnings)
            .map(|outcome| output::render_outcome(format, "updated", &outcome)),
        Commands::Refresh {
            id,
            ignore_warnings,
        } => use_case
            .refresh_description(id, ignore_warnings)
            .map(|outcome| output::render_outcome(format, "refreshed", &outcome)),
        Commands::Delete { id } => use_case
            .delete_description(id)
            .map(|removed| output::render_descriptions(format, "deleted", &[removed])),
        Commands::Enable { ids } => use_case
            .enable_descriptions(&ids)
            .map(|updated| output::render_descriptions(format, "enabled", &updated)),
        Commands::Disable { ids, notice } => use_case
            .disable_descriptions(&ids, notice.as_deref())
            .map(|updated| output::render_descriptions(format, "disabled", &updated)),
    };

    match rendered {
        Ok(text) => {
            print_rendered(format, &text);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => rejected(format, err),
    }
}

fn client_command(
    action: ClientCommands,
    repository: &dyn ClientRepository,
    format: OutputFormat,
) -> Result<ExitCode> {
    match action {
        ClientCommands::Add { id } => {
            let lease = repository.lock_client(&id)?;
            if repository.load_client(&id)?.is_none() {
                repository.save_client(&Client::new(id.clone()))?;
                tracing::info!(client = %id, "created client");
            }
            drop(lease);
            print_rendered(format, &output::render_clients(format, &[id]));
        }
        ClientCommands::List => {
            let ids = repository.list_clients()?;
            print_rendered(format, &output::render_clients(format, &ids));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Print a rejection. Internal faults are returned as errors instead.
fn rejected(format: OutputFormat, err: SyncError) -> Result<ExitCode> {
    if err.kind() == ErrorKind::Internal {
        return Err(err.into());
    }
    let text = output::render_rejection(format, &err);
    match format {
        OutputFormat::Json => println!("{}", text),
        OutputFormat::Text => eprint!("{}", text),
    }
    Ok(ExitCode::from(1))
}

fn print_rendered(format: OutputFormat, text: &str) {
    match format {
        OutputFormat::Json => println!("{}", text),
        OutputFormat::Text => print!("{}", text),
    }
}

fn report_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' at {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' at {}", warning.key, location),
        }
    }
}
