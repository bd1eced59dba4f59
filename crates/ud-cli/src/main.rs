//! ud - user directory admin console
//!
//! A command-line console over the user-directory REST API: a filterable,
//! sortable, paginated user table plus create/update/delete and spreadsheet
//! export.
//!
//! # Examples
//!
//! ```bash
//! # Second page of admins matching "john", sorted by email
//! ud list --search john --role admin --sort email --page 2
//!
//! # Create a user
//! ud create --username jdoe --password 'longenough' --email j@example.com \
//!     --first-name John --last-name Doe --phone 0911222333
//!
//! # Export everyone matching a filter
//! ud export --search example.org --out /tmp/UserList.xlsx
//! ```

use ud_cli::{Cli, CliError, CliResult, Commands, logger, render};

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use ud_client::Client;
use ud_config::Config;
use ud_core::{NewUser, Role, User, UserUpdate, validation};
use ud_export::EXPORT_FILE_NAME;
use ud_table::{LogNotifier, SortKey, TableController};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.logging.level.0
    };
    if let Err(e) = logger::initialize(level, config.logging.file.clone(), config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let base_url = cli
        .server
        .unwrap_or_else(|| config.server.base_url.clone());
    let client = match Client::with_timeout(&base_url, config.server.timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_command(cli.command, cli.pretty, client, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_command(
    command: Commands,
    pretty: bool,
    client: Client,
    config: &Config,
) -> CliResult<()> {
    match command {
        Commands::List {
            search,
            role,
            sort,
            desc,
            page,
            page_size,
            json,
        } => {
            let mut controller = TableController::new(
                client,
                LogNotifier,
                page_size.unwrap_or(config.table.page_size),
            );
            controller.refresh().await?;

            if let Some(ref text) = search {
                controller.set_search_text(text);
            }
            if let Some(role) = parse_role(role.as_deref())? {
                controller.set_role_filter(Some(role));
            }
            if let Some(ref key) = sort {
                let key = SortKey::from_str(key)?;
                controller.toggle_sort(key);
                if desc {
                    controller.toggle_sort(key);
                }
            }
            if let Some(page) = page {
                controller.go_to_page(page);
            }

            if json {
                print_json(&controller.visible_page().records, pretty)?;
            } else {
                println!(
                    "{}",
                    render::render_table(
                        controller.visible_page(),
                        controller.view().current_page,
                        controller.filtered_records().len(),
                    )
                );
            }
            Ok(())
        }

        Commands::Get { id } => {
            let user = client.get_user(&id).await?;
            print_json(&user, pretty)
        }

        Commands::Create {
            username,
            password,
            confirm_password,
            email,
            first_name,
            last_name,
            phone,
            role,
            avatar_url,
        } => {
            let new_user = NewUser {
                username,
                password,
                email,
                first_name,
                last_name,
                phone_number: phone,
                role: Role::from_str(&role)?,
                avatar_url,
            };
            let confirm = confirm_password.as_deref().unwrap_or(&new_user.password);

            // Form-level checks gate the request; uniqueness stays the
            // server's call.
            validation::validate_new_user(&new_user, confirm)
                .map_err(|errors| ud_core::CoreError::from_field_errors(&errors))?;

            let mut controller =
                TableController::new(client, LogNotifier, config.table.page_size);
            let created = controller.create_user(&new_user).await?;
            print_json(&created, pretty)
        }

        Commands::Update {
            id,
            username,
            password,
            email,
            first_name,
            last_name,
            phone,
            role,
            avatar_url,
        } => {
            let update = UserUpdate {
                username,
                password,
                email,
                first_name,
                last_name,
                phone_number: phone,
                role: parse_role(role.as_deref())?,
                avatar_url,
            };

            validation::validate_user_update(&update)
                .map_err(|errors| ud_core::CoreError::from_field_errors(&errors))?;

            let mut controller =
                TableController::new(client, LogNotifier, config.table.page_size);
            let updated = controller.update_user(&id, &update).await?;
            print_json(&updated, pretty)
        }

        Commands::Delete { id } => {
            let mut controller =
                TableController::new(client, LogNotifier, config.table.page_size);
            controller.refresh().await?;
            controller.delete_user(&id).await?;
            println!("User {id} deleted");
            Ok(())
        }

        Commands::Export { search, role, out } => {
            let mut controller =
                TableController::new(client, LogNotifier, config.table.page_size);
            controller.refresh().await?;

            if let Some(ref text) = search {
                controller.set_search_text(text);
            }
            if let Some(role) = parse_role(role.as_deref())? {
                controller.set_role_filter(Some(role));
            }

            // The export consumes the filtered set, never the visible page.
            let records: &[User] = controller.filtered_records();
            let bytes = ud_export::workbook(records)?;

            let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            std::fs::write(&path, bytes).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;

            println!("Exported {} row(s) to {}", records.len(), path.display());
            Ok(())
        }
    }
}

fn parse_role(raw: Option<&str>) -> CliResult<Option<Role>> {
    raw.map(Role::from_str).transpose().map_err(CliError::from)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
