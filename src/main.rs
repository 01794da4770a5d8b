mod config;
mod model;
mod catalog;
mod executor;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use crate::config::load_config;
use crate::catalog::Catalog;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List configured scripts in menu order
    List,
    /// Add a script, or update the path of an existing name
    Add { name: String, path: String },
    /// Remove a script by name
    Remove { name: String },
    /// Move a script one position up
    Up { name: String },
    /// Move a script one position down
    Down { name: String },
    /// Print the path registered under a name
    Path { name: String },
    /// Run a script by name
    Run { name: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config()?;
    let mut catalog = Catalog::load(config.data_file());

    match args.command {
        CliCommand::List => print_entries(&catalog),
        CliCommand::Add { name, path } => {
            if !catalog.add(&name, &path) {
                bail!("name and path must not be empty");
            }
            print_entries(&catalog);
        }
        CliCommand::Remove { name } => {
            if !catalog.remove(&name) {
                bail!("no script named '{}'", name);
            }
            print_entries(&catalog);
        }
        CliCommand::Up { name } => {
            if catalog.index_of(&name).is_none() {
                bail!("no script named '{}'", name);
            }
            if !catalog.move_up(&name) {
                bail!("'{}' is already at the top", name);
            }
            print_entries(&catalog);
            report_position(&catalog, &name);
        }
        CliCommand::Down { name } => {
            if catalog.index_of(&name).is_none() {
                bail!("no script named '{}'", name);
            }
            if !catalog.move_down(&name) {
                bail!("'{}' is already at the bottom", name);
            }
            print_entries(&catalog);
            report_position(&catalog, &name);
        }
        CliCommand::Path { name } => {
            let path = catalog.path_of(&name);
            if path.is_empty() {
                bail!("no script named '{}'", name);
            }
            println!("{}", path);
        }
        CliCommand::Run { name } => {
            let path = catalog.path_of(&name);
            if path.is_empty() {
                bail!("no script named '{}'", name);
            }
            executor::launch(path, &config)?;
        }
    }

    Ok(())
}

fn print_entries(catalog: &Catalog) {
    for (i, entry) in catalog.entries().iter().enumerate() {
        println!("{}. {}", i + 1, entry.label());
    }
}

fn report_position(catalog: &Catalog, name: &str) {
    if let Some(index) = catalog.index_of(name) {
        println!("'{}' is now at position {}", name, index + 1);
    }
}
