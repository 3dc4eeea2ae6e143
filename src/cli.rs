//! CLI definitions and command routing.

use anyhow::Result;
use clap::{ArgGroup, Parser};

use crate::config::EditorConfig;
use crate::hosts::{self, AddOutcome, DeleteOutcome};
use crate::platform::{default_hosts_editor, HostsEditor};
use crate::validate;

#[derive(Parser, Debug)]
#[command(name = "hostsedit")]
#[command(about = "Adds, deletes and shows hosts file entries")]
#[command(group(ArgGroup::new("action").required(true).args(["add", "delete", "show"])))]
pub struct Cli {
    /// Add an entry; the address defaults to 127.0.0.1
    #[arg(short = 'a', long = "add", num_args = 1..=2, value_names = ["ADDRESS", "HOSTNAME"])]
    pub add: Option<Vec<String>>,

    /// Delete the entry whose last token is HOSTNAME
    #[arg(short = 'd', long = "delete", value_name = "HOSTNAME")]
    pub delete: Option<String>,

    /// Show all entries, skipping comments and blank lines
    #[arg(short = 's', long = "show")]
    pub show: bool,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = EditorConfig::load()?;
    let editor = default_hosts_editor(&config);
    dispatch(cli, &config, editor.as_ref())
}

/// Execute one parsed invocation against `editor`.
pub fn dispatch(cli: Cli, config: &EditorConfig, editor: &dyn HostsEditor) -> Result<()> {
    if let Some(values) = cli.add {
        return cmd_add(config, editor, &values);
    }
    if let Some(hostname) = cli.delete {
        return cmd_delete(editor, &hostname);
    }
    for line in hosts::list_entries(editor)? {
        println!("{line}");
    }
    Ok(())
}

fn cmd_add(config: &EditorConfig, editor: &dyn HostsEditor, values: &[String]) -> Result<()> {
    let (address, hostname) = validate::resolve_add_args(values, config.default_address)?;
    match hosts::add_entry(editor, hostname, address)? {
        AddOutcome::Added => println!("{address} {hostname} has been added to the hosts file"),
        AddOutcome::AlreadyExists => println!(
            "Not updating hosts file as the hostname {hostname} seems to already exist in the hosts file. Please try deleting it first."
        ),
    }
    Ok(())
}

fn cmd_delete(editor: &dyn HostsEditor, hostname: &str) -> Result<()> {
    match hosts::delete_entry(editor, hostname)? {
        DeleteOutcome::Deleted { .. } => println!("Hostname {hostname} has been deleted from the hosts file."),
        DeleteOutcome::NotFound => println!(
            "Hostname {hostname} was not deleted because it was not found in the hosts file."
        ),
    }
    Ok(())
}
