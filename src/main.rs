//! Sphone - Main entry point
//!
//! One-shot command line front end for the phone-book and dialer. Each
//! invocation loads the JSON stores, performs one action and exits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sphone::{
    Config, Contact, ContactAddOutcome, ContactType, PhoneAddOutcome, PhoneApp, PhoneNumber,
    PhoneResult,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sphone", version, about = "Phone-book and dialer simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dial a 10-digit phone number
    Dial { number: String },
    /// Show the history of dialed numbers
    History,
    /// Contact management
    Contacts {
        #[command(subcommand)]
        action: ContactsAction,
    },
}

#[derive(Subcommand)]
enum ContactsAction {
    /// Add a new contact with one phone number
    Add {
        name: String,
        number: String,
        /// home or work
        #[arg(long, default_value = "home")]
        kind: ContactType,
    },
    /// Add another phone number to an existing contact
    AddNumber {
        name: String,
        number: String,
        /// home or work
        #[arg(long, default_value = "home")]
        kind: ContactType,
    },
    /// Search contacts by name or by number
    Search {
        #[arg(long, conflicts_with = "number", required_unless_present = "number")]
        name: Option<String>,
        #[arg(long)]
        number: Option<String>,
    },
    /// List all contacts
    List,
    /// Export all contacts to a text file
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Call a contact
    Call {
        name: String,
        /// Which of the contact's numbers to dial (1-based)
        #[arg(long)]
        entry: Option<usize>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so command output stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using contacts file {} and call history file {}",
        config.contacts_file.display(),
        config.call_history_file.display()
    );

    let mut app = PhoneApp::from_config(&config);
    for warning in app.load_warnings() {
        println!("Warning: {}", warning);
    }

    if let Err(e) = run(&mut app, cli.command).await {
        error!("Command failed: {}", e);
        println!("\nError: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(app: &mut PhoneApp, command: Commands) -> PhoneResult<()> {
    match command {
        Commands::Dial { number } => {
            let outcome = app.dial(&number)?;
            for line in outcome.status_lines() {
                println!("{}", line);
            }
        }
        Commands::History => {
            println!("--- Dialed Numbers History ---");
            print!("{}", app.history().render());
        }
        Commands::Contacts { action } => run_contacts(app, action).await?,
    }
    Ok(())
}

async fn run_contacts(app: &mut PhoneApp, action: ContactsAction) -> PhoneResult<()> {
    match action {
        ContactsAction::Add { name, number, kind } => {
            let number = PhoneNumber::new(&number)?;
            let contact = Contact::with_number(name.trim(), number.clone(), kind);
            match app.contacts_mut().add_contact(contact)? {
                ContactAddOutcome::Created => println!(
                    "Contact '{}' added successfully with number {} ({})!",
                    name.trim(),
                    number,
                    kind
                ),
                ContactAddOutcome::Merged { name, .. } => println!(
                    "Contact '{}' already exists. Phone number {} ({}) added to it.",
                    name, number, kind
                ),
            }
        }
        ContactsAction::AddNumber { name, number, kind } => {
            match app.contacts_mut().add_phone_number(&name, &number, kind)? {
                PhoneAddOutcome::Added => println!(
                    "Phone number {} ({}) added to contact '{}'",
                    sphone::domain::phone::clean(&number),
                    kind,
                    name.trim()
                ),
                PhoneAddOutcome::AlreadyPresent => {
                    println!("Contact '{}' already has this number!", name.trim())
                }
            }
        }
        ContactsAction::Search { name, number } => {
            let (term, results) = match (name, number) {
                (Some(term), _) => {
                    let results = app.contacts().search_by_name(&term);
                    (term, results)
                }
                (None, Some(term)) => {
                    let results = app.contacts().search_by_number(&term);
                    (term, results)
                }
                (None, None) => {
                    return Err(sphone::PhoneError::InvalidSelection(
                        "Search term cannot be empty!".to_string(),
                    ))
                }
            };

            if results.is_empty() {
                println!("No contacts found matching '{}'.", term);
            } else {
                println!("Found {} contact(s):\n", results.len());
                for (i, contact) in results.iter().enumerate() {
                    println!("Contact {}:", i + 1);
                    println!("{}", contact);
                }
            }
        }
        ContactsAction::List => {
            if app.contacts().is_empty() {
                println!("No contacts available!");
            }
            for (i, contact) in app.contacts().all().iter().enumerate() {
                println!(
                    "{}. {} ({} number(s))",
                    i + 1,
                    contact.name,
                    contact.phone_numbers.len()
                );
            }
        }
        ContactsAction::Export { output } => {
            println!("Exporting contacts to file...");
            let target = output.unwrap_or_else(|| app.export_path().to_path_buf());
            let count = app.export_contacts(Some(target.as_path())).await?;
            println!(
                "Successfully exported {} contact(s) to '{}'!",
                count,
                target.display()
            );
        }
        ContactsAction::Call { name, entry } => {
            let outcome = app.call_contact(&name, entry)?;
            for line in outcome.status_lines() {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
