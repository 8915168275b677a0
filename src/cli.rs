//! Command-line interface for task
//!
//! Thin dispatch over [`TaskStore`]: each subcommand validates its argument
//! shape, runs one store operation, and prints a result message.
//!
//! The argument lists are taken as raw strings and checked by hand so that
//! shape violations print this program's specific messages instead of
//! clap's, and an external-subcommand catch-all swallows unrecognized
//! subcommands without output or file access.

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::Result;
use crate::store::{TaskStore, DATA_FILE};

/// task - Personal task tracker
///
/// Tasks live in `task_database.csv` in the current directory; lower
/// priority values sort first.
#[derive(Parser, Debug)]
#[command(name = "task")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item with the given priority and text to the list
    Add {
        /// Priority followed by the task text
        #[arg(value_name = "ARG", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show incomplete items sorted by priority in ascending order
    Ls {
        #[arg(value_name = "ARG", hide = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show pending and completed task statistics
    Report {
        #[arg(value_name = "ARG", hide = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Mark the incomplete item with the given index as complete
    Done {
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Delete the incomplete item with the given index
    Del {
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Delete the task database file
    Clear {
        #[arg(value_name = "ARG", hide = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            None => print_usage(),
            Some(Commands::Add { args }) => run_add(&args),
            Some(Commands::Ls { .. }) => run_ls(),
            Some(Commands::Report { .. }) => run_report(),
            Some(Commands::Done { args }) => run_done(&args),
            Some(Commands::Del { args }) => run_del(&args),
            Some(Commands::Clear { args }) => run_clear(&args),
            // Unrecognized subcommands are ignored: no action, no message.
            Some(Commands::External(_)) => Ok(()),
        }
    }
}

fn print_usage() -> Result<()> {
    Cli::command().print_help()?;
    Ok(())
}

fn load_store() -> Result<TaskStore> {
    let mut store = TaskStore::new(DATA_FILE);
    store.load()?;
    Ok(store)
}

fn run_add(args: &[String]) -> Result<()> {
    let Some((priority, name)) = parse_add_args(args) else {
        println!("Error: Missing tasks string. Nothing added!");
        return Ok(());
    };

    let mut store = load_store()?;
    store.add(name, priority)?;
    // The confirmation is printed even when an exact duplicate skipped the
    // mutation.
    println!("Added task: \"{name}\" with priority {priority}");
    Ok(())
}

fn run_ls() -> Result<()> {
    let store = load_store()?;
    let view = store.sorted_pending();
    if view.is_empty() {
        println!("There are no pending tasks!");
    }
    for (position, task) in view.iter().enumerate() {
        println!("{}. {} [{}]", position + 1, task.name, task.priority);
    }
    Ok(())
}

fn run_report() -> Result<()> {
    let store = load_store()?;

    println!("Pending: {}", store.pending().len());
    for (position, task) in store.sorted_pending().iter().enumerate() {
        println!("{}. {} [{}]", position + 1, task.name, task.priority);
    }
    println!();

    println!("Completed: {}", store.completed().len());
    for (position, task) in store.sorted_completed().iter().enumerate() {
        println!("{}. {}", position + 1, task.name);
    }
    Ok(())
}

fn run_done(args: &[String]) -> Result<()> {
    let Some(index) = parse_index_arg(args) else {
        println!("Error: Missing NUMBER for marking tasks as done.");
        return Ok(());
    };

    let mut store = load_store()?;
    if store.mark_done(index)? {
        println!("Marked item as done.");
    } else {
        println!("Error: no incomplete item with index #{index} exists.");
    }
    Ok(())
}

fn run_del(args: &[String]) -> Result<()> {
    let Some(index) = parse_index_arg(args) else {
        println!("Error: Missing NUMBER for deleting tasks.");
        return Ok(());
    };

    let mut store = load_store()?;
    if store.delete(index)? {
        println!("Deleted task #{index}");
    } else {
        println!("Error: task with index #{index} does not exist. Nothing deleted.");
    }
    Ok(())
}

fn run_clear(args: &[String]) -> Result<()> {
    if !args.is_empty() {
        println!("Error: Invalid syntax for clearing database file. Nothing cleared!");
        return Ok(());
    }

    // Deliberately no load: clearing a store that was never created should
    // hit the missing-file branch instead of creating the file first.
    let store = TaskStore::new(DATA_FILE);
    if !store.clear()? {
        println!("Error: Database file does not exist");
    }
    Ok(())
}

/// `add` takes exactly a priority and a task name; anything else (including
/// a non-integer priority) is the same shape violation.
fn parse_add_args(args: &[String]) -> Option<(i64, &str)> {
    match args {
        [priority, name] => Some((priority.parse().ok()?, name.as_str())),
        _ => None,
    }
}

/// `done`/`del` take exactly one integer index.
fn parse_index_arg(args: &[String]) -> Option<i64> {
    match args {
        [index] => index.parse().ok(),
        _ => None,
    }
}
