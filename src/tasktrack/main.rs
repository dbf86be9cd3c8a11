use clap::Parser;
use std::io;
use tasktrack::api::TaskApi;
use tasktrack::error::Result;
use tasktrack::store::fs::FileStore;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_messages, print_tasks};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = TaskApi::new(FileStore::new(cli.file));

    match cli.command {
        Commands::Add { description } => handle_mutation(api.add_task(description)?),
        Commands::Update { id, description } => {
            handle_mutation(api.update_task(&id, description)?)
        }
        Commands::Delete { id } => handle_plain(api.delete_task(&id)?),
        Commands::List { status } => handle_list(api.list_tasks(status.as_deref())?),
        Commands::MarkInProgress { id } => handle_mutation(api.mark_in_progress(&id)?),
        Commands::MarkDone { id } => handle_mutation(api.mark_done(&id)?),
        Commands::ClearTasks { force } => {
            handle_plain(api.clear_tasks(&mut io::stdin().lock(), force)?)
        }
    }

    Ok(())
}

// add / update / mark-*: report the message, then echo the touched record.
fn handle_mutation(result: tasktrack::api::CmdResult) {
    print_messages(&result.messages);
    print_tasks(&result.affected_tasks);
}

fn handle_list(result: tasktrack::api::CmdResult) {
    print_tasks(&result.listed_tasks);
    print_messages(&result.messages);
}

fn handle_plain(result: tasktrack::api::CmdResult) {
    print_messages(&result.messages);
}
