use clap::Parser;
use labbook::application::{self, ConfigService};
use labbook::cli::{output, Cli, Commands, Shell};
use labbook::error::Result;
use labbook::infrastructure::{Config, NotebookStore};
use std::io;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // Config only touches labbook.toml; don't open the store for it.
        Some(Commands::Config { key, value, list }) => run_config(key, value, list),
        command => {
            let config = Config::load_from_dir(Path::new("."))?;
            let store = NotebookStore::open(&config.database)?;
            run_notebook(command, &store, &config)
        }
    }
}

fn run_notebook(command: Option<Commands>, store: &NotebookStore, config: &Config) -> Result<()> {
    match command {
        Some(Commands::Sessions) => {
            let sessions = application::list_sessions(store)?;
            println!("{}", output::format_session_list(&sessions).trim_end());
            Ok(())
        }
        Some(Commands::Entries { session_id }) => {
            store.get_session(session_id)?;
            let entries = application::list_entries(store, session_id)?;
            println!("{}", output::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::New { title }) => {
            if let Some(id) = application::create_session(store, &title)? {
                println!("Created session {}.", id);
            }
            Ok(())
        }
        Some(Commands::Add {
            session_id,
            description,
            file,
        }) => {
            // Same contract as the file picker: only existing files attach.
            if !file.is_file() {
                eprintln!("No such file: {}", file.display());
                return Ok(());
            }
            if let Some(id) = application::add_entry(store, session_id, &description, &file)? {
                println!("Added entry {}.", id);
            }
            Ok(())
        }
        Some(Commands::Export { session_id, out }) => {
            let out_dir = out.unwrap_or_else(|| config.export_dir.clone());
            let path = application::export_session(store, session_id, &out_dir)?;
            println!("Saved PDF as: {}", path.display());
            Ok(())
        }
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(store, config, stdin.lock(), stdout.lock()).run()
        }
        Some(Commands::Config { .. }) => unreachable!("handled before the store is opened"),
    }
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let service = ConfigService::new(PathBuf::from("."));

    if list {
        let config = service.list()?;
        println!("database = {}", config.database.display());
        println!("export_dir = {}", config.export_dir.display());
        Ok(())
    } else if let Some(key) = key {
        if let Some(value) = value {
            service.set(&key, &value)?;
            println!("Set {} = {}", key, value);
            Ok(())
        } else {
            let value = service.get(&key)?;
            println!("{}", value);
            Ok(())
        }
    } else {
        println!("Usage: labbook config [--list | <key> [<value>]]");
        println!("Valid keys: database, export_dir");
        Ok(())
    }
}
