//! Project board shell.
//!
//! # Responsibility
//! - Drive one `Board` from line commands (stdin or a script file).
//! - Print list redraws, mirroring the two-column browser page.

mod command;

use anyhow::Context;
use clap::Parser;
use command::{parse_line, Command, HELP};
use projboard_core::{init_logging, Board, BoardConfig, ProjectStatus, Snapshot};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "projboard")]
#[command(about = "Add projects and move them between active and finished lists")]
#[command(version)]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "PROJBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; file logging is off when unset
    #[arg(long, value_name = "DIR", env = "PROJBOARD_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Read commands from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print every store notification as a JSON snapshot
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = BoardConfig::from_env()?;
    if let Some(level) = cli.log_level.as_deref() {
        config = config.with_level(level)?;
    }
    if let Some(dir) = cli.log_dir.as_deref() {
        config = config.with_log_dir(dir)?;
    }
    if let Some(dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, dir)?;
    }

    let board = Board::new();
    if cli.json {
        board.store().subscribe(|snapshot: Snapshot| {
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("snapshot encoding failed: {err}"),
            }
        });
    }

    let interactive = cli.script.is_none();
    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    log::info!(
        "event=shell_start module=cli status=ok version={} interactive={interactive}",
        projboard_core::core_version()
    );
    run(&board, input, interactive)
}

fn run(board: &Board, input: Box<dyn BufRead>, interactive: bool) -> anyhow::Result<()> {
    if interactive {
        println!("{HELP}");
        prompt()?;
    }
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(board, command),
            // A bad line never ends the session.
            Err(err) => eprintln!("error: {err:#}"),
        }
        if interactive {
            prompt()?;
        }
    }
    Ok(())
}

fn execute(board: &Board, command: Command) {
    match command {
        Command::Add(draft) => match board.submit(&draft) {
            Ok(id) => println!("added {id}"),
            Err(err) => eprintln!("invalid input: {err}"),
        },
        Command::Move(id, status) => {
            board.move_to(id, status);
            print_list(board, status);
        }
        Command::Drop(status, payload) => {
            board.drop_on(status, &payload);
            print_list(board, status);
        }
        Command::List(Some(status)) => print_list(board, status),
        Command::List(None) => print!("{}", board.render()),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

fn print_list(board: &Board, status: ProjectStatus) {
    let projects = board.list(status);
    println!("{} {} project(s)", projects.len(), status);
    for project in projects {
        println!("  {} {} ({})", project.id, project.title, project.people_label());
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
