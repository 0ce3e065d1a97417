//! Line command parsing for the board shell.

use anyhow::{anyhow, bail, Context};
use projboard_core::{ProjectDraft, ProjectId, ProjectStatus};

pub const HELP: &str = "\
commands:
  add <title> | <description> | <people>   submit the project form
  move <id> <active|finished>              move a project by id
  drop <active|finished> <payload>         drop a raw id payload onto a list
  list [active|finished]                   print one or both lists
  help                                     show this help
  quit                                     exit";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ProjectDraft),
    Move(ProjectId, ProjectStatus),
    Drop(ProjectStatus, String),
    List(Option<ProjectStatus>),
    Help,
    Quit,
}

/// Parses one line; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
            let [title, description, people] = fields.as_slice() else {
                bail!("usage: add <title> | <description> | <people>");
            };
            Command::Add(ProjectDraft::new(*title, *description, *people))
        }
        "move" => {
            let (id, status) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: move <id> <active|finished>"))?;
            let id = id
                .parse::<ProjectId>()
                .with_context(|| format!("invalid project id `{id}`"))?;
            Command::Move(id, status.parse()?)
        }
        "drop" => {
            let (status, payload) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: drop <active|finished> <payload>"))?;
            Command::Drop(status.parse()?, payload.trim().to_string())
        }
        "list" | "ls" => {
            if rest.is_empty() {
                Command::List(None)
            } else {
                Command::List(Some(rest.parse()?))
            }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`; try `help`"),
    };
    Ok(Some(command))
}
