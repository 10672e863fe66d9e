//! Interactive line-oriented view session.
//!
//! Reads one command per line and re-renders the visible list after every
//! change, the way the dashboard re-renders on each input event.

use super::output::{write_detail, write_summary, write_table};
use crate::models::ModelId;
use crate::services::{Affordance, DashboardSession, parse_filter_query};
use crate::{Error, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "diaglab> ";

const HELP: &str = "\
Commands:
  search [text]      set search text (no text clears it)
  modality [value]   Imaging, Signal, all (no value clears it)
  status [value]     Stable, Beta, Research, all (no value clears it)
  query <filter>     e.g. `modality:Imaging status:Stable lesion`
  toggle <id>        flip a model's enabled flag
  list               show the visible models
  show <id>          show one model
  open <id>          open tool
  link <id>          external link
  docs <id>          model documentation
  audit              view audit logs
  reset              clear search and filters
  help               this text
  quit               end the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the search text: everything after the separator, trailing
    /// spaces included.
    Search(String),
    /// Replace the modality selection.
    Modality(String),
    /// Replace the status selection.
    Status(String),
    /// Replace the whole query from filter syntax.
    Query(String),
    /// Flip a model's enabled flag.
    Toggle(ModelId),
    /// Print the visible list.
    List,
    /// Print one record.
    Show(ModelId),
    /// Route an affordance to the navigator.
    Activate(Affordance),
    /// Clear the query.
    Reset,
    /// Print help.
    Help,
    /// End the session.
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown commands or a missing id.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim_start()));

        let command = match word.to_lowercase().as_str() {
            "search" | "s" => Self::Search(rest.to_string()),
            "modality" | "mod" => Self::Modality(rest.trim().to_string()),
            "status" => Self::Status(rest.trim().to_string()),
            "query" | "q" => Self::Query(rest.to_string()),
            "toggle" | "t" => Self::Toggle(required_id(word, rest)?),
            "list" | "ls" => Self::List,
            "show" => Self::Show(required_id(word, rest)?),
            "open" => Self::Activate(Affordance::OpenTool(required_id(word, rest)?)),
            "link" => Self::Activate(Affordance::ExternalLink(required_id(word, rest)?)),
            "docs" => Self::Activate(Affordance::Docs(required_id(word, rest)?)),
            "audit" => Self::Activate(Affordance::AuditLogs),
            "reset" => Self::Reset,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(Error::InvalidInput(format!(
                    "unknown command '{other}' (type 'help')"
                )));
            },
        };
        Ok(Some(command))
    }
}

fn required_id(command: &str, rest: &str) -> Result<ModelId> {
    let id = rest.trim();
    if id.is_empty() {
        return Err(Error::InvalidInput(format!("'{command}' needs a model id")));
    }
    Ok(ModelId::new(id))
}

fn write_line<W: Write>(output: &mut W, text: &str) -> Result<()> {
    writeln!(output, "{text}").map_err(|e| Error::operation("write_output", e))
}

fn render<W: Write>(session: &DashboardSession, output: &mut W, verbose: bool) -> Result<()> {
    let visible = session.visible();
    write_table(output, &visible, verbose)?;
    write_summary(
        output,
        visible.len(),
        session.store().len(),
        session.store().enabled_count(),
    )
}

/// Applies one command. Returns false when the session should end.
///
/// # Errors
///
/// Returns an error only if writing output fails.
pub fn apply_command<W: Write>(
    session: &mut DashboardSession,
    command: SessionCommand,
    output: &mut W,
    verbose: bool,
) -> Result<bool> {
    match command {
        SessionCommand::Search(text) => session.set_search_text(text),
        SessionCommand::Modality(value) => session.set_modality_filter(value),
        SessionCommand::Status(value) => session.set_status_filter(value),
        SessionCommand::Query(text) => session.set_query(parse_filter_query(&text)),
        SessionCommand::Reset => session.reset_query(),
        SessionCommand::Toggle(id) => match session.toggle(&id) {
            Some(enabled) => {
                let state = if enabled { "on" } else { "off" };
                write_line(output, &format!("{id} is now {state}"))?;
            },
            None => write_line(output, &format!("no model with id {id}"))?,
        },
        SessionCommand::List => {},
        SessionCommand::Show(id) => {
            match session.store().get(&id) {
                Some(record) => write_detail(output, record)?,
                None => write_line(output, &format!("no model with id {id}"))?,
            }
            return Ok(true);
        },
        SessionCommand::Activate(affordance) => {
            if let Some(id) = affordance.model_id() {
                if session.store().get(id).is_none() {
                    write_line(output, &format!("no model with id {id}"))?;
                    return Ok(true);
                }
            }
            if !session.activate(&affordance) {
                write_line(output, &format!("{affordance}: not available"))?;
            }
            return Ok(true);
        },
        SessionCommand::Help => {
            write_line(output, HELP)?;
            return Ok(true);
        },
        SessionCommand::Quit => return Ok(false),
    }

    render(session, output, verbose)?;
    Ok(true)
}

/// Runs a session until `quit` or end of input.
///
/// Unknown commands are reported and the session continues.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut DashboardSession,
    input: R,
    output: &mut W,
    verbose: bool,
) -> Result<()> {
    render(session, output, verbose)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")
            .and_then(|()| output.flush())
            .map_err(|e| Error::operation("write_output", e))?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| Error::operation("read_input", e))?;

        match SessionCommand::parse(&line) {
            Ok(Some(command)) => {
                tracing::debug!(?command, "Session command");
                if !apply_command(session, command, output, verbose)? {
                    break;
                }
            },
            Ok(None) => {},
            Err(e) => write_line(output, &e.to_string())?,
        }
    }

    writeln!(output).map_err(|e| Error::operation("write_output", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (DashboardSession, String) {
        let mut session = DashboardSession::seeded();
        let mut output = Vec::new();
        run_session(&mut session, script.as_bytes(), &mut output, false).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("search  MRI ").unwrap(),
            Some(SessionCommand::Search("MRI ".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("MODALITY Signal").unwrap(),
            Some(SessionCommand::Modality("Signal".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("status").unwrap(),
            Some(SessionCommand::Status(String::new()))
        );
        assert_eq!(
            SessionCommand::parse("toggle 4").unwrap(),
            Some(SessionCommand::Toggle(ModelId::new("4")))
        );
        assert_eq!(
            SessionCommand::parse("audit").unwrap(),
            Some(SessionCommand::Activate(Affordance::AuditLogs))
        );
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_extra_separator_spaces_still_match() {
        let (session, output) = run("search   mri\n");
        assert_eq!(session.query().search_text, "mri");
        assert!(output.contains("Showing 1 of 6 models"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("toggle").is_err());
        assert!(SessionCommand::parse("frobnicate").is_err());
    }

    #[test]
    fn test_session_filters_and_toggles() {
        let (session, output) = run("modality Signal\ntoggle 4\nquit\n");
        assert!(output.contains("4 is now on"));
        assert!(output.contains("Showing 1 of 6 models (1 enabled)"));
        assert_eq!(session.query().modality_filter, "Signal");
        assert_eq!(session.store().enabled_count(), 1);
    }

    #[test]
    fn test_session_query_command() {
        let (session, output) = run("query modality:Imaging status:Stable\n");
        assert!(output.contains("Showing 3 of 6 models"));
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn test_session_unknown_command_continues() {
        let (_, output) = run("bogus\nsearch oncology\n");
        assert!(output.contains("unknown command 'bogus'"));
        assert!(output.contains("Showing 2 of 6 models"));
    }

    #[test]
    fn test_session_unknown_toggle_is_noop() {
        let (session, output) = run("toggle 42\n");
        assert!(output.contains("no model with id 42"));
        assert_eq!(session.store().enabled_count(), 0);
    }

    #[test]
    fn test_session_affordances() {
        let (_, output) = run("open 1\ndocs 99\naudit\n");
        assert!(output.contains("open-tool (1): not available"));
        assert!(output.contains("no model with id 99"));
        assert!(output.contains("audit-logs: not available"));
    }

    #[test]
    fn test_session_show_and_reset() {
        let (session, output) = run("status Beta\nshow 6\nreset\n");
        assert!(output.contains("Retinal Disease Screening (6)"));
        assert!(session.query().is_empty());
    }

    #[test]
    fn test_session_stops_at_quit() {
        let (session, _) = run("quit\ntoggle 1\n");
        assert_eq!(session.store().enabled_count(), 0);
    }
}
