use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use shell_words::split;

use super::commands::{LoopControl, ShellContext};
use super::{output, CliError, CliMode};

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("KAS_MASJID_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new()?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor: Editor<(), DefaultHistory> = Editor::new()?;

    loop {
        let prompt = context.prompt();
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if let LoopControl::Exit = handle_line(context, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("exiting");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if let LoopControl::Exit = handle_line(context, line.trim()) {
            break;
        }
    }
    Ok(())
}

/// Tokenizes and runs one line. Command failures are reported, not fatal:
/// every ledger error is caller-recoverable by fixing the input.
fn handle_line(context: &mut ShellContext, line: &str) -> LoopControl {
    if line.is_empty() {
        return LoopControl::Continue;
    }
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("could not parse input: {err}"));
            return LoopControl::Continue;
        }
    };
    if tokens.is_empty() {
        return LoopControl::Continue;
    }
    match context.handle(&tokens) {
        Ok(control) => control,
        Err(err) => {
            output::error(err);
            LoopControl::Continue
        }
    }
}
