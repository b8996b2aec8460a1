//! Interactive query form over stdin.

use anyhow::Context;
use queryclass_client::{ClassifyClient, submit};
use queryclass_core::{CoreError, FormState, ModelId};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::display;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Edit(FormEdit),
    Help,
    Quit,
}

/// A command that acts on the form and re-renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Submit(String),
    Select(ModelId),
    ToggleInfo(ModelId),
}

impl FormCommand {
    pub fn parse(line: &str) -> Result<Self, CoreError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let query_line = || Self::Edit(FormEdit::Submit(line.to_string()));
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(query_line());
        };

        let (cmd, arg) = rest.split_once(' ').unwrap_or((rest, ""));
        match cmd {
            "model" => Ok(Self::Edit(FormEdit::Select(arg.trim().parse()?))),
            "info" => Ok(Self::Edit(FormEdit::ToggleInfo(arg.trim().parse()?))),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Ok(query_line()),
        }
    }
}

/// Apply `edit` to `form`, returning the message to show on failure.
pub async fn apply(
    client: &ClassifyClient,
    form: &mut FormState,
    edit: FormEdit,
) -> Result<(), String> {
    match edit {
        FormEdit::Select(model) => form.select_model(model),
        FormEdit::ToggleInfo(model) => form.toggle_description(model),
        FormEdit::Submit(text) => {
            form.set_text(text);
            submit(client, form).await.map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

/// Read commands from stdin until `/quit` or end of input.
pub async fn run_form(client: &ClassifyClient, mut form: FormState) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    eprintln!("  Posting to {}", client.endpoint());
    print!("{}", display::help());
    println!();
    print!("{}", display::render_form(&form, None));

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let outcome = match FormCommand::parse(&line) {
            Ok(FormCommand::Quit) => break,
            Ok(FormCommand::Help) => {
                print!("{}", display::help());
                continue;
            }
            Ok(FormCommand::Edit(edit)) => apply(client, &mut form, edit).await,
            Err(e) => Err(e.to_string()),
        };

        println!();
        print!("{}", display::render_form(&form, outcome.err().as_deref()));
    }

    Ok(())
}
