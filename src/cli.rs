//! Command-line front end.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::config::Config;
use crate::schema::{Field, FieldType, FormId};
use crate::ui::builder::{BuilderIntent, BuilderReducer, BuilderState};
use crate::ui::field::Affordance;
use crate::ui::library::{LibraryIntent, LibraryReducer, LibraryState};
use crate::ui::mvi::Reducer;
use crate::ui::render::{render_form, render_form_list, render_notice, render_preview, render_table};
use crate::ui::table::{SortKey, TableIntent, TableReducer, TableState};
use crate::workspace::Workspace;

#[derive(Debug, Parser)]
#[command(name = "formsmith", version, about = "Build forms, collect and review submissions")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Manage form schemas
    #[command(subcommand)]
    Form(FormCmd),
    /// Fill in and submit a form
    #[command(subcommand)]
    Entry(EntryCmd),
    /// Review collected data
    #[command(subcommand)]
    Data(DataCmd),
}

#[derive(Debug, Subcommand)]
pub enum FormCmd {
    /// Create a form; prints its id
    Create(CreateArgs),
    /// List saved forms
    List,
    /// Show a form with its current values
    Show { id: String },
    /// Delete a form (its data is kept)
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Form name; an empty name saves nothing
    #[arg(long, default_value = "")]
    pub name: String,

    /// Field as `label:type[:opt1,opt2]`, repeatable
    #[arg(long = "field", value_parser = parse_field_spec)]
    pub fields: Vec<Field>,

    /// Print the form preview without saving it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum EntryCmd {
    /// Record a value for one field
    Set {
        form_id: String,
        label: String,
        value: String,
    },
    /// Validate and submit
    Submit { form_id: String },
}

#[derive(Debug, Subcommand)]
pub enum DataCmd {
    /// Print the data table
    Table {
        /// Header to click, in order: `form-name` or a column label
        #[arg(long = "sort")]
        sort: Vec<String>,
    },
    /// Delete all collected data
    Clear,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldSpecError {
    #[error("expected `label:type[:options]`, got '{0}'")]
    Malformed(String),

    #[error("unknown field type '{0}' (expected one of: text, textarea, radio, select, email, phone)")]
    UnknownType(String),

    #[error("field '{0}' needs at least one option")]
    MissingOptions(String),
}

/// Parse a `label:type[:opt1,opt2]` field spec through the builder, so the
/// CLI enforces the same rules as the interactive view.
pub fn parse_field_spec(spec: &str) -> Result<Field, FieldSpecError> {
    let mut parts = spec.splitn(3, ':');
    let label = parts.next().unwrap_or_default();
    let Some(type_name) = parts.next() else {
        return Err(FieldSpecError::Malformed(spec.to_string()));
    };
    if label.is_empty() {
        return Err(FieldSpecError::Malformed(spec.to_string()));
    }
    let field_type =
        FieldType::parse(type_name).ok_or_else(|| FieldSpecError::UnknownType(type_name.to_string()))?;

    let mut state = BuilderReducer::reduce(
        BuilderState::default(),
        BuilderIntent::SetFieldLabel(label.to_string()),
    );
    state = BuilderReducer::reduce(state, BuilderIntent::SetFieldType(Some(field_type)));
    if let Some(options) = parts.next().filter(|_| field_type.is_choice()) {
        for option in options.split(',') {
            state = BuilderReducer::reduce(state, BuilderIntent::SetOptionInput(option.to_string()));
            state = BuilderReducer::reduce(state, BuilderIntent::AddOption);
        }
    }
    state = BuilderReducer::reduce(state, BuilderIntent::AddField);

    state
        .preview()
        .first()
        .cloned()
        .ok_or_else(|| FieldSpecError::MissingOptions(label.to_string()))
}

/// Load the config named on the command line and apply its overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Run a parsed command, writing user-facing output to `out`.
pub fn run(cli: Cli, config: &Config, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    let mut workspace = Workspace::open(config).context("failed to open data store")?;
    let code = dispatch(cli.cmd, &mut workspace, out)?;
    workspace.close();
    Ok(code)
}

fn dispatch(cmd: Cmd, ws: &mut Workspace, out: &mut impl Write) -> anyhow::Result<ExitCode> {
    match cmd {
        Cmd::Form(FormCmd::Create(args)) => {
            let mut state = BuilderReducer::reduce(
                BuilderState::default(),
                BuilderIntent::SetFormName(args.name),
            );
            for field in args.fields {
                state.pending.add_field(field);
            }
            if args.dry_run {
                writeln!(out, "{}", state.pending.name())?;
                write!(out, "{}", render_preview(state.preview()))?;
                return Ok(ExitCode::SUCCESS);
            }
            if let Some(id) = ws.save_form(&mut state.pending)? {
                writeln!(out, "{id}")?;
            }
        }
        Cmd::Form(FormCmd::List) => {
            write!(out, "{}", render_form_list(ws.forms().forms()))?;
        }
        Cmd::Form(FormCmd::Show { id }) => {
            let id = FormId::from(id);
            let form = ws
                .form(&id)
                .with_context(|| format!("Form '{id}' not found"))?;
            write!(out, "{}", render_form(form, ws.submissions().get(&id)))?;
        }
        Cmd::Form(FormCmd::Delete { id }) => {
            let id = FormId::from(id);
            if !ws.delete_form(&id)? {
                tracing::debug!(form_id = %id, "delete of unknown form ignored");
            }
        }
        Cmd::Entry(EntryCmd::Set {
            form_id,
            label,
            value,
        }) => {
            let form_id = FormId::from(form_id);
            if let Some(field) = ws.form(&form_id).and_then(|form| form.field(&label)) {
                if !Affordance::for_field(field).accepts(&value) {
                    anyhow::bail!("'{value}' is not an option of '{label}'");
                }
            }
            ws.set_value(&form_id, &label, value)?;
        }
        Cmd::Entry(EntryCmd::Submit { form_id }) => {
            let form_id = FormId::from(form_id);
            let reason = ws.check(&form_id).err();
            let accepted = ws.submit(&form_id)?;
            let state = LibraryReducer::reduce(
                LibraryState::default(),
                LibraryIntent::Submitted { accepted },
            );
            if let Some(notice) = &state.notice {
                write!(out, "{}", render_notice(notice))?;
            }
            if let Some(reason) = reason {
                writeln!(out, "{reason}")?;
            }
            if !accepted {
                return Ok(ExitCode::from(1));
            }
        }
        Cmd::Data(DataCmd::Table { sort }) => {
            let state = sort.iter().fold(TableState::default(), |state, header| {
                TableReducer::reduce(state, TableIntent::SortBy(SortKey::from_header(header)))
            });
            write!(out, "{}", render_table(&ws.table(&state), &state))?;
        }
        Cmd::Data(DataCmd::Clear) => {
            ws.clear_all()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
