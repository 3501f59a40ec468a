use clap::{Parser, Subcommand};
use crate::cli::error::{
    exit_code_for, internal_error, lead_not_found_message, user_error, validate_channel_group, validate_closing_value,
    validate_loss_reason, validate_stage,
};
use crate::cli::output::{
    format_board, format_closing, format_lead_detail, format_lead_table, format_stages, format_transition,
    RenderOptions,
};
use crate::cli::prompt::prompt_closing;
use crate::data::DataSource;
use crate::filter::{filter_leads, LeadFilter};
use crate::models::{ClosingDetails, PipelineStage};
use crate::pipeline::{
    cancel_transition, confirm_transition, request_transition, ConfirmationContext, PipelineError, PipelineState,
    Transition,
};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadboard")]
#[command(about = "Lead pipeline board - move leads through the sales pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Lead data file (JSON array). Defaults to data.location in ~/.leadboard/rc, then sample data
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the pipeline board (default)
    Board {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List leads
    List {
        /// Search name, email or project (case-insensitive)
        search: Option<String>,
        /// Only leads of this project id
        #[arg(long)]
        project: Option<String>,
        /// Only leads of this channel group (paid, organic, referral)
        #[arg(long)]
        channel: Option<String>,
        /// Only leads in this stage
        #[arg(long)]
        stage: Option<String>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show lead details
    Show {
        /// Lead ID
        id: String,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Move a lead to another stage
    Move {
        /// Lead ID
        id: String,
        /// Destination stage (new, in_contact, meeting_scheduled, won, lost)
        stage: String,
        /// Closing value in UF (won). Defaults to the lead's ticket
        #[arg(long, value_name = "UF")]
        value: Option<String>,
        /// Loss reason (lost): price, financing, location, competitor, timing, other
        #[arg(long)]
        reason: Option<String>,
        /// Closing or loss notes
        #[arg(long)]
        notes: Option<String>,
        /// Confirm without prompting
        #[arg(short = 'y', long, conflicts_with = "cancel")]
        yes: bool,
        /// Dismiss the confirmation (lead keeps its stage)
        #[arg(long)]
        cancel: bool,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// List pipeline stages
    Stages,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let source = DataSource::resolve(cli.file.as_deref())?;
    log::debug!("data source: {:?}", source);

    match cli.command.unwrap_or(Commands::Board { json: false }) {
        Commands::Board { json } => handle_board(&source, json),
        Commands::List { search, project, channel, stage, json } => {
            handle_list(&source, search, project, channel, stage, json)
        }
        Commands::Show { id, json } => handle_show(&source, &id, json),
        Commands::Move { id, stage, value, reason, notes, yes, cancel, json } => {
            let options = MoveOptions { value, reason, notes, yes, cancel, json };
            handle_move(&source, &id, &stage, options)
        }
        Commands::Stages => {
            println!("{}", format_stages());
            Ok(())
        }
    }
}

fn load_state(source: &DataSource) -> Result<PipelineState> {
    let leads = source.load()?;
    Ok(PipelineState::new(leads))
}

fn board_json(state: &PipelineState) -> serde_json::Value {
    let board = state.board();
    let columns: Vec<serde_json::Value> = board
        .summaries()
        .into_iter()
        .zip(board.columns())
        .map(|(summary, (_, leads))| {
            json!({
                "stage": summary.stage,
                "label": summary.stage.label(),
                "count": summary.count,
                "total_ticket_uf": summary.total_ticket_uf,
                "leads": leads,
            })
        })
        .collect();
    json!({ "columns": columns })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn lead_index(state: &PipelineState) -> Vec<(String, String)> {
    state.leads().iter().map(|l| (l.id.clone(), l.name.clone())).collect()
}

fn handle_board(source: &DataSource, json: bool) -> Result<()> {
    let state = load_state(source)?;
    if json {
        return print_json(&board_json(&state));
    }
    println!("{}", format_board(&state.board(), &RenderOptions::detect()));
    Ok(())
}

fn handle_list(
    source: &DataSource,
    search: Option<String>,
    project: Option<String>,
    channel: Option<String>,
    stage: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = LeadFilter {
        search,
        project_id: project,
        channel_group: channel
            .map(|c| validate_channel_group(&c).unwrap_or_else(|e| user_error(&e))),
        stage: stage.map(|s| validate_stage(&s).unwrap_or_else(|e| user_error(&e))),
    };

    let state = load_state(source)?;
    let leads = filter_leads(state.leads(), &filter);
    if json {
        return print_json(&json!(leads));
    }
    println!("{}", format_lead_table(&leads, &RenderOptions::detect()));
    Ok(())
}

fn handle_show(source: &DataSource, id: &str, json: bool) -> Result<()> {
    let state = load_state(source)?;
    let lead = match state.get(id) {
        Some(lead) => lead,
        None => user_error(&lead_not_found_message(id, &lead_index(&state))),
    };
    if json {
        return print_json(&json!(lead));
    }
    println!("{}", format_lead_detail(lead, &RenderOptions::detect()));
    Ok(())
}

/// Flags of the `move` command
struct MoveOptions {
    value: Option<String>,
    reason: Option<String>,
    notes: Option<String>,
    yes: bool,
    cancel: bool,
    json: bool,
}

impl MoveOptions {
    /// Reject flags that mean nothing for a move to `destination`
    fn check_applies_to(&self, destination: PipelineStage) -> Result<(), String> {
        let mut stray = Vec::new();
        if self.value.is_some() && destination != PipelineStage::Won {
            stray.push("--value");
        }
        if self.reason.is_some() && destination != PipelineStage::Lost {
            stray.push("--reason");
        }
        if !destination.requires_confirmation() {
            if self.notes.is_some() {
                stray.push("--notes");
            }
            if self.yes {
                stray.push("--yes");
            }
            if self.cancel {
                stray.push("--cancel");
            }
        }
        if stray.is_empty() {
            Ok(())
        } else {
            Err(format!("{} cannot be used when moving to {}.", stray.join(", "), destination))
        }
    }

    /// Closing details given on the command line, if enough were given to skip the prompt
    fn preset_details(&self, context: &ConfirmationContext) -> Result<Option<ClosingDetails>, String> {
        match context {
            ConfirmationContext::Won { suggested_value_uf, .. } => {
                let closing_value_uf = match &self.value {
                    Some(value) => validate_closing_value(value)?,
                    None if self.yes => *suggested_value_uf,
                    None => return Ok(None),
                };
                Ok(Some(ClosingDetails::Won { closing_value_uf, notes: self.notes.clone() }))
            }
            ConfirmationContext::Lost { .. } => match &self.reason {
                Some(reason) => Ok(Some(ClosingDetails::Lost {
                    reason: validate_loss_reason(reason)?,
                    notes: self.notes.clone(),
                })),
                None if self.yes => Err("A loss reason is required: pass --reason with --yes.".to_string()),
                None => Ok(None),
            },
        }
    }
}

fn handle_move(source: &DataSource, id: &str, stage: &str, options: MoveOptions) -> Result<()> {
    let destination: PipelineStage = validate_stage(stage).unwrap_or_else(|e| user_error(&e));
    options.check_applies_to(destination).unwrap_or_else(|e| user_error(&e));
    let mut state = load_state(source)?;

    let transition = match request_transition(&mut state, id, destination) {
        Ok(transition) => transition,
        Err(PipelineError::UnknownLead(_)) => user_error(&lead_not_found_message(id, &lead_index(&state))),
        Err(e) if exit_code_for(&e) == 1 => user_error(&e.to_string()),
        Err(e) => internal_error(&e.to_string()),
    };

    if !options.json {
        println!("{}", format_transition(&transition));
    }

    if let Transition::PendingConfirmation(context) = &transition {
        let details = if options.cancel {
            None
        } else {
            match options.preset_details(context).unwrap_or_else(|e| user_error(&e)) {
                Some(details) => Some(details),
                None => {
                    let stdin = std::io::stdin();
                    let mut input = stdin.lock();
                    // Prompts go to stderr so --json output stays clean
                    let mut prompt_out = std::io::stderr();
                    prompt_closing(context, &mut input, &mut prompt_out)?
                }
            }
        };

        match details {
            Some(details) => {
                let record = confirm_transition(&mut state, details).unwrap_or_else(|e| user_error(&e.to_string()));
                if !options.json {
                    println!("{}", format_closing(&record));
                }
            }
            None => {
                if let Some(cancelled) = cancel_transition(&mut state) {
                    if !options.json {
                        let stage = state
                            .get(cancelled.lead_id())
                            .map(|l| l.status.label())
                            .unwrap_or("its stage");
                        println!("Cancelled. Lead {} stays in {}.", cancelled.lead_id(), stage);
                    }
                }
            }
        }
    }

    if options.json {
        return print_json(&json!({
            "lead": state.get(id),
            "closings": state.closings(),
            "board": board_json(&state),
        }));
    }

    println!();
    println!("{}", format_board(&state.board(), &RenderOptions::detect()));
    Ok(())
}
