// Output formatting utilities

use crate::models::{ClosingDetails, ClosingRecord, Lead, PipelineStage};
use crate::pipeline::{Board, ConfirmationContext, Transition};
use crate::utils::{format_age, format_date};
use chrono::{DateTime, Utc};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

/// Map a color name string to its ANSI foreground code
fn color_name_to_fg(name: &str) -> Option<&'static str> {
    match name {
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "bright_black" => Some("\x1b[90m"),
        _ => None,
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS
/// environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Rendering options shared by board and table output
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub width: usize,
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    /// Options for the current terminal
    pub fn detect() -> Self {
        Self {
            use_color: is_tty(),
            width: get_terminal_width(),
            now: Utc::now(),
        }
    }

    /// Uncolored, fixed-width options
    pub fn plain(now: DateTime<Utc>) -> Self {
        Self {
            use_color: false,
            width: 120,
            now,
        }
    }
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    match color_name_to_fg(color) {
        Some(code) if use_color => format!("{}{}{}", code, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn bold_if(text: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

/// Truncate to `max` characters, marking the cut with '…'
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

/// Group digits with commas: 12500.0 -> "12,500"
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Ticket amount, e.g. "4,500 UF"
pub fn format_uf(value: f64) -> String {
    format!("{} UF", format_thousands(value))
}

/// Column total in thousands, e.g. "11K UF"
pub fn format_uf_thousands(value: f64) -> String {
    format!("{:.0}K UF", value / 1000.0)
}

fn fit_badge(lead: &Lead) -> String {
    format!("fit {}/5", lead.fit_score.value())
}

/// Render the board as stacked columns in stage order
pub fn format_board(board: &Board, options: &RenderOptions) -> String {
    let mut output = String::new();

    for (stage, leads) in board.columns() {
        let summary = board.summary(stage);
        let header = format!(
            "{} ({}) - {}",
            stage.label(),
            summary.count,
            format_uf_thousands(summary.total_ticket_uf)
        );
        output.push_str(&paint(&bold_if(&header, options.use_color), stage.color(), options.use_color));
        output.push('\n');

        if leads.is_empty() {
            output.push_str("  (empty)\n");
        }
        for lead in leads {
            output.push_str(&format_card(lead, options));
            output.push('\n');
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// One board card on a single line
fn format_card(lead: &Lead, options: &RenderOptions) -> String {
    let mut parts = vec![
        format!("[{}] {}", lead.id, lead.name),
        fit_badge(lead),
        format_uf(lead.ticket_uf),
        format!("{} - {}", lead.project_name, lead.district),
        lead.channel.clone(),
        format_age(lead.last_activity, options.now),
    ];
    let badge = lead.external_status.label();
    if !badge.is_empty() {
        parts.push(badge.to_string());
    }
    let line = format!("  {}", parts.into_iter().filter(|p| !p.is_empty()).collect::<Vec<_>>().join("  "));
    truncate(&line, options.width)
}

/// Render the list view as a table
pub fn format_lead_table(leads: &[&Lead], options: &RenderOptions) -> String {
    if leads.is_empty() {
        return "No leads found.".to_string();
    }

    let headers = ["ID", "Lead", "Project", "Fit", "Ticket", "Channel", "Activity", "Stage"];
    let rows: Vec<[String; 8]> = leads
        .iter()
        .map(|lead| {
            [
                lead.id.clone(),
                lead.name.clone(),
                lead.project_name.clone(),
                lead.fit_score.value().to_string(),
                format_uf(lead.ticket_uf),
                format!("{} ({})", lead.channel, lead.channel_group.as_str()),
                format_age(lead.last_activity, options.now),
                lead.status.label().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join(" ");
    output.push_str(&bold_if(header_line.trim_end(), options.use_color));
    output.push('\n');
    output.push_str(&widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join(" "));
    output.push('\n');

    for (lead, row) in leads.iter().zip(rows.iter()) {
        let last = row.len() - 1;
        let mut cells: Vec<String> = row[..last]
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i]))
            .collect();
        cells.push(paint(&row[last], lead.status.color(), options.use_color));
        output.push_str(&cells.join(" "));
        output.push('\n');
    }

    output.push_str(&format!("\n{} lead(s)", leads.len()));
    output
}

/// Detailed lead summary
pub fn format_lead_detail(lead: &Lead, options: &RenderOptions) -> String {
    let mut lines = vec![
        bold_if(&format!("Lead {}: {}", lead.id, lead.name), options.use_color),
        format!("Stage:          {}", paint(lead.status.label(), lead.status.color(), options.use_color)),
        format!("Email:          {}", lead.email),
        format!("Phone:          {}", lead.phone),
        format!("Project:        {} - {} ({})", lead.project_name, lead.district, lead.project_id),
        format!("Fit score:      {}/5 - {}", lead.fit_score.value(), lead.fit_score.label()),
        format!("Ticket:         {}", format_uf(lead.ticket_uf)),
        format!("Channel:        {} ({})", lead.channel, lead.channel_group.as_str()),
    ];

    let utm: Vec<String> = [
        ("source", &lead.utm_source),
        ("medium", &lead.utm_medium),
        ("campaign", &lead.utm_campaign),
    ]
    .iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
    .collect();
    if !utm.is_empty() {
        lines.push(format!("UTM:            {}", utm.join(" ")));
    }

    lines.push(format!("Created:        {}", format_date(lead.created_at)));
    lines.push(format!(
        "Last activity:  {} ({} ago)",
        format_date(lead.last_activity),
        format_age(lead.last_activity, options.now)
    ));
    let external = lead.external_status.label();
    if !external.is_empty() {
        lines.push(format!("Assistant:      {}", external));
    }
    lines.push(format!("Pre-evaluation: {}", lead.pre_evaluation_status.label()));
    lines.push(format!("Documents:      {}", lead.documents_progress()));
    if let Some(assigned) = &lead.assigned_to {
        lines.push(format!("Assigned to:    {}", assigned));
    }

    lines.join("\n")
}

/// Stage reference list
pub fn format_stages() -> String {
    PipelineStage::ALL
        .iter()
        .map(|stage| {
            let guard = if stage.requires_confirmation() {
                "  (terminal, requires confirmation)"
            } else {
                ""
            };
            format!("{}. {:<18} {}{}", stage.order(), stage.as_str(), stage.label(), guard)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Describe a move request outcome
pub fn format_transition(transition: &Transition) -> String {
    match transition {
        Transition::Unchanged => "Lead already in that stage. Nothing to do.".to_string(),
        Transition::Applied { lead_id, from, to } => {
            format!("Moved lead {}: {} -> {}", lead_id, from.label(), to.label())
        }
        Transition::PendingConfirmation(context) => format_confirmation_prompt_header(context),
    }
}

fn format_confirmation_prompt_header(context: &ConfirmationContext) -> String {
    match context {
        ConfirmationContext::Won { lead_id, suggested_value_uf } => format!(
            "Register closing for lead {} (ticket {})",
            lead_id,
            format_uf(*suggested_value_uf)
        ),
        ConfirmationContext::Lost { lead_id } => format!("Mark lead {} as lost", lead_id),
    }
}

/// Describe a confirmed closing
pub fn format_closing(record: &ClosingRecord) -> String {
    let detail = match &record.details {
        ClosingDetails::Won { closing_value_uf, .. } => format!("closing value {}", format_uf(*closing_value_uf)),
        ClosingDetails::Lost { reason, .. } => format!("reason: {}", reason.label()),
    };
    let mut line = format!(
        "Lead {}: {} -> {} ({})",
        record.lead_id,
        record.from.label(),
        record.to.label(),
        detail
    );
    if let Some(notes) = record.details.notes() {
        line.push_str(&format!("\n  Notes: {}", notes));
    }
    line
}
