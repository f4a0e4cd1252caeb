//! `profiles` command-line entry point.
//!
//! # Responsibility
//! - Drive the core controllers against a seeded in-memory gateway.
//! - Render pages, page windows and form errors as plain text.

mod args;

use args::{AddArgs, CliArgs, Command, ListArgs};
use clap::Parser;
use log::error;
use profiles_core::display::{
    company_display, contact_lines, format_created_date, records_summary,
};
use profiles_core::{
    avatar_color, default_log_level, initials, init_logging, Field, FormController, ListConfig,
    ListCoordinator, ListStatus, MemoryGateway, PageToken, SubmitOutcome,
};
use std::process::ExitCode;

const LOG_LEVEL_ENV: &str = "PROFILES_LOG";

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let level = args
        .log_level
        .clone()
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(err) = init_logging(&level, None) {
        eprintln!("logging disabled: {err}");
    }

    let gateway = MemoryGateway::with_sample_data();
    let result = match args.command {
        Command::List(list_args) => run_list(&gateway, &list_args),
        Command::Add(add_args) => run_add(&gateway, &add_args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_exit module=cli status=error");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run_list(gateway: &MemoryGateway, args: &ListArgs) -> Result<(), String> {
    let config = match args.page_size {
        Some(page_size) => ListConfig::with_page_size(Some(page_size)),
        None => ListConfig::from_env(),
    };
    let mut list = ListCoordinator::new(config);

    // One fetch: a filter change starts its own, otherwise the mount fetch.
    let request = list
        .set_filter(args.source)
        .unwrap_or_else(|| list.mount());
    list.resolve_with(request, gateway);
    if list.status() == ListStatus::Failed {
        return Err(list.last_error().unwrap_or("fetch failed").to_string());
    }
    if args.page != 1 && !list.set_page(args.page) {
        return Err(format!(
            "page {} is out of range (1..={})",
            args.page,
            list.total_pages().max(1)
        ));
    }

    render_list(&list);
    Ok(())
}

fn run_add(gateway: &MemoryGateway, args: &AddArgs) -> Result<(), String> {
    let mut form = FormController::new();
    for (field, value) in [
        (Field::FullName, &args.name),
        (Field::Email, &args.email),
        (Field::Phone, &args.phone),
        (Field::CompanyName, &args.company),
        (Field::JobTitle, &args.title),
    ] {
        form.set_field(field, value.as_str())
            .map_err(|err| err.to_string())?;
    }
    form.set_source(args.source);

    match form.submit_with(gateway) {
        SubmitOutcome::Saved(record) => {
            println!("Created {} (id {}).\n", record.full_name, record.id);
            let mut list = ListCoordinator::new(ListConfig::from_env());
            let request = list.refresh();
            list.resolve_with(request, gateway);
            render_list(&list);
            Ok(())
        }
        SubmitOutcome::Invalid
        | SubmitOutcome::Rejected
        | SubmitOutcome::InFlight
        | SubmitOutcome::Discarded => {
            Err(describe_form_errors(&form))
        }
    }
}

fn describe_form_errors(form: &FormController) -> String {
    let mut lines = Vec::new();
    if let Some(message) = form.top_level_error() {
        lines.push(message.to_string());
    }
    for (field, message) in form.field_errors() {
        lines.push(format!("{}: {message}", field.label()));
    }
    if lines.is_empty() {
        lines.push("submission did not complete".to_string());
    }
    lines.join("\n")
}

fn render_list(list: &ListCoordinator) {
    println!(
        "{} [{}]",
        records_summary(list.records().len(), list.is_loading()),
        list.filter().label()
    );

    let view = list.page_view();
    if view.items.is_empty() {
        println!("No professionals found.");
    }
    for record in view.items {
        let position = match (
            record.job_title.as_deref(),
            company_display(record.company_name.as_deref()),
        ) {
            (Some(title), Some(company)) => format!("{title} @ {company}"),
            (Some(title), None) => title.to_string(),
            (None, Some(company)) => company.to_string(),
            (None, None) => String::new(),
        };
        println!(
            "  [{:<2}|{:<7}] {:<20} {:<32} {:<36} {:<8} {}",
            initials(&record.full_name),
            avatar_color(&record.full_name),
            record.full_name,
            contact_lines(record.email.as_deref(), record.phone.as_deref()).join(" / "),
            position,
            record.source.label(),
            format_created_date(&record.created_at)
        );
    }

    if !view.show_controls() {
        return;
    }
    if let Some((first, last)) = view.item_range() {
        println!(
            "Showing {first} to {last} of {} results",
            view.total_items
        );
    }
    let window = view
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(page) if *page == view.current_page => format!("[{page}]"),
            PageToken::Page(page) => page.to_string(),
            PageToken::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    let previous = if view.has_previous() { "<" } else { " " };
    let next = if view.has_next() { ">" } else { " " };
    println!("{previous} {window} {next}");
}
