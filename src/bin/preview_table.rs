//! Renders a request table from a JSON file and prints the HTML fragment.
//!
//! Usage: `preview_table <requests.json> [sort_field] [asc|desc]`

use std::{env, fs};

use dotenvy::dotenv;

use pushkind_requests::domain::request::Request;
use pushkind_requests::domain::sort::{SortDirection, SortField, SortState};
use pushkind_requests::models::config::TableConfig;
use pushkind_requests::preview::ConfigPresenter;
use pushkind_requests::services::table::render_request_table;
use pushkind_requests::table::render::table_tera;

fn parse_sort(
    field: Option<String>,
    direction: Option<String>,
) -> Result<Option<SortState>, String> {
    let Some(field) = field else {
        return Ok(None);
    };
    let field = field.parse::<SortField>().map_err(|e| e.to_string())?;
    let direction = match direction {
        Some(direction) => direction.parse::<SortDirection>().map_err(|e| e.to_string())?,
        None => SortDirection::default(),
    };
    Ok(Some(SortState::new(field, direction)))
}

fn run() -> Result<String, String> {
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| "usage: preview_table <requests.json> [sort_field] [asc|desc]".to_string())?;
    let sort = parse_sort(args.next(), args.next())?;

    let config = TableConfig::load("config").map_err(|e| format!("Error loading config: {e}"))?;

    let raw = fs::read_to_string(&path).map_err(|e| format!("Cannot read {path}: {e}"))?;
    let requests: Vec<Request> =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid requests in {path}: {e}"))?;
    log::info!("Loaded {} requests from {path}", requests.len());

    let tera = table_tera(config.templates_dir.as_deref())
        .map_err(|e| format!("Template parsing error(s): {e}"))?;
    let presenter = ConfigPresenter::new(config.preview);

    render_request_table(
        &tera,
        &requests,
        &presenter,
        sort.as_ref(),
        &config.events_path,
    )
    .map_err(|e| e.to_string())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(html) => println!("{html}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
