//! Presenter driven by [`PreviewConfig`], used by the `preview_table` binary
//! to render a request table without a host application.

use std::fmt::{Display, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::request::RequestStatus;
use crate::domain::sort::{SortDirection, SortField, SortState};
use crate::models::config::PreviewConfig;
use crate::table::RequestTablePresenter;

pub struct ConfigPresenter {
    config: PreviewConfig,
}

impl ConfigPresenter {
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }
}

impl RequestTablePresenter for ConfigPresenter {
    fn status_icon(&self, status: &RequestStatus) -> String {
        self.config
            .statuses
            .get(status.as_str())
            .map(|style| style.icon.clone())
            .unwrap_or_default()
    }

    fn status_color(&self, status: &RequestStatus) -> String {
        self.config
            .statuses
            .get(status.as_str())
            .map_or_else(|| self.config.fallback_color.clone(), |style| style.color.clone())
    }

    fn format_date(&self, timestamp: &str) -> String {
        parse_timestamp(timestamp)
            .and_then(|parsed| write_formatted(parsed.format(&self.config.date_format)))
            .unwrap_or_else(|| timestamp.to_string())
    }

    fn render_sort_icon(&self, field: SortField, sort: Option<&SortState>) -> String {
        let icon = match sort {
            Some(state) if state.field == field => match state.direction {
                SortDirection::Asc => "bi-sort-up",
                SortDirection::Desc => "bi-sort-down",
            },
            _ => "bi-arrow-down-up text-muted",
        };
        format!(r#"<i class="bi {icon}"></i>"#)
    }
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Returns `None` when the format string is invalid.
fn write_formatted(value: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{value}").ok()?;
    Some(out)
}
