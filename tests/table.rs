use pushkind_requests::domain::request::Request;
use pushkind_requests::domain::sort::{SortDirection, SortField, SortState};
use pushkind_requests::models::config::TableConfig;
use pushkind_requests::preview::ConfigPresenter;
use pushkind_requests::services::table::render_request_table;
use pushkind_requests::table::render::table_tera;
use pushkind_requests::table::{RequestTable, view::RowAction};

fn demo_requests() -> Vec<Request> {
    let raw = std::fs::read_to_string("demos/requests.json").unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn demo_requests_render_with_bundled_config() {
    let config = TableConfig::load("config").unwrap();
    let tera = table_tera(config.templates_dir.as_deref()).unwrap();
    let presenter = ConfigPresenter::new(config.preview);
    let sort = SortState::new(SortField::CreatedAt, SortDirection::Desc);

    let html = render_request_table(
        &tera,
        &demo_requests(),
        &presenter,
        Some(&sort),
        &config.events_path,
    )
    .unwrap();

    assert_eq!(html.matches("<tr data-request-id=").count(), 3);
    assert!(html.contains("Widget (2x)"));
    assert!(html.contains("Tinta printer (4x)"));
    assert!(html.contains("Product ID: 4 (1x)"));
    assert!(html.contains("+2 item lainnya"));
    assert!(html.contains("No items"));
    assert!(html.contains("01 Jan 2024"));
    assert!(html.contains("bi-sort-down"));
    assert!(html.contains("bg-warning text-dark"));
}

#[test]
fn demo_rows_gate_actions_on_draft() {
    let requests = demo_requests();
    let config = TableConfig::load("config").unwrap();
    let presenter = ConfigPresenter::new(config.preview);

    let view = RequestTable::new(&requests, &presenter, "/request-table/events").view();

    let actions: Vec<_> = view.rows.iter().map(|row| row.actions.clone()).collect();
    assert_eq!(
        actions,
        vec![
            vec![RowAction::View, RowAction::Update, RowAction::Cancel],
            vec![RowAction::View],
            vec![RowAction::View],
        ]
    );
    let notes: Vec<_> = view.rows.iter().map(|row| row.note.as_str()).collect();
    assert_eq!(notes, vec!["-", "Untuk kantor cabang", "-"]);
}
