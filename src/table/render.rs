//! Tera rendering of [`TableView`].

use tera::{Context, Tera};

use crate::table::view::TableView;

/// Template name the table is rendered with. Hosts may ship their own
/// template under this name to restyle the table.
pub const TEMPLATE_NAME: &str = "request_table.html";

const TEMPLATE: &str = include_str!("../../templates/request_table.html");

/// Adds the bundled table template unless `tera` already has one.
pub fn register_template(tera: &mut Tera) -> tera::Result<()> {
    if tera.get_template_names().any(|name| name == TEMPLATE_NAME) {
        return Ok(());
    }
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
}

/// Builds a Tera instance for the table, loading host templates from the
/// `templates_dir` glob when one is configured.
pub fn table_tera(templates_dir: Option<&str>) -> tera::Result<Tera> {
    let mut tera = match templates_dir {
        Some(glob) => Tera::new(glob)?,
        None => Tera::default(),
    };
    register_template(&mut tera)?;
    Ok(tera)
}

/// Renders the table fragment.
pub fn render_table(tera: &Tera, view: &TableView) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("table", view);
    tera.render(TEMPLATE_NAME, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::view::{HeaderCell, ItemLine, RowAction, RowView};

    fn row(id: i32, status: &str, actions: Vec<RowAction>) -> RowView {
        RowView {
            id,
            request_number: format!("REQ-{id:03}"),
            status: status.to_string(),
            status_icon: "<i class=\"bi bi-circle\"></i>".to_string(),
            status_color: "bg-info".to_string(),
            items: Vec::new(),
            more_items: 0,
            more_items_label: None,
            note: "-".to_string(),
            created_at: "1 Jan 2024".to_string(),
            actions,
        }
    }

    fn view(rows: Vec<RowView>) -> TableView {
        TableView {
            headers: vec![
                HeaderCell {
                    label: "Request Number",
                    sort_field: Some("request_number"),
                    sort_icon: Some("<i class=\"bi bi-arrow-up\"></i>".to_string()),
                },
                HeaderCell {
                    label: "Aksi",
                    sort_field: None,
                    sort_icon: None,
                },
            ],
            rows,
            events_url: "/request-table/events".to_string(),
        }
    }

    #[test]
    fn renders_one_row_per_request() {
        let tera = table_tera(None).unwrap();
        let html = render_table(
            &tera,
            &view(vec![
                row(1, "draft", vec![RowAction::View]),
                row(2, "approved", vec![RowAction::View]),
            ]),
        )
        .unwrap();

        assert_eq!(html.matches("<tr data-request-id=").count(), 2);
        assert!(html.find("REQ-001").unwrap() < html.find("REQ-002").unwrap());
    }

    #[test]
    fn sortable_headers_post_their_field() {
        let tera = table_tera(None).unwrap();
        let html = render_table(&tera, &view(Vec::new())).unwrap();

        assert!(html.contains(r#"name="field" value="request_number""#));
        assert!(html.contains(r#"<i class="bi bi-arrow-up"></i>"#));
        assert_eq!(html.matches(r#"value="sort""#).count(), 1);
    }

    #[test]
    fn empty_items_show_placeholder() {
        let tera = table_tera(None).unwrap();
        let table = view(vec![row(1, "draft", vec![RowAction::View])]);
        let html = render_table(&tera, &table).unwrap();

        assert!(html.contains("No items"));
        assert!(!html.contains("item lainnya"));
    }

    #[test]
    fn items_and_summary_are_rendered() {
        let mut with_items = row(1, "submitted", vec![RowAction::View]);
        with_items.items = vec![ItemLine {
            name: "Widget".to_string(),
            full_name: "Widget".to_string(),
            quantity: 2,
            label: "Widget (2x)".to_string(),
        }];
        with_items.more_items = 4;
        with_items.more_items_label = Some("+4 item lainnya".to_string());

        let tera = table_tera(None).unwrap();
        let html = render_table(&tera, &view(vec![with_items])).unwrap();

        assert!(html.contains("Widget (2x)"));
        assert!(html.contains("+4 item lainnya"));
        assert!(!html.contains("No items"));
    }

    #[test]
    fn user_text_is_escaped_but_icons_are_not() {
        let mut unsafe_row = row(1, "draft", vec![RowAction::View]);
        unsafe_row.note = "<script>alert(1)</script>".to_string();

        let tera = table_tera(None).unwrap();
        let html = render_table(&tera, &view(vec![unsafe_row])).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"<i class="bi bi-circle"></i> draft"#));
    }

    #[test]
    fn draft_controls() {
        let tera = table_tera(None).unwrap();
        let html = render_table(
            &tera,
            &view(vec![row(
                7,
                "draft",
                vec![RowAction::View, RowAction::Update, RowAction::Cancel],
            )]),
        )
        .unwrap();

        assert!(html.contains(r#"value="view""#));
        assert!(html.contains(r#"value="update""#));
        assert!(html.contains(r#"value="cancel""#));
        assert_eq!(html.matches(r#"name="id" value="7""#).count(), 3);
    }

    #[test]
    fn host_template_takes_precedence() {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, "{{ table.rows | length }} rows")
            .unwrap();
        register_template(&mut tera).unwrap();

        let table = view(vec![row(1, "draft", vec![RowAction::View])]);
        let html = render_table(&tera, &table).unwrap();

        assert_eq!(html, "1 rows");
    }
}
