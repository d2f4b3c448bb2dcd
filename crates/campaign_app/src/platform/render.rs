use campaign_core::{AppViewModel, CampaignRowView};

/// Renders the view as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 4);

    lines.push(format!(
        "Filter: {} | Sort: {} | Favorites: {}",
        view.active_filter,
        view.active_sort.as_str(),
        view.favorites_count
    ));
    let mut categories = vec!["all".to_string()];
    categories.extend(view.categories.iter().cloned());
    lines.push(format!("Categories: {}", categories.join(", ")));
    lines.push(view.results_label.clone());

    lines.extend(view.rows.iter().map(render_row));

    if let Some(label) = &view.load_more_label {
        lines.push(format!("[{label}]"));
    }
    lines
}

fn render_row(row: &CampaignRowView) -> String {
    let marker = if row.favorite { '*' } else { ' ' };
    format!(
        "{marker} #{} {} [{}] {} of {} ({}%) | {} supporters",
        row.id, row.title, row.category, row.raised, row.goal, row.progress_percent, row.supporters
    )
}
