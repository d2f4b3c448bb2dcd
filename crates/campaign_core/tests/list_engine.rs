use std::num::NonZeroUsize;

use campaign_core::{CampaignSummary, CategoryFilter, ListEngine, SortCriterion};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn campaign(
    id: u64,
    category: &str,
    raised: f64,
    goal: f64,
    supporters: u32,
    created: i64,
) -> CampaignSummary {
    CampaignSummary {
        id,
        title: format!("Campaign {id}"),
        category: category.to_string(),
        raised_amount: raised,
        goal_amount: goal,
        supporter_count: supporters,
        created_at: Utc.timestamp_opt(created, 0).unwrap(),
    }
}

fn two_campaigns() -> Vec<CampaignSummary> {
    vec![
        campaign(1, "health", 50.0, 100.0, 10, 1_000),
        campaign(2, "education", 80.0, 200.0, 5, 2_000),
    ]
}

fn numbered(count: u64, category: &str) -> Vec<CampaignSummary> {
    (1..=count)
        .map(|id| campaign(id, category, 0.0, 100.0, 0, 1_000))
        .collect()
}

fn engine_with(items: Vec<CampaignSummary>) -> ListEngine {
    let mut engine = ListEngine::new();
    engine.initialize(items);
    engine
}

#[test]
fn initialize_resets_criteria() {
    let mut engine = engine_with(two_campaigns());
    engine.set_filter("health");
    engine.set_sort(SortCriterion::Popular);
    engine.load_more();

    engine.initialize(two_campaigns());

    assert_eq!(engine.filter(), &CategoryFilter::All);
    assert_eq!(engine.sort(), SortCriterion::Newest);
    assert_eq!(engine.page_size(), 6);
}

#[test]
fn newest_puts_most_recent_first() {
    let mut engine = engine_with(two_campaigns());
    engine.set_filter("all");
    engine.set_sort(SortCriterion::Newest);

    let view = engine.visible_view();
    assert_eq!(view.ids(), vec![2, 1]);
    assert!(!view.has_more);
}

#[test]
fn category_filter_restricts_set() {
    let mut engine = engine_with(two_campaigns());
    engine.set_filter("health");

    let view = engine.visible_view();
    assert_eq!(view.ids(), vec![1]);
    assert_eq!(view.total_filtered, 1);
    assert_eq!(view.total_shown, 1);
}

#[test]
fn unknown_category_yields_empty_view() {
    let mut engine = engine_with(two_campaigns());
    engine.set_filter("environment");

    let view = engine.visible_view();
    assert!(view.visible.is_empty());
    assert_eq!(view.total_filtered, 0);
    assert!(!view.has_more);
}

#[test]
fn load_more_reveals_next_page() {
    let engine_items = numbered(8, "all");
    let mut engine = engine_with(engine_items);

    let view = engine.visible_view();
    assert_eq!(view.total_shown, 6);
    assert!(view.has_more);
    assert_eq!(view.remaining(), 2);

    engine.load_more();
    let view = engine.visible_view();
    assert_eq!(view.total_shown, 8);
    assert!(!view.has_more);
    assert_eq!(view.remaining(), 0);
}

#[test]
fn popular_orders_by_supporters() {
    let mut engine = engine_with(two_campaigns());
    engine.set_sort(SortCriterion::Popular);
    assert_eq!(engine.visible_view().ids(), vec![1, 2]);
}

#[test]
fn progress_and_amount_sort_descending() {
    let items = vec![
        campaign(1, "health", 10.0, 500.0, 0, 1_000),
        campaign(2, "health", 90.0, 100.0, 0, 1_000),
        campaign(3, "health", 40.0, 300.0, 0, 1_000),
    ];
    let mut engine = engine_with(items);

    engine.set_sort(SortCriterion::Progress);
    assert_eq!(engine.visible_view().ids(), vec![2, 3, 1]);

    engine.set_sort(SortCriterion::Amount);
    assert_eq!(engine.visible_view().ids(), vec![1, 3, 2]);
}

#[test]
fn empty_catalog_yields_empty_view() {
    let engine = engine_with(Vec::new());
    let view = engine.visible_view();

    assert!(view.visible.is_empty());
    assert_eq!(view.total_filtered, 0);
    assert_eq!(view.total_shown, 0);
    assert!(!view.has_more);
}

#[test]
fn repeated_filter_is_idempotent() {
    let items = numbered(9, "health");
    let mut once = engine_with(items.clone());
    once.set_filter("health");

    let mut twice = engine_with(items);
    twice.set_filter("health");
    twice.set_filter("health");

    assert_eq!(once.visible_view(), twice.visible_view());
}

#[test]
fn criteria_changes_reset_page_size() {
    let mut engine = engine_with(numbered(20, "health"));
    engine.load_more();
    engine.load_more();
    assert_eq!(engine.page_size(), 18);

    engine.set_filter("health");
    assert_eq!(engine.page_size(), 6);

    engine.load_more();
    engine.set_sort(SortCriterion::Amount);
    assert_eq!(engine.page_size(), 6);
}

#[test]
fn visible_is_prefix_of_sorted_set() {
    let items: Vec<CampaignSummary> = (1..=15)
        .map(|id| {
            let category = if id % 3 == 0 { "education" } else { "health" };
            campaign(id, category, (id * 7 % 11) as f64, 100.0, (id % 4) as u32, 1_000)
        })
        .collect();
    let mut engine = engine_with(items.clone());
    engine.set_filter("health");
    engine.set_sort(SortCriterion::Progress);

    let mut expected: Vec<&CampaignSummary> =
        items.iter().filter(|c| c.category == "health").collect();
    expected.sort_by(|a, b| b.raised_amount.total_cmp(&a.raised_amount));

    for _ in 0..3 {
        let view = engine.visible_view();
        assert_eq!(view.total_shown, engine.page_size().min(view.total_filtered));
        assert_eq!(view.visible, expected[..view.total_shown].to_vec());
        engine.load_more();
    }
}

#[test]
fn ties_keep_source_order() {
    let items = vec![
        campaign(1, "health", 50.0, 100.0, 3, 1_000),
        campaign(2, "education", 50.0, 100.0, 3, 1_000),
        campaign(3, "health", 70.0, 100.0, 3, 1_000),
        campaign(4, "health", 50.0, 100.0, 3, 1_000),
    ];
    let mut engine = engine_with(items);

    for criterion in SortCriterion::ALL {
        engine.set_sort(criterion);
        engine.set_filter("all");
        let ids = engine.visible_view().ids();
        match criterion {
            SortCriterion::Progress => assert_eq!(ids, vec![3, 1, 2, 4]),
            _ => assert_eq!(ids, vec![1, 2, 3, 4]),
        }

        engine.set_filter("health");
        let ids = engine.visible_view().ids();
        match criterion {
            SortCriterion::Progress => assert_eq!(ids, vec![3, 1, 4]),
            _ => assert_eq!(ids, vec![1, 3, 4]),
        }
    }
}

#[test]
fn load_more_is_monotonic_until_exhausted() {
    let mut engine = engine_with(numbered(14, "health"));
    let mut last_shown = 0;
    for _ in 0..5 {
        let view = engine.visible_view();
        assert!(view.total_shown >= last_shown);
        assert_eq!(view.has_more, engine.page_size() < view.total_filtered);
        last_shown = view.total_shown;
        engine.load_more();
    }
    assert_eq!(last_shown, 14);
    assert!(!engine.visible_view().has_more);
}

#[test]
fn unrecognized_sort_falls_back_to_newest() {
    let mut engine = engine_with(two_campaigns());
    engine.set_sort(SortCriterion::Popular);
    engine.set_sort_str("most-shared");

    assert_eq!(engine.sort(), SortCriterion::Newest);
    assert_eq!(engine.visible_view().ids(), vec![2, 1]);
    assert_eq!(SortCriterion::parse("  Popular "), SortCriterion::Popular);
}

#[test]
fn custom_page_step_drives_paging() {
    let step = NonZeroUsize::new(4).unwrap();
    let mut engine = ListEngine::with_page_step(step);
    engine.initialize(numbered(10, "health"));

    assert_eq!(engine.visible_view().total_shown, 4);
    engine.load_more();
    assert_eq!(engine.visible_view().total_shown, 8);
    engine.set_sort(SortCriterion::Popular);
    assert_eq!(engine.page_size(), 4);
}

#[test]
fn categories_in_first_appearance_order() {
    let engine = engine_with(vec![
        campaign(1, "water", 0.0, 1.0, 0, 1),
        campaign(2, "health", 0.0, 1.0, 0, 1),
        campaign(3, "water", 0.0, 1.0, 0, 1),
    ]);
    assert_eq!(engine.categories(), vec!["water", "health"]);
}
