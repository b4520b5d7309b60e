//! End-to-end flow through the public showcase API.
//!
//! A list controller opens a project, pages through its carousel under a
//! burst of input, and closes again, with the scroll lock observed throughout.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::{Duration, Instant};

use folio_core::{
    Catalog, Category, CloseTrigger, ProjectRecord, ScrollLatch, ScrollLock, Showcase,
};

const WINDOW: Duration = Duration::from_millis(150);

fn catalog() -> Catalog {
    let records: Vec<ProjectRecord> = serde_json::from_str(
        r#"[
            {
                "id": "payroll",
                "date": "January 2024",
                "name": "Payroll",
                "role": ["Full Stack Developer"],
                "description": "Payroll system",
                "technologies": ["Python", "CustomTkinter", "MySQL"],
                "badges": ["Freelance", "Local"],
                "images": ["payroll/1.png", "payroll/2.png", "payroll/3.png", "payroll/4.png"]
            },
            {
                "id": "notes",
                "date": "June 2023",
                "name": "Notes",
                "role": "Frontend Developer",
                "description": "Note taking app",
                "technologies": ["Vue", "Firebase"]
            }
        ]"#,
    )
    .expect("fixture records");
    Catalog::new(records).expect("unique ids")
}

#[test]
fn burst_of_next_requests_moves_one_slide_per_window() {
    let mut showcase = Showcase::new(catalog(), ScrollLatch::default(), WINDOW);
    let start = Instant::now();
    showcase.view_id("payroll").unwrap();
    assert!(showcase.lock().is_locked());

    assert!(showcase.next_image(start));
    for millis in [10, 50, 149] {
        assert!(!showcase.next_image(start + Duration::from_millis(millis)));
    }
    assert!(showcase.tick(start + WINDOW));
    assert_eq!(
        showcase.modal().current_image().as_deref(),
        Some("payroll/2.png")
    );

    // A request after the window is accepted again.
    assert!(showcase.next_image(start + WINDOW * 2));
    assert!(showcase.tick(start + WINDOW * 3));
    assert_eq!(
        showcase.modal().current_image().as_deref(),
        Some("payroll/3.png")
    );
}

#[test]
fn full_cycle_returns_to_first_slide() {
    let mut showcase = Showcase::new(catalog(), ScrollLatch::default(), WINDOW);
    assert!(showcase.view(0));
    let mut now = Instant::now();
    for _ in 0..4 {
        assert!(showcase.next_image(now));
        now += WINDOW;
        assert!(showcase.tick(now));
    }
    assert_eq!(
        showcase.modal().carousel().map(|c| c.current_index()),
        Some(0)
    );
}

#[test]
fn list_is_frozen_until_modal_closes() {
    let mut showcase = Showcase::new(catalog(), ScrollLatch::default(), WINDOW);
    assert!(showcase.view(0));
    assert!(!showcase.cursor_down());
    assert_eq!(showcase.cursor(), 0);

    assert!(showcase.close(CloseTrigger::Backdrop));
    assert!(!showcase.lock().is_locked());
    assert!(showcase.selection().selected_project().is_none());
    assert!(showcase.cursor_down());
    assert_eq!(showcase.cursor(), 1);
}

#[test]
fn rows_classify_chips_in_source_order() {
    let showcase = Showcase::new(catalog(), ScrollLatch::default(), WINDOW);
    let rows = showcase.rows();
    let categories: Vec<_> = rows[0].chips.iter().map(|chip| chip.category).collect();
    assert_eq!(
        categories,
        [Category::Backend, Category::Backend, Category::Database]
    );
    assert_eq!(rows[1].chips[0].category, Category::Frontend);
    assert!(rows[1].badges.is_empty());
}

#[test]
fn unknown_id_leaves_modal_closed() {
    let mut showcase = Showcase::new(catalog(), ScrollLatch::default(), WINDOW);
    assert!(showcase.view_id("missing").is_err());
    assert!(!showcase.modal().is_open());
    assert!(!showcase.lock().is_locked());
}
