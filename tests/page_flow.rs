//! End-to-end page session on a recording surface and a virtual clock.

use std::rc::Rc;

use portfolio_fx::{
    reset_page_state, typed_text, FormError, FormValues, Instruction, IntersectionEntry,
    ManualScheduler, NotificationKind, Page, PageConfig, PageMarkup, RecordingSurface,
    ScrollSnapshot, Target,
};

fn markup() -> PageMarkup {
    PageMarkup {
        nav_hrefs: vec![
            "#home".into(),
            "#about".into(),
            "#projects".into(),
            "#contact".into(),
        ],
        section_ids: vec![
            Some("home".into()),
            Some("about".into()),
            Some("projects".into()),
            Some("contact".into()),
        ],
        progress_widths: vec!["90".into(), "75".into(), "60".into()],
        project_cards: 3,
        copyright_html: Some("&copy; 2026 Jane Doe. All rights reserved.".into()),
        has_contact_form: true,
        has_cv_button: true,
    }
}

fn snapshot(scroll_top: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        scroll_top,
        viewport_height: 900.0,
        header_height: 70.0,
        section_tops: vec![0.0, 800.0, 1700.0, 2600.0],
        // Skill bars sit around y=1000..1100 in the document.
        progress_tops: vec![
            1000.0 - scroll_top,
            1050.0 - scroll_top,
            1100.0 - scroll_top,
        ],
    }
}

fn mounted() -> (Page, Rc<RecordingSurface>, Rc<ManualScheduler>) {
    reset_page_state();
    let surface = Rc::new(RecordingSurface::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let page = Page::new(
        PageConfig::default(),
        markup(),
        surface.clone(),
        scheduler.clone(),
    )
    .unwrap();
    (page, surface, scheduler)
}

fn toasts(surface: &RecordingSurface) -> Vec<(NotificationKind, String)> {
    surface
        .instructions()
        .into_iter()
        .filter_map(|i| match i {
            Instruction::CreateNotification { kind, text, .. } => Some((kind, text)),
            _ => None,
        })
        .collect()
}

#[test]
fn typing_cycles_through_first_phrase() {
    let (page, _surface, scheduler) = mounted();
    page.start(2027);

    scheduler.advance(999);
    assert_eq!(typed_text(), "");

    scheduler.advance(1);
    assert_eq!(typed_text(), "C");

    // Ten more characters at 100ms each.
    scheduler.advance(1000);
    assert_eq!(typed_text(), "CSE Student");

    scheduler.advance(1499);
    assert_eq!(typed_text(), "CSE Student");

    scheduler.advance(1);
    assert_eq!(typed_text(), "CSE Studen");

    // Remaining ten deletions at 50ms, then the pause before phrase two.
    scheduler.advance(500);
    assert_eq!(typed_text(), "");
    scheduler.advance(500);
    assert_eq!(typed_text(), "W");
}

#[test]
fn scrolling_down_the_page() {
    let (page, surface, _scheduler) = mounted();
    page.start(2027);

    // Initial reveal: nothing in view at the top.
    let initial = snapshot(0.0);
    page.reveal_progress(&initial.progress_tops, initial.viewport_height);
    assert!(!surface.has_class(Target::ProgressBar(0), "animated"));

    page.on_scroll(&snapshot(30.0));
    assert_eq!(
        surface.last_style(Target::Header, "box-shadow").as_deref(),
        Some("none")
    );
    assert!(surface.has_class(Target::NavLink(0), "active"));

    // About section: bars come into view, header hides while going down.
    page.on_scroll(&snapshot(700.0));
    assert!(surface.has_class(Target::NavLink(1), "active"));
    assert!(!surface.has_class(Target::NavLink(0), "active"));
    for bar in 0..3 {
        assert!(surface.has_class(Target::ProgressBar(bar), "animated"));
    }
    assert_eq!(
        surface.last_style(Target::ProgressBar(2), "width").as_deref(),
        Some("60%")
    );
    assert_eq!(
        surface.last_style(Target::Header, "transform").as_deref(),
        Some("translateY(-100%)")
    );
    assert_eq!(
        surface.last_style(Target::Header, "box-shadow").as_deref(),
        Some("0 4px 20px rgba(0, 0, 0, 0.2)")
    );

    // Scrolling back up shows the header again.
    page.on_scroll(&snapshot(650.0));
    assert_eq!(
        surface.last_style(Target::Header, "transform").as_deref(),
        Some("translateY(0)")
    );

    page.on_intersection(&[
        IntersectionEntry {
            section: 1,
            is_intersecting: true,
        },
        IntersectionEntry {
            section: 2,
            is_intersecting: false,
        },
    ]);
    assert!(surface.has_class(Target::Section(1), "fade-in"));
    assert!(!surface.has_class(Target::Section(2), "fade-in"));
}

#[test]
fn contact_form_round() {
    let (page, surface, scheduler) = mounted();

    let bad = page.on_submit(&FormValues::new("Jane", "jane@", "Hello"));
    assert_eq!(bad, Err(FormError::InvalidEmail));

    let good = page.on_submit(&FormValues::new("Jane", "jane@example.com", "Hello"));
    assert_eq!(good, Ok(()));

    assert_eq!(
        toasts(&surface),
        vec![
            (
                NotificationKind::Error,
                "Please enter a valid email address".into()
            ),
            (
                NotificationKind::Success,
                "Message sent successfully! I'll get back to you soon.".into()
            ),
        ]
    );
    assert_eq!(
        surface
            .instructions()
            .iter()
            .filter(|i| **i == Instruction::ResetForm)
            .count(),
        1
    );

    scheduler.advance(4300);
    let removed = surface
        .instructions()
        .iter()
        .filter(|i| matches!(i, Instruction::Remove { .. }))
        .count();
    assert_eq!(removed, 2);
}

#[test]
fn menu_and_anchor_navigation() {
    let (page, surface, _scheduler) = mounted();

    page.on_menu_toggle();
    assert!(surface.has_class(Target::NavMenu, "active"));

    page.on_nav_link_click();
    let top = page.on_anchor_click("#contact", 70.0, |id| (id == "contact").then_some(2600.0));
    assert_eq!(top, Some(2530.0));
    assert!(!surface.has_class(Target::NavMenu, "active"));
    assert_eq!(
        surface.instructions().last(),
        Some(&Instruction::ScrollTo {
            top: 2530.0,
            smooth: true
        })
    );
}

#[test]
fn footer_year_is_stamped() {
    let (page, surface, _scheduler) = mounted();
    page.start(2027);

    assert_eq!(
        surface.for_target(Target::Copyright),
        vec![Instruction::SetHtml {
            target: Target::Copyright,
            html: "&copy; 2027 Jane Doe. All rights reserved.".into()
        }]
    );
}
