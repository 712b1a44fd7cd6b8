// tests/page_service_unit.rs
use chrono::Duration;
use rango::application::commands::categories::CreateCategoryCommand;
use rango::application::commands::pages::{AddPageCommand, AutoAddPageCommand, TrackVisitCommand};
use rango::application::error::ApplicationError;
use rango::domain::category::CategoryId;
use rango::domain::page::{Page, PageId, PageTitle, PageUrl, VisitWindow};
use std::sync::Arc;

mod support;
use support::{StubSearch, SteppingClock, TestApp, fixed_now};

async fn seed_category(app: &TestApp, name: &str) -> i64 {
    app.services
        .category_commands
        .create_category(CreateCategoryCommand { name: name.into() })
        .await
        .expect("create category")
        .id
}

#[tokio::test]
async fn add_page_assumes_http_and_starts_unvisited() {
    let app = TestApp::new();
    seed_category(&app, "Python").await;

    let page = app
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: "python".into(),
            title: "Learn Python in 10 Minutes".into(),
            url: "www.korokithakis.net/tutorials/python/".into(),
        })
        .await
        .unwrap()
        .expect("category exists");

    assert_eq!(page.url, "http://www.korokithakis.net/tutorials/python/");
    assert_eq!(page.views, 0);
    assert!(page.first_visit.is_none());
    assert!(page.last_visit.is_none());
}

#[tokio::test]
async fn add_page_to_unknown_category_is_none() {
    let app = TestApp::new();

    let page = app
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: "missing".into(),
            title: "Anything".into(),
            url: "http://example.com".into(),
        })
        .await
        .unwrap();

    assert!(page.is_none());
    assert!(app.pages.snapshot().is_empty());
}

#[tokio::test]
async fn add_page_requires_title() {
    let app = TestApp::new();
    seed_category(&app, "Python").await;

    let err = app
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: "python".into(),
            title: " ".into(),
            url: "http://example.com".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn auto_add_is_get_or_create() {
    let app = TestApp::new();
    let category_id = seed_category(&app, "Django").await;
    let command = || AutoAddPageCommand {
        category_id,
        title: "Django Rocks".into(),
        url: "http://www.djangorocks.com/".into(),
    };

    let first = app
        .services
        .page_commands
        .auto_add_page(command())
        .await
        .unwrap()
        .expect("category exists");
    let second = app
        .services
        .page_commands
        .auto_add_page(command())
        .await
        .unwrap()
        .expect("category exists");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].id, second[0].id);
}

#[tokio::test]
async fn auto_add_to_unknown_category_is_none() {
    let app = TestApp::new();

    let pages = app
        .services
        .page_commands
        .auto_add_page(AutoAddPageCommand {
            category_id: 42,
            title: "Django Rocks".into(),
            url: "http://www.djangorocks.com/".into(),
        })
        .await
        .unwrap();

    assert!(pages.is_none());
}

#[tokio::test]
async fn track_visit_counts_and_stamps_both_visits_on_first_click() {
    let app = TestApp::new();
    seed_category(&app, "Python").await;
    let page = app
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: "python".into(),
            title: "Tutorial".into(),
            url: "http://docs.python.org/3/tutorial/".into(),
        })
        .await
        .unwrap()
        .unwrap();

    let visited = app
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id: page.id })
        .await
        .unwrap()
        .expect("page exists");

    assert_eq!(visited.views, 1);
    assert_eq!(visited.first_visit, Some(fixed_now()));
    assert_eq!(visited.last_visit, Some(fixed_now()));
}

#[tokio::test]
async fn repeated_visits_keep_first_visit_and_advance_last_visit() {
    let app = TestApp::with(Arc::new(SteppingClock::new(60)), Arc::new(StubSearch::default()));
    seed_category(&app, "Python").await;
    let page = app
        .services
        .page_commands
        .add_page(AddPageCommand {
            category_slug: "python".into(),
            title: "Tutorial".into(),
            url: "http://docs.python.org/3/tutorial/".into(),
        })
        .await
        .unwrap()
        .unwrap();

    let first = app
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id: page.id })
        .await
        .unwrap()
        .unwrap();
    let second = app
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id: page.id })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.views, 2);
    assert_eq!(second.first_visit, first.first_visit);
    assert!(second.last_visit > first.last_visit);
    assert!(second.first_visit <= second.last_visit);
}

#[tokio::test]
async fn track_visit_repairs_a_stored_window_from_the_future() {
    let app = TestApp::new();
    let category_id = seed_category(&app, "Python").await;
    let future = fixed_now() + Duration::days(3);
    app.pages.seed(Page {
        id: PageId::new(7).unwrap(),
        category_id: CategoryId::new(category_id).unwrap(),
        title: PageTitle::new("Odd").unwrap(),
        url: PageUrl::parse("http://example.com/odd").unwrap(),
        views: 4,
        visits: VisitWindow::new(Some(future), Some(future)),
    });

    let visited = app
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id: 7 })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(visited.views, 5);
    assert_eq!(visited.last_visit, Some(fixed_now()));
    assert_eq!(visited.first_visit, Some(fixed_now()));
}

#[tokio::test]
async fn track_visit_unknown_page_is_none() {
    let app = TestApp::new();

    let visited = app
        .services
        .page_commands
        .track_visit(TrackVisitCommand { page_id: 99 })
        .await
        .unwrap();

    assert!(visited.is_none());
}
