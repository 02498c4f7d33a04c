use std::time::Instant;

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;

use super::handle_event;
use crate::logic::handle_feed_response;
use crate::state::types::{Agency, AgencyRef, Category, CategoryRef, NewsItem, NewsPage};
use crate::state::{AppState, FeedRequest, FeedResponse, Modal};

fn item(id: usize, image: bool) -> NewsItem {
    NewsItem {
        id: format!("n{id}"),
        title: format!("خبر {id}"),
        content: String::new(),
        image_url: image.then(|| format!("https://img/{id}.jpg")),
        pub_date: 0,
        link: "#".into(),
        category: CategoryRef::default(),
        agency: AgencyRef::default(),
    }
}

/// Loaded state: 10 feed rows, 3 slides, two agencies and one category.
fn loaded_app() -> AppState {
    let mut app = AppState::default();
    let request = app.feed.begin_reset(Default::default(), 15);
    let mut items: Vec<NewsItem> = (0..3).map(|i| item(i, true)).collect();
    items.extend((3..15).map(|i| item(i, false)));
    handle_feed_response(
        &mut app,
        FeedResponse::Initial {
            request,
            news: Ok(NewsPage {
                items,
                next: None,
                total: None,
            }),
            categories: Ok(vec![Category {
                id: 7,
                name: "ورزشی".into(),
            }]),
            agencies: Ok(vec![
                Agency {
                    id: 1,
                    name: "ایرنا".into(),
                    website: None,
                    image_url: None,
                },
                Agency {
                    id: 2,
                    name: "ایسنا".into(),
                    website: None,
                    image_url: None,
                },
            ]),
        },
        Instant::now(),
    );
    app
}

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CEvent {
    CEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
/// What: `q` exits from the main screen; `Ctrl+C` exits even with a modal open.
fn events_quit_keys() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    assert!(handle_event(key(KeyCode::Char('q')), &mut app, &tx));

    app.modal = Modal::Help;
    assert!(handle_event(
        CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        &mut app,
        &tx
    ));
    assert!(!handle_event(key(KeyCode::Char('q')), &mut app, &tx));
    assert_eq!(app.modal, Modal::None);
}

#[test]
/// What: Moving the cursor to the sentinel region sends exactly one append.
fn events_cursor_near_end_requests_next_page() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    assert_eq!(app.feed.items.len(), 10);
    for _ in 0..5 {
        handle_event(key(KeyCode::Down), &mut app, &tx);
    }
    assert!(rx.try_recv().is_err());
    handle_event(key(KeyCode::Char('j')), &mut app, &tx);
    let Ok(FeedRequest::Append(req)) = rx.try_recv() else {
        panic!("expected append request");
    };
    assert_eq!((req.offset, req.limit), (15, 10));
    handle_event(key(KeyCode::End), &mut app, &tx);
    assert!(rx.try_recv().is_err(), "append already in flight");
}

#[test]
/// What: Toggling in the filter modal and applying resets the feed with the first agency.
fn events_filter_modal_toggle_and_apply() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    handle_event(key(KeyCode::Char('f')), &mut app, &tx);
    assert!(matches!(app.modal, Modal::Filter(_)));

    handle_event(key(KeyCode::Down), &mut app, &tx);
    handle_event(key(KeyCode::Char(' ')), &mut app, &tx);
    assert_eq!(app.selected_filters.agencies(), &[2]);
    handle_event(key(KeyCode::Tab), &mut app, &tx);
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(app.selected_filters.categories(), &[7]);
    assert!(rx.try_recv().is_err(), "nothing sent before apply");

    handle_event(key(KeyCode::Char('a')), &mut app, &tx);
    assert_eq!(app.modal, Modal::None);
    let Ok(FeedRequest::Reset(req)) = rx.try_recv() else {
        panic!("expected reset request");
    };
    assert_eq!(req.filter.agency_id, Some(2));
    assert_eq!(req.filter.category_id, Some(7));
    assert_eq!(req.limit, 10);
}

#[test]
/// What: The date section accepts digits and separators only.
fn events_filter_modal_edits_dates() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    handle_event(key(KeyCode::Char('f')), &mut app, &tx);
    handle_event(key(KeyCode::BackTab), &mut app, &tx);
    for ch in "1403-0x1".chars() {
        handle_event(key(KeyCode::Char(ch)), &mut app, &tx);
    }
    assert_eq!(app.selected_filters.start_date, "1403-01");
    handle_event(key(KeyCode::Backspace), &mut app, &tx);
    handle_event(key(KeyCode::Down), &mut app, &tx);
    handle_event(key(KeyCode::Char('9')), &mut app, &tx);
    assert_eq!(app.selected_filters.start_date, "1403-0");
    assert_eq!(app.selected_filters.end_date, "9");
}

#[test]
/// What: Search input is applied on Enter and removed again with `x`.
fn events_search_and_chip_removal() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    handle_event(key(KeyCode::Char('/')), &mut app, &tx);
    for ch in "نفت".chars() {
        handle_event(key(KeyCode::Char(ch)), &mut app, &tx);
    }
    handle_event(key(KeyCode::Enter), &mut app, &tx);
    assert_eq!(app.search.as_deref(), Some("نفت"));
    let Ok(FeedRequest::Reset(req)) = rx.try_recv() else {
        panic!("expected reset request");
    };
    assert_eq!(req.filter.q.as_deref(), Some("نفت"));

    handle_event(key(KeyCode::Char('x')), &mut app, &tx);
    assert_eq!(app.search, None);
    assert!(matches!(rx.try_recv(), Ok(FeedRequest::Reset(_))));
}

#[test]
/// What: Dragging leftward past the threshold shows the previous slide; a
/// click without travel opens the slide.
fn events_carousel_drag_and_click() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    app.carousel_rect = Some((0, 0, 40, 8));
    assert_eq!(app.featured.len(), 3);

    handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 2), &mut app, &tx);
    handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 2), &mut app, &tx);
    assert!(!app.carousel.tick(Instant::now() + app.settings.carousel_interval));
    handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 2), &mut app, &tx);
    assert_eq!(app.carousel.index(), 2);

    handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 3), &mut app, &tx);
    handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 10, 3), &mut app, &tx);
    assert_eq!(
        app.modal,
        Modal::Detail {
            id: "n2".into(),
            scroll: 0
        }
    );
}

#[test]
/// What: Clicking a feed row selects it; clicking it again opens the detail view.
fn events_feed_click_selects_then_opens() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    app.feed_rect = Some((0, 10, 60, 20));
    handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 14), &mut app, &tx);
    assert_eq!(app.selected, 2);
    handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 15), &mut app, &tx);
    let Modal::Detail { id, .. } = &app.modal else {
        panic!("expected detail modal");
    };
    assert_eq!(id, &app.feed.items[2].id);
}

#[test]
/// What: Opening an item without a link reports it on the status line; reload clears it.
fn events_open_without_link_sets_status() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut app = loaded_app();
    assert!(!handle_event(key(KeyCode::Char('o')), &mut app, &tx));
    assert_eq!(app.status.as_deref(), Some("لینک این خبر در دسترس نیست"));
    assert!(!handle_event(key(KeyCode::Char('r')), &mut app, &tx));
    assert_eq!(app.status, None);
}
