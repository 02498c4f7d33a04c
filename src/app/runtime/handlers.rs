use std::time::Instant;

use crate::state::AppState;

/// What: Handle the periodic UI tick.
///
/// Details:
/// - Advances the carousel when its interval has elapsed and no drag is in progress.
pub fn handle_tick(app: &mut AppState, now: Instant) {
    if app.carousel.tick(now) {
        tracing::trace!(index = app.carousel.index(), "carousel advanced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::{AgencyRef, CategoryRef, NewsItem};
    use std::time::Duration;

    #[test]
    /// What: Ticks advance the carousel only after the interval.
    fn tick_advances_carousel_after_interval() {
        let mut app = AppState::default();
        let t0 = Instant::now();
        let slide = |id: &str| NewsItem {
            id: id.into(),
            title: id.into(),
            content: String::new(),
            image_url: Some("https://img".into()),
            pub_date: 0,
            link: "#".into(),
            category: CategoryRef::default(),
            agency: AgencyRef::default(),
        };
        app.set_featured(vec![slide("a"), slide("b")], t0);
        handle_tick(&mut app, t0 + Duration::from_millis(250));
        assert_eq!(app.carousel.index(), 0);
        let interval = app.settings.carousel_interval;
        handle_tick(&mut app, t0 + interval);
        assert_eq!(app.carousel.index(), 1);
    }
}
