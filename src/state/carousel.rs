//! Featured-article carousel: slide index, auto-advance timer, and drag gestures.

use std::time::{Duration, Instant};

/// Carousel timing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselMode {
    /// Advance one slide every interval.
    AutoAdvancing,
    /// A drag is in progress; the timer is stopped.
    SuspendedByGesture {
        /// Column where the drag started.
        start_col: u16,
        /// Last column seen while dragging.
        current_col: u16,
    },
}

/// Direction of a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    /// Moved to the previous slide.
    Previous,
    /// Moved to the next slide.
    Next,
}

/// What: Carousel over the featured items.
///
/// Details:
/// - Navigation wraps in both directions.
/// - Any manual move restarts the interval so a slide never flips right after
///   the user chose it.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    mode: CarouselMode,
    last_advance: Instant,
    interval: Duration,
    swipe_threshold: u16,
}

impl Carousel {
    /// Empty carousel with the given timing and swipe distance.
    #[must_use]
    pub fn new(interval: Duration, swipe_threshold: u16) -> Self {
        Self {
            len: 0,
            index: 0,
            mode: CarouselMode::AutoAdvancing,
            last_advance: Instant::now(),
            interval,
            swipe_threshold,
        }
    }

    /// Replace the slide count (new featured list); resets to the first slide.
    pub fn set_slides(&mut self, len: usize, now: Instant) {
        self.len = len;
        self.index = 0;
        self.mode = CarouselMode::AutoAdvancing;
        self.last_advance = now;
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slide index (0 when empty).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current timing mode.
    #[must_use]
    pub const fn mode(&self) -> CarouselMode {
        self.mode
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index < self.len {
            self.index = index;
            self.last_advance = now;
        }
    }

    /// Next slide, wrapping to the first.
    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.go_to((self.index + 1) % self.len, now);
        }
    }

    /// Previous slide, wrapping to the last.
    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            let i = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
            self.go_to(i, now);
        }
    }

    /// What: Drive auto-advance from the periodic tick.
    ///
    /// Output:
    /// - `true` when the slide changed.
    ///
    /// Details:
    /// - Does nothing while a gesture is in progress or with fewer than two slides.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.mode != CarouselMode::AutoAdvancing || self.len < 2 {
            return false;
        }
        if now.saturating_duration_since(self.last_advance) >= self.interval {
            self.next(now);
            return true;
        }
        false
    }

    /// Start a drag at `col`; stops the timer.
    pub fn begin_gesture(&mut self, col: u16) {
        self.mode = CarouselMode::SuspendedByGesture {
            start_col: col,
            current_col: col,
        };
    }

    /// Track the pointer while dragging.
    pub fn update_gesture(&mut self, col: u16) {
        if let CarouselMode::SuspendedByGesture { current_col, .. } = &mut self.mode {
            *current_col = col;
        }
    }

    /// What: Finish a drag and restart the timer.
    ///
    /// Inputs:
    /// - `col`: Column where the pointer was released.
    ///
    /// Output:
    /// - The swipe performed, if the horizontal travel exceeded the threshold.
    ///
    /// Details:
    /// - Layout is right-to-left: dragging leftward goes to the previous slide,
    ///   dragging rightward to the next.
    pub fn end_gesture(&mut self, col: u16, now: Instant) -> Option<Swipe> {
        let CarouselMode::SuspendedByGesture { start_col, .. } = self.mode else {
            return None;
        };
        self.mode = CarouselMode::AutoAdvancing;
        self.last_advance = now;
        let diff = i32::from(start_col) - i32::from(col);
        if diff.unsigned_abs() <= u32::from(self.swipe_threshold) {
            return None;
        }
        if diff > 0 {
            self.prev(now);
            Some(Swipe::Previous)
        } else {
            self.next(now);
            Some(Swipe::Next)
        }
    }
}
