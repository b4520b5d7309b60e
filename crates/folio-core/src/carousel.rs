//! Cyclic image carousel with a debounced transition guard.
//!
//! Every navigation request starts a transition that completes only after the
//! debounce window has elapsed. While a transition is pending, further requests
//! are dropped rather than queued, so a burst of input moves the carousel by at
//! most one step per window. Time is passed in explicitly; callers drive
//! completion through [`Carousel::settle`].

use std::time::{Duration, Instant};

use tracing::debug;

/// Delay between accepting a request and showing the new slide.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(150);

/// Navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Advance by one, wrapping from last to first.
    Next,
    /// Go back by one, wrapping from first to last.
    Previous,
    /// Jump to an absolute slide index.
    To(usize),
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    step: Step,
    started: Instant,
}

/// Carousel position plus the pending transition, if any.
#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    debounce: Duration,
    transition: Option<Transition>,
}

impl Carousel {
    /// Carousel over `len` slides starting at index 0.
    #[must_use]
    pub const fn new(len: usize, debounce: Duration) -> Self {
        Self {
            len,
            index: 0,
            debounce,
            transition: None,
        }
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the carousel has no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Configured debounce window.
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Whether a transition is pending.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Step of the pending transition.
    #[must_use]
    pub fn pending_step(&self) -> Option<Step> {
        self.transition.map(|transition| transition.step)
    }

    /// Request a move to the next slide. Returns `false` if the request was dropped.
    pub fn next(&mut self, now: Instant) -> bool {
        self.request(Step::Next, now)
    }

    /// Request a move to the previous slide. Returns `false` if the request was dropped.
    pub fn previous(&mut self, now: Instant) -> bool {
        self.request(Step::Previous, now)
    }

    /// Request a jump to `index`. Out-of-range indices are rejected.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.len {
            debug!(index, len = self.len, "carousel jump out of range");
            return false;
        }
        self.request(Step::To(index), now)
    }

    /// Complete the pending transition once its window has elapsed.
    ///
    /// Returns `true` when a transition completed during this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        if now.saturating_duration_since(transition.started) < self.debounce {
            return false;
        }
        self.index = self.target(transition.step);
        self.transition = None;
        true
    }

    fn request(&mut self, step: Step, now: Instant) -> bool {
        self.settle(now);
        if self.len == 0 {
            return false;
        }
        if self.transition.is_some() {
            debug!(?step, "carousel request dropped while animating");
            return false;
        }
        self.transition = Some(Transition { step, started: now });
        true
    }

    const fn target(&self, step: Step) -> usize {
        match step {
            Step::Next => {
                if self.index + 1 >= self.len {
                    0
                } else {
                    self.index + 1
                }
            }
            Step::Previous => {
                if self.index == 0 {
                    self.len - 1
                } else {
                    self.index - 1
                }
            }
            Step::To(index) => index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(150);

    fn after(start: Instant, millis: u64) -> Instant {
        start + Duration::from_millis(millis)
    }

    #[test]
    fn next_wraps_after_full_cycle() {
        let start = Instant::now();
        let mut carousel = Carousel::new(4, WINDOW);
        let mut now = start;
        for _ in 0..4 {
            assert!(carousel.next(now));
            now += WINDOW;
            assert!(carousel.settle(now));
        }
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let start = Instant::now();
        let mut carousel = Carousel::new(5, WINDOW);
        assert!(carousel.previous(start));
        assert!(carousel.settle(after(start, 150)));
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn index_changes_only_after_window() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, WINDOW);
        assert!(carousel.next(start));
        assert!(carousel.is_animating());
        assert!(!carousel.settle(after(start, 149)));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.settle(after(start, 150)));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn requests_during_animation_are_dropped() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, WINDOW);
        assert!(carousel.next(start));
        assert!(!carousel.next(start));
        assert!(!carousel.previous(after(start, 10)));
        assert!(!carousel.go_to(2, after(start, 20)));
        assert_eq!(carousel.pending_step(), Some(Step::Next));

        carousel.settle(after(start, 500));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn request_after_window_settles_previous_transition_first() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, WINDOW);
        assert!(carousel.next(start));
        // No explicit settle: the next request observes the elapsed window.
        assert!(carousel.next(after(start, 200)));
        assert_eq!(carousel.current_index(), 1);
        carousel.settle(after(start, 350));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn go_to_jumps_and_rejects_out_of_range() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3, WINDOW);
        assert!(!carousel.go_to(3, start));
        assert!(!carousel.is_animating());
        assert!(carousel.go_to(2, start));
        carousel.settle(after(start, 150));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let start = Instant::now();
        let mut carousel = Carousel::new(1, WINDOW);
        assert!(carousel.next(start));
        carousel.settle(after(start, 150));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.previous(after(start, 150)));
        carousel.settle(after(start, 300));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_requests() {
        let start = Instant::now();
        let mut carousel = Carousel::new(0, WINDOW);
        assert!(carousel.is_empty());
        assert!(!carousel.next(start));
        assert!(!carousel.previous(start));
        assert!(!carousel.is_animating());
    }
}
