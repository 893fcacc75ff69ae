use raylib::prelude::*;
use tracing::trace;
use crate::constants::*;
use crate::error::DeckError;
use crate::host::{ContentHeight, ScrollBehavior, ScrollHost};

/// Keys the page reacts to, the way a browser scrolls a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

struct SmoothScroll {
    tween: ease::Tween,
    target: f32,
    timer: f32,
}

/// A simulated scrolling document sized in viewport heights.
pub struct PageScroller {
    offset: f32,
    viewport_height: f32,
    content: ContentHeight,

    listening: bool,
    pending_events: usize,

    smooth: Option<SmoothScroll>,
}

impl PageScroller {
    pub fn new(viewport_height: f32) -> Result<Self, DeckError> {
        check_viewport(viewport_height)?;
        Ok(Self {
            offset: 0.0,
            viewport_height,
            content: ContentHeight::Natural,
            listening: false,
            pending_events: 0,
            smooth: None,
        })
    }

    pub fn content_height(&self) -> f32 {
        match self.content {
            ContentHeight::Natural => self.viewport_height,
            ContentHeight::Viewports(count) => count as f32 * self.viewport_height,
        }
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    /// Instant relative scroll (mouse wheel, arrow keys). Interrupts any
    /// animated scroll.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset + delta, ScrollBehavior::Instant);
    }

    pub fn handle_key(&mut self, key: PageKey) {
        let page = self.viewport_height * PAGE_STEP_FRACTION;
        match key {
            PageKey::ArrowUp => self.scroll_by(-ARROW_STEP),
            PageKey::ArrowDown => self.scroll_by(ARROW_STEP),
            PageKey::PageUp => self.scroll_to(self.offset - page, ScrollBehavior::Smooth),
            PageKey::PageDown => self.scroll_to(self.offset + page, ScrollBehavior::Smooth),
            PageKey::Home => self.scroll_to(0.0, ScrollBehavior::Smooth),
            PageKey::End => self.scroll_to(self.max_offset(), ScrollBehavior::Smooth),
        }
    }

    /// Advances an animated scroll by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(smooth) = self.smooth.as_mut() else {
            return;
        };

        let mut next = smooth.tween.apply(dt);
        smooth.timer += dt;
        if smooth.timer >= SMOOTH_SCROLL_DURATION {
            next = smooth.target;
            self.smooth = None;
        }
        self.set_offset(next);
    }

    /// The window changed size. Content measured in viewports grows with it.
    pub fn resize(&mut self, viewport_height: f32) -> Result<(), DeckError> {
        check_viewport(viewport_height)?;
        if viewport_height == self.viewport_height {
            return Ok(());
        }
        self.viewport_height = viewport_height;
        let max_offset = self.max_offset();
        if let Some(smooth) = self.smooth.as_mut() {
            smooth.target = smooth.target.min(max_offset);
        }
        let clamped = self.clamp(self.offset);
        self.offset = clamped;
        // Layout changed even if the offset did not.
        self.notify();
        Ok(())
    }

    /// Follows a window size change. A minimized window reports no height;
    /// the page keeps its last usable viewport until the window comes back.
    /// Returns `false` when the new height was ignored.
    pub fn follow_window(&mut self, window_height: f32) -> bool {
        match self.resize(window_height) {
            Ok(()) => true,
            Err(e) => {
                trace!(error = %e, kept = self.viewport_height, "ignoring window resize");
                false
            }
        }
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            0.0
        }
    }

    fn set_offset(&mut self, offset: f32) {
        let clamped = self.clamp(offset);
        if clamped != self.offset {
            self.offset = clamped;
            self.notify();
        }
    }

    fn notify(&mut self) {
        if self.listening {
            self.pending_events += 1;
        }
    }
}

impl ScrollHost for PageScroller {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn set_content_height(&mut self, height: ContentHeight) {
        self.content = height;
        let max_offset = self.max_offset();
        if let Some(smooth) = self.smooth.as_mut() {
            smooth.target = smooth.target.min(max_offset);
        }
        self.set_offset(self.offset);
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        let target = self.clamp(offset);
        match behavior {
            ScrollBehavior::Instant => {
                self.smooth = None;
                self.set_offset(target);
            }
            ScrollBehavior::Smooth => {
                if target == self.offset {
                    self.smooth = None;
                    return;
                }
                trace!(from = self.offset, to = target, "smooth scroll");
                self.smooth = Some(SmoothScroll {
                    tween: ease::Tween::new(ease::cubic_out, self.offset, target, SMOOTH_SCROLL_DURATION),
                    target,
                    timer: 0.0,
                });
            }
        }
    }

    fn attach_scroll_listener(&mut self) {
        self.listening = true;
    }

    fn detach_scroll_listener(&mut self) {
        self.listening = false;
        self.pending_events = 0;
    }

    fn take_scroll_events(&mut self) -> usize {
        std::mem::take(&mut self.pending_events)
    }
}

fn check_viewport(height: f32) -> Result<(), DeckError> {
    if height.is_finite() && height > 0.0 {
        Ok(())
    } else {
        Err(DeckError::InvalidViewport(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_page(slides: usize) -> PageScroller {
        let mut page = PageScroller::new(800.0).unwrap();
        page.set_content_height(ContentHeight::Viewports(slides));
        page.attach_scroll_listener();
        page
    }

    fn run_until_idle(page: &mut PageScroller) -> usize {
        let mut frames = 0;
        while page.is_animating() {
            page.update(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1000, "smooth scroll never finished");
        }
        frames
    }

    #[test]
    fn rejects_bad_viewports() {
        assert_eq!(PageScroller::new(0.0).err(), Some(DeckError::InvalidViewport(0.0)));
        assert!(PageScroller::new(f32::NAN).is_err());
        assert!(PageScroller::new(-10.0).is_err());
    }

    #[test]
    fn natural_page_does_not_scroll() {
        let mut page = PageScroller::new(800.0).unwrap();
        page.scroll_by(500.0);
        assert_eq!(page.scroll_offset(), 0.0);
        assert_eq!(page.max_offset(), 0.0);
    }

    #[test]
    fn offset_is_clamped_to_content() {
        let mut page = deck_page(5);
        assert_eq!(page.max_offset(), 3200.0);

        page.scroll_by(10_000.0);
        assert_eq!(page.scroll_offset(), 3200.0);
        page.scroll_by(-20_000.0);
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn events_only_counted_while_listening() {
        let mut page = PageScroller::new(800.0).unwrap();
        page.set_content_height(ContentHeight::Viewports(5));
        page.scroll_by(100.0);
        assert_eq!(page.take_scroll_events(), 0);

        page.attach_scroll_listener();
        page.scroll_by(100.0);
        page.scroll_by(100.0);
        assert_eq!(page.take_scroll_events(), 2);
        assert_eq!(page.take_scroll_events(), 0);

        page.scroll_by(100.0);
        page.detach_scroll_listener();
        assert_eq!(page.take_scroll_events(), 0);
    }

    #[test]
    fn no_event_when_offset_does_not_move() {
        let mut page = deck_page(5);
        page.scroll_by(-50.0);
        assert_eq!(page.take_scroll_events(), 0);
    }

    #[test]
    fn smooth_scroll_lands_on_target() {
        let mut page = deck_page(5);
        page.scroll_to(1600.0, ScrollBehavior::Smooth);
        assert_eq!(page.scroll_offset(), 0.0);

        let frames = run_until_idle(&mut page);
        assert_eq!(page.scroll_offset(), 1600.0);
        assert!(frames > 1);
        let events = page.take_scroll_events();
        assert!(events > 1 && events <= frames);
    }

    #[test]
    fn smooth_scroll_moves_monotonically() {
        let mut page = deck_page(5);
        page.scroll_to(2400.0, ScrollBehavior::Smooth);
        let mut last = page.scroll_offset();
        while page.is_animating() {
            page.update(1.0 / 60.0);
            assert!(page.scroll_offset() >= last);
            assert!(page.scroll_offset() <= 2400.0);
            last = page.scroll_offset();
        }
    }

    #[test]
    fn wheel_interrupts_smooth_scroll() {
        let mut page = deck_page(5);
        page.scroll_to(3200.0, ScrollBehavior::Smooth);
        page.update(0.1);
        let mid = page.scroll_offset();
        page.scroll_by(-WHEEL_STEP);
        assert!(!page.is_animating());
        assert_eq!(page.scroll_offset(), (mid - WHEEL_STEP).max(0.0));
    }

    #[test]
    fn instant_scroll_jumps() {
        let mut page = deck_page(5);
        page.scroll_to(900.0, ScrollBehavior::Instant);
        assert_eq!(page.scroll_offset(), 900.0);
        assert_eq!(page.take_scroll_events(), 1);
    }

    #[test]
    fn keys_scroll_like_a_browser() {
        let mut page = deck_page(5);
        page.handle_key(PageKey::ArrowDown);
        assert_eq!(page.scroll_offset(), ARROW_STEP);

        page.handle_key(PageKey::End);
        run_until_idle(&mut page);
        assert_eq!(page.scroll_offset(), 3200.0);

        page.handle_key(PageKey::PageUp);
        run_until_idle(&mut page);
        assert!((page.scroll_offset() - (3200.0 - 720.0)).abs() < 1e-3);

        page.handle_key(PageKey::Home);
        run_until_idle(&mut page);
        assert_eq!(page.scroll_offset(), 0.0);
    }

    #[test]
    fn shrinking_content_clamps_offset() {
        let mut page = deck_page(5);
        page.scroll_by(3000.0);
        page.take_scroll_events();
        page.set_content_height(ContentHeight::Natural);
        assert_eq!(page.scroll_offset(), 0.0);
        assert_eq!(page.take_scroll_events(), 1);
    }

    #[test]
    fn resize_reclamps_and_notifies() {
        let mut page = deck_page(5);
        page.scroll_by(3200.0);
        page.take_scroll_events();

        page.resize(600.0).unwrap();
        assert_eq!(page.viewport_height(), 600.0);
        assert_eq!(page.scroll_offset(), 2400.0);
        assert_eq!(page.take_scroll_events(), 1);

        assert!(page.resize(0.0).is_err());
        assert_eq!(page.viewport_height(), 600.0);
    }

    #[test]
    fn minimized_window_keeps_last_height() {
        let mut page = deck_page(5);
        page.scroll_by(1600.0);
        page.take_scroll_events();

        assert!(!page.follow_window(0.0));
        assert!(!page.follow_window(f32::NAN));
        assert_eq!(page.viewport_height(), 800.0);
        assert_eq!(page.scroll_offset(), 1600.0);
        assert_eq!(page.take_scroll_events(), 0);

        assert!(page.follow_window(600.0));
        assert_eq!(page.viewport_height(), 600.0);
        assert_eq!(page.take_scroll_events(), 1);
    }
}
