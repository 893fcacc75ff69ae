use tracing::{debug, info, trace, warn};
use crate::error::DeckError;
use crate::host::{ContentHeight, ScrollBehavior, ScrollHost};
use crate::state::FrameState;
use crate::throttle::FrameThrottle;
use crate::transform::{compute_transform, SlideTransform};

/// Everything the view needs for one frame. All transforms were computed
/// from the same `slide_progress`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckFrame {
    /// Position across the whole deck, in [0, 1].
    pub progress: f32,
    /// Position in slide units, in [0, slide_count - 1].
    pub slide_progress: f32,
    pub current_slide: usize,
    pub transforms: Vec<SlideTransform>,
}

/// Maps a raw scroll offset to deck progress in [0, 1].
pub fn progress_for_offset(offset: f32, viewport_height: f32, slide_count: usize) -> f32 {
    let max_scroll = slide_count.saturating_sub(1) as f32 * viewport_height;
    if max_scroll <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / max_scroll).clamp(0.0, 1.0)
}

/// Nearest slide to `slide_progress`, always a valid index.
pub fn slide_index_for(slide_progress: f32, slide_count: usize) -> usize {
    let last = slide_count.saturating_sub(1);
    let rounded = slide_progress.round();
    if rounded <= 0.0 || rounded.is_nan() {
        0
    } else {
        (rounded as usize).min(last)
    }
}

/// Converts scroll positions of a deck of `slide_count` slides into frames.
#[derive(Debug, Clone, Copy)]
pub struct ScrollProgressTracker {
    slide_count: usize,
}

impl ScrollProgressTracker {
    pub fn new(slide_count: usize) -> Result<Self, DeckError> {
        if slide_count == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self { slide_count })
    }

    pub fn compute_frame(&self, offset: f32, viewport_height: f32) -> DeckFrame {
        let progress = progress_for_offset(offset, viewport_height, self.slide_count);
        let slide_progress = progress * (self.slide_count - 1) as f32;
        let current_slide = slide_index_for(slide_progress, self.slide_count);
        let transforms = (0..self.slide_count)
            .map(|index| compute_transform(index, slide_progress))
            .collect();

        DeckFrame { progress, slide_progress, current_slide, transforms }
    }

    /// Takes over `host`: listens to its scroll notifications and stretches
    /// its content to one viewport per slide. The returned guard hands the
    /// host back in its natural state when deactivated or dropped.
    pub fn activate<H: ScrollHost>(self, host: &mut H) -> ActiveTracker<'_, H> {
        host.attach_scroll_listener();
        host.set_content_height(ContentHeight::Viewports(self.slide_count));
        // Events raised while resizing the content are covered by the
        // initial computation below.
        host.take_scroll_events();

        let frame = self.compute_frame(host.scroll_offset(), host.viewport_height());
        info!(slides = self.slide_count, current = frame.current_slide, "deck activated");

        ActiveTracker {
            tracker: self,
            host,
            throttle: FrameThrottle::new(),
            frame,
            recomputations: 1,
        }
    }
}

/// A tracker attached to a live host.
pub struct ActiveTracker<'h, H: ScrollHost> {
    tracker: ScrollProgressTracker,
    host: &'h mut H,
    throttle: FrameThrottle,
    frame: DeckFrame,
    recomputations: u64,
}

impl<'h, H: ScrollHost> ActiveTracker<'h, H> {
    pub fn host(&self) -> &H {
        &*self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut *self.host
    }

    /// The most recently computed frame.
    pub fn frame(&self) -> &DeckFrame {
        &self.frame
    }

    pub fn current_slide(&self) -> usize {
        self.frame.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.tracker.slide_count
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn is_pending(&self) -> bool {
        self.throttle.state() == FrameState::Pending
    }

    /// The scroll listener. Returns `true` if this notification scheduled a
    /// recomputation, `false` if one was already pending.
    pub fn handle_scroll(&mut self) -> bool {
        self.throttle.request()
    }

    /// Feeds every notification the host raised since the last call.
    pub fn pump_scroll_events(&mut self) {
        for _ in 0..self.host.take_scroll_events() {
            self.handle_scroll();
        }
    }

    /// The per-frame callback. Runs the pending recomputation, if any,
    /// against the offset the host holds right now.
    pub fn on_animation_frame(&mut self) -> Option<&DeckFrame> {
        let absorbed = self.throttle.absorbed();
        if !self.throttle.fire() {
            return None;
        }
        let frame = self
            .tracker
            .compute_frame(self.host.scroll_offset(), self.host.viewport_height());
        trace!(absorbed, slide_progress = frame.slide_progress, "recomputed deck frame");
        if frame.current_slide != self.frame.current_slide {
            debug!(from = self.frame.current_slide, to = frame.current_slide, "current slide changed");
        }
        self.frame = frame;
        self.recomputations += 1;
        Some(&self.frame)
    }

    /// Asks the host to glide to the top of `index`. Progress follows from
    /// the scroll notifications that result.
    pub fn scroll_to_slide(&mut self, index: usize) -> Result<(), DeckError> {
        let count = self.tracker.slide_count;
        if index >= count {
            warn!(index, count, "ignoring navigation to a missing slide");
            return Err(DeckError::SlideOutOfRange { index, count });
        }

        let target = index as f32 * self.host.viewport_height();
        debug!(index, target, "scrolling to slide");
        self.host.scroll_to(target, ScrollBehavior::Smooth);
        Ok(())
    }

    /// Detaches from the host. Equivalent to dropping the guard.
    pub fn deactivate(self) {}
}

impl<H: ScrollHost> Drop for ActiveTracker<'_, H> {
    fn drop(&mut self) {
        if self.is_pending() {
            debug!("dropping a pending recomputation");
        }
        self.throttle.cancel();
        self.host.detach_scroll_listener();
        self.host.set_content_height(ContentHeight::Natural);
        info!(recomputations = self.recomputations, "deck deactivated");
    }
}
