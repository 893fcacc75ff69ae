/// How tall the scrollable page is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentHeight {
    /// Exactly one viewport; nothing to scroll.
    Natural,
    /// A whole number of viewport heights, following the viewport on resize.
    Viewports(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// The scrollable surface a deck tracks.
///
/// The tracker only reads the offset and the viewport height; the content
/// height and the listener are changed by the tracker on activation and
/// restored on teardown.
pub trait ScrollHost {
    /// Pixels scrolled from the top of the page.
    fn scroll_offset(&self) -> f32;

    fn viewport_height(&self) -> f32;

    fn set_content_height(&mut self, height: ContentHeight);

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    fn attach_scroll_listener(&mut self);

    fn detach_scroll_listener(&mut self);

    /// Scroll notifications since the last call. Always zero while no
    /// listener is attached.
    fn take_scroll_events(&mut self) -> usize;
}
