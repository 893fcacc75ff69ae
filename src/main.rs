use anyhow::{bail, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod constants;
mod content;
mod error;
mod host;
mod overlay;
mod page;
mod projection;
mod registry;
mod slide;
mod state;
mod texture_loader;
mod throttle;
mod tracker;
mod transform;

use crate::config::{Args, DeckConfig, SlideSet};
use crate::constants::*;
use crate::content::{default_deck, image_deck};
use crate::overlay::{draw_overlay, hit_test_nav_dot};
use crate::page::{PageKey, PageScroller};
use crate::projection::Viewport;
use crate::registry::SlideRegistry;
use crate::slide::SlideFace;
use crate::texture_loader::load_sorted_image_paths;
use crate::tracker::ScrollProgressTracker;

const KEY_BINDINGS: [(KeyboardKey, PageKey); 7] = [
    (KeyboardKey::KEY_UP, PageKey::ArrowUp),
    (KeyboardKey::KEY_DOWN, PageKey::ArrowDown),
    (KeyboardKey::KEY_PAGE_UP, PageKey::PageUp),
    (KeyboardKey::KEY_PAGE_DOWN, PageKey::PageDown),
    (KeyboardKey::KEY_SPACE, PageKey::PageDown),
    (KeyboardKey::KEY_HOME, PageKey::Home),
    (KeyboardKey::KEY_END, PageKey::End),
];

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scroll_deck=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn window_title(current: usize, total: usize) -> String {
    format!("Scroll Deck ({}/{})", current + 1, total)
}

fn main() -> Result<()> {
    init_tracing();
    let config = DeckConfig::try_from(Args::parse())?;

    // --- Slide sources ---
    let sources = match &config.slides {
        SlideSet::BuiltIn(count) => default_deck(*count),
        SlideSet::Images(dir) => {
            let paths = load_sorted_image_paths(dir)?;
            info!(directory = %dir.display(), images = paths.len(), "loading slides from images");
            image_deck(paths)
        }
    };
    let slide_count = sources.len();
    let tracker = ScrollProgressTracker::new(slide_count)?;

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title(&window_title(0, slide_count))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Deck ---
    let mut page = PageScroller::new(rl.get_screen_height() as f32)?;
    let mut deck = tracker.activate(&mut page);
    let mut registry: SlideRegistry<SlideFace> = SlideRegistry::new(slide_count);
    registry.apply_frame(deck.frame());

    let mut next_face = 0;
    let mut shown_slide = deck.current_slide();
    let mut frames: u64 = 0;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen = Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // 1. Input moves the page
        let minimized = screen.height <= 0.0 || screen.width <= 0.0;
        if rl.is_window_resized() {
            deck.host_mut().follow_window(screen.height);
        }
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            deck.host_mut().scroll_by(-wheel * WHEEL_STEP);
        }
        for (key, page_key) in KEY_BINDINGS {
            if rl.is_key_pressed(key) {
                deck.host_mut().handle_key(page_key);
            }
        }
        let hovered = hit_test_nav_dot(screen, deck.slide_count(), rl.get_mouse_position());
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(index) = hovered {
                deck.scroll_to_slide(index)?;
            }
        }

        // 2. Animated scrolls advance, their notifications reach the tracker
        if deck.host().is_animating() {
            deck.host_mut().update(dt);
        }
        deck.pump_scroll_events();

        // 3. The refresh callback: at most one recomputation per frame
        if let Some(frame) = deck.on_animation_frame() {
            registry.apply_frame(frame);
        }
        if deck.current_slide() != shown_slide {
            shown_slide = deck.current_slide();
            rl.set_window_title(&thread, &window_title(shown_slide, slide_count));
        }

        // 4. Faces come online one per frame; missing ones are simply not drawn
        if next_face < slide_count {
            match SlideFace::new(&mut rl, &thread, &sources[next_face], next_face + 1, slide_count) {
                Ok(face) => registry.register(next_face, face)?,
                Err(e) => warn!(slide = next_face, error = %e, "skipping slide"),
            }
            next_face += 1;
            if next_face == slide_count {
                if registry.is_ready() {
                    debug!(slides = slide_count, "all slides ready");
                } else if registry.draw_order().is_empty() {
                    bail!("none of the {} slides could be loaded", slide_count);
                }
            }
        }

        // 5. Draw back to front, then the overlay
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        if minimized {
            frames += 1;
            continue;
        }
        for index in registry.draw_order() {
            if let Some(face) = registry.get(index) {
                face.draw(&mut d, screen);
            }
        }
        draw_overlay(&mut d, screen, deck.frame(), hovered);

        frames += 1;
    } // End main loop

    debug!(frames, recomputations = deck.recomputations(), "frame loop finished");
    deck.deactivate();
    Ok(())
}
