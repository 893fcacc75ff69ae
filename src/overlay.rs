use raylib::prelude::*;
use crate::constants::*;
use crate::projection::Viewport;
use crate::tracker::DeckFrame;

const TRACK: Color = Color { r: 0, g: 0, b: 0, a: 51 };
const BLUE: Color = Color { r: 0x3b, g: 0x82, b: 0xf6, a: 255 };
const PURPLE: Color = Color { r: 0xa8, g: 0x55, b: 0xf7, a: 255 };
const PINK: Color = Color { r: 0xec, g: 0x48, b: 0x99, a: 255 };

/// Centres of the navigation dots, stacked top to bottom on the right edge.
pub fn nav_dot_centers(screen: Viewport, count: usize) -> Vec<Vector2> {
    let pitch = NAV_DOT_RADIUS * 2.0 + NAV_DOT_SPACING;
    let column_height = count as f32 * pitch - NAV_DOT_SPACING;
    let x = screen.width - NAV_DOT_MARGIN - NAV_DOT_RADIUS;
    let first_y = (screen.height - column_height) * 0.5 + NAV_DOT_RADIUS;

    (0..count)
        .map(|i| Vector2::new(x, first_y + i as f32 * pitch))
        .collect()
}

/// The dot under `point`, if any.
pub fn hit_test_nav_dot(screen: Viewport, count: usize, point: Vector2) -> Option<usize> {
    nav_dot_centers(screen, count)
        .into_iter()
        .position(|center| {
            let dx = center.x - point.x;
            let dy = center.y - point.y;
            dx * dx + dy * dy <= NAV_DOT_HIT_RADIUS * NAV_DOT_HIT_RADIUS
        })
}

pub fn progress_fill_width(progress: f32, screen_width: f32) -> f32 {
    progress.clamp(0.0, 1.0) * screen_width
}

pub fn draw_overlay(d: &mut RaylibDrawHandle, screen: Viewport, frame: &DeckFrame, hovered: Option<usize>) {
    draw_progress_bar(d, screen, frame.progress);

    let centers = nav_dot_centers(screen, frame.transforms.len());
    for (i, center) in centers.into_iter().enumerate() {
        if i == frame.current_slide {
            let radius = NAV_DOT_RADIUS * NAV_DOT_ACTIVE_SCALE;
            d.draw_circle_v(center, radius + 2.0, Color::new(255, 255, 255, 128));
            d.draw_circle_v(center, radius, Color::WHITE);
        } else {
            let alpha = if hovered == Some(i) { 191 } else { 128 };
            d.draw_circle_v(center, NAV_DOT_RADIUS, Color::new(255, 255, 255, alpha));
        }
    }
}

fn draw_progress_bar(d: &mut RaylibDrawHandle, screen: Viewport, progress: f32) {
    d.draw_rectangle(0, 0, screen.width as i32, PROGRESS_BAR_HEIGHT, TRACK);

    let fill = progress_fill_width(progress, screen.width).round() as i32;
    if fill <= 0 {
        return;
    }
    let half = fill / 2;
    d.draw_rectangle_gradient_h(0, 0, half, PROGRESS_BAR_HEIGHT, BLUE, PURPLE);
    d.draw_rectangle_gradient_h(half, 0, fill - half, PROGRESS_BAR_HEIGHT, PURPLE, PINK);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport { width: 1280.0, height: 800.0 };

    #[test]
    fn dots_are_centered_vertically() {
        let centers = nav_dot_centers(SCREEN, 5);
        assert_eq!(centers.len(), 5);
        assert!((centers[2].y - 400.0).abs() < 1e-3);
        assert!(centers.iter().all(|c| c.x == 1280.0 - NAV_DOT_MARGIN - NAV_DOT_RADIUS));
        assert!((centers[1].y - centers[0].y - 24.0).abs() < 1e-3);
    }

    #[test]
    fn clicking_a_dot_finds_it() {
        let centers = nav_dot_centers(SCREEN, 5);
        assert_eq!(hit_test_nav_dot(SCREEN, 5, centers[3]), Some(3));

        let near = Vector2::new(centers[1].x + 5.0, centers[1].y - 5.0);
        assert_eq!(hit_test_nav_dot(SCREEN, 5, near), Some(1));

        assert_eq!(hit_test_nav_dot(SCREEN, 5, Vector2::new(640.0, 400.0)), None);
    }

    #[test]
    fn fill_tracks_progress() {
        assert_eq!(progress_fill_width(0.0, 1280.0), 0.0);
        assert_eq!(progress_fill_width(0.5, 1280.0), 640.0);
        assert_eq!(progress_fill_width(1.0, 1280.0), 1280.0);
        assert_eq!(progress_fill_width(3.0, 1280.0), 1280.0);
    }
}
