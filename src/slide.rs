use std::ffi::CString;
use anyhow::{anyhow, Result};
use raylib::ffi;
use raylib::prelude::*;
use crate::constants::*;
use crate::content::{Panel, SlideSource};
use crate::projection::{project_grid, Viewport};
use crate::registry::SlideNode;
use crate::texture_loader::load_texture_upright;
use crate::transform::SlideTransform;

const RL_QUADS: i32 = 0x0007;

/// One slide of the deck: a pre-rendered face plus the transform it was
/// last given.
pub struct SlideFace {
    face: RenderTexture2D,
    transform: SlideTransform,
}

impl SlideFace {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        source: &SlideSource,
        number: usize,
        total: usize,
    ) -> Result<Self> {
        let width = rl.get_screen_width().max(1);
        let height = rl.get_screen_height().max(1);
        let mut face = rl
            .load_render_texture(thread, width as u32, height as u32)
            .map_err(|e| anyhow!("failed to create face for slide {}: {}", number, e))?;

        match source {
            SlideSource::Panel(panel) => {
                rl.draw_texture_mode(thread, &mut face, |mut tmd| {
                    let mut d = tmd.begin_drawing(thread);
                    draw_panel(&mut d, panel, width, height, number, total);
                });
            }
            SlideSource::Image(path) => {
                let image = load_texture_upright(rl, thread, path)?;
                rl.draw_texture_mode(thread, &mut face, |mut tmd| {
                    let mut d = tmd.begin_drawing(thread);
                    d.clear_background(Color::BLACK);
                    draw_cover(&mut d, &image, width, height);
                });
            }
        }

        Ok(Self { face, transform: SlideTransform::IDENTITY })
    }

    /// Draws the face as a perspective-projected quad. Taking the draw handle
    /// guarantees a frame is being drawn.
    pub fn draw(&self, _d: &mut RaylibDrawHandle, viewport: Viewport) {
        let Some(grid) = project_grid(&self.transform, viewport, PERSPECTIVE, PROJECTION_GRID) else {
            return;
        };

        let cells = PROJECTION_GRID;
        let step = 1.0 / cells as f32;
        let alpha = (self.transform.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

        unsafe {
            ffi::rlSetTexture(self.face.texture.id);
            ffi::rlBegin(RL_QUADS);
            ffi::rlColor4ub(255, 255, 255, alpha);

            for row in 0..cells {
                for column in 0..cells {
                    let i = row * (cells + 1) + column;
                    let top_left = grid[i];
                    let top_right = grid[i + 1];
                    let bottom_left = grid[i + cells + 1];
                    let bottom_right = grid[i + cells + 2];

                    // Render textures are stored bottom-up
                    let u0 = column as f32 * step;
                    let u1 = u0 + step;
                    let v0 = 1.0 - row as f32 * step;
                    let v1 = v0 - step;

                    ffi::rlTexCoord2f(u0, v0);
                    ffi::rlVertex2f(top_left.x, top_left.y);
                    ffi::rlTexCoord2f(u0, v1);
                    ffi::rlVertex2f(bottom_left.x, bottom_left.y);
                    ffi::rlTexCoord2f(u1, v1);
                    ffi::rlVertex2f(bottom_right.x, bottom_right.y);
                    ffi::rlTexCoord2f(u1, v0);
                    ffi::rlVertex2f(top_right.x, top_right.y);
                }
            }

            ffi::rlEnd();
            ffi::rlSetTexture(0);
        }
    }
}

impl SlideNode for SlideFace {
    fn apply(&mut self, transform: &SlideTransform) {
        self.transform = *transform;
    }
}

fn text_width(text: &str, font_size: i32) -> i32 {
    let Ok(c_text) = CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) }
}

/// Greedy word wrap. `measure` returns the drawn width of a string.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, center_x: i32, y: i32, font_size: i32, color: Color) {
    let x = center_x - text_width(text, font_size) / 2;
    d.draw_text(text, x, y, font_size, color);
}

fn draw_panel(d: &mut RaylibDrawHandle, panel: &Panel, width: i32, height: i32, number: usize, total: usize) {
    d.draw_rectangle_gradient_v(0, 0, width, height, panel.top, panel.bottom);

    let center_x = width / 2;
    let title_size = (height / 10).max(20);
    let body_size = (height / 30).max(12);
    let detail_size = (height / 34).max(10);

    let mut y = height * 22 / 100;
    draw_centered(d, panel.title, center_x, y, title_size, panel.text);
    y += title_size + body_size * 2;

    for line in wrap_text(panel.subtitle, width * 7 / 10, |s| text_width(s, body_size)) {
        draw_centered(d, &line, center_x, y, body_size, panel.text);
        y += body_size + body_size / 2;
    }
    y += body_size * 2;

    for detail in panel.details {
        let half = text_width(detail, detail_size) / 2;
        d.draw_circle(center_x - half - detail_size, y + detail_size / 2, detail_size as f32 / 4.0, panel.accent);
        d.draw_text(detail, center_x - half, y, detail_size, panel.accent);
        y += detail_size * 2;
    }

    let counter = format!("{} / {}", number, total);
    let counter_size = detail_size;
    d.draw_text(
        &counter,
        width - text_width(&counter, counter_size) - counter_size * 2,
        height - counter_size * 3,
        counter_size,
        panel.text,
    );
}

// Scales the image to cover the whole face, cropping the overflow.
fn draw_cover(d: &mut RaylibDrawHandle, image: &Texture2D, width: i32, height: i32) {
    let tex_width = image.width() as f32;
    let tex_height = image.height() as f32;
    let scale = (width as f32 / tex_width).max(height as f32 / tex_height);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    d.draw_texture_pro(
        image,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            (width as f32 - scaled_width) * 0.5,
            (height as f32 - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every character is 10 px wide.
    fn fixed_width(text: &str) -> i32 {
        text.chars().count() as i32 * 10
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 110, fixed_width);
        assert_eq!(lines, ["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn long_word_gets_its_own_line() {
        let lines = wrap_text("a extraordinarily b", 50, fixed_width);
        assert_eq!(lines, ["a", "extraordinarily", "b"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_text("   ", 100, fixed_width).is_empty());
    }
}
