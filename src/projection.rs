//! Perspective projection of a full-viewport slide.
//!
//! Follows the CSS 3D model: x to the right, y down, z towards the viewer,
//! transform origin and perspective origin both at the viewport centre.

use raylib::prelude::Vector2;
use crate::transform::SlideTransform;

// Vertices closer than this to the viewer plane cull the whole slide.
const NEAR_EPSILON: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Projects a point given relative to the slide centre.
///
/// Returns `None` when the transformed point is at or behind the viewer.
pub fn project_point(
    transform: &SlideTransform,
    local: Vector2,
    viewport: Viewport,
    perspective: f32,
) -> Option<Vector2> {
    let (sin_x, cos_x) = transform.rotate_x.to_radians().sin_cos();
    let (sin_y, cos_y) = transform.rotate_y.to_radians().sin_cos();

    // scale
    let x = local.x * transform.scale;
    let y = local.y * transform.scale;

    // rotateY
    let z = -x * sin_y;
    let x = x * cos_y;

    // rotateX
    let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);

    // translate3d(0, 0, depth)
    let z = z + transform.translate_depth;

    let w = perspective - z;
    if w <= NEAR_EPSILON {
        return None;
    }

    let factor = perspective / w;
    let center = viewport.center();
    Some(Vector2::new(center.x + x * factor, center.y + y * factor))
}

/// Projects a `cells` × `cells` grid spanning the slide, row-major from the
/// top-left corner, `(cells + 1)²` points in total.
///
/// Returns `None` if any vertex cannot be projected.
pub fn project_grid(
    transform: &SlideTransform,
    viewport: Viewport,
    perspective: f32,
    cells: usize,
) -> Option<Vec<Vector2>> {
    let cells = cells.max(1);
    let mut points = Vec::with_capacity((cells + 1) * (cells + 1));

    for row in 0..=cells {
        let v = row as f32 / cells as f32;
        for column in 0..=cells {
            let u = column as f32 / cells as f32;
            let local = Vector2::new((u - 0.5) * viewport.width, (v - 0.5) * viewport.height);
            points.push(project_point(transform, local, viewport, perspective)?);
        }
    }

    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PERSPECTIVE;
    use crate::transform::compute_transform;

    const VIEWPORT: Viewport = Viewport { width: 1280.0, height: 800.0 };

    fn assert_near(actual: Vector2, x: f32, y: f32) {
        assert!(
            (actual.x - x).abs() < 1e-2 && (actual.y - y).abs() < 1e-2,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn identity_fills_the_viewport() {
        let grid = project_grid(&SlideTransform::IDENTITY, VIEWPORT, PERSPECTIVE, 2).unwrap();
        assert_eq!(grid.len(), 9);
        assert_near(grid[0], 0.0, 0.0);
        assert_near(grid[2], 1280.0, 0.0);
        assert_near(grid[4], 640.0, 400.0);
        assert_near(grid[6], 0.0, 800.0);
        assert_near(grid[8], 1280.0, 800.0);
    }

    #[test]
    fn depth_shrinks_towards_the_center() {
        let pushed = SlideTransform { translate_depth: -300.0, ..SlideTransform::IDENTITY };
        let corner = project_point(&pushed, Vector2::new(-640.0, -400.0), VIEWPORT, PERSPECTIVE).unwrap();
        // 1200 / 1500 = 0.8
        assert_near(corner, 640.0 - 512.0, 400.0 - 320.0);
    }

    #[test]
    fn positive_rotate_x_tips_the_top_away() {
        let tilted = SlideTransform { rotate_x: 20.0, ..SlideTransform::IDENTITY };
        let top = project_point(&tilted, Vector2::new(0.0, -400.0), VIEWPORT, PERSPECTIVE).unwrap();
        let bottom = project_point(&tilted, Vector2::new(0.0, 400.0), VIEWPORT, PERSPECTIVE).unwrap();
        // The receding top edge lands closer to the centre than the bottom one.
        assert!(400.0 - top.y < bottom.y - 400.0);
        assert_near(top, 640.0, top.y);
    }

    #[test]
    fn next_slide_projects_inside_the_viewport() {
        let grid = project_grid(&compute_transform(1, 0.0), VIEWPORT, PERSPECTIVE, 8).unwrap();
        for point in grid {
            assert!(point.x > 0.0 && point.x < VIEWPORT.width);
            assert!(point.y > 0.0 && point.y < VIEWPORT.height);
        }
    }

    #[test]
    fn slide_at_the_viewer_is_culled() {
        // distance -4 puts the slide exactly on the viewer plane
        assert!(project_grid(&compute_transform(0, 4.0), VIEWPORT, PERSPECTIVE, 8).is_none());
        assert!(project_grid(&compute_transform(0, 3.0), VIEWPORT, PERSPECTIVE, 8).is_some());
    }
}
