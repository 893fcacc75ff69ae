use crate::constants::*;

/// Where a slide sits in 3D space for one frame.
///
/// Angles are in degrees, `translate_depth` in pixels along the axis pointing
/// at the viewer. A higher `stack_order` draws in front of a lower one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransform {
    pub translate_depth: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub stack_order: i32,
}

impl SlideTransform {
    /// The transform of a slide sitting exactly at the current position.
    pub const IDENTITY: SlideTransform = SlideTransform {
        translate_depth: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        stack_order: STACK_ORDER_BASE as i32,
    };
}

impl Default for SlideTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the transform of `slide_index` when the deck is at `slide_progress`.
///
/// Slides ahead of the current position (positive distance) are pushed away
/// from the viewer and tilted back; slides already passed come forward.
pub fn compute_transform(slide_index: usize, slide_progress: f32) -> SlideTransform {
    let distance = slide_index as f32 - slide_progress;
    let magnitude = distance.abs();

    SlideTransform {
        translate_depth: distance * DEPTH_PER_SLIDE,
        rotate_x: (distance * ROTATE_X_PER_SLIDE).clamp(-ROTATE_X_LIMIT, ROTATE_X_LIMIT),
        rotate_y: (distance * ROTATE_Y_PER_SLIDE).clamp(-ROTATE_Y_LIMIT, ROTATE_Y_LIMIT),
        scale: (1.0 - magnitude * SCALE_FALLOFF).max(SCALE_MIN),
        opacity: (1.0 - magnitude * OPACITY_FALLOFF).max(OPACITY_MIN),
        stack_order: round_half_up(STACK_ORDER_BASE - magnitude * STACK_ORDER_FALLOFF) as i32,
    }
}

// Halves round toward positive infinity, so -4.5 becomes -4 rather than -5.
fn round_half_up(value: f32) -> f32 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
