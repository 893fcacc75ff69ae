pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Target frames per second
pub const DEFAULT_SLIDE_COUNT: usize = 5;     // Built-in deck size

pub const PERSPECTIVE: f32 = 1200.0;          // Distance from viewer to the z = 0 plane (px)
pub const PROJECTION_GRID: usize = 8;         // Quad subdivisions per face edge

pub const DEPTH_PER_SLIDE: f32 = -300.0;      // translateDepth per unit of distance (px)
pub const ROTATE_X_PER_SLIDE: f32 = 20.0;     // degrees
pub const ROTATE_X_LIMIT: f32 = 45.0;
pub const ROTATE_Y_PER_SLIDE: f32 = 5.0;      // degrees
pub const ROTATE_Y_LIMIT: f32 = 15.0;
pub const SCALE_FALLOFF: f32 = 0.15;
pub const SCALE_MIN: f32 = 0.6;
pub const OPACITY_FALLOFF: f32 = 0.4;
pub const OPACITY_MIN: f32 = 0.1;
pub const STACK_ORDER_BASE: f32 = 100.0;
pub const STACK_ORDER_FALLOFF: f32 = 10.0;

pub const WHEEL_STEP: f32 = 100.0;            // Page pixels per wheel notch
pub const ARROW_STEP: f32 = 40.0;             // Page pixels per arrow key press
pub const PAGE_STEP_FRACTION: f32 = 0.9;      // PageUp/PageDown step, in viewports
pub const SMOOTH_SCROLL_DURATION: f32 = 0.6;  // Duration of an animated scroll (seconds)

pub const PROGRESS_BAR_HEIGHT: i32 = 4;
pub const NAV_DOT_RADIUS: f32 = 6.0;
pub const NAV_DOT_SPACING: f32 = 12.0;        // Gap between two dots
pub const NAV_DOT_MARGIN: f32 = 32.0;         // Distance from the right window edge
pub const NAV_DOT_HIT_RADIUS: f32 = 10.0;
pub const NAV_DOT_ACTIVE_SCALE: f32 = 1.25;
