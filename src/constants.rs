// Window constants
pub const WINDOW_TITLE: &str = "test-events";
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub const DEFAULT_FRAME_RATE: u32 = 30;

// Log constants
pub const DEFAULT_LOG_LINES: usize = 20;
pub const DEFAULT_FONT_SIZE: f32 = 20.0;
pub const DEFAULT_LOG_ORIGIN: [f32; 2] = [50.0, 50.0];
pub const LINE_SPACING: f32 = 1.1;
pub const MAX_LOG_LINES: usize = 200;

// Scene constants
pub const WINDOW_COUNT_FONT_SIZE: f32 = 30.0;
pub const BORDER_THICKNESS: f32 = 20.0;
pub const DEFAULT_GRID_SPACING: u32 = 50;
pub const GRID_LINE_THICKNESS: f32 = 3.0;
pub const DEFAULT_CURSOR_RADIUS: f32 = 20.0;
pub const JOYSTICK_PANEL_ORIGIN: [f32; 2] = [450.0, 50.0];
pub const JOYSTICK_FONT_SIZE: f32 = 16.0;

// Action constants
pub const CURSOR_TARGET: (i32, i32) = (100, 100);
pub const WINDOW_TARGET: (i32, i32) = (100, 100);
pub const RESIZE_TARGET: (u32, u32) = (400, 600);

pub const ICON_SIZE: u32 = 32;
