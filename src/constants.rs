pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SETTLE_DELAY: f32 = 0.5;            // Time both images coexist during a transition (seconds)

pub const TAB_ROW_HEIGHT: i32 = 48;           // One row of the tab strip at the bottom, gap included
pub const TAB_WIDTH: i32 = 120;               // Widest a tab gets
pub const TAB_MIN_WIDTH: i32 = 48;            // Narrower than this and the strip wraps onto another row
pub const TAB_GAP: i32 = 8;
pub const TAB_FONT_SIZE: i32 = 20;
pub const IMAGE_MARGIN: f32 = 0.9;            // Images never fill more than 90% of the viewport
