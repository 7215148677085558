/// Logical game ticks per second, independent of the render frame rate
pub const TICKS_PER_SECOND: u64 = 10;

/// Default interval between logical ticks in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

/// Default side length of one board cell, in board units
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// Per-axis dead zone around the board center for touch input, in board units
pub const TOUCH_DEAD_ZONE: i32 = 50;
