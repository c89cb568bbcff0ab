//! Generation defaults

/// Default grid width in cells
pub const DEFAULT_WIDTH: i32 = 40;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: i32 = 40;

/// Default number of rooms the placer tries to fit
pub const DEFAULT_ROOM_COUNT: u32 = 12;

/// Default upper bound on a room's width and height
pub const DEFAULT_ROOM_MAX_SIZE: i32 = 6;

/// Placement attempts before the placer gives up on the remaining rooms
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50_000;

/// Probability that an edge dropped by the spanning tree is kept anyway
pub const EXTRA_EDGE_CHANCE: f64 = 0.125;

/// Step surcharge for tunnelling through a room cell
pub const ROOM_STEP_COST: f32 = 10.0;

/// Step surcharge for digging through empty space
pub const EMPTY_STEP_COST: f32 = 5.0;

/// Step surcharge for reusing an existing corridor
pub const CORRIDOR_STEP_COST: f32 = 1.0;
