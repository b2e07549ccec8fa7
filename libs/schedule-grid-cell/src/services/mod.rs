pub mod dispatch;
pub mod grid;
pub mod resolver;
pub mod status;

pub use dispatch::dispatch_click;
pub use grid::{CellOccupant, GridCell, GridSession};
pub use resolver::{resolve, slot_matches};
pub use status::classify;
