// The cat character: state machine, tuning and drawing

pub mod controller;
pub mod draw;
pub mod expression;
pub mod tuning;

pub use controller::{Cat, HorizontalBounds};
pub use draw::{draw_cat, CatLayout};
pub use expression::Expression;
pub use tuning::{CatTuning, CAT_TUNING, DEFAULT_SCALE, OFFSCREEN_MARGIN};
