pub mod drag_controller;
pub mod sensor;

pub use drag_controller::*;
pub use sensor::*;
