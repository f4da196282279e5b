pub mod error;

pub mod color;
pub mod event;
pub mod plot;

pub use crate::color::key::ColorKey;
pub use crate::color::wheel::{ColorWheel, ColorWheelBuilder};
pub use crate::error::{Result, VizError};
pub use crate::event::hit::{Event, Hit};
