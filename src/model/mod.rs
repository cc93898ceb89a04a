pub mod config;
pub mod days;
pub mod exit;
pub mod gesture;
pub mod keys;
pub mod layout;
pub mod spring;

pub use config::ScrubConfig;
pub use days::{clamp_index, DaySequence};
pub use exit::ExitGate;
pub use gesture::{DragUpdate, GestureState};
pub use keys::TimelineKey;
pub use layout::{DragSample, ItemTarget, LayoutInput};
pub use spring::DayVisual;
