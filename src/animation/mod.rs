pub mod tracks;
pub mod values;

pub use tracks::{KeyframeCursor, KeyframeTrack};
pub use values::{Direction, Interpolatable};
