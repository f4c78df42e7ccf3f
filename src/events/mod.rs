pub mod lifecycle;
pub mod pointer;
pub mod resize;

pub use lifecycle::{wire_focus_blur, wire_pageshow, wire_teardown, wire_visibility};
pub use pointer::wire_pointermove;
pub use resize::wire_resize;
