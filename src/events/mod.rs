pub mod pointer;
pub mod viewport;
pub mod wheel;

pub use pointer::wire_pointermove;
pub use viewport::wire_resize;
pub use wheel::wire_wheel;
