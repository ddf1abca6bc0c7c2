//! Input vocabulary for the editors.
//!
//! Hosts translate their native pointer and keyboard events into these types.
//! Pointer positions arrive in viewport space and are mapped to surface-local
//! coordinates through a [`Viewport`].

pub mod events;
pub mod viewport;

pub use events::{Direction, Key, MouseButton};
pub use viewport::Viewport;
