//! Navigation state and the session lifecycle around it.
//!
//! Cursor movement is a pure function testable without any renderer; the
//! controller layers the impure parts (clock, redraws) on top.

pub mod controller;
pub mod controls;
pub mod session;

pub use controller::{SessionController, DEFAULT_SESSION_TIMEOUT};
pub use controls::NavControls;
pub use session::{NavSession, PageCursor};
