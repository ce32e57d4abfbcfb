//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Session entity and its participants (`Session`, `Participant`)
//! - `event`: Notifications published when a local list is rebuilt (`ChatEvent`)

mod event;
mod model;

// Re-export public API
pub use event::ChatEvent;
pub use model::{Participant, Session};
