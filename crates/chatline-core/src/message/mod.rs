//! Message domain module.
//!
//! - `timestamp`: calendar date + `HH:MM` clock derived from a server or local time
//! - `model`: a single chat message (`Message`)
//! - `transcript`: the ordered, densely indexed message sequence (`Transcript`)

mod model;
mod timestamp;
mod transcript;

pub use model::Message;
pub use timestamp::MessageTimestamp;
pub use transcript::Transcript;
