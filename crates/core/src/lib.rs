//! Domain logic for the Gapply assessment service.
//!
//! Everything here is pure: identifier parsing, the program quadrant
//! classifier, progress percentages, and the request-level validation rules
//! applied before anything is forwarded to the database.

pub mod error;
pub mod ids;
pub mod levels;
pub mod packs;
pub mod progress;
pub mod quadrant;
pub mod status;
pub mod types;
