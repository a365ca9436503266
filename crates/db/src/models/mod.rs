//! Row structs and DTOs.
//!
//! Each submodule contains the `FromRow` + `Serialize` struct matching what
//! the repositories select, plus the inputs the repositories accept. Inputs
//! carry already-parsed identifiers from `gapply_core::ids`.

pub mod assessment;
pub mod chat_message;
pub mod criterion;
pub mod program;
pub mod response;
