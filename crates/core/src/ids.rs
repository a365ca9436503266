//! UUID-shaped identifiers.
//!
//! Every identifier that reaches the database goes through [`is_uuid`] first.
//! The typed wrappers below can only be built by parsing, so a handler that
//! holds an [`AssessmentId`] has already rejected malformed input.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

/// Canonical 8-4-4-4-12 form with version nibble 1-5 and variant nibble 8/9/a/b.
pub const UUID_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

static UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UUID_PATTERN).expect("valid regex"));

/// Returns `true` iff `s` is a canonical, version 1-5 UUID string.
pub fn is_uuid(s: &str) -> bool {
    UUID_RE.is_match(s)
}

/// Parse a raw identifier for the given request field.
pub fn parse_uuid(field: &'static str, raw: &str) -> Result<Uuid, CoreError> {
    let raw = raw.trim();
    if !is_uuid(raw) {
        return Err(CoreError::InvalidIdentifier { field });
    }
    Uuid::parse_str(raw).map_err(|_| CoreError::InvalidIdentifier { field })
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Validate `raw` and wrap it. `field` names the request field in errors.
            pub fn parse(field: &'static str, raw: &str) -> Result<Self, CoreError> {
                parse_uuid(field, raw).map(Self)
            }

            /// Like [`Self::parse`], but absent or blank input yields `None`.
            pub fn parse_optional(
                field: &'static str,
                raw: Option<&str>,
            ) -> Result<Option<Self>, CoreError> {
                match raw.map(str::trim) {
                    None | Some("") => Ok(None),
                    Some(value) => Self::parse(field, value).map(Some),
                }
            }

            /// Like [`Self::parse`], but absent or blank input is a validation error.
            pub fn parse_required(field: &'static str, raw: Option<&str>) -> Result<Self, CoreError> {
                Self::parse_optional(field, raw)?
                    .ok_or_else(|| CoreError::Validation(format!("{field} is required")))
            }

            /// Wrap a UUID produced by the database.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_id!(
    /// Identifier of one assessment run.
    AssessmentId
);
uuid_id!(
    /// Identifier of a catalog criterion.
    CriterionId
);
uuid_id!(
    /// Identifier of a catalog action.
    ActionId
);
uuid_id!(
    /// Identifier of a catalog program.
    ProgramId
);
uuid_id!(
    /// Identifier of an activated program.
    ProgramInstanceId
);
