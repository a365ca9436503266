//! Criteria packs an assessment can be created against.

use serde::Serialize;

use crate::error::CoreError;

/// One selectable criteria pack.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pack {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const PACK_LITE: &str = "tmf_dmm_lite";
pub const PACK_CORE: &str = "tmf_dmm_core";
pub const PACK_FULL: &str = "tmf_dmm_full";

/// All packs, in display order.
pub const PACKS: &[Pack] = &[
    Pack {
        id: PACK_LITE,
        label: "Quick scan",
        description: "One headline criterion per dimension",
    },
    Pack {
        id: PACK_CORE,
        label: "Core assessment",
        description: "Core criteria across all six dimensions",
    },
    Pack {
        id: PACK_FULL,
        label: "Full assessment",
        description: "The complete maturity model catalog",
    },
];

pub fn pack_ids() -> Vec<&'static str> {
    PACKS.iter().map(|p| p.id).collect()
}

/// Validate a pack id and return its canonical static form.
pub fn validate_pack(raw: &str) -> Result<&'static str, CoreError> {
    let raw = raw.trim();
    PACKS
        .iter()
        .find(|p| p.id == raw)
        .map(|p| p.id)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown pack '{raw}'. Allowed packs: {}",
                pack_ids().join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_packs_accepted() {
        for pack in PACKS {
            assert_eq!(validate_pack(pack.id).unwrap(), pack.id);
        }
    }

    #[test]
    fn unknown_pack_lists_allowed_ids() {
        let msg = validate_pack("tmf_dmm_mega").unwrap_err().to_string();
        assert!(msg.contains("tmf_dmm_mega"));
        for id in pack_ids() {
            assert!(msg.contains(id), "message should list {id}: {msg}");
        }
    }

    #[test]
    fn empty_pack_rejected() {
        assert!(validate_pack("").is_err());
    }
}
