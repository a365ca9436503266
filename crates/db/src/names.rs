//! Table and stored-procedure names.
//!
//! The managed database can be deployed with prefixed or schema-qualified
//! objects, so every name the repositories interpolate into SQL is
//! configurable. Names are checked to be plain (optionally schema-qualified)
//! identifiers before use, since they cannot be bound as parameters.

/// Errors raised while loading [`StoreNames`].
#[derive(Debug, thiserror::Error)]
pub enum StoreNamesError {
    #[error("{var} is not a valid SQL identifier: '{value}'")]
    InvalidIdentifier { var: &'static str, value: String },
}

/// Every table and procedure the repositories talk to.
#[derive(Debug, Clone)]
pub struct StoreNames {
    pub assessments_table: String,
    pub criteria_table: String,
    pub responses_table: String,
    pub programs_table: String,
    pub program_instances_table: String,
    pub action_instances_table: String,
    pub program_actions_table: String,
    pub chat_messages_table: String,

    pub create_assessment_rpc: String,
    pub save_onboarding_rpc: String,
    pub get_results_rpc: String,
    pub set_action_status_rpc: String,
    pub validate_action_impact_rpc: String,
    pub activate_program_rpc: String,
    pub close_program_rpc: String,
}

/// `(env var, default)` for each field, in declaration order.
const NAME_VARS: [(&str, &str); 15] = [
    ("GAPPLY_ASSESSMENTS_TABLE", "assessments"),
    ("GAPPLY_CRITERIA_TABLE", "criteria"),
    ("GAPPLY_RESPONSES_TABLE", "responses"),
    ("GAPPLY_PROGRAMS_TABLE", "programs"),
    ("GAPPLY_PROGRAM_INSTANCES_TABLE", "program_instances"),
    ("GAPPLY_ACTION_INSTANCES_TABLE", "action_instances"),
    ("GAPPLY_PROGRAM_ACTIONS_TABLE", "program_actions"),
    ("GAPPLY_CHAT_MESSAGES_TABLE", "chat_messages"),
    ("GAPPLY_CREATE_ASSESSMENT_RPC", "gapply_create_assessment"),
    ("GAPPLY_SAVE_ONBOARDING_RPC", "gapply_save_onboarding"),
    ("GAPPLY_GET_RESULTS_RPC", "gapply_get_results"),
    ("GAPPLY_SET_ACTION_STATUS_RPC", "gapply_set_action_status"),
    ("GAPPLY_VALIDATE_ACTION_IMPACT_RPC", "gapply_validate_action_impact"),
    ("GAPPLY_ACTIVATE_PROGRAM_RPC", "gapply_activate_program"),
    ("GAPPLY_CLOSE_PROGRAM_RPC", "gapply_close_program"),
];

impl Default for StoreNames {
    fn default() -> Self {
        Self::from_lookup(|_| None).expect("default store names are valid identifiers")
    }
}

impl StoreNames {
    /// Load names from environment variables, falling back to the defaults.
    ///
    /// | Env Var                          | Default                  |
    /// |----------------------------------|--------------------------|
    /// | `GAPPLY_RESPONSES_TABLE`         | `responses`              |
    /// | `GAPPLY_GET_RESULTS_RPC`         | `gapply_get_results`     |
    /// | ... one variable per field ...   |                          |
    pub fn from_env() -> Result<Self, StoreNamesError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoreNamesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(NAME_VARS.len());
        for (var, default) in NAME_VARS {
            let value = lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string());
            if !is_sql_identifier(&value) {
                return Err(StoreNamesError::InvalidIdentifier { var, value });
            }
            values.push(value);
        }

        let mut it = values.into_iter();
        let mut next = || it.next().unwrap_or_default();
        Ok(Self {
            assessments_table: next(),
            criteria_table: next(),
            responses_table: next(),
            programs_table: next(),
            program_instances_table: next(),
            action_instances_table: next(),
            program_actions_table: next(),
            chat_messages_table: next(),
            create_assessment_rpc: next(),
            save_onboarding_rpc: next(),
            get_results_rpc: next(),
            set_action_status_rpc: next(),
            validate_action_impact_rpc: next(),
            activate_program_rpc: next(),
            close_program_rpc: next(),
        })
    }
}

/// `name` or `schema.name`, each part `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_sql_identifier(name: &str) -> bool {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 {
        return false;
    }
    parts.iter().all(|part| {
        let mut chars = part.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}
