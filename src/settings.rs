use std::env;

use crate::model_constants::shared::INFRA_ACCOUNT;
use crate::model_constants::{DEFAULT_MODEL_ID, MODEL_ID_KEY};

pub fn infra_account_id() -> String {
    INFRA_ACCOUNT.to_owned()
}

/// Bedrock model id, taken from `BEDROCK_MODEL_ID` when it is set.
pub fn bedrock_model_id() -> String {
    resolve_model_id(env::var(MODEL_ID_KEY).ok())
}

/// An override wins whenever it is non-empty. It is returned as is, without validation.
pub fn resolve_model_id(model_id_override: Option<String>) -> String {
    match model_id_override {
        Some(model_id) if !model_id.is_empty() => model_id,
        _ => DEFAULT_MODEL_ID.to_owned(),
    }
}
