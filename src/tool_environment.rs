use std::env;
use std::sync::OnceLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model_constants::{BYPASS_TOOL_CONSENT_KEY, TOOL_CONSOLE_MODE_KEY};

/// Flags the agent tooling reads from the process environment.
///
/// Build one at startup and pass it to whatever needs it. [`ToolEnvironment::apply`]
/// exports it to the process environment for tools that only read env vars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEnvironment {
    pub console_mode: bool,
    pub bypass_consent: bool,
}

static APPLIED: OnceLock<ToolEnvironment> = OnceLock::new();

impl Default for ToolEnvironment {
    fn default() -> Self {
        Self {
            console_mode: true,
            bypass_consent: true,
        }
    }
}

impl ToolEnvironment {
    pub fn vars(&self) -> [(&'static str, &'static str); 2] {
        [
            (TOOL_CONSOLE_MODE_KEY, if self.console_mode { "enabled" } else { "disabled" }),
            (BYPASS_TOOL_CONSENT_KEY, if self.bypass_consent { "true" } else { "false" }),
        ]
    }

    /// Writes the flags into the process environment once per process.
    ///
    /// Later calls leave the environment alone and return the flags from the first call.
    pub fn apply(self) -> ToolEnvironment {
        let mut first = false;
        let applied = *APPLIED.get_or_init(|| {
            first = true;
            for (key, value) in self.vars() {
                env::set_var(key, value);
            }
            self
        });

        if first {
            info!(console_mode = applied.console_mode, bypass_consent = applied.bypass_consent, "tool environment applied");
        } else {
            debug!("tool environment already applied");
        }
        applied
    }

    /// The flags exported by [`ToolEnvironment::apply`], if it has run.
    pub fn applied() -> Option<ToolEnvironment> {
        APPLIED.get().copied()
    }
}

/// Enables tool console mode and bypasses the interactive consent prompt.
pub fn set_tool_configurations() -> ToolEnvironment {
    ToolEnvironment::default().apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vars_for_default() {
        assert_eq!(
            ToolEnvironment::default().vars(),
            [("STRANDS_TOOL_CONSOLE_MODE", "enabled"), ("BYPASS_TOOL_CONSENT", "true")]
        );
    }

    #[test]
    fn test_vars_when_disabled() {
        let tool_environment = ToolEnvironment { console_mode: false, bypass_consent: false };
        assert_eq!(
            tool_environment.vars(),
            [("STRANDS_TOOL_CONSOLE_MODE", "disabled"), ("BYPASS_TOOL_CONSENT", "false")]
        );
    }

    #[test]
    fn test_apply_is_idempotent() {
        let _env = crate::ENV_LOCK.blocking_lock();
        let first = set_tool_configurations();
        assert_eq!(env::var(TOOL_CONSOLE_MODE_KEY).unwrap(), "enabled");
        assert_eq!(env::var(BYPASS_TOOL_CONSENT_KEY).unwrap(), "true");

        let second = ToolEnvironment { console_mode: false, bypass_consent: false }.apply();
        assert_eq!(first, second);
        assert_eq!(ToolEnvironment::applied(), Some(first));
        assert_eq!(env::var(TOOL_CONSOLE_MODE_KEY).unwrap(), "enabled");
        assert_eq!(env::var(BYPASS_TOOL_CONSENT_KEY).unwrap(), "true");
    }
}
