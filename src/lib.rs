//! Shared configuration for the expansion planning agents, and the factory
//! that turns it into a ready-to-use Bedrock model handle.

pub mod agent_role;
pub mod bedrock_service;
pub mod model_constants;
pub mod settings;
pub mod terminal_service;
pub mod tool_environment;

pub use agent_role::AgentRole;
pub use bedrock_service::{
    construct_bedrock_model, BedrockModel, BedrockModelConfig, RetryPolicy, RetryStrategy,
};
pub use settings::{bedrock_model_id, infra_account_id, resolve_model_id};
pub use tool_environment::{set_tool_configurations, ToolEnvironment};

/// Held by every test that reads or writes the process environment.
#[cfg(test)]
pub(crate) static ENV_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());
