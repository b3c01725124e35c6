use std::fmt;
use anyhow::{bail, Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseOutput;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole::User, InferenceConfiguration, Message,
};
use aws_smithy_types::retry::{RetryConfig, RetryMode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model_constants::shared::{BEDROCK_AWS_CLI_PROFILE, INFRA_REGION, MAX_RETRIES};
use crate::settings::{bedrock_model_id, infra_account_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    Standard,
    /// Backs off further when Bedrock reports throttling.
    Adaptive,
}

impl RetryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryStrategy::Standard => "standard",
            RetryStrategy::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for RetryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<RetryStrategy> for RetryMode {
    fn from(strategy: RetryStrategy) -> Self {
        match strategy {
            RetryStrategy::Standard => RetryMode::Standard,
            RetryStrategy::Adaptive => RetryMode::Adaptive,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub mode: RetryStrategy,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            mode: RetryStrategy::Adaptive,
        }
    }
}

impl RetryPolicy {
    pub fn to_retry_config(&self) -> RetryConfig {
        let retry_config = match self.mode {
            RetryStrategy::Standard => RetryConfig::standard(),
            RetryStrategy::Adaptive => RetryConfig::adaptive(),
        };
        retry_config.with_max_attempts(self.max_attempts)
    }
}

/// `arn:aws:bedrock:{region}:{account}:inference-profile/{model_id}`
pub fn inference_profile_arn(region: &str, account_id: &str, model_id: &str) -> String {
    format!("arn:aws:bedrock:{region}:{account_id}:inference-profile/{model_id}")
}

/// Everything needed to build a Bedrock client for one agent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BedrockModelConfig {
    pub model_arn: String,
    pub profile: String,
    pub region: String,
    pub temperature: f32,
    pub retry_policy: RetryPolicy,
}

impl BedrockModelConfig {
    /// The ARN always uses the infra region and account, whatever the profile.
    pub fn new(temperature: f32, profile: Option<&str>, model_id: &str) -> Self {
        Self {
            model_arn: inference_profile_arn(INFRA_REGION, &infra_account_id(), model_id),
            profile: profile.unwrap_or(BEDROCK_AWS_CLI_PROFILE).to_owned(),
            region: INFRA_REGION.to_owned(),
            temperature,
            retry_policy: RetryPolicy::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BedrockModel {
    bedrock_client: Client,
    config: BedrockModelConfig,
}

/// Builds a Bedrock model handle for `temperature`.
///
/// `profile` defaults to `BEDROCK_AWS_CLI_PROFILE`. Credentials are resolved
/// lazily, so a missing profile only fails on the first request.
pub async fn construct_bedrock_model(temperature: f32, profile: Option<&str>) -> BedrockModel {
    let config = BedrockModelConfig::new(temperature, profile, &bedrock_model_id());
    BedrockModel::from_config(config).await
}

impl BedrockModel {
    pub async fn from_config(config: BedrockModelConfig) -> Self {
        debug!(
            model_arn = %config.model_arn,
            profile = %config.profile,
            region = %config.region,
            temperature = config.temperature,
            max_attempts = config.retry_policy.max_attempts,
            retry_mode = %config.retry_policy.mode,
            "constructing bedrock model"
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&config.profile)
            .region(Region::new(config.region.clone()))
            .retry_config(config.retry_policy.to_retry_config())
            .load()
            .await;

        Self {
            bedrock_client: Client::new(&sdk_config),
            config,
        }
    }

    pub fn client(&self) -> &Client {
        &self.bedrock_client
    }

    pub fn config(&self) -> &BedrockModelConfig {
        &self.config
    }

    pub fn model_arn(&self) -> &str {
        &self.config.model_arn
    }

    pub fn temperature(&self) -> f32 {
        self.config.temperature
    }

    pub fn inference_config(&self) -> InferenceConfiguration {
        InferenceConfiguration::builder()
            .temperature(self.config.temperature)
            .build()
    }

    /// Sends a single user message and returns the text of the reply.
    pub async fn converse(&self, prompt: &str) -> Result<String> {
        let message = Message::builder()
            .role(User)
            .content(ContentBlock::Text(prompt.to_owned()))
            .build()?;

        let response = self.bedrock_client
            .converse()
            .model_id(&self.config.model_arn)
            .messages(message)
            .inference_config(self.inference_config())
            .send()
            .await
            .with_context(|| format!("converse with {} failed", self.config.model_arn))?;

        reply_text(&response)
    }
}

/// Text blocks of the reply, joined by newlines. Other block kinds are skipped.
pub fn reply_text(response: &ConverseOutput) -> Result<String> {
    let output = response.output().context("Error getting output")?;
    let message = match output.as_message() {
        Ok(message) => message,
        Err(_) => {
            bail!("Output is not a message")
        },
    };

    let text: Vec<&str> = message.content()
        .iter()
        .filter_map(|content| match content {
            ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    Ok(text.join("\n"))
}
