/// Inputs for an expansion planning run.
pub mod expansion_planning {
    /// AWS CLI profile for the account where the workloads are deployed.
    pub const PROFILE_NAME: &str = "kfadmin";
    /// Region the workloads currently run in.
    pub const SOURCE_REGION: &str = "us-east-1";
    /// Regions the workloads are expanded to.
    pub const TARGET_REGIONS: [&str; 4] = ["ap-southeast-7", "ap-southeast-5", "eu-south-1", "mx-central-1"];
    pub const CTRAIL_LOOKBACK_DAYS: u64 = 7;

    pub fn cloudtrail_lookback() -> std::time::Duration {
        std::time::Duration::from_secs(CTRAIL_LOOKBACK_DAYS * 24 * 60 * 60)
    }
}

/// Values that don't change between environments.
pub mod shared {
    pub const INFRA_REGION: &str = "us-east-1";
    /// Account hosting the Bedrock inference profiles.
    pub const INFRA_ACCOUNT: &str = "606357619201";
    pub const BEDROCK_AWS_CLI_PROFILE: &str = "kfadmin";

    pub const ORCHESTRATOR_TEMPERATURE: f32 = 0.7;
    pub const DEPENDENCY_COLLECTOR_TEMPERATURE: f32 = 0.9;
    pub const DEPENDENCY_AUDITOR_TEMPERATURE: f32 = 0.7;
    pub const RECOMMENDER_TEMPERATURE: f32 = 0.2;

    /// Seconds between consecutive model requests.
    pub const REQUEST_DELAY_SECS: f64 = 1.0;
    /// Attempts per request when Bedrock throttles.
    pub const MAX_RETRIES: u32 = 3;

    pub const OUTPUT_DIR: &str = "analysis_output";

    pub fn request_delay() -> std::time::Duration {
        std::time::Duration::from_secs_f64(REQUEST_DELAY_SECS)
    }
}

pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub const MODEL_ID_KEY: &str = "BEDROCK_MODEL_ID";
pub const TOOL_CONSOLE_MODE_KEY: &str = "STRANDS_TOOL_CONSOLE_MODE";
pub const BYPASS_TOOL_CONSENT_KEY: &str = "BYPASS_TOOL_CONSENT";

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_durations() {
        assert_eq!(expansion_planning::cloudtrail_lookback(), Duration::from_secs(604_800));
        assert_eq!(shared::request_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_source_region_is_not_a_target() {
        assert!(!expansion_planning::TARGET_REGIONS.contains(&expansion_planning::SOURCE_REGION));
    }
}
