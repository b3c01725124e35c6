use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use expansion_planner::bedrock_service::{BedrockModel, BedrockModelConfig};
use expansion_planner::model_constants::{expansion_planning, shared};
use expansion_planner::settings::bedrock_model_id;
use expansion_planner::terminal_service::TerminalService;
use expansion_planner::tool_environment::ToolEnvironment;
use expansion_planner::AgentRole;

/// Show the effective expansion planning configuration, or send one prompt to
/// the configured Bedrock model.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Agent whose temperature is used.
    #[arg(long, value_enum, default_value_t = AgentRole::Orchestrator)]
    role: AgentRole,

    /// Overrides the role temperature.
    #[arg(long)]
    temperature: Option<f32>,

    /// AWS CLI profile used to reach Bedrock.
    #[arg(long)]
    profile: Option<String>,

    /// Print the configuration as JSON.
    #[arg(long)]
    json: bool,

    /// Prompt to send. Without one, only the configuration is printed.
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let tool_environment = ToolEnvironment::default().apply();

    let temperature = args.temperature.unwrap_or_else(|| args.role.temperature());
    let model_config = BedrockModelConfig::new(temperature, args.profile.as_deref(), &bedrock_model_id());
    let mut terminal = TerminalService::new();

    if args.json {
        terminal.log_json(&json!({
            "role": args.role,
            "model": model_config,
            "tool_environment": tool_environment,
            "expansion_planning": {
                "profile_name": expansion_planning::PROFILE_NAME,
                "source_region": expansion_planning::SOURCE_REGION,
                "target_regions": expansion_planning::TARGET_REGIONS,
                "cloudtrail_lookback_days": expansion_planning::CTRAIL_LOOKBACK_DAYS,
            },
            "request_delay_secs": shared::REQUEST_DELAY_SECS,
            "output_dir": shared::OUTPUT_DIR,
        }))?;
    } else {
        print_configuration(&mut terminal, args.role, &model_config, &tool_environment)?;
    }

    let Some(prompt) = args.prompt else {
        return Ok(());
    };

    terminal.log_info("..... Please wait!")?;
    let model = BedrockModel::from_config(model_config).await;
    report_reply(&mut terminal, model.converse(&prompt).await)
}

/// Prints the reply, or the root cause of the failure. A failure is still
/// returned so the process exits non-zero.
fn report_reply(terminal: &mut TerminalService, reply: Result<String>) -> Result<()> {
    match reply {
        Ok(reply) => terminal.log_ai(&reply),
        Err(err) => {
            terminal.log_error(&err.root_cause().to_string())?;
            Err(err)
        },
    }
}

fn print_configuration(
    terminal: &mut TerminalService,
    role: AgentRole,
    model_config: &BedrockModelConfig,
    tool_environment: &ToolEnvironment,
) -> Result<()> {
    terminal.log_heading("Expansion planning")?;
    terminal.log_setting("profile", expansion_planning::PROFILE_NAME)?;
    terminal.log_setting("source region", expansion_planning::SOURCE_REGION)?;
    terminal.log_setting("target regions", &expansion_planning::TARGET_REGIONS.join(", "))?;
    terminal.log_setting("cloudtrail lookback days", &expansion_planning::CTRAIL_LOOKBACK_DAYS.to_string())?;

    terminal.log_heading("Bedrock model")?;
    terminal.log_setting("role", role.as_str())?;
    terminal.log_setting("model arn", &model_config.model_arn)?;
    terminal.log_setting("profile", &model_config.profile)?;
    terminal.log_setting("region", &model_config.region)?;
    terminal.log_setting("temperature", &model_config.temperature.to_string())?;
    terminal.log_setting("max attempts", &model_config.retry_policy.max_attempts.to_string())?;
    terminal.log_setting("retry mode", model_config.retry_policy.mode.as_str())?;
    terminal.log_setting("request delay (s)", &shared::REQUEST_DELAY_SECS.to_string())?;
    terminal.log_setting("output dir", shared::OUTPUT_DIR)?;

    terminal.log_heading("Tool environment")?;
    for (key, value) in tool_environment.vars() {
        terminal.log_setting(key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_report_reply_returns_failure() {
        let mut terminal = TerminalService::new();
        let reply = Err(anyhow!("no credentials found in chain").context("converse failed"));
        let err = report_reply(&mut terminal, reply).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "no credentials found in chain");
    }

    #[test]
    fn test_report_reply_success() {
        let mut terminal = TerminalService::new();
        assert!(report_reply(&mut terminal, Ok("Expand to eu-south-1.".to_owned())).is_ok());
    }

    #[test]
    fn test_role_accepts_display_spelling() {
        let args = Args::try_parse_from(["expansion_planner", "--role", "dependency_collector"]).unwrap();
        assert_eq!(args.role, AgentRole::DependencyCollector);
        assert!(args.prompt.is_none());
    }
}
