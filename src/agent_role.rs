use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model_constants::shared::{
    DEPENDENCY_AUDITOR_TEMPERATURE, DEPENDENCY_COLLECTOR_TEMPERATURE, ORCHESTRATOR_TEMPERATURE,
    RECOMMENDER_TEMPERATURE,
};

/// The agents of an expansion planning run, each sampled at its own temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AgentRole {
    Orchestrator,
    DependencyCollector,
    DependencyAuditor,
    Recommender,
}

impl AgentRole {
    pub const ALL: [AgentRole; 4] = [
        AgentRole::Orchestrator,
        AgentRole::DependencyCollector,
        AgentRole::DependencyAuditor,
        AgentRole::Recommender,
    ];

    pub fn temperature(&self) -> f32 {
        match self {
            AgentRole::Orchestrator => ORCHESTRATOR_TEMPERATURE,
            AgentRole::DependencyCollector => DEPENDENCY_COLLECTOR_TEMPERATURE,
            AgentRole::DependencyAuditor => DEPENDENCY_AUDITOR_TEMPERATURE,
            AgentRole::Recommender => RECOMMENDER_TEMPERATURE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Orchestrator => "orchestrator",
            AgentRole::DependencyCollector => "dependency_collector",
            AgentRole::DependencyAuditor => "dependency_auditor",
            AgentRole::Recommender => "recommender",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
