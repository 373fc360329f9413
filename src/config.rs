use crate::scoring::StrategyKind;
use std::env;

/// Environment-driven defaults. Every field is optional; CLI arguments
/// take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub resume_dir: Option<String>,
    pub output_path: Option<String>,
    pub strategy: Option<StrategyKind>,
}

impl Config {
    pub fn from_env() -> Self {
        let resume_dir = env::var("RESUMATCH_RESUME_DIR").ok();

        let output_path = env::var("RESUMATCH_OUTPUT").ok();

        let strategy = env::var("RESUMATCH_STRATEGY")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            resume_dir,
            output_path,
            strategy,
        }
    }
}
