use clap::Parser;
use platelens_core::domain::common::{LlmConfig, PlatelensConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "platelens", about = "Food image nutrition analysis service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    /// Bind address for the HTTP server.
    #[arg(long, env = "PLATELENS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PLATELENS_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Path prefix for every route, e.g. `/platelens`.
    #[arg(long, env = "PLATELENS_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "PLATELENS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "PLATELENS_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Gemini API key. The analysis path refuses to start without it.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-pro")]
    pub gemini_model: String,
}

impl From<Args> for PlatelensConfig {
    fn from(args: Args) -> Self {
        PlatelensConfig {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
        }
    }
}
