use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:9200";
pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
pub const DEFAULT_MODEL: &str = "glm-4-flash";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are the friendly assistant on a personal homepage. Answer briefly and politely.";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Chat completion proxy for the hero page")]
pub struct Args {
    /// Listen address (falls back to CHAT_ADDR)
    #[arg(long)]
    pub addr: Option<SocketAddr>,

    /// OpenAI-compatible API base URL (falls back to CHAT_API_BASE_URL)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Model name (falls back to CHAT_MODEL)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub addr: SocketAddr,
    pub base_url: String,
    /// Sent as a bearer token. Never logged.
    pub api_key: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Bound on the whole upstream exchange, retries included.
    pub timeout: Duration,
    pub max_retries: u32,
    pub base_backoff: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 9200)),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 1.0,
            max_tokens: 7800,
            timeout: Duration::from_secs(20),
            max_retries: 3,
            base_backoff: Duration::from_millis(1000),
        }
    }
}

impl ChatConfig {
    /// Command-line flags win over environment variables, which win over
    /// defaults.
    pub fn resolve(args: &Args) -> Result<Self, String> {
        let defaults = Self::default();
        let addr = match args.addr {
            Some(addr) => addr,
            None => env_var_string("CHAT_ADDR", DEFAULT_ADDR)
                .parse()
                .map_err(|e| format!("invalid CHAT_ADDR: {e}"))?,
        };
        let base_url = args
            .api_base_url
            .clone()
            .unwrap_or_else(|| env_var_string("CHAT_API_BASE_URL", DEFAULT_BASE_URL));
        let model = args
            .model
            .clone()
            .unwrap_or_else(|| env_var_string("CHAT_MODEL", DEFAULT_MODEL));

        Ok(Self {
            addr,
            base_url,
            api_key: env::var("CHAT_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            model,
            system_prompt: env_var_string("CHAT_SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
            temperature: env_var_f64("CHAT_TEMPERATURE", defaults.temperature),
            max_tokens: env_var_u32("CHAT_MAX_TOKENS", defaults.max_tokens),
            timeout: Duration::from_secs(env_var_u64("CHAT_TIMEOUT_SECS", 20)),
            max_retries: env_var_u32("CHAT_MAX_RETRIES", defaults.max_retries),
            base_backoff: Duration::from_millis(env_var_u64("CHAT_BACKOFF_MS", 1000)),
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn env_var_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_var_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_var_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_var_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
