use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed configuration for the relay.
///
/// Two secrets are required; everything else has a default matching the
/// platform limits the bot was written against.
#[derive(Clone, Debug)]
pub struct Config {
    // Required secrets
    pub telegram_bot_token: String,
    pub openai_api_key: String,

    // Completion request shape
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub completion_timeout: Duration,

    // Telegram message limits
    pub telegram_message_limit: usize,
    pub telegram_safe_limit: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;
        let openai_api_key = env_str("OPENAI_API_KEY").and_then(non_empty).ok_or_else(|| {
            Error::Config("OPENAI_API_KEY environment variable is required".to_string())
        })?;

        let completion_model = env_str("COMPLETION_MODEL")
            .and_then(non_empty)
            .unwrap_or_else(|| "gpt-3.5-turbo".to_string());
        let completion_max_tokens = env_u32("COMPLETION_MAX_TOKENS").unwrap_or(2048);
        let completion_timeout =
            Duration::from_secs(env_u64("COMPLETION_TIMEOUT_SECS").unwrap_or(30));

        // 4096 is the hard platform limit; replies are clipped at the safe
        // limit so the truncation notice still fits.
        let telegram_message_limit = env_usize("TELEGRAM_MESSAGE_LIMIT").unwrap_or(4096);
        let telegram_safe_limit = env_usize("TELEGRAM_SAFE_LIMIT").unwrap_or(4000);

        Ok(Self {
            telegram_bot_token,
            openai_api_key,
            completion_model,
            completion_max_tokens,
            completion_timeout,
            telegram_message_limit,
            telegram_safe_limit,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn env_u32(key: &str) -> Option<u32> {
    env_str(key).and_then(|s| s.trim().parse::<u32>().ok())
}

fn env_usize(key: &str) -> Option<usize> {
    env_str(key).and_then(|s| s.trim().parse::<usize>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
