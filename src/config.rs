use crate::client::telegram::TELEGRAM_API_BASE;

/// Everything the relay reads from the environment, resolved once at startup
/// and handed to the handlers as shared state.
///
/// A missing variable only logs a warning; the process still starts and the
/// first outbound send surfaces the problem instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub webhook_secret: String,
    pub sheet_url: String,
    pub issue_base_url: String,
    pub drive_url: String,
    pub telegram_api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bot_token: var_or_warn("TELEGRAM_BOT_TOKEN"),
            chat_id: var_or_warn("TELEGRAM_CHAT_ID"),
            webhook_secret: var_or_warn("LINEAR_WEBHOOK_SECRET"),
            sheet_url: var_or_warn("CONTENT_SHEET_URL"),
            issue_base_url: var_or_warn("LINEAR_ISSUE_BASE_URL"),
            drive_url: var_or_warn("DRIVE_FOLDER_URL"),
            telegram_api_base: TELEGRAM_API_BASE.to_string(),
        }
    }

    pub fn issue_url(&self, identifier: &str) -> String {
        format!("{}{}", self.issue_base_url, identifier)
    }
}

fn var_or_warn(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            log::warn!("{} is not set", key);
            String::new()
        }
    }
}
