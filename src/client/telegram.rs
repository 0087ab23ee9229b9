use serde::Serialize;

use crate::config::Config;
use crate::errortype::SendError;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for the Telegram Bot API send-message call. One instance lives in
/// the app state and is shared across requests.
#[derive(Debug, Clone)]
pub struct Telegram {
    http: reqwest::Client,
    api_base: String,
    token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    #[serde(skip_serializing_if="Option::is_none")]
    reply_markup: Option<&'a InlineKeyboard>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<LinkButton>>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

impl InlineKeyboard {
    /// Button matrix attached to review notifications: issue and sheet links
    /// share the first row, the drive link sits alone on the second.
    pub fn issue_links(issue_url: &str, sheet_url: &str, drive_url: &str) -> Self {
        Self {
            inline_keyboard: vec![
                vec![
                    LinkButton { text: "🚀 Open Linear Issue".to_string(), url: issue_url.to_string() },
                    LinkButton { text: "📝 Content Sheet".to_string(), url: sheet_url.to_string() },
                ],
                vec![
                    LinkButton { text: "📂 Drive".to_string(), url: drive_url.to_string() },
                ],
            ],
        }
    }
}

impl Telegram {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.telegram_api_base.clone(),
            token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    /// Deliver one message, with the keyboard omitted from the payload
    /// entirely when no buttons are requested. A non-2xx answer comes back as
    /// `SendError::Api` carrying the raw response body.
    pub async fn send_message(&self, text: &str, keyboard: Option<&InlineKeyboard>) -> Result<(), SendError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
            reply_markup: keyboard,
        };

        let response = self.http.post(&url).json(&payload).send().await?;
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(SendError::Api { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_rows_follow_the_fixed_layout() {
        let keyboard = InlineKeyboard::issue_links(
            "https://linear.app/acme/issue/TDX-42",
            "https://sheets.example/content",
            "https://drive.example/folder",
        );

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
        assert_eq!(keyboard.inline_keyboard[1].len(), 1);
        assert_eq!(keyboard.inline_keyboard[0][0].url, "https://linear.app/acme/issue/TDX-42");
        assert_eq!(keyboard.inline_keyboard[0][1].text, "📝 Content Sheet");
        assert_eq!(keyboard.inline_keyboard[1][0].text, "📂 Drive");
    }

    #[test]
    fn payload_uses_html_parse_mode() {
        let keyboard = InlineKeyboard::issue_links("a", "b", "c");
        let payload = SendMessage {
            chat_id: "-100",
            text: "hello",
            parse_mode: "HTML",
            reply_markup: Some(&keyboard),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["chat_id"], "-100");
        assert_eq!(value["parse_mode"], "HTML");
        assert_eq!(value["reply_markup"]["inline_keyboard"][1][0]["url"], "c");
    }

    #[test]
    fn payload_omits_the_keyboard_when_buttons_are_off() {
        let payload = SendMessage {
            chat_id: "-100",
            text: "hello",
            parse_mode: "HTML",
            reply_markup: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("reply_markup").is_none());
    }
}
