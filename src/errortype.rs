use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendError {
    #[error("request to Telegram failed")] Request(#[from] reqwest::Error),
    #[error("Telegram rejected the message [{status}] {body}")] Api { status: reqwest::StatusCode, body: String },
}
