use actix_web::{web, web::Data, HttpResponse};
use serde_json::json;

use crate::actions::{classifier, notify, notify::TelegramHtml};
use crate::client::telegram::{InlineKeyboard, Telegram};
use crate::config::Config;
use crate::errortype::SendError;
use crate::models::event::WebhookEvent;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().body("Linear Telegram relay is running!")
}

/// Webhook entry point. The contract to Linear is only "event accepted", so
/// everything the relay cannot use still answers 200 and delivery failures
/// never surface to the caller.
pub async fn post(config: Data<Config>, telegram: Data<Telegram>, body: web::Bytes) -> HttpResponse {
    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            log::debug!("ignoring unparseable webhook body: {}", e);
            return accepted();
        }
    };

    log::debug!("received Linear webhook: {:?}", event);

    for decision in classifier::classify(&event) {
        let text = notify::render(&decision, &TelegramHtml);
        let keyboard = if decision.def.buttons {
            Some(InlineKeyboard::issue_links(
                &config.issue_url(&decision.ctx.identifier),
                &config.sheet_url,
                &config.drive_url,
            ))
        } else {
            None
        };

        match telegram.send_message(&text, keyboard.as_ref()).await {
            Ok(()) => log::info!(
                "sent {:?} notification for {}",
                decision.def.rule,
                decision.ctx.identifier
            ),
            Err(SendError::Api { status, body }) => log::error!(
                "Telegram rejected notification for {} [{}]: {}",
                decision.ctx.identifier,
                status,
                body
            ),
            Err(e) => log::error!(
                "failed to send notification for {}: {}",
                decision.ctx.identifier,
                e
            ),
        }
    }

    accepted()
}

fn accepted() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "success"}))
}
