//! Relay that turns Linear issue webhooks into Telegram notifications.

pub mod actions;
pub mod client;
pub mod config;
pub mod errortype;
pub mod models;
pub mod routes;

use actix_web::web::{self, resource};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(resource("/").route(web::get().to(routes::event::home)))
        .service(resource("/webhook").route(web::post().to(routes::event::post)));
}
