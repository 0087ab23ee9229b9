use actix_cors::Cors;
use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;

use linear_tel_relay::{client::telegram::Telegram, config::Config, configure};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_port = std::env::var("PORT")
        .unwrap_or_default()
        .parse::<u16>()
        .unwrap_or(10000);

    log::info!("starting relay on 0.0.0.0:{}", bind_port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(Data::new(config.clone()))
            .app_data(Data::new(Telegram::new(&config)))
            .configure(configure)
    })
    .bind(("0.0.0.0", bind_port))?
    .run()
    .await
}
