use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::time::Duration;

use code_judge::api::{configure_routes, AppState};
use code_judge::banner;
use code_judge::config::AppConfig;
use code_judge::providers;
use code_judge::runner::CodeEvaluator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure OPENAI_API_KEY or ANTHROPIC_API_KEY is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let mut client_builder = reqwest::Client::builder();
    if let Some(secs) = app_config.judge.timeout_secs {
        client_builder = client_builder.timeout(Duration::from_secs(secs));
    }
    let client = client_builder.build().map_err(std::io::Error::other)?;

    let model = providers::from_config(&app_config, client).map_err(std::io::Error::other)?;
    let state = AppState::new(CodeEvaluator::new(model, app_config.judge.clone()));

    log::info!("⚖️  Judge model: {}", app_config.judge.model);
    log::info!("🚀 Starting server on {}", app_config.bind_addr);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(app_config.bind_addr.as_str())?
    .run()
    .await
}
