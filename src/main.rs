use actix_web::{web, App, HttpServer, middleware};
use actix_cors::Cors;
use std::sync::Arc;

use teststand_panel::api::{configure_assets, configure_routes, AppState};
use teststand_panel::banner;
use teststand_panel::config::AppConfig;
use teststand_panel::endpoint::Endpoint;
use teststand_panel::rpc::GlibControlClient;
use teststand_panel::stub::{configure_stub, StubProxy};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let endpoint = Endpoint::resolve(&app_config.base_url);
    log::info!("GLIB control proxy endpoint: {}", endpoint);

    let client = GlibControlClient::new(reqwest::Client::new(), endpoint.clone());
    let bind = (app_config.bind_addr.clone(), app_config.port);
    let stub = app_config.stub_names.clone().map(|names| {
        log::warn!("Serving stub GLIB control proxy with {} names", names.len());
        StubProxy::new(names)
    });

    let state = AppState::new(app_config, endpoint, Arc::new(client));

    println!("🚀 Starting panel on http://{}:{}", bind.0, bind.1);

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        let cors = Cors::permissive();
        let stub = stub.clone();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .configure(move |cfg| {
                if let Some(stub) = stub {
                    configure_stub(cfg, stub);
                }
            })
            .configure(configure_assets)
    })
    .bind(bind)?
    .run();

    // The listener is bound, so a stub mounted above can already take the call.
    state.refresh();

    server.await
}
