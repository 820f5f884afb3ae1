mod config;
mod routes;

use leptos::prelude::*;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let config = config::Config::from_env().expect("invalid configuration");
    let addr = config.bind_addr(conf.leptos_options.site_addr);

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "pantry listening");
    axum::serve(listener, app).await.expect("server failed");
}
