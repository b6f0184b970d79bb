use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, error, info, types::OauthState};

pub async fn start_api_server(addr: String, oauth: Arc<OauthState>) {
    let app = Router::new()
        .route("/", get(api::root))
        .route("/login", get(api::login).layer(Extension(Arc::clone(&oauth))))
        .route("/callback", get(api::callback).layer(Extension(oauth)))
        .route("/home", get(api::home))
        .route("/backup", get(api::backup))
        .route("/health", get(api::health));

    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
