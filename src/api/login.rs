use std::sync::Arc;

use axum::{Extension, response::Html};

use crate::{spotify, types::OauthState};

pub async fn login(Extension(oauth): Extension<Arc<OauthState>>) -> Html<String> {
    let auth_url = spotify::auth::authorize_url(&oauth);

    Html(format!(
        "<h2>Spotify playlist backup</h2>\
         <p><a href=\"{auth_url}\">Log in with Spotify</a></p>"
    ))
}
