use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{config, spotify, types::PrivateUser, utils, warning};

pub async fn home(headers: HeaderMap) -> Response {
    let Some(token) = utils::session_token(&headers) else {
        return Redirect::temporary("/login").into_response();
    };

    match spotify::user::current_user(&token).await {
        Ok(user) => Html(render_home(&user)).into_response(),
        Err(e) => {
            // Most likely an expired token; the cookie outlived the session.
            warning!("Failed to fetch user profile: {}", e);
            Redirect::temporary("/login").into_response()
        }
    }
}

fn render_home(user: &PrivateUser) -> String {
    let username = user.display_name.as_deref().unwrap_or(&user.id);
    let source = config::backup_source_playlist();

    format!(
        "<h2>Hello, {username}.</h2>\
         <p><a href=\"/backup\">Back up \"{source}\"</a></p>"
    )
}
