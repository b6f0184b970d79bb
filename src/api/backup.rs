use axum::{
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::{backup, config, error, spotify, success, utils, warning};

pub async fn backup(headers: HeaderMap) -> Response {
    let Some(token) = utils::session_token(&headers) else {
        return Redirect::temporary("/login").into_response();
    };

    let user = match spotify::user::current_user(&token).await {
        Ok(user) => user,
        Err(e) => {
            warning!("Failed to fetch user profile: {}", e);
            return ().into_response();
        }
    };

    let source_name = config::backup_source_playlist();
    let source = match spotify::search::find_playlist(&token, &source_name).await {
        Ok(Some(playlist)) => playlist,
        Ok(None) => {
            warning!("No playlist found matching \"{}\"", source_name);
            return ().into_response();
        }
        Err(e) => {
            warning!("Playlist search failed: {}", e);
            return ().into_response();
        }
    };

    let new_name = utils::backup_playlist_name(&source_name, Utc::now().date_naive());

    match backup::backup_playlist(&token, &source.id, &new_name, &user.id).await {
        Ok(created) => {
            success!(
                "Backed up \"{}\" as \"{}\" for {}",
                source.name,
                created.name,
                user.id
            );
            Redirect::temporary("/").into_response()
        }
        Err(e) => {
            // First error wins; the half-written destination playlist is
            // left as-is.
            error!("Playlist backup failed: {}", e);
        }
    }
}
