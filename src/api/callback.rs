use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{spotify, types::OauthState, utils, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(oauth): Extension<Arc<OauthState>>,
) -> Response {
    // State token first; a missing or foreign token means the redirect did
    // not originate from our /login page.
    let Some(returned_state) = params.get("state") else {
        return (StatusCode::FORBIDDEN, Html("<h4>Missing state token.</h4>")).into_response();
    };

    if *returned_state != oauth.state_token {
        warning!(
            "State mismatch: {} != {}",
            returned_state,
            oauth.state_token
        );
        return (StatusCode::FORBIDDEN, Html("<h4>State token mismatch.</h4>")).into_response();
    }

    let Some(code) = params.get("code") else {
        return (
            StatusCode::FORBIDDEN,
            Html("<h4>Missing authorization code.</h4>"),
        )
            .into_response();
    };

    match spotify::auth::exchange_code(code, &oauth.code_verifier).await {
        Ok(token) if !token.access_token.is_empty() => {
            let cookie = utils::session_cookie(&token);
            (
                [(header::SET_COOKIE, cookie)],
                Redirect::temporary("/"),
            )
                .into_response()
        }
        Ok(_) => {
            warning!("Token exchange returned no access token");
            (StatusCode::FORBIDDEN, Html("<h4>Couldn't get token.</h4>")).into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            (StatusCode::FORBIDDEN, Html("<h4>Couldn't get token.</h4>")).into_response()
        }
    }
}
