use axum::{http::HeaderMap, response::Redirect};

use crate::utils;

pub async fn root(headers: HeaderMap) -> Redirect {
    if utils::session_token(&headers).is_some() {
        Redirect::temporary("/home")
    } else {
        Redirect::temporary("/login")
    }
}
