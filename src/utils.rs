use axum::http::{HeaderMap, header};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::Token;

/// Name of the cookie carrying the raw access token.
pub const SESSION_COOKIE: &str = "spotify";

pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn find_cookie(header_value: &str, name: &str) -> Option<String> {
    header_value
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    find_cookie(cookies, SESSION_COOKIE).filter(|token| !token.is_empty())
}

pub fn session_cookie(token: &Token) -> String {
    format!(
        "{name}={value}; Path=/; Max-Age={max_age}; Secure",
        name = SESSION_COOKIE,
        value = token.access_token,
        max_age = token.expires_in
    )
}

pub fn backup_playlist_name(source_name: &str, date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{} {}-{}", source_name, week.year(), week.week())
}

pub fn backup_description(source_name: &str, made_on: DateTime<Local>) -> String {
    format!(
        "This is a backup of: \"{}\" made on {}",
        source_name,
        made_on.format("%Y-%m-%d %H:%M:%S")
    )
}
