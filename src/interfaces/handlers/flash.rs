use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "flash";

/// Seconds a pending message survives if the redirect target is never loaded.
const FLASH_TTL_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        FlashMessage { level: FlashLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        FlashMessage { level: FlashLevel::Error, message: message.into() }
    }
}

/// `303 See Other` to `location`, carrying `message` for the next page load.
pub fn redirect_with_flash(location: &str, message: FlashMessage) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(flash_cookie(&[message]))
        .finish()
}

/// Reads pending messages and answers with them, clearing the cookie.
pub fn consume_flash(req: &HttpRequest) -> HttpResponse {
    let messages = read_flash(req);

    let mut removal = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    removal.make_removal();

    HttpResponse::Ok()
        .cookie(removal)
        .json(serde_json::json!({ "messages": messages }))
}

fn flash_cookie(messages: &[FlashMessage]) -> Cookie<'static> {
    let payload = serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string());

    Cookie::build(FLASH_COOKIE, urlencoding::encode(&payload).into_owned())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(FLASH_TTL_SECS))
        .finish()
}

pub fn read_flash(req: &HttpRequest) -> Vec<FlashMessage> {
    let Some(cookie) = req.cookie(FLASH_COOKIE) else {
        return Vec::new();
    };

    urlencoding::decode(cookie.value())
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_else(|| {
            tracing::debug!("Discarding unreadable flash cookie");
            Vec::new()
        })
}
