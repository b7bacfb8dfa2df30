use actix_web::{get, post, web, HttpRequest, Responder};

use crate::entities::user::SignupForm;
use crate::handlers::flash::{consume_flash, redirect_with_flash, FlashMessage};
use crate::utils::get_client_ip::get_client_ip;
use crate::AppState;

pub const SIGNUP_PAGE: &str = "/auth/signup";
pub const LOGIN_PAGE: &str = "/auth/login";

/// Form-encoded signup. Every outcome is a redirect carrying a flash message.
#[post("/signup")]
pub async fn signup(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Result<web::Form<SignupForm>, actix_web::Error>,
) -> impl Responder {
    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => {
            tracing::debug!("Rejected malformed signup submission: {}", e);
            return redirect_with_flash(SIGNUP_PAGE, FlashMessage::error("Please fill in every field of the form"));
        }
    };

    match state.account_handler.register(&form).await {
        Ok(registered) => redirect_with_flash(LOGIN_PAGE, FlashMessage::success(registered.message)),
        Err(e) => {
            tracing::info!(client_ip = %get_client_ip(&req, state.trust_forwarded_for), "Signup rejected: {}", e);
            redirect_with_flash(SIGNUP_PAGE, FlashMessage::error(e.to_string()))
        }
    }
}

/// Pending messages for the signup page; rendering is left to the front end.
#[get("/signup")]
pub async fn signup_page(req: HttpRequest) -> impl Responder {
    consume_flash(&req)
}

#[get("/login")]
pub async fn login_page(req: HttpRequest) -> impl Responder {
    consume_flash(&req)
}
