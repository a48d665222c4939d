use actix_web::{get, HttpResponse};

/// Always answers 200 with an empty body while the relay is up.
#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
