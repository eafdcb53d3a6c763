//! User HTTP Handlers
//!
//! 인증된 사용자의 계정 조회 엔드포인트를 처리합니다.
//! 이 모듈의 핸들러들은 인증 미들웨어 뒤에서만 동작합니다.
use actix_web::{get, web, HttpResponse};
use crate::{
    domain::models::auth::authenticated_user::AuthenticatedUser,
    state::AppState,
};
use crate::errors::errors::AppError;

/// 계정 정보 조회 핸들러
///
/// 호출자는 자신의 계정만 조회할 수 있습니다.
/// 다른 계정 ID를 요청하면 존재 여부 확인 전에 403으로 거부합니다.
///
/// # Endpoint
/// `GET /api/v1/users/{id}`
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let requested_id = path.into_inner();

    let user = state.user_service.get_account(&requested_id, &auth.user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
