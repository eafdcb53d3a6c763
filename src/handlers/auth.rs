//! Authentication HTTP Handlers
//!
//! 계정 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 회원가입, 이메일 인증, 로그인, 비밀번호 재설정 플로우를 제공합니다.
//!
//! # 상태 코드 규약
//!
//! - 토큰/자격 증명 문제: 401
//! - 계정 상태 문제 (미인증 등): 403
//! - 재발송 속도 제한: 429
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    domain::dto::users::request::auth_request::{
        EmailRequest, LoginRequest, ResetPasswordRequest, SignupRequest, VerifyEmailQuery,
    },
    state::AppState,
    utils::string_utils::normalize_email,
};
use crate::errors::errors::AppError;

/// 회원가입 핸들러
///
/// 계정을 미인증 상태로 생성하고 인증 메일을 발송합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/signup`
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    log::info!("회원가입 시도: {}", payload.email);

    let response = state.user_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 인증이 완료된 계정에 대해 장기 JWT를 발급합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 이메일 인증 핸들러
///
/// 인증 메일의 링크로 도달하는 엔드포인트입니다.
///
/// # Endpoint
/// `GET /api/v1/auth/verify-email?token={token}`
#[get("/verify-email")]
pub async fn verify_email(
    state: web::Data<AppState>,
    query: web::Query<VerifyEmailQuery>,
) -> Result<HttpResponse, AppError> {
    state.user_service.verify_email(&query.token).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 인증 메일 재발송 핸들러
///
/// 이메일별 고정 윈도우 속도 제한이 적용됩니다.
/// 한도 초과 시 상태 변화 없이 429를 반환합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/resend-verification`
#[post("/resend-verification")]
pub async fn resend_verification(
    state: web::Data<AppState>,
    payload: web::Json<EmailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 대소문자 표기가 달라도 같은 계정으로 집계되도록 정규화 키 사용
    let email = normalize_email(&payload.email);
    state.resend_guard.check_and_consume(&email)?;

    state.user_service.resend_verification(&email).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "인증 메일이 재발송되었습니다"
    })))
}

/// 비밀번호 재설정 요청 핸들러
///
/// 계정 존재 여부와 무관하게 항상 204를 반환하여
/// 이메일 등록 여부를 응답으로 탐지할 수 없게 합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/forgot-password`
#[post("/forgot-password")]
pub async fn forgot_password(
    state: web::Data<AppState>,
    payload: web::Json<EmailRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.user_service.request_password_reset(&payload.email).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 비밀번호 재설정 완료 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/reset-password`
#[post("/reset-password")]
pub async fn reset_password(
    state: web::Data<AppState>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.user_service.reset_password(&payload.token, &payload.password).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "비밀번호가 변경되었습니다. 새 비밀번호로 로그인해주세요"
    })))
}
