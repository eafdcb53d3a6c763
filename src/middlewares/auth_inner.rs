//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::errors::errors::AppError;
use crate::state::AppState;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub require_verified: bool,
}

/// 인증 판정 결과
enum AuthRejection {
    /// 토큰 자체의 문제 (헤더 없음, 형식 오류, 서명/만료 실패)
    Unauthorized(String),
    /// 토큰은 유효하지만 계정 상태가 접근을 허용하지 않음
    Forbidden(String),
    /// 인증 판정과 무관한 내부 오류 (저장소 장애 등)
    Internal(AppError),
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let require_verified = self.require_verified;

        Box::pin(async move {
            match authenticate_request(&req, require_verified).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(AuthRejection::Unauthorized(message)) => {
                    log::warn!("인증 실패: {}", message);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": message
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
                Err(AuthRejection::Forbidden(message)) => {
                    log::warn!("접근 거부: {}", message);
                    let response = HttpResponse::Forbidden()
                        .json(serde_json::json!({
                            "error": "access_denied",
                            "message": message
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
                Err(AuthRejection::Internal(e)) => {
                    log::error!("인증 처리 중 내부 오류: {}", e);
                    return Err(e.into());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 JWT를 검증하고 토큰 주체 계정을 로드
async fn authenticate_request(
    req: &ServiceRequest,
    require_verified: bool,
) -> Result<AuthenticatedUser, AuthRejection> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| {
            AuthRejection::Unauthorized("애플리케이션 상태를 찾을 수 없습니다".to_string())
        })?;

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthRejection::Unauthorized("Authorization 헤더가 없습니다".to_string()))?;

    let token = state.token_service
        .extract_bearer_token(auth_header)
        .map_err(|e| AuthRejection::Unauthorized(e.to_string()))?;

    let claims = state.token_service
        .verify_token(token)
        .map_err(|e| AuthRejection::Unauthorized(e.to_string()))?;

    let user = state.user_repo
        .find_by_id(&claims.sub)
        .await
        .map_err(|e| match e {
            // sub가 ObjectId 형식이 아니면 토큰 자체가 위조된 것
            AppError::ValidationError(_) => {
                AuthRejection::Unauthorized("유효하지 않은 토큰입니다".to_string())
            }
            other => AuthRejection::Internal(other),
        })?
        .ok_or_else(|| AuthRejection::Forbidden("계정을 찾을 수 없습니다".to_string()))?;

    if require_verified && !user.verified {
        return Err(AuthRejection::Forbidden(
            "이메일 인증이 완료되지 않은 계정입니다".to_string(),
        ));
    }

    Ok(AuthenticatedUser {
        user_id: claims.sub,
        user,
    })
}
