//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고,
//! 토큰 주체 계정을 저장소에서 조회하여 요청 컨텍스트에 넣습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰 검증(401)과 계정 상태 확인(403)을 분리해서 판정합니다.
/// 기본값은 이메일 인증이 완료된 계정만 통과시키는 모드입니다.
pub struct AuthMiddleware {
    /// 이메일 인증 완료 계정만 허용할지 여부
    require_verified: bool,
}

impl AuthMiddleware {
    pub fn new(require_verified: bool) -> Self {
        Self { require_verified }
    }

    /// 인증 완료 계정만 허용하는 미들웨어 생성
    pub fn required() -> Self {
        Self::new(true)
    }

    /// 미인증 계정도 허용하는 미들웨어 생성
    ///
    /// 토큰과 계정 실존 여부는 여전히 검증합니다.
    pub fn allow_unverified() -> Self {
        Self::new(false)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            require_verified: self.require_verified,
        }))
    }
}
