use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::domain::entities::users::user::User;

/// 인증 미들웨어를 통과한 요청의 사용자 컨텍스트
///
/// 미들웨어가 JWT 검증과 계정 조회를 마친 뒤 요청 확장에 삽입하며,
/// 핸들러는 추출자를 통해 로드된 사용자 엔터티에 바로 접근합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 토큰 sub 클레임에서 추출된 사용자 ID
    pub user_id: String,

    /// 저장소에서 조회된 사용자 엔터티
    pub user: User,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
