//! 애플리케이션 공유 상태
//!
//! 기동 시점에 구성되는 서비스와 저장소 의존성의 묶음입니다.
//! `web::Data<AppState>`로 주입되어 핸들러와 미들웨어가 공유합니다.

use std::sync::Arc;
use crate::middlewares::rate_limit::RateLimiter;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::services::users::user_service::UserService;

pub struct AppState {
    /// 계정 생명주기 서비스
    pub user_service: Arc<UserService>,

    /// JWT 발급/검증 서비스 (미들웨어가 직접 사용)
    pub token_service: TokenService,

    /// 사용자 저장소 (미들웨어의 계정 조회용)
    pub user_repo: Arc<dyn UserRepository>,

    /// 인증 메일 재발송 속도 제한기
    pub resend_guard: RateLimiter,
}
