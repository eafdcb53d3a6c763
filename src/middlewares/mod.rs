//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증
//! - Bearer 토큰 추출 및 검증
//! - 계정 실존 여부와 이메일 인증 상태 확인
//! - 사용자 정보를 request extension에 저장
//!
//! ### 2. 재발송 속도 제한기 (RateLimiter)
//! - 고정 윈도우 방식의 키별 호출 횟수 제한
//! - 인증 메일 재발송 남용 방지
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::auth_middleware::AuthMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/users")
//!             .wrap(AuthMiddleware::required())
//!             .route("/{id}", web::get().to(get_user))
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;
pub mod rate_limit;

pub use auth_middleware::AuthMiddleware;
pub use rate_limit::RateLimiter;
