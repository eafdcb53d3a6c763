//! # 서비스 모듈
//!
//! 비즈니스 로직을 담당하는 서비스 계층입니다.
//! 핸들러와 리포지토리 사이에서 도메인 규칙을 집행합니다.

pub mod auth;
pub mod email;
pub mod users;

pub use auth::*;
pub use email::*;
pub use users::*;
