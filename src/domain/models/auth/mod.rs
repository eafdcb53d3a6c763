//! 인증 컨텍스트 모델 모듈

pub mod authenticated_user;

pub use authenticated_user::*;
