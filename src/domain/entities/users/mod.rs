//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 이메일 인증 상태와 단일 사용 토큰 필드를 포함하는 User 엔티티를 제공합니다.

pub mod user;

pub use user::*;
