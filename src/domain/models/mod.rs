//! # 도메인 모델 모듈
//!
//! 영속화 대상이 아닌 내부 도메인 모델들을 정의합니다.
//! JWT 클레임 구조와 인증된 요청 컨텍스트가 여기에 속합니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
