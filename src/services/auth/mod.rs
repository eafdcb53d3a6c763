//! 인증 관련 서비스 모듈

pub mod password;
pub mod token_service;

pub use password::*;
pub use token_service::*;
