//! # 사용자 관련 요청 DTO 모듈
//!
//! 계정 인증 API의 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.

pub mod auth_request;

pub use auth_request::*;
