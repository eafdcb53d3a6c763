//! # 사용자 관련 응답 DTO 모듈
//!
//! 계정 인증 API의 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! 비즈니스 로직 처리 결과를 민감 정보가 제거된 형태로 클라이언트에게 전달합니다.

pub mod user_response;

pub use user_response::*;
