//! # HTTP 핸들러 모듈
//!
//! API 엔드포인트의 요청 처리 함수들을 기능별로 묶어 제공합니다.
//! 핸들러는 입력 검증과 HTTP 상태 매핑만 담당하고,
//! 비즈니스 규칙은 서비스 계층에 위임합니다.

pub mod auth;
pub mod users;
