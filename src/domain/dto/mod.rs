//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의하며,
//! `validator`를 통한 입력 검증과 민감 정보 필터링을 담당합니다.

pub mod users;

pub use users::*;
