//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 영속)
//! ├── DTOs         - 데이터 전송 객체 (Request/Response)
//! └── Models       - 토큰 클레임, 인증 컨텍스트 등 내부 모델
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB에 저장되는 영속 객체입니다. 계정의 인증 상태와
//! 단일 사용 토큰 필드를 포함합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! 입력 검증(`validator`)과 민감 정보 필터링을 담당합니다.
//!
//! ### [`models`] - 내부 모델
//!
//! JWT 클레임 구조체와 요청 파이프라인에서 사용하는
//! 인증 컨텍스트를 제공합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
