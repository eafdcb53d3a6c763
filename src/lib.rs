//! 계정 인증 서비스 백엔드
//!
//! Rust 기반의 계정 인증 및 생명주기 관리 서비스입니다.
//! 회원가입, 이메일 인증, 로그인, 비밀번호 재설정과
//! JWT 토큰 기반 상태 없는 인증을 제공합니다.
//!
//! # Features
//!
//! - **계정 생명주기**: 회원가입 → 이메일 인증 → 로그인 → 비밀번호 재설정
//! - **JWT 인증**: 로그인 토큰(장기)과 인증/재설정 토큰(단기) 발급 및 검증
//! - **단일 사용 토큰**: 인증/재설정 토큰은 저장 필드와 일치해야 하며 사용 즉시 폐기
//! - **비밀번호 보안**: bcrypt 해싱 (환경별 cost 설정)
//! - **요청 제한**: 이메일 단위 고정 윈도우 방식의 재발송 제한
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
