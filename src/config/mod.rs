//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 애플리케이션 시작 시점에 한 번 읽어
//! 타입이 지정된 구조체로 고정하고, 이후에는 주입된 값만 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경, 비밀번호 해싱 관련 설정
//! - [`auth_config`] - JWT 토큰, 재발송 제한 관련 설정
//! - [`email_config`] - 외부 메일 발송 서비스 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 시작 시점 고정 (Load Once, Inject Everywhere)
//!
//! 서명 비밀키를 포함한 모든 설정은 기동 시 한 번 로드되어
//! 불변 상태로 각 컴포넌트에 주입됩니다. 실행 중 환경 변수를
//! 다시 읽는 경로는 없습니다.
//!
//! ### 3. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_LOGIN_EXPIRATION_DAYS="180"
//! export JWT_SHORT_EXPIRATION_MINUTES="15"
//!
//! # 메일 발송 설정
//! export MAILERSEND_API_TOKEN="your-api-token"
//! export MAILERSEND_EMAIL="noreply@yourdomain.com"
//! export FRONTEND_URL="https://yourdomain.com"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod email_config;

pub use data_config::*;
pub use auth_config::*;
pub use email_config::*;
