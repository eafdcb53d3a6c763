//! # Authentication Configuration Module
//!
//! JWT 토큰과 재발송 제한 관련 설정을 관리하는 모듈입니다.
//!
//! 서명 비밀키는 애플리케이션 시작 시점에 한 번 로드되어
//! `TokenService`에 불변 상태로 주입됩니다. 실행 중에 환경 변수를
//! 다시 읽거나 전역 상태를 참조하는 경로는 없습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_LOGIN_EXPIRATION_DAYS="180"
//! export JWT_SHORT_EXPIRATION_MINUTES="15"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정
///
/// 토큰 서명 비밀키와 용도별 만료 시간을 관리합니다.
/// 로그인 토큰(장기)과 이메일 인증/비밀번호 재설정 토큰(단기)이
/// 같은 비밀키로 서명되며 만료 시간만 다릅니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 로그인 토큰 만료 시간 (일 단위)
    pub login_expiration_days: i64,
    /// 인증/재설정 토큰 만료 시간 (분 단위)
    pub short_expiration_minutes: i64,
    /// 로그인 토큰의 `iss` 클레임
    pub issuer: String,
    /// 로그인 토큰의 `aud` 클레임
    pub audience: String,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: 서명 비밀키 (미설정 시 개발용 기본값, 경고 로그 출력)
    /// - `JWT_LOGIN_EXPIRATION_DAYS`: 로그인 토큰 만료 (기본값: 180일)
    /// - `JWT_SHORT_EXPIRATION_MINUTES`: 단기 토큰 만료 (기본값: 15분)
    /// - `JWT_ISSUER` / `JWT_AUDIENCE`: 로그인 토큰의 발급자/대상 클레임
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        });

        let login_expiration_days = env::var("JWT_LOGIN_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "180".to_string())
            .parse()
            .unwrap_or(180);

        let short_expiration_minutes = env::var("JWT_SHORT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15);

        let issuer = env::var("JWT_ISSUER")
            .unwrap_or_else(|_| "account-auth-service".to_string());

        let audience = env::var("JWT_AUDIENCE")
            .unwrap_or_else(|_| "account-auth-client".to_string());

        Self {
            secret,
            login_expiration_days,
            short_expiration_minutes,
            issuer,
            audience,
        }
    }
}

/// 인증 메일 재발송 제한 설정
///
/// 이메일 단위 고정 윈도우 방식의 요청 제한입니다.
/// 서버 전역 IP 단위 제한(governor)과는 별개로 동작합니다.
#[derive(Debug, Clone)]
pub struct ResendLimitConfig {
    /// 윈도우 내 허용 요청 수
    pub limit: u32,
    /// 윈도우 길이 (초 단위)
    pub window_secs: i64,
}

impl ResendLimitConfig {
    /// 환경 변수에서 재발송 제한 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `RESEND_LIMIT`: 윈도우 내 허용 횟수 (기본값: 3)
    /// - `RESEND_WINDOW_SECS`: 윈도우 길이 (기본값: 300초 = 5분)
    pub fn from_env() -> Self {
        let limit = env::var("RESEND_LIMIT")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3);

        let window_secs = env::var("RESEND_WINDOW_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);

        Self { limit, window_secs }
    }
}
