//! JWT 클레임 구조와 토큰 검증 오류 정의
//!
//! 로그인 토큰과 단기 토큰(이메일 인증, 비밀번호 재설정)이
//! 같은 클레임 구조를 공유하며, 선택 클레임은 직렬화 시 생략됩니다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT 페이로드 클레임
///
/// 시각 클레임(iat, nbf, exp)은 Unix epoch 초 단위입니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// 토큰 주체 (사용자 ID)
    pub sub: String,

    /// 발급자 (로그인 토큰에만 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// 대상 (로그인 토큰에만 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// 발급 시각
    pub iat: i64,

    /// 유효 시작 시각 (로그인 토큰에만 포함)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// 만료 시각
    pub exp: i64,

    /// 토큰 고유 식별자 (UUID v4)
    pub jti: String,
}

/// 토큰 검증 실패 사유
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// 서명 불일치, 형식 오류 등 복구 불가능한 손상
    #[error("유효하지 않은 토큰입니다")]
    Invalid,

    /// exp 경과
    #[error("만료된 토큰입니다")]
    Expired,

    /// nbf 이전 사용 시도
    #[error("아직 유효하지 않은 토큰입니다")]
    NotYetValid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_claims_omitted_from_json() {
        let claims = TokenClaims {
            sub: "user-1".to_string(),
            iss: None,
            aud: None,
            iat: 1_700_000_000,
            nbf: None,
            exp: 1_700_000_900,
            jti: "jti-1".to_string(),
        };

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("iss"));
        assert!(!json.contains("aud"));
        assert!(!json.contains("nbf"));
        assert!(json.contains("\"sub\":\"user-1\""));
    }

    #[test]
    fn test_full_claims_round_trip() {
        let claims = TokenClaims {
            sub: "user-2".to_string(),
            iss: Some("account-auth-service".to_string()),
            aud: Some("account-auth-client".to_string()),
            iat: 1_700_000_000,
            nbf: Some(1_700_000_000),
            exp: 1_715_552_000,
            jti: "jti-2".to_string(),
        };

        let json = serde_json::to_string(&claims).unwrap();
        let parsed: TokenClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, claims);
    }
}
