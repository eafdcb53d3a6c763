//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 장기 로그인 토큰과 단기 토큰(이메일 인증, 비밀번호 재설정)의
//! 생성과 검증을 담당합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    domain::entities::users::user::User,
};
use crate::domain::models::token::token::{TokenClaims, TokenError};
use crate::errors::errors::AppError;

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 서명 비밀키와 만료 정책은
/// 기동 시 로드된 `JwtConfig`로 주입되며 이후 변경되지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn user_id(user: &User) -> Result<String, AppError> {
        user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, AppError> {
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        encode(&header, claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 로그인 세션용 장기 토큰 생성
    ///
    /// iss/aud/nbf 클레임을 포함하며 발급 시각 기준 180일 뒤 만료됩니다.
    /// jti는 UUID v4로 매 발급마다 고유합니다.
    pub fn generate_login_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.config.login_expiration_days);

        let claims = TokenClaims {
            sub: Self::user_id(user)?,
            iss: Some(self.config.issuer.clone()),
            aud: Some(self.config.audience.clone()),
            iat: now.timestamp(),
            nbf: Some(now.timestamp()),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        self.sign(&claims)
    }

    /// 이메일 인증/비밀번호 재설정용 단기 토큰 생성
    ///
    /// iss/aud/nbf 없이 sub, iat, exp(발급 후 15분), jti만 포함합니다.
    pub fn generate_short_lived_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.short_expiration_minutes);

        let claims = TokenClaims {
            sub: Self::user_id(user)?,
            iss: None,
            aud: None,
            iat: now.timestamp(),
            nbf: None,
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        self.sign(&claims)
    }

    /// JWT 토큰 검증 및 클레임 추출 (현재 시각 기준)
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.verify_token_at(token, Utc::now())
    }

    /// 주어진 시각 기준으로 토큰 검증
    ///
    /// 서명과 형식을 먼저 확인한 뒤 시각 경계를 직접 판정합니다.
    /// 토큰은 `nbf <= now <= exp` 구간에서 유효합니다 (경계 포함).
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());

        // 시각 판정은 아래에서 직접 수행하므로 라이브러리 검증은 서명만 맡김
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let claims = decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| TokenError::Invalid)?;

        let now_ts = now.timestamp();

        if let Some(nbf) = claims.nbf {
            if now_ts < nbf {
                return Err(TokenError::NotYetValid);
            }
        }

        if now_ts > claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
        }
    }
}
