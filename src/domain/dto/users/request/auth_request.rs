//! 계정 인증 요청 DTO
//!
//! 회원가입, 로그인, 이메일 인증, 비밀번호 재설정을 위한
//! HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 비밀번호에 허용되는 특수 문자 집합
const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&#";

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (8-128자, 대소문자+숫자+특수문자 포함)
    #[validate(length(
        min = 8,
        max = 128,
        message = "비밀번호는 8-128자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 이메일만 포함하는 요청 DTO
///
/// 인증 메일 재발송과 비밀번호 재설정 요청에서 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    /// 대상 계정의 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 완료 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// 재설정 메일로 전달된 토큰
    #[validate(length(min = 1, message = "토큰은 필수입니다"))]
    pub token: String,

    /// 새 비밀번호 (8-128자, 대소문자+숫자+특수문자 포함)
    #[validate(length(
        min = 8,
        max = 128,
        message = "비밀번호는 8-128자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 이메일 인증 쿼리 파라미터
///
/// `GET /verify-email?token=...` 형식으로 전달됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyEmailQuery {
    pub token: String,
}

/// 비밀번호 보안 강도 검증
///
/// 대문자, 소문자, 숫자, 특수문자(@$!%*?&#)를 각각 하나 이상 포함해야 하며,
/// 공백과 "password" 문자열은 허용하지 않습니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if !(has_uppercase && has_lowercase && has_digit && has_special) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자, 특수문자를 포함해야 합니다".into()));
    }

    if password.chars().any(|c| c.is_whitespace()) {
        return Err(ValidationError::new("password_whitespace")
            .with_message("비밀번호에 공백을 사용할 수 없습니다".into()));
    }

    if password.to_lowercase().contains("password") {
        return Err(ValidationError::new("password_literal")
            .with_message("비밀번호에 'password'를 포함할 수 없습니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_signup_request() {
        assert!(signup("user@example.com", "Str0ng&Pass").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(signup("not-an-email", "Str0ng&Pass").validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(signup("user@example.com", "S0&a").validate().is_err());
    }

    #[test]
    fn test_password_missing_character_classes() {
        // 대문자 없음
        assert!(signup("user@example.com", "weak&pass1").validate().is_err());
        // 숫자 없음
        assert!(signup("user@example.com", "Weak&Passw").validate().is_err());
        // 특수문자 없음
        assert!(signup("user@example.com", "WeakPass01").validate().is_err());
    }

    #[test]
    fn test_password_with_whitespace_rejected() {
        assert!(signup("user@example.com", "Str0ng& Pass").validate().is_err());
    }

    #[test]
    fn test_password_containing_literal_rejected() {
        assert!(signup("user@example.com", "MyPassword1!").validate().is_err());
        assert!(signup("user@example.com", "PASSWORD&1ab").validate().is_err());
    }

    #[test]
    fn test_reset_password_request_validation() {
        let valid = ResetPasswordRequest {
            token: "some-token".to_string(),
            password: "N3w&Secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_token = ResetPasswordRequest {
            token: "".to_string(),
            password: "N3w&Secret".to_string(),
        };
        assert!(empty_token.validate().is_err());
    }
}
