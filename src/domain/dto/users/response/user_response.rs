//! 사용자 응답 DTO
//!
//! API 응답에 노출되는 사용자 표현입니다. 비밀번호 해시와
//! 인증/재설정 토큰 필드는 어떤 응답에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 민감 정보가 제거된 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub id: String,
    /// 사용자 이메일
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserResponse,
    pub message: String,
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    /// 로그인 JWT (Bearer 토큰)
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_user_response_excludes_sensitive_fields() {
        let mut user = User::new("alice@example.com".to_string(), "bcrypt-hash".to_string());
        user.id = Some(ObjectId::new());
        user.verification_token = Some("pending-token".to_string());

        let response = UserResponse::from(&user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("bcrypt-hash"));
        assert!(!json.contains("pending-token"));
    }
}
