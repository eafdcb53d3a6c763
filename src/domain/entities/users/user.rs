//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/패스워드 기반 인증과 계정 생명주기 상태를 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// `verification_token`과 `password_reset_token`은 단일 사용 조회 키입니다.
/// 새 토큰 발급 시 기존 값을 덮어쓰고, 사용 성공 또는 발송 실패 시
/// 비워집니다. 두 필드와 비밀번호 해시는 API 응답에 노출되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique, 정규화되어 저장됨: trim + 소문자)
    pub email: String,
    /// 해시된 비밀번호
    pub password_hash: String,
    /// 이메일 인증 여부
    pub verified: bool,
    /// 대기 중인 이메일 인증 토큰 (없으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    /// 대기 중인 비밀번호 재설정 토큰 (없으면 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_reset_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이메일 인증이 필요한 상태(`verified: false`)로 시작됩니다.
    /// 이메일은 호출 측에서 정규화되어 전달되어야 합니다.
    pub fn new(email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            password_hash,
            verified: false,
            verification_token: None,
            password_reset_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
