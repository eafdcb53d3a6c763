//! 메일 발송 서비스 설정 모듈
//!
//! MailerSend HTTP API를 통한 트랜잭션 메일 발송 설정을 관리합니다.

use std::env;

/// 메일 발송 설정
///
/// 인증 메일과 비밀번호 재설정 메일은 MailerSend의 템플릿 기반
/// 발송 API를 사용합니다. 수신자에게 전달되는 링크는
/// `{frontend_url}/{경로}?token={토큰}` 형식입니다.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// MailerSend API 토큰
    pub api_token: String,
    /// MailerSend API 베이스 URL
    pub api_url: String,
    /// 발신자 이메일 주소
    pub from_email: String,
    /// 수신자 링크 생성용 프론트엔드 URL
    pub frontend_url: String,
    /// 이메일 인증 메일 템플릿 ID
    pub verify_template_id: String,
    /// 비밀번호 재설정 메일 템플릿 ID
    pub reset_template_id: String,
    /// 메일 본문에 표기되는 지원 문의 주소
    pub support_email: String,
}

impl EmailConfig {
    /// 환경 변수에서 메일 발송 설정을 로드합니다.
    ///
    /// # Environment Variables
    ///
    /// - `MAILERSEND_API_TOKEN`: API 인증 토큰
    /// - `MAILERSEND_API_URL`: API 베이스 URL (기본값: https://api.mailersend.com/v1)
    /// - `MAILERSEND_EMAIL`: 발신자 주소
    /// - `FRONTEND_URL`: 링크 생성용 프론트엔드 URL
    /// - `MAILERSEND_VERIFY_EMAIL_TEMPLATE_ID`: 인증 메일 템플릿
    /// - `MAILERSEND_RESET_PASSWORD_TEMPLATE_ID`: 재설정 메일 템플릿
    /// - `SUPPORT_EMAIL`: 지원 문의 주소
    pub fn from_env() -> Self {
        Self {
            api_token: env::var("MAILERSEND_API_TOKEN").unwrap_or_default(),
            api_url: env::var("MAILERSEND_API_URL")
                .unwrap_or_else(|_| "https://api.mailersend.com/v1".to_string()),
            from_email: env::var("MAILERSEND_EMAIL")
                .unwrap_or_else(|_| "noreply@localhost".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            verify_template_id: env::var("MAILERSEND_VERIFY_EMAIL_TEMPLATE_ID")
                .unwrap_or_default(),
            reset_template_id: env::var("MAILERSEND_RESET_PASSWORD_TEMPLATE_ID")
                .unwrap_or_default(),
            support_email: env::var("SUPPORT_EMAIL")
                .unwrap_or_else(|_| "support@localhost".to_string()),
        }
    }
}
