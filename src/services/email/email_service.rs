//! # 트랜잭션 이메일 발송 서비스
//!
//! MailerSend API를 통해 이메일 인증 메일과 비밀번호 재설정 메일을 발송합니다.
//! 서비스 계층은 `EmailService` trait에만 의존하므로
//! 테스트에서는 발송 기록용 구현으로 대체할 수 있습니다.

use async_trait::async_trait;
use serde_json::{json, Value};
use crate::config::EmailConfig;
use crate::errors::errors::AppError;

/// 이메일 발송 추상화
#[async_trait]
pub trait EmailService: Send + Sync {
    /// 이메일 인증 메일 발송
    async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), AppError>;

    /// 비밀번호 재설정 메일 발송
    async fn send_password_reset_email(&self, to: &str, token: &str) -> Result<(), AppError>;
}

/// MailerSend 기반 이메일 발송 클라이언트
pub struct MailerSendClient {
    client: reqwest::Client,
    config: EmailConfig,
}

impl MailerSendClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// 프론트엔드 랜딩 링크 생성
    ///
    /// 토큰은 JWT라 URL 안전 문자로만 구성되지만, 쿼리 파라미터 규칙을
    /// 지키기 위해 항상 인코딩합니다.
    fn action_link(&self, path: &str, token: &str) -> String {
        format!(
            "{}/{}?token={}",
            self.config.frontend_url.trim_end_matches('/'),
            path,
            urlencoding::encode(token)
        )
    }

    /// MailerSend 발송 요청 본문 구성
    fn build_payload(&self, to: &str, template_id: &str, link: String) -> Value {
        json!({
            "from": { "email": self.config.from_email },
            "to": [ { "email": to } ],
            "template_id": template_id,
            "personalization": [
                {
                    "email": to,
                    "data": {
                        "link": link,
                        "support_email": self.config.support_email,
                    }
                }
            ]
        })
    }

    async fn send(&self, payload: Value) -> Result<(), AppError> {
        let url = format!("{}/email", self.config.api_url.trim_end_matches('/'));

        let response = self.client
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이메일 발송 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "이메일 발송 실패 ({}): {}", status, error_text
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl EmailService for MailerSendClient {
    async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), AppError> {
        let link = self.action_link("verify-email", token);
        let payload = self.build_payload(to, &self.config.verify_template_id, link);

        log::info!("이메일 인증 메일 발송: {}", to);
        self.send(payload).await
    }

    async fn send_password_reset_email(&self, to: &str, token: &str) -> Result<(), AppError> {
        let link = self.action_link("reset-password", token);
        let payload = self.build_payload(to, &self.config.reset_template_id, link);

        log::info!("비밀번호 재설정 메일 발송: {}", to);
        self.send(payload).await
    }
}
