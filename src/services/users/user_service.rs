//! # 사용자 계정 생명주기 서비스
//!
//! 회원가입부터 이메일 인증, 로그인, 비밀번호 재설정까지
//! 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 상태 모델
//!
//! ```text
//! ┌──────────┐  signup   ┌─────────────┐  verify-email  ┌──────────┐
//! │  (없음)   ├──────────►│ 미인증 계정   ├───────────────►│ 인증 완료  │
//! └──────────┘           └──────┬──────┘                └────┬─────┘
//!                               │ resend-verification        │ login
//!                               ▼                            ▼
//!                         새 토큰 재발급                  JWT 세션 발급
//! ```
//!
//! ## 토큰 단일 사용 보장
//!
//! 이메일 인증 토큰과 비밀번호 재설정 토큰은 서명 검증만으로는 소비되지 않습니다.
//! 저장된 필드 값과 일치할 때만 유효하며, 사용 즉시 필드가 비워지므로
//! 같은 토큰의 재사용은 항상 실패합니다.

use std::sync::Arc;
use crate::{
    domain::dto::users::request::auth_request::{LoginRequest, SignupRequest},
    domain::dto::users::response::user_response::{LoginResponse, SignupResponse, UserResponse},
    domain::entities::users::user::User,
    repositories::users::user_repo::{UserRepository, UserUpdate},
    services::auth::password::{hash_password, verify_password},
    services::auth::token_service::TokenService,
    services::email::email_service::EmailService,
    utils::string_utils::normalize_email,
};
use crate::domain::models::token::token::TokenError;
use crate::errors::errors::AppError;

/// 사용자 계정 생명주기 서비스
///
/// 저장소와 이메일 발송은 trait로 주입받아 테스트에서 대체 가능합니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    email_service: Arc<dyn EmailService>,
    token_service: TokenService,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        email_service: Arc<dyn EmailService>,
        token_service: TokenService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            email_service,
            token_service,
            bcrypt_cost,
        }
    }

    /// 회원가입
    ///
    /// 계정을 미인증 상태로 생성하고 이메일 인증 토큰을 저장한 뒤
    /// 인증 메일을 발송합니다.
    ///
    /// # 에러
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::ExternalServiceError` - 인증 메일 발송 실패
    ///   (계정은 유지되며 저장된 토큰만 제거되어 재발송 경로가 열려 있음)
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        let start_time = std::time::Instant::now();
        let email = normalize_email(&request.email);

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash_password(&request.password, self.bcrypt_cost)?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(email.clone(), password_hash);
        let created = self.user_repo.create(user).await?;
        let user_id = Self::require_id(&created)?;

        self.issue_verification_email(&created, &user_id).await?;

        log::info!("회원가입 완료: {} ({:?})", email, start_time.elapsed());

        Ok(SignupResponse {
            user: UserResponse::from(&created),
            message: "인증 메일이 발송되었습니다. 이메일을 확인해주세요".to_string(),
        })
    }

    /// 로그인
    ///
    /// 계정 상태 확인이 자격 증명 검증보다 먼저 수행됩니다:
    /// 미등록 이메일은 404, 미인증 계정은 403, 비밀번호 불일치는 401입니다.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let email = normalize_email(&request.email);

        let user = self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("등록되지 않은 이메일입니다".to_string()))?;

        if !user.verified {
            return Err(AppError::AuthorizationError(
                "이메일 인증이 완료되지 않은 계정입니다".to_string(),
            ));
        }

        let verify_start = std::time::Instant::now();
        let is_valid = verify_password(&request.password, &user.password_hash);
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string(),
            ));
        }

        let token = self.token_service.generate_login_token(&user)?;

        log::info!("로그인 성공: {}", email);

        Ok(LoginResponse {
            user: UserResponse::from(&user),
            token,
        })
    }

    /// 이메일 인증 완료
    ///
    /// 토큰 서명/만료 검증 후 저장된 인증 토큰과 대조합니다.
    /// 대조와 상태 변경은 하나의 조건부 업데이트이므로
    /// 같은 토큰을 든 동시 요청 중 하나만 성공합니다.
    pub async fn verify_email(&self, token: &str) -> Result<(), AppError> {
        self.token_service
            .verify_token(token)
            .map_err(Self::token_error_to_auth)?;

        let user = self.user_repo
            .consume_verification_token(token, UserUpdate {
                verified: Some(true),
                verification_token: Some(None),
                ..Default::default()
            })
            .await?
            .ok_or_else(|| {
                AppError::NotFound("유효하지 않거나 이미 사용된 인증 토큰입니다".to_string())
            })?;

        log::info!("이메일 인증 완료: {}", user.email);

        Ok(())
    }

    /// 인증 메일 재발송
    ///
    /// 새 토큰이 기존 토큰을 덮어쓰므로 이전 인증 링크는 즉시 무효화됩니다.
    ///
    /// # 에러
    ///
    /// * `AppError::NotFound` - 등록되지 않은 이메일
    /// * `AppError::ValidationError` - 이미 인증이 완료된 계정
    pub async fn resend_verification(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let user = self.user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("등록되지 않은 이메일입니다".to_string()))?;

        if user.verified {
            return Err(AppError::ValidationError("이미 인증된 계정입니다".to_string()));
        }

        let user_id = Self::require_id(&user)?;
        self.issue_verification_email(&user, &user_id).await?;

        log::info!("인증 메일 재발송: {}", email);

        Ok(())
    }

    /// 비밀번호 재설정 요청
    ///
    /// 계정 존재 여부를 응답으로 구분할 수 없도록, 미등록 이메일이면
    /// 아무 작업 없이 성공으로 처리합니다.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            log::info!("미등록 이메일의 비밀번호 재설정 요청 무시");
            return Ok(());
        };

        let user_id = Self::require_id(&user)?;
        let token = self.token_service.generate_short_lived_token(&user)?;

        self.user_repo
            .update_fields(&user_id, UserUpdate {
                password_reset_token: Some(Some(token.clone())),
                ..Default::default()
            })
            .await?;

        if let Err(e) = self.email_service.send_password_reset_email(&user.email, &token).await {
            log::error!("비밀번호 재설정 메일 발송 실패: {}", e);

            self.user_repo
                .update_fields(&user_id, UserUpdate {
                    password_reset_token: Some(None),
                    ..Default::default()
                })
                .await?;

            return Err(AppError::InternalError(
                "비밀번호 재설정 메일 발송에 실패했습니다".to_string(),
            ));
        }

        log::info!("비밀번호 재설정 메일 발송: {}", email);

        Ok(())
    }

    /// 비밀번호 재설정 완료
    ///
    /// 저장된 재설정 토큰과 일치해야만 진행됩니다.
    /// 새 해시 저장과 토큰 제거가 토큰 대조를 조건으로 하는 단일 쓰기이므로,
    /// 같은 토큰으로 동시에 재설정을 시도해도 한 건만 성공합니다.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        self.token_service
            .verify_token(token)
            .map_err(Self::token_error_to_auth)?;

        let password_hash = hash_password(new_password, self.bcrypt_cost)?;

        let user = self.user_repo
            .consume_password_reset_token(token, UserUpdate {
                password_hash: Some(password_hash),
                password_reset_token: Some(None),
                ..Default::default()
            })
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않거나 이미 사용된 재설정 토큰입니다".to_string())
            })?;

        log::info!("비밀번호 재설정 완료: {}", user.email);

        Ok(())
    }

    /// 본인 계정 조회
    ///
    /// 호출자는 자신의 계정만 조회할 수 있습니다.
    /// 다른 계정 ID를 요청하면 존재 여부 확인 전에 거부합니다.
    pub async fn get_account(
        &self,
        requested_id: &str,
        caller_id: &str,
    ) -> Result<UserResponse, AppError> {
        if requested_id != caller_id {
            log::warn!("타 계정 조회 시도: 호출자 {} -> 대상 {}", caller_id, requested_id);
            return Err(AppError::AuthorizationError(
                "본인 계정만 조회할 수 있습니다".to_string(),
            ));
        }

        self.get_user_by_id(requested_id).await
    }

    /// ID로 사용자 조회
    async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user = self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 인증 토큰 발급, 저장, 메일 발송을 하나의 흐름으로 처리
    ///
    /// 발송 실패 시 저장된 토큰을 제거하여 미완료 상태의 토큰이 남지 않게 합니다.
    async fn issue_verification_email(&self, user: &User, user_id: &str) -> Result<(), AppError> {
        let token = self.token_service.generate_short_lived_token(user)?;

        self.user_repo
            .update_fields(user_id, UserUpdate {
                verification_token: Some(Some(token.clone())),
                ..Default::default()
            })
            .await?;

        if let Err(e) = self.email_service.send_verification_email(&user.email, &token).await {
            log::error!("인증 메일 발송 실패: {}", e);

            self.user_repo
                .update_fields(user_id, UserUpdate {
                    verification_token: Some(None),
                    ..Default::default()
                })
                .await?;

            return Err(AppError::ExternalServiceError(
                "인증 메일 발송에 실패했습니다. 잠시 후 재발송을 시도해주세요".to_string(),
            ));
        }

        Ok(())
    }

    fn require_id(user: &User) -> Result<String, AppError> {
        user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
    }

    fn token_error_to_auth(e: TokenError) -> AppError {
        AppError::AuthenticationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;
    use crate::config::JwtConfig;
    use crate::repositories::users::memory_repo::InMemoryUserRepository;

    /// 발송 호출을 기록하는 테스트용 이메일 서비스
    #[derive(Default)]
    struct RecordingEmailService {
        fail: std::sync::atomic::AtomicBool,
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingEmailService {
        fn set_failing(&self, fail: bool) {
            self.fail.store(fail, std::sync::atomic::Ordering::SeqCst);
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        fn last_sent(&self) -> Option<(String, String, String)> {
            self.sent.lock().unwrap().last().cloned()
        }

        fn record(&self, kind: &str, to: &str, token: &str) -> Result<(), AppError> {
            if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(AppError::ExternalServiceError("발송 실패".to_string()));
            }
            self.sent.lock().unwrap().push((
                kind.to_string(),
                to.to_string(),
                token.to_string(),
            ));
            Ok(())
        }
    }

    #[async_trait]
    impl EmailService for RecordingEmailService {
        async fn send_verification_email(&self, to: &str, token: &str) -> Result<(), AppError> {
            self.record("verify", to, token)
        }

        async fn send_password_reset_email(&self, to: &str, token: &str) -> Result<(), AppError> {
            self.record("reset", to, token)
        }
    }

    struct TestContext {
        service: UserService,
        repo: Arc<InMemoryUserRepository>,
        email: Arc<RecordingEmailService>,
    }

    fn context() -> TestContext {
        let repo = Arc::new(InMemoryUserRepository::new());
        let email = Arc::new(RecordingEmailService::default());
        let token_service = TokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            login_expiration_days: 180,
            short_expiration_minutes: 15,
            issuer: "account-auth-service".to_string(),
            audience: "account-auth-client".to_string(),
        });

        let service = UserService::new(
            repo.clone(),
            email.clone(),
            token_service,
            4,
        );

        TestContext { service, repo, email }
    }

    fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "Str0ng&Pass".to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_signup_creates_unverified_account_with_token() {
        let ctx = context();

        let response = ctx.service.signup(signup_request("alice@example.com")).await.unwrap();
        assert_eq!(response.user.email, "alice@example.com");

        let stored = ctx.repo.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert!(!stored.verified);
        assert!(stored.verification_token.is_some());

        let (kind, to, token) = ctx.email.last_sent().unwrap();
        assert_eq!(kind, "verify");
        assert_eq!(to, "alice@example.com");
        assert_eq!(Some(token), stored.verification_token);
    }

    #[actix_web::test]
    async fn test_signup_normalizes_email_and_rejects_duplicates() {
        let ctx = context();

        ctx.service.signup(signup_request("  Alice@Example.COM ")).await.unwrap();
        assert!(ctx.repo.find_by_email("alice@example.com").await.unwrap().is_some());

        let duplicate = ctx.service.signup(signup_request("ALICE@example.com")).await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_signup_send_failure_keeps_account_clears_token() {
        let ctx = context();
        ctx.email.set_failing(true);

        let result = ctx.service.signup(signup_request("bob@example.com")).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));

        // 계정은 남고 토큰만 비워져 재발송 경로가 열려 있어야 함
        let stored = ctx.repo.find_by_email("bob@example.com").await.unwrap().unwrap();
        assert!(stored.verification_token.is_none());
        assert!(!stored.verified);

        ctx.email.set_failing(false);
        ctx.service.resend_verification("bob@example.com").await.unwrap();

        let stored = ctx.repo.find_by_email("bob@example.com").await.unwrap().unwrap();
        assert!(stored.verification_token.is_some());
    }

    #[actix_web::test]
    async fn test_verify_email_is_single_use() {
        let ctx = context();
        ctx.service.signup(signup_request("carol@example.com")).await.unwrap();

        let (_, _, token) = ctx.email.last_sent().unwrap();

        ctx.service.verify_email(&token).await.unwrap();

        let stored = ctx.repo.find_by_email("carol@example.com").await.unwrap().unwrap();
        assert!(stored.verified);
        assert!(stored.verification_token.is_none());

        // 서명은 여전히 유효하지만 저장 필드와 일치하지 않으므로 재사용 불가
        let reuse = ctx.service.verify_email(&token).await;
        assert!(matches!(reuse, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_verify_email_rejects_garbage_token() {
        let ctx = context();

        let result = ctx.service.verify_email("not-a-jwt").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_resend_invalidates_previous_token() {
        let ctx = context();
        ctx.service.signup(signup_request("dave@example.com")).await.unwrap();
        let (_, _, first_token) = ctx.email.last_sent().unwrap();

        ctx.service.resend_verification("dave@example.com").await.unwrap();
        let (_, _, second_token) = ctx.email.last_sent().unwrap();
        assert_ne!(first_token, second_token);

        // 이전 링크는 저장 필드와 더 이상 일치하지 않음
        let stale = ctx.service.verify_email(&first_token).await;
        assert!(matches!(stale, Err(AppError::NotFound(_))));

        ctx.service.verify_email(&second_token).await.unwrap();
    }

    #[actix_web::test]
    async fn test_resend_rejects_verified_and_unknown_accounts() {
        let ctx = context();
        ctx.service.signup(signup_request("erin@example.com")).await.unwrap();
        let (_, _, token) = ctx.email.last_sent().unwrap();
        ctx.service.verify_email(&token).await.unwrap();

        let verified = ctx.service.resend_verification("erin@example.com").await;
        assert!(matches!(verified, Err(AppError::ValidationError(_))));

        let unknown = ctx.service.resend_verification("nobody@example.com").await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_login_full_flow() {
        let ctx = context();
        ctx.service.signup(signup_request("frank@example.com")).await.unwrap();

        // 미인증 상태 로그인은 403
        let unverified = ctx.service.login(login_request("frank@example.com", "Str0ng&Pass")).await;
        assert!(matches!(unverified, Err(AppError::AuthorizationError(_))));

        let (_, _, token) = ctx.email.last_sent().unwrap();
        ctx.service.verify_email(&token).await.unwrap();

        // 비밀번호 불일치는 401
        let bad_password = ctx.service.login(login_request("frank@example.com", "Wr0ng&Pass")).await;
        assert!(matches!(bad_password, Err(AppError::AuthenticationError(_))));

        // 미등록 이메일은 404
        let unknown = ctx.service.login(login_request("ghost@example.com", "Str0ng&Pass")).await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));

        // 대소문자/공백이 달라도 같은 계정으로 로그인
        let response = ctx.service
            .login(login_request(" FRANK@example.com ", "Str0ng&Pass"))
            .await
            .unwrap();
        assert_eq!(response.user.email, "frank@example.com");
        assert!(!response.token.is_empty());
    }

    #[actix_web::test]
    async fn test_password_reset_request_silent_for_unknown_email() {
        let ctx = context();

        ctx.service.request_password_reset("unknown@example.com").await.unwrap();
        assert_eq!(ctx.email.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_password_reset_full_flow() {
        let ctx = context();
        ctx.service.signup(signup_request("grace@example.com")).await.unwrap();
        let (_, _, verify_token) = ctx.email.last_sent().unwrap();
        ctx.service.verify_email(&verify_token).await.unwrap();

        ctx.service.request_password_reset("grace@example.com").await.unwrap();
        let (kind, _, reset_token) = ctx.email.last_sent().unwrap();
        assert_eq!(kind, "reset");

        ctx.service.reset_password(&reset_token, "N3w&Secret").await.unwrap();

        // 새 비밀번호로 로그인 가능, 이전 비밀번호는 거부
        ctx.service.login(login_request("grace@example.com", "N3w&Secret")).await.unwrap();
        let old = ctx.service.login(login_request("grace@example.com", "Str0ng&Pass")).await;
        assert!(matches!(old, Err(AppError::AuthenticationError(_))));

        // 재설정 토큰은 단일 사용
        let reuse = ctx.service.reset_password(&reset_token, "An0ther&Pass").await;
        assert!(matches!(reuse, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_password_reset_send_failure_clears_token() {
        let ctx = context();
        ctx.service.signup(signup_request("heidi@example.com")).await.unwrap();
        ctx.email.set_failing(true);

        let result = ctx.service.request_password_reset("heidi@example.com").await;
        assert!(matches!(result, Err(AppError::InternalError(_))));

        let stored = ctx.repo.find_by_email("heidi@example.com").await.unwrap().unwrap();
        assert!(stored.password_reset_token.is_none());
    }

    #[actix_web::test]
    async fn test_concurrent_reset_consumes_token_exactly_once() {
        let ctx = context();
        ctx.service.signup(signup_request("judy@example.com")).await.unwrap();
        let (_, _, verify_token) = ctx.email.last_sent().unwrap();
        ctx.service.verify_email(&verify_token).await.unwrap();

        ctx.service.request_password_reset("judy@example.com").await.unwrap();
        let (_, _, reset_token) = ctx.email.last_sent().unwrap();

        // 같은 토큰을 든 두 요청이 동시에 진행돼도 저장 필드 대조가
        // 쓰기 시점에 이뤄지므로 정확히 한 건만 성공해야 함
        let (first, second) = futures_util::future::join(
            ctx.service.reset_password(&reset_token, "N3w&Secret"),
            ctx.service.reset_password(&reset_token, "0ther&Pass"),
        )
        .await;

        assert!(first.is_ok() != second.is_ok(), "{:?} / {:?}", first, second);

        // 성공한 쪽의 비밀번호만 유효
        let winner = if first.is_ok() { "N3w&Secret" } else { "0ther&Pass" };
        ctx.service.login(login_request("judy@example.com", winner)).await.unwrap();
    }

    #[actix_web::test]
    async fn test_get_account_owner_only() {
        let ctx = context();
        let response = ctx.service.signup(signup_request("ivan@example.com")).await.unwrap();
        let own_id = response.user.id;

        let found = ctx.service.get_account(&own_id, &own_id).await.unwrap();
        assert_eq!(found.email, "ivan@example.com");

        let missing = ctx.service.get_account("ffffffffffffffffffffffff", "ffffffffffffffffffffffff").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_get_account_rejects_other_ids_before_lookup() {
        let ctx = context();
        let alice = ctx.service.signup(signup_request("alice@example.com")).await.unwrap();
        let bob = ctx.service.signup(signup_request("bob@example.com")).await.unwrap();

        // 존재하는 타 계정도, 존재하지 않는 ID도 동일하게 403
        let other = ctx.service.get_account(&bob.user.id, &alice.user.id).await;
        assert!(matches!(other, Err(AppError::AuthorizationError(_))));

        let ghost = ctx.service.get_account("ffffffffffffffffffffffff", &alice.user.id).await;
        assert!(matches!(ghost, Err(AppError::AuthorizationError(_))));
    }
}
