//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! `UserRepository` trait가 저장소 추상화를 제공하고,
//! `MongoUserRepository`가 MongoDB 기반 구현을 담당합니다.
//!
//! ## 특징
//!
//! - **trait 기반 추상화**: 서비스 계층은 구현체를 알지 못함
//! - **단일 사용 토큰 소비**: 토큰 필드 대조를 조건으로 하는 원자적 업데이트
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};

/// 사용자 부분 업데이트 명세
///
/// `None`은 해당 필드를 건드리지 않음을 의미합니다.
/// 토큰 필드는 중첩 Option으로, `Some(None)`이 저장된 토큰 제거(null 설정)를,
/// `Some(Some(t))`가 새 토큰 저장을 의미합니다.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub verified: Option<bool>,
    pub password_hash: Option<String>,
    pub verification_token: Option<Option<String>>,
    pub password_reset_token: Option<Option<String>>,
}

impl UserUpdate {
    /// MongoDB `$set` 문서로 변환 (updated_at 갱신 포함)
    pub fn into_set_document(self) -> Document {
        let mut set = doc! { "updated_at": DateTime::now() };

        if let Some(verified) = self.verified {
            set.insert("verified", verified);
        }
        if let Some(password_hash) = self.password_hash {
            set.insert("password_hash", password_hash);
        }
        if let Some(token) = self.verification_token {
            set.insert("verification_token", token.map_or(Bson::Null, Bson::String));
        }
        if let Some(token) = self.password_reset_token {
            set.insert("password_reset_token", token.map_or(Bson::Null, Bson::String));
        }

        set
    }
}

/// 사용자 저장소 추상화
///
/// 모든 조회는 호출 측에서 정규화된 이메일을 전달한다고 가정합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID(ObjectId 16진수 문자열)로 사용자 조회
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 생성 (이메일 중복 시 ConflictError)
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 사용자 필드 부분 업데이트, 업데이트된 문서를 반환
    async fn update_fields(&self, id: &str, update: UserUpdate) -> Result<Option<User>, AppError>;

    /// 저장된 이메일 인증 토큰이 일치하는 경우에만 원자적으로 업데이트
    ///
    /// 토큰 대조와 쓰기가 하나의 조건부 업데이트로 수행되므로,
    /// 같은 토큰을 든 동시 요청 중 하나만 성공할 수 있습니다.
    /// 일치하는 계정이 없으면(이미 소비된 토큰 포함) `None`을 반환합니다.
    async fn consume_verification_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError>;

    /// 저장된 비밀번호 재설정 토큰이 일치하는 경우에만 원자적으로 업데이트
    ///
    /// `consume_verification_token`과 같은 단일 사용 보장을 제공합니다.
    async fn consume_password_reset_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// `users` 컬렉션에 연결된 리포지토리 생성
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            collection: db.get_database().collection::<User>("users"),
        }
    }

    fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 필터와 일치하는 문서를 원자적으로 `$set` 업데이트
    async fn find_and_update(
        &self,
        filter: Document,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(filter, doc! { "$set": update.into_set_document() })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    /// 이메일 유니크 인덱스와 토큰 조회용 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let verification_token_index = IndexModel::builder()
            .keys(doc! { "verification_token": 1 })
            .options(IndexOptions::builder()
                .name("verification_token_idx".to_string())
                .build())
            .build();

        let reset_token_index = IndexModel::builder()
            .keys(doc! { "password_reset_token": 1 })
            .options(IndexOptions::builder()
                .name("password_reset_token_idx".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, verification_token_index, reset_token_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| {
                // 유니크 인덱스와의 경합으로 동시 가입이 중복 키 오류를 낼 수 있음
                if e.to_string().contains("E11000") {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    async fn update_fields(&self, id: &str, update: UserUpdate) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_object_id(id)?;

        self.find_and_update(doc! { "_id": object_id }, update).await
    }

    async fn consume_verification_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError> {
        self.find_and_update(doc! { "verification_token": token }, update).await
    }

    async fn consume_password_reset_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError> {
        self.find_and_update(doc! { "password_reset_token": token }, update).await
    }
}
