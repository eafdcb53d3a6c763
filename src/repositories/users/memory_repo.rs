//! 테스트용 인메모리 사용자 리포지토리
//!
//! 서비스 계층 테스트에서 MongoDB 없이 저장소 동작을 재현합니다.
//! 이메일 유니크 제약과 토큰 소비의 원자성을 실제 구현과 동일하게 유지합니다.

use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::entities::users::user::User,
    errors::errors::AppError,
};
use super::user_repo::{UserRepository, UserUpdate};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply_update(user: &mut User, update: UserUpdate) {
        if let Some(verified) = update.verified {
            user.verified = verified;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(token) = update.verification_token {
            user.verification_token = token;
        }
        if let Some(token) = update.password_reset_token {
            user.password_reset_token = token;
        }
        user.updated_at = DateTime::now();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        Ok(self.users.lock().unwrap()
            .iter()
            .find(|u| u.id == Some(object_id))
            .cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update_fields(&self, id: &str, update: UserUpdate) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id == Some(object_id)) {
            Some(user) => {
                Self::apply_update(user, update);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn consume_verification_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError> {
        // 대조와 쓰기를 같은 잠금 구간에서 수행
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.verification_token.as_deref() == Some(token)) {
            Some(user) => {
                Self::apply_update(user, update);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn consume_password_reset_token(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.password_reset_token.as_deref() == Some(token)) {
            Some(user) => {
                Self::apply_update(user, update);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_assigns_id_and_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(User::new("a@example.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        assert!(created.id.is_some());

        let duplicate = repo
            .create(User::new("a@example.com".to_string(), "hash2".to_string()))
            .await;
        assert!(matches!(duplicate, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_token_store_and_clear() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new("b@example.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let id = created.id_string().unwrap();

        repo.update_fields(&id, UserUpdate {
            verification_token: Some(Some("tok-1".to_string())),
            ..Default::default()
        })
        .await
        .unwrap();

        let user = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(user.verification_token.as_deref(), Some("tok-1"));

        repo.update_fields(&id, UserUpdate {
            verified: Some(true),
            verification_token: Some(None),
            ..Default::default()
        })
        .await
        .unwrap();

        let user = repo.find_by_id(&id).await.unwrap().unwrap();
        assert!(user.verification_token.is_none());
        assert!(user.verified);
    }

    #[actix_web::test]
    async fn test_consume_token_succeeds_only_once() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new("c@example.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let id = created.id_string().unwrap();

        repo.update_fields(&id, UserUpdate {
            password_reset_token: Some(Some("reset-1".to_string())),
            ..Default::default()
        })
        .await
        .unwrap();

        // 쓰기 시점의 토큰 대조가 단일 사용을 보장해야 함
        let consume = UserUpdate {
            password_hash: Some("new-hash".to_string()),
            password_reset_token: Some(None),
            ..Default::default()
        };

        let first = repo.consume_password_reset_token("reset-1", consume.clone()).await.unwrap();
        assert!(first.is_some());

        let second = repo.consume_password_reset_token("reset-1", consume).await.unwrap();
        assert!(second.is_none());

        let user = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(user.password_hash, "new-hash");
        assert!(user.password_reset_token.is_none());
    }
}
