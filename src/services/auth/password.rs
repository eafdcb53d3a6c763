//! 비밀번호 해싱 유틸리티
//!
//! bcrypt 기반 비밀번호 해싱과 검증을 제공합니다.
//! 해시마다 고유 솔트가 포함되므로 같은 평문도 매번 다른 해시를 생성합니다.

use crate::errors::errors::AppError;

/// 평문 비밀번호를 bcrypt로 해싱
///
/// cost factor는 환경 설정에서 주입됩니다 (운영 10, 개발/테스트 4).
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호를 저장된 해시와 대조
///
/// bcrypt 검증 자체가 실패하면(손상된 해시 등) 불일치로 처리합니다.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("Str0ng&Pass", TEST_COST).unwrap();
        assert!(verify_password("Str0ng&Pass", &hash));
        assert!(!verify_password("Wr0ng&Pass", &hash));
    }

    #[test]
    fn test_same_password_produces_different_hashes() {
        let first = hash_password("Str0ng&Pass", TEST_COST).unwrap();
        let second = hash_password("Str0ng&Pass", TEST_COST).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_fails_closed() {
        assert!(!verify_password("Str0ng&Pass", "not-a-bcrypt-hash"));
    }
}
