//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 이메일 주소 정규화
///
/// 앞뒤 공백을 제거하고 소문자로 변환합니다.
/// 모든 조회와 저장은 정규화된 이메일을 키로 사용하므로,
/// 대소문자나 공백이 다른 동일 주소가 별개 계정으로 갈라지지 않습니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_email;
///
/// assert_eq!(normalize_email("  Alice@Example.COM  "), "alice@example.com");
/// ```
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("user@example.com"), "user@example.com");
        assert_eq!(normalize_email("  User@Example.COM  "), "user@example.com");
        assert_eq!(normalize_email("ALICE@TEST.IO"), "alice@test.io");
        assert_eq!(normalize_email("\tbob@site.dev\n"), "bob@site.dev");
    }

    #[test]
    fn test_normalize_email_idempotent() {
        let once = normalize_email("  MiXeD@Case.Com ");
        assert_eq!(normalize_email(&once), once);
    }
}
