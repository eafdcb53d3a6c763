//! # 리포지토리 모듈
//!
//! 데이터 액세스 계층을 담당하는 리포지토리들을 정의합니다.
//! 서비스 계층은 trait를 통해서만 저장소에 접근하며,
//! 테스트에서는 인메모리 구현으로 대체할 수 있습니다.

pub mod users;

pub use users::*;
