//! 사용자 리포지토리 모듈

pub mod user_repo;

#[cfg(test)]
pub mod memory_repo;

pub use user_repo::*;
