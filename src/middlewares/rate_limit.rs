//! 고정 윈도우 속도 제한기
//!
//! 키별 호출 횟수를 고정 길이 윈도우 안에서 제한합니다.
//! 인증 메일 재발송처럼 외부 비용이 발생하는 연산의 남용을 막는 용도이며,
//! 윈도우가 끝나면 카운터가 초기화됩니다.

use std::collections::HashMap;
use std::sync::Mutex;
use chrono::{DateTime, Duration, Utc};
use crate::config::ResendLimitConfig;
use crate::errors::errors::AppError;

struct RateLimitEntry {
    count: u32,
    window_reset_at: DateTime<Utc>,
}

/// 고정 윈도우 속도 제한기
///
/// 만료된 윈도우 항목은 별도 백그라운드 작업 없이
/// 다음 호출 시점에 지연 정리됩니다.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    entries: Mutex<HashMap<String, RateLimitEntry>>,
}

impl RateLimiter {
    pub fn new(config: ResendLimitConfig) -> Self {
        Self {
            limit: config.limit,
            window: Duration::seconds(config.window_secs),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// 키에 대해 호출 1회를 소비 (현재 시각 기준)
    pub fn check_and_consume(&self, key: &str) -> Result<(), AppError> {
        self.check_and_consume_at(key, Utc::now())
    }

    /// 주어진 시각 기준으로 호출 1회를 소비
    ///
    /// 윈도우 안에서 한도를 넘으면 `RateLimitError`를 반환하며,
    /// 거부된 호출은 카운터를 증가시키지 않습니다.
    pub fn check_and_consume_at(&self, key: &str, now: DateTime<Utc>) -> Result<(), AppError> {
        let mut entries = self.entries.lock().map_err(|_| {
            AppError::InternalError("속도 제한기 잠금 획득 실패".to_string())
        })?;

        // 만료된 윈도우 지연 정리
        entries.retain(|_, entry| entry.window_reset_at > now);

        match entries.get_mut(key) {
            Some(entry) => {
                if entry.count >= self.limit {
                    log::warn!("속도 제한 초과: {}", key);
                    return Err(AppError::RateLimitError(
                        "요청이 너무 잦습니다. 잠시 후 다시 시도해주세요".to_string(),
                    ));
                }
                entry.count += 1;
            }
            None => {
                entries.insert(key.to_string(), RateLimitEntry {
                    count: 1,
                    window_reset_at: now + self.window,
                });
            }
        }

        Ok(())
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
