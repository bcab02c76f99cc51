//! 일괄 렌더링 통계.

use std::time::Duration;

/// 한 번의 배치 실행 결과 통계
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// 총 레코드 수
    pub total: usize,
    /// 성공 횟수
    pub success: usize,
    /// 실패 횟수 (파싱 실패 + 렌더링 실패)
    pub errors: usize,
    /// 소요 시간
    pub elapsed: Duration,
    /// (식별자, 에러 메시지) 목록
    pub failures: Vec<(String, String)>,
}

impl BatchStats {
    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.success as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self, operation: &str) {
        tracing::info!(
            operation = operation,
            total = self.total,
            success = self.success,
            errors = self.errors,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "일괄 렌더링 완료"
        );
    }
}
