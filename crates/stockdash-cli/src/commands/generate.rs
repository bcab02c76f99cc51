//! 대시보드 일괄 생성 커맨드.
//!
//! CSV의 각 행을 독립된 실패 경계 안에서 렌더링한다. 행 하나가
//! 깨져 있어도 배치 전체는 계속 진행되고, 실패한 레코드의 부분
//! 출력 파일은 남기지 않는다.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use stockdash_core::StockRecord;
use stockdash_render::{ChartConfig, DashboardRenderer, TickerRenderer};
use tracing::{error, info};

use crate::stats::BatchStats;

/// 일괄 생성 설정
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// 입력 CSV 파일
    pub input: PathBuf,
    /// 출력 디렉토리 (없으면 생성)
    pub output_dir: PathBuf,
    /// 배경 원본 이미지 디렉토리
    pub assets_dir: PathBuf,
}

/// CSV 전체에 대해 대시보드 차트를 일괄 생성.
///
/// 입력 파일을 읽을 수 없으면 빈 레코드 집합으로 간주하고
/// 에러 로그만 남긴 채 정상 종료한다.
pub fn run_generate(config: &GenerateConfig) -> Result<BatchStats> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "출력 디렉토리 생성 실패: {}",
            config.output_dir.display()
        )
    })?;

    let rows = match read_records(&config.input) {
        Ok(rows) => rows,
        Err(e) => {
            error!("CSV 읽기 실패 ({}): {}", config.input.display(), e);
            return Ok(BatchStats::default());
        }
    };
    info!("CSV 로딩 완료: {} ({} 행)", config.input.display(), rows.len());

    let chart_config = ChartConfig {
        assets_dir: config.assets_dir.clone(),
        ..ChartConfig::default()
    };
    let renderer = DashboardRenderer::with_config(chart_config);

    Ok(render_batch(&rows, &renderer, &config.output_dir))
}

/// CSV에서 행 목록 읽기.
///
/// 행 단위 역직렬화 실패는 여기서 삼키지 않고 Result로 보존해,
/// 레코드 경계에서 격리 처리되게 한다.
pub fn read_records(path: &Path) -> Result<Vec<std::result::Result<StockRecord, csv::Error>>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("CSV 파일을 열 수 없습니다: {}", path.display()))?;
    Ok(reader.deserialize::<StockRecord>().collect())
}

/// 레코드 목록을 렌더러로 일괄 처리.
///
/// 레코드 하나의 실패(파싱/파생/드로잉/저장)는 배치를 멈추지 않는다.
pub fn render_batch<R: TickerRenderer>(
    rows: &[std::result::Result<StockRecord, csv::Error>],
    renderer: &R,
    output_dir: &Path,
) -> BatchStats {
    let started = Instant::now();
    let mut stats = BatchStats::default();

    let progress = ProgressBar::new(rows.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    for (index, row) in rows.iter().enumerate() {
        stats.total += 1;
        match row {
            Ok(record) => {
                let output_path = output_dir.join(format!("{}_chart.png", record.ticker));
                match renderer.render(record, &output_path) {
                    Ok(()) => {
                        stats.success += 1;
                        info!("차트 생성: {}", record.ticker);
                    }
                    Err(e) => {
                        stats.errors += 1;
                        error!("차트 생성 실패 ({}): {:#}", record.ticker, e);
                        // 실패한 레코드의 부분 출력은 남기지 않는다
                        let _ = fs::remove_file(&output_path);
                        stats
                            .failures
                            .push((record.ticker.clone(), format!("{:#}", e)));
                    }
                }
            }
            Err(e) => {
                let label = format!("row {}", index + 1);
                stats.errors += 1;
                error!("레코드 파싱 실패 ({}): {}", label, e);
                stats.failures.push((label, e.to_string()));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    stats.elapsed = started.elapsed();
    stats.log_summary("generate");
    stats
}
