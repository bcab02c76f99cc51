//! 단일 종목 지표 확인 커맨드.
//!
//! 이미지를 만들지 않고 렌더러가 쓰는 것과 같은 정규화/파생 경로로
//! 한 레코드의 값을 텍스트로 출력한다. 데이터 문제를 추적할 때 쓴다.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use stockdash_core::{
    drawdown_price, sma_panel_data, time_based_avg_volume, SmaPanelData, StockRecord,
};
use stockdash_render::narrative::{backtest_line, earnings_line, projection_line};
use tracing::warn;

/// 지표 확인 설정
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// 입력 CSV 파일
    pub input: PathBuf,
    /// 조회할 티커 (대소문자 무시)
    pub ticker: String,
}

/// CSV에서 티커를 찾아 정규화된 필드와 파생 지표를 출력.
pub fn run_inspect(config: &InspectConfig) -> Result<()> {
    let mut reader = csv::Reader::from_path(&config.input)
        .with_context(|| format!("CSV 파일을 열 수 없습니다: {}", config.input.display()))?;

    for row in reader.deserialize::<StockRecord>() {
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                warn!("레코드 파싱 실패 (건너뜀): {}", e);
                continue;
            }
        };
        if record.ticker.eq_ignore_ascii_case(&config.ticker) {
            print_record(&record);
            return Ok(());
        }
    }

    bail!("티커를 찾을 수 없습니다: {}", config.ticker)
}

fn print_record(record: &StockRecord) {
    let today = Local::now().date_naive();

    println!("\n📋 {} 지표 요약", record.ticker);
    println!("───────────────────────────────────────────────────────────────");
    println!("{:<24} {:>16.2}", "Price", record.price());
    println!("{:<24} {:>16.2}", "Support", record.support());
    println!("{:<24} {:>16.2}", "Resistance", record.resistance());
    println!(
        "{:<24} {:>16.2}",
        "Drawdown Price (365d)",
        drawdown_price(record.price(), record.max_drawdown_pct())
    );
    println!("{:<24} {:>16.0}", "Volume", record.volume());
    println!(
        "{:<24} {:>16.0}",
        "Avg (Time based)",
        time_based_avg_volume(record.volume(), record.rel_volume())
    );
    println!("{:<24} {:>16.2}", "Rel Volume", record.rel_volume());
    println!("{:<24} {:>16.1}", "RSI(14)", record.rsi());

    match sma_panel_data(record.sma_short(), record.sma_long(), record.price()) {
        SmaPanelData::Valid {
            sma_short,
            sma_long,
            lower,
            upper,
            ..
        } => {
            println!("{:<24} {:>16.2}", "SMA20", sma_short);
            println!("{:<24} {:>16.2}", "SMA50", sma_long);
            println!("{:<24} {:>8.2} ~ {:.2}", "SMA 표시 범위", lower, upper);
        }
        SmaPanelData::NoData => println!("{:<24} {:>16}", "SMA", "No SMA Data"),
    }

    println!("\n💰 투자 프로젝션 ($1000)");
    println!("{}", projection_line(record, today));
    println!("{}", backtest_line(record));
    println!("{}", earnings_line(record));
}
