//! 일괄 렌더링 실패 격리 통합 테스트.
//!
//! 드로잉 백엔드 대신 파일만 남기는 스텁 렌더러로 배치 드라이버의
//! 실패 경계를 검증한다. 한 행이 깨져 있어도 나머지 행의 출력은
//! 그대로 만들어져야 한다.

use std::fs;
use std::path::Path;

use stockdash_cli::commands::generate::{read_records, render_batch, run_generate, GenerateConfig};
use stockdash_core::StockRecord;
use stockdash_render::TickerRenderer;
use tempfile::TempDir;

const HEADER: &str = "Ticker,Price,channel_range,support,resistance,max_drawdown_%,\
current_price_ratio_channel,current_price_ratio_support,potential_profit_%,\
Volume,Avg Volume,Rel Volume,rsi_14,sma_short_20,sma_long_50,\
last_up_trade_resistence_price,last_up_trade_support_price,\
last_up_trade_range,last_up_trade_days,last_up_trade_avg_days,\
last_up_trade_resistence_date,last_up_trade_support_date,\
return_%,sharpe_ratio,Earnings";

fn row(ticker: &str) -> String {
    format!(
        "{},50,12.4,45.2,57.6,-8.5,0.39,0.106,0.20,\
         1234567,2.5M,1.25,48.3,49.1,47.8,\
         58.0,44.0,14.0,10,21.5,2024-11-02,2024-09-14,18.2,1.34,Nov 21 AMC",
        ticker
    )
}

/// 드로잉 없이 출력 파일만 남기는 스텁 렌더러.
struct FileStubRenderer;

impl TickerRenderer for FileStubRenderer {
    fn render(&self, record: &StockRecord, output_path: &Path) -> anyhow::Result<()> {
        record.validate()?;
        fs::write(output_path, b"stub")?;
        Ok(())
    }
}

#[test]
fn test_one_broken_row_does_not_abort_the_batch() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stocks.csv");
    let output = dir.path().join("output");
    fs::create_dir_all(&output).unwrap();

    // 2번째 행은 필드 수가 모자라 역직렬화에 실패한다
    let csv = format!("{}\n{}\nBBB,1\n{}\n", HEADER, row("AAA"), row("CCC"));
    fs::write(&input, csv).unwrap();

    let rows = read_records(&input).unwrap();
    let stats = render_batch(&rows, &FileStubRenderer, &output);

    assert_eq!(stats.total, 3);
    assert_eq!(stats.success, 2);
    assert_eq!(stats.errors, 1);

    // 진단은 2번째 레코드를 지목한다
    assert_eq!(stats.failures.len(), 1);
    assert_eq!(stats.failures[0].0, "row 2");

    // 정확히 1, 3번째 레코드의 출력만 존재한다
    assert!(output.join("AAA_chart.png").exists());
    assert!(output.join("CCC_chart.png").exists());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 2);
}

#[test]
fn test_blank_ticker_fails_at_record_boundary_without_partial_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stocks.csv");
    let output = dir.path().join("output");
    fs::create_dir_all(&output).unwrap();

    let csv = format!("{}\n{}\n{}\n", HEADER, row("AAA"), row(""));
    fs::write(&input, csv).unwrap();

    let rows = read_records(&input).unwrap();
    let stats = render_batch(&rows, &FileStubRenderer, &output);

    assert_eq!(stats.success, 1);
    assert_eq!(stats.errors, 1);
    assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
}

#[test]
fn test_same_ticker_twice_overwrites_by_identifier() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stocks.csv");
    let output = dir.path().join("output");
    fs::create_dir_all(&output).unwrap();

    let csv = format!("{}\n{}\n{}\n", HEADER, row("AAA"), row("AAA"));
    fs::write(&input, csv).unwrap();

    let rows = read_records(&input).unwrap();
    let stats = render_batch(&rows, &FileStubRenderer, &output);

    assert_eq!(stats.success, 2);
    assert_eq!(fs::read_dir(&output).unwrap().count(), 1);
}

#[test]
fn test_unreadable_input_yields_empty_batch_without_crash() {
    let dir = TempDir::new().unwrap();
    let config = GenerateConfig {
        input: dir.path().join("does_not_exist.csv"),
        output_dir: dir.path().join("output"),
        assets_dir: dir.path().join("assets"),
    };

    let stats = run_generate(&config).unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.success, 0);

    // 출력 디렉토리는 루프 전에 만들어지고, 산출물은 없다
    assert!(config.output_dir.exists());
    assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
}
