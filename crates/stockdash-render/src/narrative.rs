//! 헤더/프로젝션/백테스트 서술 텍스트 구성.
//!
//! 캔버스 상단에 들어가는 문장들을 순수 함수로 만든다. 날짜를 주입받으므로
//! 같은 레코드에 대해 언제나 같은 문자열이 나온다.

use chrono::NaiveDate;
use stockdash_core::{InvestmentProjection, StockRecord};

/// 헤더 라인: `TICKER - YYYY-MM-DD`.
pub fn header_line(record: &StockRecord, today: NaiveDate) -> String {
    format!("{} - {}", record.ticker, today.format("%Y-%m-%d"))
}

/// $1000 가정 투자 시나리오 한 줄 요약.
pub fn projection_line(record: &StockRecord, today: NaiveDate) -> String {
    let p = InvestmentProjection::compute(
        record.price(),
        record.potential_profit(),
        record.last_days(),
        today,
    );
    format!(
        "Entry now with 1000$, buy {} shares (Total: ${:.2}), based on past trend, \
         you will hold portfolio of ${:.2} (Earning: ${:.2}) until {} \
         ({} trading days from today)",
        p.shares,
        p.total_investment,
        p.future_value,
        p.profit,
        p.target_date.format("%Y-%m-%d"),
        p.holding_days
    )
}

/// 고정 전략 라벨의 백테스트 요약 한 줄.
pub fn backtest_line(record: &StockRecord) -> String {
    format!(
        "Backtest (365d), Entry: $1000 | Strategy: SMA20 > SMA50 & RSI < 70 | \
         Return %: {:.1}% | Max Drawdown %: {:.1}% | Sharpe Ratio: {:.2}",
        record.return_pct(),
        record.max_drawdown_pct(),
        record.sharpe_ratio()
    )
}

/// 분기 실적 라인. 필드 원문을 가공 없이 붙인다.
pub fn earnings_line(record: &StockRecord) -> String {
    format!("Quarterly report: {}", record.earnings_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from_csv(row: &str) -> StockRecord {
        let header = "Ticker,Price,channel_range,support,resistance,max_drawdown_%,\
                      current_price_ratio_channel,current_price_ratio_support,potential_profit_%,\
                      Volume,Avg Volume,Rel Volume,rsi_14,sma_short_20,sma_long_50,\
                      last_up_trade_resistence_price,last_up_trade_support_price,\
                      last_up_trade_range,last_up_trade_days,last_up_trade_avg_days,\
                      last_up_trade_resistence_date,last_up_trade_support_date,\
                      return_%,sharpe_ratio,Earnings";
        let csv_data = format!("{}\n{}", header, row);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());
        reader.deserialize().next().unwrap().unwrap()
    }

    fn sample() -> StockRecord {
        record_from_csv(
            "AAPL,50,12.4,45.2,57.6,-8.5,0.39,0.106,0.20,\
             \"1,234,567\",2.5M,1.25,48.3,49.1,47.8,\
             58.0,44.0,14.0,10,21.5,2024-11-02,2024-09-14,18.2,1.34,Nov 21 AMC",
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_projection_line_content() {
        let line = projection_line(&sample(), today());
        assert_eq!(
            line,
            "Entry now with 1000$, buy 20 shares (Total: $1000.00), based on past trend, \
             you will hold portfolio of $1200.00 (Earning: $200.00) until 2026-08-15 \
             (10 trading days from today)"
        );
    }

    #[test]
    fn test_backtest_line_content() {
        let line = backtest_line(&sample());
        assert_eq!(
            line,
            "Backtest (365d), Entry: $1000 | Strategy: SMA20 > SMA50 & RSI < 70 | \
             Return %: 18.2% | Max Drawdown %: -8.5% | Sharpe Ratio: 1.34"
        );
    }

    #[test]
    fn test_earnings_line_is_literal_passthrough() {
        assert_eq!(earnings_line(&sample()), "Quarterly report: Nov 21 AMC");
    }

    /// 같은 입력이면 두 번 만들어도 같은 텍스트가 나온다.
    #[test]
    fn test_narratives_are_deterministic() {
        let record = sample();
        assert_eq!(header_line(&record, today()), header_line(&record, today()));
        assert_eq!(
            projection_line(&record, today()),
            projection_line(&record, today())
        );
        assert_eq!(backtest_line(&record), backtest_line(&record));
    }
}
