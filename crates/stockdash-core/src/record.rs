//! 스크리너 CSV 한 행에 대응하는 종목 레코드.
//!
//! 수치 필드는 쉼표/퍼센트/배수 접미사가 섞인 원문 그대로 보관하고,
//! 접근자에서 [`convert_value`]로 정규화합니다. 날짜와 분기 실적은
//! 텍스트로만 쓰이므로 변환하지 않습니다.

use serde::Deserialize;
use thiserror::Error;

use crate::normalize::convert_value;

/// 레코드 검증 에러
#[derive(Debug, Error)]
pub enum RecordError {
    /// 파일 이름의 키가 되는 티커가 비어 있음
    #[error("티커가 비어 있습니다")]
    EmptyTicker,
}

/// 스크리너 CSV 한 행.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockRecord {
    /// 종목 식별자 (출력 파일 이름의 키)
    #[serde(rename = "Ticker", default)]
    pub ticker: String,

    #[serde(rename = "Price", default)]
    price: Option<String>,
    #[serde(rename = "channel_range", default)]
    channel_range: Option<String>,
    #[serde(rename = "support", default)]
    support: Option<String>,
    #[serde(rename = "resistance", default)]
    resistance: Option<String>,
    #[serde(rename = "max_drawdown_%", default)]
    max_drawdown_pct: Option<String>,
    /// 채널 내 현재가 위치 (소수로 저장된 비율)
    #[serde(rename = "current_price_ratio_channel", default)]
    channel_ratio: Option<String>,
    /// 지지선 대비 현재가 (소수로 저장된 비율)
    #[serde(rename = "current_price_ratio_support", default)]
    support_ratio: Option<String>,
    /// 기대 수익률 (소수로 저장된 비율)
    #[serde(rename = "potential_profit_%", default)]
    potential_profit: Option<String>,
    #[serde(rename = "Volume", default)]
    volume: Option<String>,
    #[serde(rename = "Avg Volume", default)]
    avg_volume: Option<String>,
    #[serde(rename = "Rel Volume", default)]
    rel_volume: Option<String>,
    #[serde(rename = "rsi_14", default)]
    rsi: Option<String>,
    #[serde(rename = "sma_short_20", default)]
    sma_short: Option<String>,
    #[serde(rename = "sma_long_50", default)]
    sma_long: Option<String>,
    #[serde(rename = "last_up_trade_resistence_price", default)]
    last_resistance: Option<String>,
    #[serde(rename = "last_up_trade_support_price", default)]
    last_support: Option<String>,
    #[serde(rename = "last_up_trade_range", default)]
    last_range: Option<String>,
    #[serde(rename = "last_up_trade_days", default)]
    last_days: Option<String>,
    #[serde(rename = "last_up_trade_avg_days", default)]
    last_avg_days: Option<String>,
    #[serde(rename = "last_up_trade_resistence_date", default)]
    last_resistance_date: Option<String>,
    #[serde(rename = "last_up_trade_support_date", default)]
    last_support_date: Option<String>,
    #[serde(rename = "return_%", default)]
    return_pct: Option<String>,
    #[serde(rename = "sharpe_ratio", default)]
    sharpe_ratio: Option<String>,
    /// 분기 실적 원문 (가공 없이 그대로 출력)
    #[serde(rename = "Earnings", default)]
    earnings: Option<String>,
}

impl StockRecord {
    /// 렌더링 전 최소 검증. 티커가 없으면 출력 경로를 만들 수 없다.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.ticker.trim().is_empty() {
            return Err(RecordError::EmptyTicker);
        }
        Ok(())
    }

    pub fn price(&self) -> f64 {
        convert_value(self.price.as_deref())
    }

    pub fn channel_range(&self) -> f64 {
        convert_value(self.channel_range.as_deref())
    }

    pub fn support(&self) -> f64 {
        convert_value(self.support.as_deref())
    }

    pub fn resistance(&self) -> f64 {
        convert_value(self.resistance.as_deref())
    }

    pub fn max_drawdown_pct(&self) -> f64 {
        convert_value(self.max_drawdown_pct.as_deref())
    }

    /// 채널 내 위치 비율 (소수). 표시용 퍼센트 변환은 호출부에서.
    pub fn channel_ratio(&self) -> f64 {
        convert_value(self.channel_ratio.as_deref())
    }

    /// 지지선 대비 비율 (소수).
    pub fn support_ratio(&self) -> f64 {
        convert_value(self.support_ratio.as_deref())
    }

    /// 기대 수익률 (소수).
    pub fn potential_profit(&self) -> f64 {
        convert_value(self.potential_profit.as_deref())
    }

    pub fn volume(&self) -> f64 {
        convert_value(self.volume.as_deref())
    }

    pub fn avg_volume(&self) -> f64 {
        convert_value(self.avg_volume.as_deref())
    }

    pub fn rel_volume(&self) -> f64 {
        convert_value(self.rel_volume.as_deref())
    }

    pub fn rsi(&self) -> f64 {
        convert_value(self.rsi.as_deref())
    }

    pub fn sma_short(&self) -> f64 {
        convert_value(self.sma_short.as_deref())
    }

    pub fn sma_long(&self) -> f64 {
        convert_value(self.sma_long.as_deref())
    }

    pub fn last_resistance(&self) -> f64 {
        convert_value(self.last_resistance.as_deref())
    }

    pub fn last_support(&self) -> f64 {
        convert_value(self.last_support.as_deref())
    }

    pub fn last_range(&self) -> f64 {
        convert_value(self.last_range.as_deref())
    }

    pub fn last_days(&self) -> f64 {
        convert_value(self.last_days.as_deref())
    }

    pub fn last_avg_days(&self) -> f64 {
        convert_value(self.last_avg_days.as_deref())
    }

    pub fn return_pct(&self) -> f64 {
        convert_value(self.return_pct.as_deref())
    }

    pub fn sharpe_ratio(&self) -> f64 {
        convert_value(self.sharpe_ratio.as_deref())
    }

    /// 직전 상승 구간 저항선 날짜 원문.
    pub fn last_resistance_date(&self) -> &str {
        self.last_resistance_date.as_deref().unwrap_or("")
    }

    /// 직전 상승 구간 지지선 날짜 원문.
    pub fn last_support_date(&self) -> &str {
        self.last_support_date.as_deref().unwrap_or("")
    }

    /// 분기 실적 원문.
    pub fn earnings_text(&self) -> &str {
        self.earnings.as_deref().unwrap_or("")
    }
}
