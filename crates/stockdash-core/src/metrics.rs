//! 패널별 파생 지표 계산.
//!
//! 모든 함수는 정규화된 값만 입력받는 순수 함수이며 I/O가 없습니다.
//! 렌더러는 여기서 계산된 값을 그대로 좌표로 사용합니다.

use chrono::{Duration, NaiveDate};

/// 최대 낙폭을 반영한 기준 가격.
///
/// `max_drawdown_pct`는 퍼센트 단위 음수 값이 일반적이다 (예: -8.5).
pub fn drawdown_price(price: f64, max_drawdown_pct: f64) -> f64 {
    price * (1.0 + max_drawdown_pct / 100.0)
}

/// 가격 패널의 음영 밴드 (하단, 상단).
pub fn price_band(drawdown: f64, support: f64) -> (f64, f64) {
    (drawdown.min(support), drawdown.max(support))
}

/// 시간 기준 평균 거래량.
///
/// `rel_volume`이 0이면 나눗셈 대신 0.0을 반환해 gap 기여를 없앤다.
pub fn time_based_avg_volume(volume: f64, rel_volume: f64) -> f64 {
    if rel_volume == 0.0 {
        0.0
    } else {
        volume / rel_volume
    }
}

/// 거래량 막대 위로 쌓이는 "평균까지의 gap" 구간 높이.
///
/// 평균이 현재 거래량보다 작으면 0 (음수 높이 금지).
pub fn volume_gap(volume: f64, time_based_avg: f64) -> f64 {
    (time_based_avg - volume).max(0.0)
}

/// SMA 패널이 그릴 데이터.
#[derive(Debug, Clone, PartialEq)]
pub enum SmaPanelData {
    /// 유효한 SMA 구간
    Valid {
        sma_short: f64,
        sma_long: f64,
        price: f64,
        /// y축 하한 (min − padding)
        lower: f64,
        /// y축 상한 (max + padding)
        upper: f64,
    },
    /// SMA20/SMA50/Price 중 0 이하 값 존재 → 플레이스홀더 렌더링
    NoData,
}

/// SMA 패널 범위 계산.
///
/// 두 SMA가 1% 미만으로 붙어 있으면 패딩을 차이의 2배로 벌려
/// 구분선이 겹쳐 보이지 않게 하고, 그 외에는 차이의 절반을 쓴다.
pub fn sma_panel_data(sma_short: f64, sma_long: f64, price: f64) -> SmaPanelData {
    if sma_short <= 0.0 || sma_long <= 0.0 || price <= 0.0 {
        return SmaPanelData::NoData;
    }

    let diff = (sma_short - sma_long).abs();
    let avg = (sma_short + sma_long) / 2.0;
    let padding = if diff / avg < 0.01 {
        diff * 2.0
    } else {
        diff * 0.5
    };

    let min = sma_short.min(sma_long).min(price);
    let max = sma_short.max(sma_long).max(price);

    SmaPanelData::Valid {
        sma_short,
        sma_long,
        price,
        lower: min - padding,
        upper: max + padding,
    }
}

/// 과거 추세 패널의 y축 패딩 (표시 범위의 7%).
pub fn trend_padding(last_resistance: f64, last_support: f64, price: f64) -> f64 {
    let max = last_resistance.max(price);
    let min = last_support.min(price);
    (max - min) * 0.07
}

/// $1000 가정 투자 시나리오.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentProjection {
    /// 매수 가능 주식 수 (버림)
    pub shares: i64,
    /// 실제 투입 금액 (주식 수 × 현재가)
    pub total_investment: f64,
    /// 기대 수익률 반영 후 포트폴리오 가치
    pub future_value: f64,
    /// 기대 차익
    pub profit: f64,
    /// 보유 예상 일수
    pub holding_days: i64,
    /// 목표 청산일 (오늘 + 보유 일수)
    pub target_date: NaiveDate,
}

impl InvestmentProjection {
    /// 현재가, 기대 수익률(소수), 보유 일수로 프로젝션 계산.
    ///
    /// `today`를 주입받아 날짜 계산을 결정적으로 만든다.
    /// 현재가가 0 이하이면 주식 수와 금액은 모두 0.
    pub fn compute(
        price: f64,
        potential_profit_fraction: f64,
        holding_days: f64,
        today: NaiveDate,
    ) -> Self {
        let shares = if price > 0.0 {
            (1000.0 / price).floor() as i64
        } else {
            0
        };
        let total_investment = shares as f64 * price;
        let future_value = total_investment * (1.0 + potential_profit_fraction);
        let holding_days = holding_days as i64;

        Self {
            shares,
            total_investment,
            future_value,
            profit: future_value - total_investment,
            holding_days,
            target_date: today + Duration::days(holding_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_drawdown_price() {
        let dd = drawdown_price(100.0, -8.5);
        assert!((dd - 91.5).abs() < 1e-9);
    }

    #[test]
    fn test_price_band_orders_endpoints() {
        assert_eq!(price_band(91.5, 95.0), (91.5, 95.0));
        assert_eq!(price_band(95.0, 91.5), (91.5, 95.0));
    }

    #[test]
    fn test_time_based_avg_guard() {
        assert_eq!(time_based_avg_volume(1_000_000.0, 0.0), 0.0);
        assert_eq!(time_based_avg_volume(1_000_000.0, 2.0), 500_000.0);
    }

    #[test]
    fn test_volume_gap_never_negative() {
        // 평균이 0으로 잡힌 경우 gap도 0이어야 한다
        let avg = time_based_avg_volume(1_000_000.0, 0.0);
        assert_eq!(volume_gap(1_000_000.0, avg), 0.0);
        // 거래량이 평균을 이미 넘은 경우
        assert_eq!(volume_gap(2_000_000.0, 1_500_000.0), 0.0);
        // 일반적인 경우
        assert_eq!(volume_gap(1_000_000.0, 1_500_000.0), 500_000.0);
    }

    #[test]
    fn test_sma_guard_rejects_non_positive_inputs() {
        assert_eq!(sma_panel_data(0.0, 50.0, 48.0), SmaPanelData::NoData);
        assert_eq!(sma_panel_data(-1.0, 50.0, 48.0), SmaPanelData::NoData);
        assert_eq!(sma_panel_data(49.0, 0.0, 48.0), SmaPanelData::NoData);
        assert_eq!(sma_panel_data(49.0, 50.0, 0.0), SmaPanelData::NoData);
    }

    #[test]
    fn test_sma_padding_widens_when_smas_converge() {
        // 차이 0.1%: padding = diff * 2
        let SmaPanelData::Valid { lower, upper, .. } = sma_panel_data(100.0, 100.1, 100.0) else {
            panic!("expected valid SMA data");
        };
        let diff: f64 = 0.1;
        assert!((lower - (100.0 - diff * 2.0)).abs() < 1e-9);
        assert!((upper - (100.1 + diff * 2.0)).abs() < 1e-9);

        // 차이 10%: padding = diff * 0.5
        let SmaPanelData::Valid { lower, upper, .. } = sma_panel_data(100.0, 110.0, 105.0) else {
            panic!("expected valid SMA data");
        };
        assert!((lower - 95.0).abs() < 1e-9);
        assert!((upper - 115.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_padding_is_seven_percent_of_span() {
        let padding = trend_padding(58.0, 44.0, 50.0);
        assert!((padding - 14.0 * 0.07).abs() < 1e-9);
        // 현재가가 범위를 벗어나면 범위가 현재가까지 확장된다
        let padding = trend_padding(58.0, 44.0, 60.0);
        assert!((padding - 16.0 * 0.07).abs() < 1e-9);
    }

    #[test]
    fn test_investment_projection_scenario() {
        let p = InvestmentProjection::compute(50.0, 0.20, 10.0, date(2026, 8, 5));
        assert_eq!(p.shares, 20);
        assert!((p.total_investment - 1000.0).abs() < 1e-9);
        assert!((p.future_value - 1200.0).abs() < 1e-9);
        assert!((p.profit - 200.0).abs() < 1e-9);
        assert_eq!(p.holding_days, 10);
        assert_eq!(p.target_date, date(2026, 8, 15));
    }

    #[test]
    fn test_investment_projection_zero_price() {
        let p = InvestmentProjection::compute(0.0, 0.20, 5.0, date(2026, 8, 5));
        assert_eq!(p.shares, 0);
        assert_eq!(p.total_investment, 0.0);
        assert_eq!(p.future_value, 0.0);
        assert_eq!(p.profit, 0.0);
    }
}
