//! 패널 드로잉 명세 구성.
//!
//! 다섯 패널이 "무엇을" 그리는지를 순수 데이터([`PanelSpec`])로 만든다.
//! 좌표 변환과 실제 드로잉은 [`crate::chart`]가 담당하므로, 패널 내용은
//! 드로잉 백엔드 없이 단위 테스트할 수 있다.

use plotters::style::RGBColor;
use stockdash_core::{
    drawdown_price, price_band, sma_panel_data, time_based_avg_volume, trend_padding, volume_gap,
    SmaPanelData, StockRecord,
};

use crate::format::format_count;
use crate::style::ChartConfig;

/// 막대 구간 하나. `from`/`to`는 y축 데이터 좌표.
#[derive(Debug, Clone)]
pub struct BarSegment {
    pub from: f64,
    pub to: f64,
    pub color: RGBColor,
    pub opacity: f64,
}

/// 짧은 수평 점선 + 라벨.
#[derive(Debug, Clone)]
pub struct GuideLine {
    pub value: f64,
    /// 라벨 텍스트. `\n`으로 줄바꿈.
    pub label: String,
    pub color: RGBColor,
    /// true면 라벨을 막대 오른쪽에 붙인다 (기본은 왼쪽)
    pub label_right: bool,
}

impl GuideLine {
    fn left(value: f64, label: String, color: RGBColor) -> Self {
        Self {
            value,
            label,
            color,
            label_right: false,
        }
    }
}

/// 노란 말풍선 주석.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// 말풍선이 붙는 y축 데이터 좌표
    pub anchor: f64,
    pub lines: Vec<String>,
}

/// 패널 하나의 드로잉 명세.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub title: &'static str,
    /// y축 표시 범위 (하한, 상한)
    pub y_range: (f64, f64),
    pub bars: Vec<BarSegment>,
    pub guides: Vec<GuideLine>,
    pub annotation: Option<Annotation>,
    /// 패널 중앙에 표시할 플레이스홀더 (SMA 데이터 없음)
    pub placeholder: Option<&'static str>,
}

/// 레코드 하나에서 다섯 패널 명세를 모두 구성.
pub fn build_panels(record: &StockRecord, config: &ChartConfig) -> [PanelSpec; 5] {
    [
        price_panel(record, config),
        volume_panel(record, config),
        rsi_panel(record, config),
        sma_panel(record, config),
        past_trend_panel(record, config),
    ]
}

/// 값 목록을 감싸는 y 범위. 5% 여유를 두고 퇴화 구간을 방어한다.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    ensure_span(min, max, (max - min) * 0.05)
}

/// 상한이 하한 이하로 붙으면 최소 폭을 벌린다.
fn ensure_span(lower: f64, upper: f64, padding: f64) -> (f64, f64) {
    if upper - lower > f64::EPSILON {
        (lower - padding, upper + padding)
    } else {
        (lower - 0.5, upper + 0.5)
    }
}

/// Price: 지지선→현재가 실선 막대, 현재가→저항선 음영,
/// 낙폭가/지지선 밴드 음영. 가이드 4개 + 비율 주석.
fn price_panel(record: &StockRecord, config: &ChartConfig) -> PanelSpec {
    let price = record.price();
    let support = record.support();
    let resistance = record.resistance();
    let drawdown = drawdown_price(price, record.max_drawdown_pct());
    let (band_lower, band_upper) = price_band(drawdown, support);

    // 소수로 저장된 비율 필드만 퍼센트 표시를 위해 ×100
    let channel_ratio = record.channel_ratio() * 100.0;
    let support_ratio = record.support_ratio() * 100.0;
    let potential_profit = record.potential_profit() * 100.0;

    let bars = vec![
        BarSegment {
            from: support,
            to: price,
            color: config.price_color,
            opacity: 1.0,
        },
        BarSegment {
            from: price,
            to: resistance,
            color: config.shade_color,
            opacity: config.shade_opacity,
        },
        BarSegment {
            from: band_lower,
            to: band_upper,
            color: config.shade_color,
            opacity: config.shade_opacity,
        },
    ];

    let guides = vec![
        GuideLine::left(price, format!("Price: {:.2}", price), config.guide_color),
        GuideLine::left(
            support,
            format!("Support: {:.2}", support),
            config.guide_color,
        ),
        GuideLine::left(
            resistance,
            format!("Resistance: {:.2}", resistance),
            config.guide_color,
        ),
        GuideLine::left(
            drawdown,
            format!("Drawdown Price\n(365d): {:.2}", drawdown),
            config.guide_color,
        ),
    ];

    let annotation = Annotation {
        anchor: price,
        lines: vec![
            format!("Price: {:.2}", price),
            format!("Range: {:.2}", record.channel_range()),
            format!("% Potential: {:.1}%", potential_profit),
            format!("% Channel: {:.1}%", channel_ratio),
            format!("% Support: {:.1}%", support_ratio),
        ],
    };

    PanelSpec {
        title: "Price",
        y_range: padded_range(&[price, support, resistance, drawdown, band_lower, band_upper]),
        bars,
        guides,
        annotation: Some(annotation),
        placeholder: None,
    }
}

/// Volume: 0→거래량 실선 막대, 시간 기준 평균까지의 gap 음영 (0 미만 금지).
fn volume_panel(record: &StockRecord, config: &ChartConfig) -> PanelSpec {
    let volume = record.volume();
    let time_based_avg = time_based_avg_volume(volume, record.rel_volume());
    let gap = volume_gap(volume, time_based_avg);

    let bars = vec![
        BarSegment {
            from: 0.0,
            to: volume,
            color: config.volume_color,
            opacity: 1.0,
        },
        BarSegment {
            from: volume,
            to: volume + gap,
            color: config.shade_color,
            opacity: config.shade_opacity,
        },
    ];

    let guides = vec![
        GuideLine::left(
            volume,
            format!("Vol: {}", format_count(volume)),
            config.guide_color,
        ),
        GuideLine::left(
            time_based_avg,
            format!("Avg (Time based):\n{}", format_count(time_based_avg)),
            config.guide_color,
        ),
    ];

    // 주석은 현재 거래량이 아니라 시간 기준 평균 위치에 붙는다
    let annotation = Annotation {
        anchor: time_based_avg,
        lines: vec![
            format!("Avg Volume: {}", format_count(record.avg_volume())),
            format!("Rel Volume: {:.2}", record.rel_volume()),
        ],
    };

    PanelSpec {
        title: "Volume",
        y_range: padded_range(&[0.0, volume, volume + gap, time_based_avg]),
        bars,
        guides,
        annotation: Some(annotation),
        placeholder: None,
    }
}

/// RSI: 고정 [0, 100] 범위, 30/70 기준선.
fn rsi_panel(record: &StockRecord, config: &ChartConfig) -> PanelSpec {
    let rsi = record.rsi();

    let bars = vec![
        BarSegment {
            from: 0.0,
            to: rsi,
            color: config.rsi_color,
            opacity: 1.0,
        },
        BarSegment {
            from: rsi,
            to: 100.0,
            color: config.shade_color,
            opacity: config.shade_opacity,
        },
    ];

    let guides = vec![
        GuideLine::left(rsi, format!("RSI: {:.1}", rsi), config.guide_color),
        GuideLine::left(30.0, "30".to_string(), config.oversold_color),
        GuideLine::left(70.0, "70".to_string(), config.overbought_color),
    ];

    PanelSpec {
        title: "RSI",
        y_range: (0.0, 100.0),
        bars,
        guides,
        annotation: None,
        placeholder: None,
    }
}

/// SMA: (min−padding)→SMA20 실선, 나머지 음영. 유효하지 않으면 플레이스홀더.
fn sma_panel(record: &StockRecord, config: &ChartConfig) -> PanelSpec {
    match sma_panel_data(record.sma_short(), record.sma_long(), record.price()) {
        SmaPanelData::Valid {
            sma_short,
            sma_long,
            price,
            lower,
            upper,
        } => {
            let bars = vec![
                BarSegment {
                    from: lower,
                    to: sma_short,
                    color: config.sma_color,
                    opacity: 1.0,
                },
                BarSegment {
                    from: sma_short,
                    to: upper,
                    color: config.shade_color,
                    opacity: config.shade_opacity,
                },
            ];

            let guides = vec![
                GuideLine::left(
                    sma_short,
                    format!("SMA20: {:.2}", sma_short),
                    config.guide_color,
                ),
                GuideLine::left(
                    sma_long,
                    format!("SMA50: {:.2}", sma_long),
                    config.guide_color,
                ),
                GuideLine::left(price, format!("Price: {:.2}", price), config.guide_color),
            ];

            let (lower, upper) = ensure_span(lower, upper, 0.0);
            PanelSpec {
                title: "SMA",
                y_range: (lower, upper),
                bars,
                guides,
                annotation: None,
                placeholder: None,
            }
        }
        SmaPanelData::NoData => PanelSpec {
            title: "SMA",
            y_range: (0.0, 100.0),
            bars: vec![BarSegment {
                from: 0.0,
                to: 100.0,
                color: config.shade_color,
                opacity: config.shade_opacity,
            }],
            guides: Vec::new(),
            annotation: None,
            placeholder: Some("No SMA Data"),
        },
    }
}

/// Past Trend: 직전 상승 구간의 지지/저항 대비 현재가 위치.
fn past_trend_panel(record: &StockRecord, config: &ChartConfig) -> PanelSpec {
    let last_resistance = record.last_resistance();
    let last_support = record.last_support();
    let price = record.price();
    let padding = trend_padding(last_resistance, last_support, price);

    let bars = vec![
        BarSegment {
            from: last_support,
            to: price,
            color: config.trend_color,
            opacity: 1.0,
        },
        BarSegment {
            from: price,
            to: last_resistance,
            color: config.shade_color,
            opacity: config.shade_opacity,
        },
    ];

    let guides = vec![
        GuideLine::left(
            last_resistance,
            format!(
                "Last Resistance:\n{} - {:.2}",
                record.last_resistance_date(),
                last_resistance
            ),
            config.guide_color,
        ),
        GuideLine::left(
            last_support,
            format!(
                "Last Support:\n{} - {:.2}",
                record.last_support_date(),
                last_support
            ),
            config.guide_color,
        ),
        GuideLine {
            value: price,
            label: format!("Price: {:.2}", price),
            color: config.guide_color,
            label_right: true,
        },
    ];

    let annotation = Annotation {
        anchor: last_resistance,
        lines: vec![
            format!("Range: {:.2}", record.last_range()),
            format!("Days: {:.0}", record.last_days()),
            format!("Avg Days (all rising): {:.1}", record.last_avg_days()),
        ],
    };

    let lower = last_support.min(price);
    let upper = last_resistance.max(price) + padding;
    let (lower, upper) = ensure_span(lower, upper, 0.0);

    PanelSpec {
        title: "Past Trend",
        y_range: (lower, upper),
        bars,
        guides,
        annotation: Some(annotation),
        placeholder: None,
    }
}
