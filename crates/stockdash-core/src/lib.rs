//! 종목 대시보드 핵심 도메인 크레이트.
//!
//! 스크리너 CSV 한 행([`StockRecord`])을 정규화된 수치로 변환하고,
//! 패널 렌더링에 필요한 파생 지표를 계산합니다. 이 크레이트는
//! 순수 계산만 담당하며 I/O와 드로잉은 상위 크레이트의 몫입니다.

pub mod metrics;
pub mod normalize;
pub mod record;

pub use metrics::{
    drawdown_price, price_band, sma_panel_data, time_based_avg_volume, trend_padding, volume_gap,
    InvestmentProjection, SmaPanelData,
};
pub use normalize::convert_value;
pub use record::{RecordError, StockRecord};
