//! 다섯 패널 대시보드 렌더링 크레이트.
//!
//! [`stockdash_core`]가 계산한 값을 받아 하나의 비트맵 캔버스에
//! Price / Volume / RSI / SMA / Past Trend 패널과 헤더·서술 텍스트를
//! 그려 PNG로 저장합니다.
//!
//! 패널이 "무엇을" 그리는지는 [`panel::PanelSpec`]이라는 순수 데이터로
//! 먼저 구성되고, "어떻게" 그리는지는 [`chart::DashboardRenderer`]가
//! 담당합니다. 이 분리 덕에 패널 내용은 드로잉 백엔드 없이 테스트됩니다.

pub mod background;
pub mod chart;
pub mod format;
pub mod narrative;
pub mod panel;
pub mod style;

pub use chart::{DashboardRenderer, TickerRenderer};
pub use panel::{build_panels, Annotation, BarSegment, GuideLine, PanelSpec};
pub use style::ChartConfig;
