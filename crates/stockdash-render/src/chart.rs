//! plotters 기반 대시보드 렌더러.
//!
//! 한 레코드의 다섯 패널을 비트맵 캔버스 한 장에 그려 PNG로 저장한다.
//! 패널에는 축 눈금/테두리를 모두 제거하고 막대·점선 가이드·주석만 남긴다.
//!
//! # 기술적 참고
//!
//! plotters에는 점선 hlines가 없어, 짧은 실선 세그먼트를 반복해
//! 점선 효과를 낸다. 캔버스는 레코드 단위로 생성되고 `present()` 후
//! 즉시 해제되므로 대량 배치에서도 드로잉 표면이 누적되지 않는다.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use plotters::coord::Shift;
use plotters::element::BitMapElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use stockdash_core::StockRecord;

use crate::background::load_background;
use crate::narrative::{backtest_line, earnings_line, header_line, projection_line};
use crate::panel::{build_panels, Annotation, PanelSpec};
use crate::style::ChartConfig;

/// 레코드 하나를 이미지 파일로 렌더링하는 공통 인터페이스.
///
/// 배치 드라이버는 이 트레잇에만 의존하므로, 테스트에서는 드로잉 없는
/// 구현으로 바꿔 끼울 수 있다.
pub trait TickerRenderer {
    /// 레코드를 렌더링해 `output_path`에 저장.
    fn render(&self, record: &StockRecord, output_path: &Path) -> Result<()>;
}

/// 대시보드 차트 렌더러
pub struct DashboardRenderer {
    config: ChartConfig,
}

impl DashboardRenderer {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self {
            config: ChartConfig::default(),
        }
    }

    /// 사용자 지정 설정으로 생성
    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// 헤더 + 서술 텍스트 (티커, 프로젝션, 백테스트, 분기 실적)
    fn draw_header(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        record: &StockRecord,
        today: chrono::NaiveDate,
    ) -> Result<()> {
        let cfg = &self.config;
        let x = (cfg.width as f64 * 0.02) as i32;

        let header_style = ("sans-serif", cfg.header_font_size)
            .into_font()
            .style(FontStyle::Bold)
            .color(&BLACK);
        let body_style = ("sans-serif", cfg.body_font_size).into_font().color(&BLACK);

        let mut y = (cfg.height as f64 * 0.015) as i32;
        root.draw_text(&header_line(record, today), &header_style, (x, y))?;
        y += cfg.header_font_size as i32 + 16;

        for line in [
            projection_line(record, today),
            backtest_line(record),
            earnings_line(record),
        ] {
            root.draw_text(&line, &body_style, (x, y))?;
            y += cfg.body_font_size as i32 + 14;
        }

        Ok(())
    }

    /// 패널 하나를 주어진 영역에 드로잉.
    ///
    /// 주석 말풍선은 데이터 좌표를 픽셀로 변환해 root에 그린다
    /// (좁은 패널 밖으로 삐져나가는 것을 허용하기 위함).
    fn draw_panel(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        area: &DrawingArea<BitMapBackend, Shift>,
        spec: &PanelSpec,
    ) -> Result<()> {
        let cfg = &self.config;

        let mut chart = ChartBuilder::on(area)
            .caption(spec.title, ("sans-serif", cfg.title_font_size).into_font())
            .margin(8)
            .x_label_area_size(0)
            .y_label_area_size(0)
            .build_cartesian_2d(-0.5f64..0.5f64, spec.y_range.0..spec.y_range.1)?;

        // 축/그리드는 의도적으로 그리지 않는다 (configure_mesh 생략)

        for bar in &spec.bars {
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (-cfg.bar_half_width, bar.from),
                    (cfg.bar_half_width, bar.to),
                ],
                bar.color.mix(bar.opacity).filled(),
            )))?;
        }

        let label_style = ("sans-serif", cfg.label_font_size).into_font().color(&BLACK);
        let line_height = cfg.label_font_size as i32 + 8;

        for guide in &spec.guides {
            // 점선 효과: 세그먼트를 하나 걸러 하나씩 그린다
            let segment_count = 12;
            let segment_width = cfg.guide_half_width * 2.0 / segment_count as f64;
            for i in (0..segment_count).step_by(2) {
                let x0 = -cfg.guide_half_width + segment_width * i as f64;
                let x1 = x0 + segment_width;
                chart.draw_series(LineSeries::new(
                    vec![(x0, guide.value), (x1, guide.value)],
                    guide.color.stroke_width(3),
                ))?;
            }

            // 라벨은 픽셀 공간에서 줄 단위로 중앙 정렬
            let anchor_x = if guide.label_right {
                cfg.guide_half_width
            } else {
                -cfg.guide_half_width
            };
            let (px, py) = chart.plotting_area().map_coordinate(&(anchor_x, guide.value));
            let style = if guide.label_right {
                label_style.pos(Pos::new(HPos::Left, VPos::Center))
            } else {
                label_style.pos(Pos::new(HPos::Right, VPos::Center))
            };
            let offset = if guide.label_right { 10 } else { -10 };

            let lines: Vec<&str> = guide.label.split('\n').collect();
            let first_y = py - (lines.len() as i32 - 1) * line_height / 2;
            for (i, line) in lines.iter().enumerate() {
                root.draw_text(line, &style, (px + offset, first_y + i as i32 * line_height))?;
            }
        }

        if let Some(text) = spec.placeholder {
            let mid = (spec.y_range.0 + spec.y_range.1) / 2.0;
            let style = label_style.pos(Pos::new(HPos::Center, VPos::Center));
            chart
                .plotting_area()
                .draw(&Text::new(text, (0.0, mid), style))?;
        }

        if let Some(annotation) = &spec.annotation {
            let (px, py) = chart
                .plotting_area()
                .map_coordinate(&(cfg.bar_half_width, annotation.anchor));
            self.draw_annotation(root, annotation, (px + 40, py))?;
        }

        Ok(())
    }

    /// 노란 말풍선 주석 (둥근 모서리 대신 반투명 박스 + 텍스트).
    fn draw_annotation(
        &self,
        root: &DrawingArea<BitMapBackend, Shift>,
        annotation: &Annotation,
        anchor: (i32, i32),
    ) -> Result<()> {
        let cfg = &self.config;
        let font_size = cfg.label_font_size as i32;
        let line_height = font_size + 8;
        let padding = font_size / 2;

        let max_chars = annotation
            .lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as i32;
        let box_width = (max_chars * font_size * 52 / 100) + padding * 2;
        let box_height = annotation.lines.len() as i32 * line_height + padding * 2;

        let (x, y_center) = anchor;
        let y0 = y_center - box_height / 2;

        root.draw(&Rectangle::new(
            [(x, y0), (x + box_width, y0 + box_height)],
            cfg.annotation_fill.mix(cfg.annotation_opacity).filled(),
        ))?;

        let style = ("sans-serif", cfg.label_font_size).into_font().color(&BLACK);
        for (i, line) in annotation.lines.iter().enumerate() {
            root.draw_text(
                line,
                &style,
                (x + padding, y0 + padding + i as i32 * line_height),
            )?;
        }

        Ok(())
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerRenderer for DashboardRenderer {
    fn render(&self, record: &StockRecord, output_path: &Path) -> Result<()> {
        record.validate()?;

        let cfg = &self.config;
        let today = Local::now().date_naive();
        let panels = build_panels(record, cfg);
        let background = load_background(
            &cfg.assets_dir,
            &record.ticker,
            (cfg.width, cfg.height),
            cfg.background_opacity,
        );

        // 캔버스는 이 스코프에 묶인다: present 후 바로 해제
        let root = BitMapBackend::new(output_path, (cfg.width, cfg.height)).into_drawing_area();
        root.fill(&WHITE)?;

        if let Some(buffer) = background {
            if let Some(element) =
                BitMapElement::with_owned_buffer((0, 0), (cfg.width, cfg.height), buffer)
            {
                root.draw(&element)?;
            }
        }

        self.draw_header(&root, record, today)?;

        // 패널 행: 상하 20%, 좌우 10% 마진 안에 5분할
        let vertical = (cfg.height as f64 * cfg.vertical_margin_ratio) as i32;
        let side = (cfg.width as f64 * cfg.side_margin_ratio) as i32;
        let panel_row = root.margin(vertical, vertical, side, side);

        let slot_width = (cfg.width as f64 * (1.0 - 2.0 * cfg.side_margin_ratio)) / 5.0;
        let gap = (slot_width * cfg.panel_gap_ratio) as i32;

        for (spec, slot) in panels.iter().zip(panel_row.split_evenly((1, 5))) {
            let area = slot.margin(0, 0, gap, gap);
            self.draw_panel(&root, &area, spec)?;
        }

        root.present()
            .with_context(|| format!("차트 저장 실패: {}", output_path.display()))?;
        Ok(())
    }
}
