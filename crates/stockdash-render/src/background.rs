//! 배경 원본 이미지 로딩.
//!
//! 티커별 배경 이미지가 있으면 캔버스 크기로 맞추고 흰 배경 위에
//! 지정 불투명도로 미리 혼합해 RGB 버퍼로 돌려준다. 파일이 없는 것은
//! 정상이고, 읽기 실패는 경고만 남기고 배경 없이 진행한다.

use std::path::Path;

use image::imageops::FilterType;
use tracing::warn;

/// `<assets_dir>/{ticker}_original_img.png`를 찾아 혼합된 RGB 버퍼 반환.
///
/// 반환 버퍼 길이는 `width * height * 3`로, 비트맵 캔버스에 그대로
/// 올릴 수 있다.
pub fn load_background(
    assets_dir: &Path,
    ticker: &str,
    size: (u32, u32),
    opacity: f64,
) -> Option<Vec<u8>> {
    let path = assets_dir.join(format!("{}_original_img.png", ticker));
    if !path.exists() {
        return None;
    }

    let img = match image::open(&path) {
        Ok(img) => img,
        Err(e) => {
            warn!("배경 이미지 로딩 실패 ({}): {}", path.display(), e);
            return None;
        }
    };

    let alpha = opacity.clamp(0.0, 1.0);
    let resized = img
        .resize_exact(size.0, size.1, FilterType::Triangle)
        .to_rgb8();

    let buffer = resized
        .pixels()
        .flat_map(|p| p.0.map(|c| blend_toward_white(c, alpha)))
        .collect();

    Some(buffer)
}

/// 흰 배경 위에 alpha 비율로 픽셀 하나를 혼합.
fn blend_toward_white(channel: u8, alpha: f64) -> u8 {
    (255.0 - (255.0 - channel as f64) * alpha + 0.5) as u8
}
