//! 종목 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 스크리너 CSV 전체를 차트 이미지로 렌더링
//! stockdash generate -i data/stocks_list_filter.csv -o assets/output
//!
//! # 배경 이미지 디렉토리 지정
//! stockdash generate -i data/stocks.csv -o out --assets-dir assets/images
//!
//! # 단일 티커의 정규화/파생 지표 확인 (이미지 생성 없음)
//! stockdash inspect -i data/stocks.csv -t AAPL
//! ```

use clap::{Parser, Subcommand};
use tracing::error;

use stockdash_cli::commands::generate::{run_generate, GenerateConfig};
use stockdash_cli::commands::inspect::{run_inspect, InspectConfig};

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "스크리너 CSV 기반 투자 대시보드 이미지 생성기", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// CSV의 모든 종목에 대해 대시보드 이미지 생성
    Generate {
        /// 입력 CSV 파일 경로
        #[arg(short, long)]
        input: String,

        /// 출력 디렉토리 (없으면 생성)
        #[arg(short, long, default_value = "assets/output")]
        output_dir: String,

        /// 배경 원본 이미지 디렉토리
        #[arg(long, default_value = "assets/images")]
        assets_dir: String,
    },

    /// 한 종목의 정규화된 필드와 파생 지표 출력
    Inspect {
        /// 입력 CSV 파일 경로
        #[arg(short, long)]
        input: String,

        /// 조회할 티커
        #[arg(short, long)]
        ticker: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (없어도 에러 안남)
    dotenvy::dotenv().ok();

    // 트레이싱 초기화
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            assets_dir,
        } => {
            let config = GenerateConfig {
                input: input.into(),
                output_dir: output_dir.into(),
                assets_dir: assets_dir.into(),
            };

            match run_generate(&config) {
                Ok(stats) => {
                    println!(
                        "\n✅ 차트 생성 완료: {} 성공 / {} 실패 (총 {}건)",
                        stats.success, stats.errors, stats.total
                    );
                    if !stats.failures.is_empty() {
                        println!("\n⚠️  실패 목록:");
                        for (ticker, reason) in &stats.failures {
                            println!("  ❌ {} - {}", ticker, reason);
                        }
                    }
                }
                Err(e) => {
                    error!("Generate failed: {}", e);
                    return Err(e.into());
                }
            }
        }

        Commands::Inspect { input, ticker } => {
            let config = InspectConfig {
                input: input.into(),
                ticker,
            };

            if let Err(e) = run_inspect(&config) {
                error!("Inspect failed: {}", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
