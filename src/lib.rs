//! corrvis: 相関係数の計算と注釈付き散布図によるレポート生成
//!
//! 相関係数（Pearson, Kendall, Spearman）を計算・解釈するときの注意点を
//! 示す3枚のチャートを生成するためのクレート。小さな表形式データの抽象、
//! 3種類の相関係数と傾向線のための単回帰、シード付きのデータ生成、
//! Plottersによる複数パネル描画から構成される。
//!
//! チャート本体は [`report`] モジュールの3つの関数として公開されており、
//! いずれも出力パスを受け取ってファイルに描画するだけなので、表示環境の
//! ないテストからもそのまま呼び出せる。

pub mod dataframe;
pub mod datasets;
pub mod error;
pub mod report;
pub mod series;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use dataframe::{DataFrame, LongToWideOptions, WideToLongOptions};
pub use error::{CorrvisError, Result};
pub use series::Series;
pub use stats::{CorrMethod, CorrelationResult, DescriptiveStats, LinearFit};
pub use vis::{Figure, OutputType, Panel, PlotSettings};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
