//! Plottersを使用したチャート描画モジュール
//!
//! 1つのデータセットを「注釈付き散布図パネル」として描画し、複数の
//! パネルをグリッドに並べた1枚の図として出力する。凡例は図全体で
//! 1つにまとめ、パネルごとには表示しない。

pub mod config;
pub mod figure;
pub mod panel;

pub use self::config::{OutputType, PlotSettings};
pub use self::figure::Figure;
pub use self::panel::Panel;
