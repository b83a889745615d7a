//! 相関係数レポートのデモバイナリ
//!
//! 3枚のチャートを target/report/ 以下にPNGとして出力します。

use std::path::Path;

use corrvis::report;
use corrvis::vis::PlotSettings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new("target/report");
    std::fs::create_dir_all(out_dir)?;

    println!("サンプル1: アンスコムの数値例（要約統計量の限界）");
    let path = out_dir.join("anscombe_quartet.png");
    let settings = PlotSettings {
        width: 1000,
        height: 800,
        ..PlotSettings::default()
    };
    report::anscombe_quartet_figure(&path, &settings)?;
    println!("  ✓ 図を生成しました: {}", path.display());

    println!("サンプル2: 外れ値の影響とサンプルサイズ");
    let path = out_dir.join("outlier_sample_size.png");
    let settings = PlotSettings {
        width: 1440,
        height: 520,
        ..PlotSettings::default()
    };
    report::outlier_sample_size_figure(&path, &settings)?;
    println!("  ✓ 図を生成しました: {}", path.display());

    println!("サンプル3: 順位相関のレバレッジ点への頑健さ");
    let path = out_dir.join("rank_methods.png");
    let settings = PlotSettings {
        width: 1100,
        height: 560,
        ..PlotSettings::default()
    };
    report::rank_methods_figure(&path, &settings)?;
    println!("  ✓ 図を生成しました: {}", path.display());

    Ok(())
}
