//! 3枚のチャートを生成するレポートモジュール
//!
//! 相関係数を計算・解釈するときの3つの注意点をそれぞれ1枚の図で示す。
//!
//! 1. 要約統計量だけではデータの形は分からない（アンスコムの数値例）
//! 2. 外れ値1点の影響はサンプルが小さいほど大きい
//! 3. 順位ベースの相関はレバレッジ点に対して頑健
//!
//! 各関数は出力パスを受け取ってファイルに描画するので、対話的な表示
//! 環境がなくてもテストから呼び出せる。レポートのパラメータは全て
//! このモジュールの定数として固定している（シードも含めて再現可能）。

use std::path::Path;

use crate::datasets::{self, BivariateNormalOptions};
use crate::error::Result;
use crate::stats::{self, CorrMethod};
use crate::vis::{Figure, Panel, PlotSettings};

/// 2変量正規サンプルの平均ベクトル
const SAMPLE_MEAN: [f64; 2] = [4.0, 4.0];
/// 2変量正規サンプルの共分散行列（相関 -0.7）
const SAMPLE_COV: [[f64; 2]; 2] = [[1.0, -0.7], [-0.7, 1.0]];
/// フルサンプルの大きさ
const FULL_SAMPLE_SIZE: usize = 500;
/// フルサンプル生成用のシード
const SAMPLE_SEED: u64 = 42;
/// サブサンプル抽出用のシード
const SUBSAMPLE_SEED: u64 = 7;
/// 比較するサブサンプルの大きさ（フルサンプルとの3枚比較になる）
const SUBSAMPLE_SIZES: [usize; 2] = [15, 50];
/// レバレッジ効果を示すための合成外れ値
const OUTLIER_POINT: (f64, f64) = (18.0, 8.0);
/// mtcarsに合成する外れ値の標準偏差倍率
const SD_MULTIPLIERS: [f64; 6] = [2.0, 3.0, 4.0, 5.0, 6.0, 8.0];

/// 軸ラベルが既定値のままなら置き換える
fn label_defaults(settings: &PlotSettings, x_label: &str, y_label: &str) -> PlotSettings {
    let mut settings = settings.clone();
    if settings.x_label == "x" {
        settings.x_label = x_label.to_string();
    }
    if settings.y_label == "y" {
        settings.y_label = y_label.to_string();
    }
    settings
}

/// アンスコムの数値例の4パネル図を描画
///
/// 4組とも散布の形は大きく異なるのに、ピアソン相関は全て約0.82に
/// なることを示す。各パネルには係数の注釈と傾向線が入る。
pub fn anscombe_quartet_figure<P: AsRef<Path>>(path: P, settings: &PlotSettings) -> Result<()> {
    let long = datasets::anscombe_long()?;
    let labels = long.get_column_string_values("dataset")?;
    let x_all = long.get_column_numeric_values("x")?;
    let y_all = long.get_column_numeric_values("y")?;

    // グループラベルの初出順にパネルを作る
    let mut sets: Vec<String> = Vec::new();
    for label in &labels {
        if !sets.contains(label) {
            sets.push(label.clone());
        }
    }

    let mut figure = Figure::new("Anscombe's quartet", (2, 2));
    for set in &sets {
        let x: Vec<f64> = labels
            .iter()
            .zip(x_all.iter())
            .filter(|(l, _)| *l == set)
            .map(|(_, &v)| v)
            .collect();
        let y: Vec<f64> = labels
            .iter()
            .zip(y_all.iter())
            .filter(|(l, _)| *l == set)
            .map(|(_, &v)| v)
            .collect();

        let panel = Panel::new(format!("Set {}", set), x, y)?
            .with_fit()?
            .annotate_methods(&[CorrMethod::Pearson])?;
        figure.add_panel(panel);
    }

    figure.render(path, &label_defaults(settings, "x", "y"))
}

/// 外れ値の影響とサンプルサイズの関係を示す図を描画
///
/// 同じ外れ値 (18, 8) を15点・50点・500点のサンプルに注入し、
/// ピアソン相関の変化量がサンプルが大きいほど小さくなることを
/// 横並びの3パネルで示す。
pub fn outlier_sample_size_figure<P: AsRef<Path>>(
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let full = datasets::bivariate_normal(&BivariateNormalOptions {
        mean: SAMPLE_MEAN,
        cov: SAMPLE_COV,
        n: FULL_SAMPLE_SIZE,
        seed: SAMPLE_SEED,
    })?;

    let mut figure = Figure::new("One outlier, three sample sizes", (1, 3));

    let sizes = SUBSAMPLE_SIZES
        .iter()
        .copied()
        .chain(std::iter::once(FULL_SAMPLE_SIZE));
    for n in sizes {
        let sample = if n == FULL_SAMPLE_SIZE {
            full.clone()
        } else {
            stats::subsample(&full, n, SUBSAMPLE_SEED)?
        };

        let mut x = sample.get_column_numeric_values("x")?;
        let mut y = sample.get_column_numeric_values("y")?;
        let r_without = stats::pearson(&x, &y)?;

        x.push(OUTLIER_POINT.0);
        y.push(OUTLIER_POINT.1);
        let r_with = stats::pearson(&x, &y)?;

        let panel = Panel::new(format!("n = {}", n), x, y)?
            .with_fit()?
            .highlight_from(n)
            .with_series_labels("sample", Some("injected outlier".to_string()))
            .annotate(format!("r = {:.2} without outlier", r_without))
            .annotate(format!("r = {:.2} with outlier", r_with));
        figure.add_panel(panel);
    }

    figure.render(path, &label_defaults(settings, "x", "y"))
}

/// 順位相関の頑健さを示す図を描画
///
/// mtcarsの馬力と燃費に、平均 + m·sd の位置の合成外れ値行を加え、
/// ピアソンだけが大きく動くことを3手法の注釈付きで示す。
pub fn rank_methods_figure<P: AsRef<Path>>(path: P, settings: &PlotSettings) -> Result<()> {
    let methods = [CorrMethod::Pearson, CorrMethod::Kendall, CorrMethod::Spearman];

    let cars = datasets::mtcars()?;
    let (augmented, outlier_start) =
        datasets::append_sd_outliers(&cars, "hp", "mpg", &SD_MULTIPLIERS)?;

    let base_x = cars.get_column_numeric_values("hp")?;
    let base_y = cars.get_column_numeric_values("mpg")?;
    let aug_x = augmented.get_column_numeric_values("hp")?;
    let aug_y = augmented.get_column_numeric_values("mpg")?;

    let mut figure = Figure::new("Rank correlations resist leverage points", (1, 2));

    let base_panel = Panel::new("original data", base_x, base_y)?
        .with_fit()?
        .with_series_labels("observations", None)
        .annotate_methods(&methods)?;
    figure.add_panel(base_panel);

    let augmented_panel = Panel::new("with synthetic outliers", aug_x, aug_y)?
        .with_fit()?
        .highlight_from(outlier_start)
        .with_series_labels("observations", Some("synthetic outlier".to_string()))
        .annotate_methods(&methods)?;
    figure.add_panel(augmented_panel);

    figure.render(path, &label_defaults(settings, "hp", "mpg"))
}
