//! レポートで使うデータセットの提供モジュール
//!
//! 3系統のデータセットを提供する。
//!
//! - アンスコムの数値例: 要約統計量がほぼ同一で形状の異なる4組のデータ
//! - シード付きの2変量正規サンプル: 平均ベクトルと共分散行列から生成
//! - 車の性能データ(mtcars): 同梱の読み取り専用CSVに、平均+m×標準偏差の
//!   位置に合成した外れ値行を加えたもの

use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::dataframe::{DataFrame, WideToLongOptions};
use crate::error::{CorrvisError, Result};
use crate::series::Series;
use crate::stats;

/// 同梱のmtcarsデータ（R標準のモーター・トレンド誌1974年データ）
const MTCARS_CSV: &str = include_str!("../../data/mtcars.csv");

// アンスコムの数値例（Anscombe 1973の文献値）
const ANSCOMBE_X123: [f64; 11] = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
const ANSCOMBE_Y1: [f64; 11] = [
    8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68,
];
const ANSCOMBE_Y2: [f64; 11] = [
    9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74,
];
const ANSCOMBE_Y3: [f64; 11] = [
    7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73,
];
const ANSCOMBE_X4: [f64; 11] = [8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 19.0, 8.0, 8.0, 8.0];
const ANSCOMBE_Y4: [f64; 11] = [
    6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.50, 5.56, 7.91, 6.89,
];

/// アンスコムの数値例をワイド形式で作成
///
/// 列は `x1..x4, y1..y4`。4組とも平均・分散・ピアソン相関がほぼ同一に
/// なるよう設計された文献値そのまま。
pub fn anscombe() -> Result<DataFrame> {
    let mut df = DataFrame::new();
    df.add_numeric_column("x1", &ANSCOMBE_X123)?;
    df.add_numeric_column("x2", &ANSCOMBE_X123)?;
    df.add_numeric_column("x3", &ANSCOMBE_X123)?;
    df.add_numeric_column("x4", &ANSCOMBE_X4)?;
    df.add_numeric_column("y1", &ANSCOMBE_Y1)?;
    df.add_numeric_column("y2", &ANSCOMBE_Y2)?;
    df.add_numeric_column("y3", &ANSCOMBE_Y3)?;
    df.add_numeric_column("y4", &ANSCOMBE_Y4)?;
    Ok(df)
}

/// アンスコムの数値例をロング形式（dataset, x, y）で作成
pub fn anscombe_long() -> Result<DataFrame> {
    anscombe()?.wide_to_long(&WideToLongOptions {
        stubs: vec!["x".to_string(), "y".to_string()],
        group_name: Some("dataset".to_string()),
    })
}

/// 2変量正規サンプルの生成オプション
#[derive(Debug, Clone, Copy)]
pub struct BivariateNormalOptions {
    /// 平均ベクトル
    pub mean: [f64; 2],
    /// 共分散行列（対称・半正定値）
    pub cov: [[f64; 2]; 2],
    /// サンプル数
    pub n: usize,
    /// 乱数シード（同じシードなら同じサンプル列になる）
    pub seed: u64,
}

impl Default for BivariateNormalOptions {
    fn default() -> Self {
        Self {
            mean: [0.0, 0.0],
            cov: [[1.0, 0.0], [0.0, 1.0]],
            n: 100,
            seed: 0,
        }
    }
}

/// 2x2共分散行列を検証してコレスキー因子を求める
fn cholesky_2x2(cov: &[[f64; 2]; 2]) -> Result<[f64; 3]> {
    let c00 = cov[0][0];
    let c01 = cov[0][1];
    let c10 = cov[1][0];
    let c11 = cov[1][1];

    if (c01 - c10).abs() > 1e-12 {
        return Err(CorrvisError::InvalidParameter(format!(
            "共分散行列が対称ではありません: {} != {}",
            c01, c10
        )));
    }
    if c00 < 0.0 || c11 < 0.0 {
        return Err(CorrvisError::InvalidParameter(
            "共分散行列の対角要素（分散）が負です".into(),
        ));
    }
    let det = c00 * c11 - c01 * c01;
    if det < -1e-12 {
        return Err(CorrvisError::InvalidParameter(
            "共分散行列が半正定値ではありません".into(),
        ));
    }

    let l11 = c00.sqrt();
    let l21 = if l11 > 0.0 {
        c01 / l11
    } else if c01.abs() > 1e-12 {
        return Err(CorrvisError::InvalidParameter(
            "共分散行列が半正定値ではありません".into(),
        ));
    } else {
        0.0
    };
    let l22 = (c11 - l21 * l21).max(0.0).sqrt();

    Ok([l11, l21, l22])
}

/// 2変量正規分布からシード付きでサンプルを生成
///
/// # 説明
/// 指定した平均ベクトルと共分散行列を持つ2次元正規分布からn件の独立
/// サンプルを生成し、`x`, `y` の2列のDataFrameとして返します。乱数生成器
/// はシード付きのStdRngなので、同じオプションで呼べばプラットフォームに
/// よらず同一のサンプル列が得られます。
///
/// # 例
/// ```
/// use corrvis::datasets::{self, BivariateNormalOptions};
///
/// let options = BivariateNormalOptions {
///     mean: [4.0, 4.0],
///     cov: [[1.0, -0.7], [-0.7, 1.0]],
///     n: 50,
///     seed: 42,
/// };
/// let df = datasets::bivariate_normal(&options).unwrap();
/// assert_eq!(df.row_count(), 50);
/// ```
pub fn bivariate_normal(options: &BivariateNormalOptions) -> Result<DataFrame> {
    if options.n == 0 {
        return Err(CorrvisError::InvalidParameter(
            "サンプル数は正の値である必要があります".into(),
        ));
    }

    let [l11, l21, l22] = cholesky_2x2(&options.cov)?;

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut x_values = Vec::with_capacity(options.n);
    let mut y_values = Vec::with_capacity(options.n);

    for _ in 0..options.n {
        let z1: f64 = rng.sample(StandardNormal);
        let z2: f64 = rng.sample(StandardNormal);
        x_values.push(options.mean[0] + l11 * z1);
        y_values.push(options.mean[1] + l21 * z1 + l22 * z2);
    }

    log::debug!(
        "2変量正規サンプルを生成: n={}, seed={}",
        options.n,
        options.seed
    );

    let mut df = DataFrame::new();
    df.add_numeric_column("x", &x_values)?;
    df.add_numeric_column("y", &y_values)?;
    Ok(df)
}

/// 同梱のmtcarsデータセットを読み込む
///
/// 32車種の性能指標（mpg, hp など）。読み取り専用の外部リソースとして
/// 扱い、毎回CSVから構築する。
pub fn mtcars() -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(MTCARS_CSV.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(CorrvisError::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // データを列ごとに収集
    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result.map_err(CorrvisError::Csv)?;
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(record.get(i).unwrap_or("").to_string());
        }
    }

    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(columns) {
        let series = Series::new(values, Some(header.clone()));
        df.add_column(header, series)?;
    }
    Ok(df)
}

/// 2つの数値列に対して高レバレッジの外れ値行を合成して追加
///
/// 各倍率mについて `a = mean_a + m·sd_a`, `b = mean_b + m·sd_b` の位置に
/// 1行ずつ追加する。戻り値は (追加後の2列DataFrame, 合成行が始まる
/// 行インデックス)。
pub fn append_sd_outliers(
    df: &DataFrame,
    col_a: &str,
    col_b: &str,
    multipliers: &[f64],
) -> Result<(DataFrame, usize)> {
    if multipliers.is_empty() {
        return Err(CorrvisError::InvalidParameter(
            "外れ値の倍率が指定されていません".into(),
        ));
    }

    let mut a_values = df.get_column_numeric_values(col_a)?;
    let mut b_values = df.get_column_numeric_values(col_b)?;
    let base_rows = a_values.len();

    let stats_a = stats::describe(&a_values)?;
    let stats_b = stats::describe(&b_values)?;

    for &m in multipliers {
        a_values.push(stats_a.mean + m * stats_a.std);
        b_values.push(stats_b.mean + m * stats_b.std);
    }

    log::debug!(
        "外れ値行を追加: 列=({}, {}), 倍率={:?}",
        col_a,
        col_b,
        multipliers
    );

    let mut result = DataFrame::new();
    result.add_numeric_column(col_a, &a_values)?;
    result.add_numeric_column(col_b, &b_values)?;
    Ok((result, base_rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anscombe_shape() {
        let df = anscombe().unwrap();
        assert_eq!(df.row_count(), 11);
        assert_eq!(df.column_names().len(), 8);

        let long = anscombe_long().unwrap();
        assert_eq!(long.row_count(), 44);
        assert_eq!(
            long.column_names(),
            &["dataset".to_string(), "x".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_bivariate_normal_rejects_bad_covariance() {
        let mut options = BivariateNormalOptions {
            n: 10,
            ..Default::default()
        };

        options.cov = [[1.0, 0.5], [0.3, 1.0]];
        assert!(matches!(
            bivariate_normal(&options),
            Err(CorrvisError::InvalidParameter(_))
        ));

        // 相関の絶対値が1を超える（半正定値でない）
        options.cov = [[1.0, 1.5], [1.5, 1.0]];
        assert!(bivariate_normal(&options).is_err());

        options.cov = [[-1.0, 0.0], [0.0, 1.0]];
        assert!(bivariate_normal(&options).is_err());
    }

    #[test]
    fn test_bivariate_normal_rejects_zero_size() {
        let options = BivariateNormalOptions {
            n: 0,
            ..Default::default()
        };
        assert!(matches!(
            bivariate_normal(&options),
            Err(CorrvisError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_degenerate_covariance_is_allowed() {
        // 分散ゼロの退化した行列は半正定値なのでサンプリング自体は通る
        let options = BivariateNormalOptions {
            cov: [[0.0, 0.0], [0.0, 1.0]],
            n: 5,
            ..Default::default()
        };
        let df = bivariate_normal(&options).unwrap();
        let x = df.get_column_numeric_values("x").unwrap();
        assert!(x.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_mtcars_loads() {
        let df = mtcars().unwrap();
        assert_eq!(df.row_count(), 32);
        assert!(df.contains_column("mpg"));
        assert!(df.contains_column("hp"));

        let mpg = df.get_column_numeric_values("mpg").unwrap();
        assert!((mpg[0] - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_append_sd_outliers() {
        let mut df = DataFrame::new();
        df.add_numeric_column("a", &[1.0, 2.0, 3.0]).unwrap();
        df.add_numeric_column("b", &[10.0, 20.0, 30.0]).unwrap();

        let (augmented, outlier_start) =
            append_sd_outliers(&df, "a", "b", &[2.0, 3.0]).unwrap();
        assert_eq!(outlier_start, 3);
        assert_eq!(augmented.row_count(), 5);

        // a: mean=2, sd=1 → 2 + 2·1 = 4
        let a = augmented.get_column_numeric_values("a").unwrap();
        assert!((a[3] - 4.0).abs() < 1e-10);
        // b: mean=20, sd=10 → 20 + 3·10 = 50
        let b = augmented.get_column_numeric_values("b").unwrap();
        assert!((b[4] - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_append_sd_outliers_empty_multipliers() {
        let mut df = DataFrame::new();
        df.add_numeric_column("a", &[1.0, 2.0]).unwrap();
        df.add_numeric_column("b", &[1.0, 2.0]).unwrap();
        assert!(matches!(
            append_sd_outliers(&df, "a", "b", &[]),
            Err(CorrvisError::InvalidParameter(_))
        ));
    }
}
