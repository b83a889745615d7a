// corrvis 統計モジュール
//
// レポートで使う統計機能を提供します。記述統計、3種類の相関係数
// （Pearson, Kendall, Spearman）、傾向線のための単回帰、シード付きの
// 無作為抽出が実装されています。

pub mod corr;
pub mod descriptive;
pub mod regression;
pub mod sampling;

use crate::dataframe::DataFrame;
use crate::error::Result;

/// 相関係数の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrMethod {
    /// ピアソンの積率相関
    Pearson,
    /// ケンドールの順位相関（タウb）
    Kendall,
    /// スピアマンの順位相関
    Spearman,
}

impl CorrMethod {
    /// 手法名を文字列で取得
    pub fn name(&self) -> &'static str {
        match self {
            CorrMethod::Pearson => "pearson",
            CorrMethod::Kendall => "kendall",
            CorrMethod::Spearman => "spearman",
        }
    }

    /// 文字列から手法を解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pearson" => Some(CorrMethod::Pearson),
            "kendall" | "kendall-b" | "tau" => Some(CorrMethod::Kendall),
            "spearman" | "rho" => Some(CorrMethod::Spearman),
            _ => None,
        }
    }
}

/// 相関係数の計算結果
///
/// 計算後は不変で、チャートの注釈にのみ使われる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult {
    /// 計算手法
    pub method: CorrMethod,
    /// 相関係数（-1から1）
    pub coefficient: f64,
    /// 観測値の数
    pub sample_size: usize,
}

impl CorrelationResult {
    /// チャート注釈用のラベルを作成（小数点以下2桁）
    pub fn annotation(&self) -> String {
        format!("{} r = {:.2}", self.method.name(), self.coefficient)
    }
}

/// 記述統計量の結果を保持する構造体
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats {
    /// データの件数
    pub count: usize,
    /// 平均値
    pub mean: f64,
    /// 標準偏差（不偏推定量）
    pub std: f64,
    /// 最小値
    pub min: f64,
    /// 最大値
    pub max: f64,
}

/// データの基本統計量を計算
///
/// # 例
/// ```
/// use corrvis::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let stats = stats::describe(&data).unwrap();
/// assert_eq!(stats.mean, 3.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// 共分散を計算
pub fn covariance<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    descriptive::covariance_impl(x.as_ref(), y.as_ref())
}

/// 指定した手法で相関係数を計算
///
/// # 説明
/// 2つの数値配列間の相関係数を計算します。係数は-1から1の範囲で、
/// 1は完全な正の相関、-1は完全な負の相関を示します。観測値が2件未満、
/// またはどちらかの列の分散がゼロの場合はデータ不足エラーになります
/// （NaNを返すことはありません）。
///
/// # 例
/// ```
/// use corrvis::stats::{self, CorrMethod};
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = vec![2.0, 4.0, 5.0, 4.0, 5.0];
/// let result = stats::correlation(&x, &y, CorrMethod::Pearson).unwrap();
/// assert!(result.coefficient > 0.0);
/// assert_eq!(result.sample_size, 5);
/// ```
pub fn correlation<T: AsRef<[f64]>, U: AsRef<[f64]>>(
    x: T,
    y: U,
    method: CorrMethod,
) -> Result<CorrelationResult> {
    let x = x.as_ref();
    let y = y.as_ref();
    let coefficient = match method {
        CorrMethod::Pearson => corr::pearson_impl(x, y)?,
        CorrMethod::Kendall => corr::kendall_impl(x, y)?,
        CorrMethod::Spearman => corr::spearman_impl(x, y)?,
    };

    Ok(CorrelationResult {
        method,
        coefficient,
        sample_size: x.len(),
    })
}

/// ピアソン相関係数を計算
pub fn pearson<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    corr::pearson_impl(x.as_ref(), y.as_ref())
}

/// ケンドールの順位相関係数（タウb）を計算
pub fn kendall<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    corr::kendall_impl(x.as_ref(), y.as_ref())
}

/// スピアマンの順位相関係数を計算
pub fn spearman<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<f64> {
    corr::spearman_impl(x.as_ref(), y.as_ref())
}

/// 単回帰の結果（傾向線用）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// 傾き
    pub slope: f64,
    /// 切片
    pub intercept: f64,
}

impl LinearFit {
    /// 指定したxでの当てはめ値を計算
    pub fn eval(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// yをxに回帰する最小二乗直線を計算
///
/// # 例
/// ```
/// use corrvis::stats;
///
/// let x = vec![1.0, 2.0, 3.0];
/// let y = vec![3.0, 5.0, 7.0];
/// let fit = stats::linear_fit(&x, &y).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-10);
/// assert!((fit.intercept - 1.0).abs() < 1e-10);
/// ```
pub fn linear_fit<T: AsRef<[f64]>, U: AsRef<[f64]>>(x: T, y: U) -> Result<LinearFit> {
    regression::linear_fit_impl(x.as_ref(), y.as_ref())
}

/// シード付きの無作為抽出を行う
///
/// 同じシードで呼べば常に同じ行の部分集合が返る。行の並び順は
/// 元のDataFrameのまま保たれる。
pub fn subsample(df: &DataFrame, size: usize, seed: u64) -> Result<DataFrame> {
    sampling::subsample_impl(df, size, seed)
}
