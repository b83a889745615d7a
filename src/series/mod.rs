use num_traits::NumCast;
use std::cmp::PartialOrd;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{CorrvisError, Result};

/// Series構造体: 名前付きの一次元の値の配列
///
/// DataFrameの列の実体。レポート用途ではラベルインデックスを
/// 使わないため、値と名前のみを保持する。
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// Seriesのデータ値
    values: Vec<T>,

    /// 名前（オプション）
    name: Option<String>,
}

// 基本実装
impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// 新しいSeriesをベクトルから作成
    pub fn new(values: Vec<T>, name: Option<String>) -> Self {
        Series { values, name }
    }

    /// Seriesの長さを取得
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Seriesが空かどうか
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 位置から値を取得
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// 値の配列を取得
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// 値を末尾に追加
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// 名前を取得
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// 名前を設定
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

// 数値型のSeriesに対する特化実装
impl<T> Series<T>
where
    T: Debug
        + Clone
        + Copy
        + Sum<T>
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + NumCast
        + Default,
{
    /// 合計を計算
    pub fn sum(&self) -> T {
        if self.values.is_empty() {
            T::default()
        } else {
            self.values.iter().copied().sum()
        }
    }

    /// 平均を計算
    pub fn mean(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(CorrvisError::Empty(
                "空のSeriesの平均は計算できません".to_string(),
            ));
        }

        let sum = self.sum();
        let count = match num_traits::cast(self.len()) {
            Some(n) => n,
            None => {
                return Err(CorrvisError::Cast(
                    "長さを数値型にキャストできません".to_string(),
                ))
            }
        };

        Ok(sum / count)
    }

    /// 最小値を計算
    pub fn min(&self) -> Result<T> {
        self.values
            .iter()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .copied()
            .ok_or_else(|| CorrvisError::Empty("空のSeriesの最小値は計算できません".to_string()))
    }

    /// 最大値を計算
    pub fn max(&self) -> Result<T> {
        self.values
            .iter()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .copied()
            .ok_or_else(|| CorrvisError::Empty("空のSeriesの最大値は計算できません".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_basic() {
        let series = Series::new(vec![1.0, 2.0, 3.0], Some("test".to_string()));
        assert_eq!(series.len(), 3);
        assert_eq!(series.name(), Some(&"test".to_string()));
        assert_eq!(series.get(1), Some(&2.0));
        assert_eq!(series.get(3), None);

        let renamed = series.with_name("renamed".to_string());
        assert_eq!(renamed.name(), Some(&"renamed".to_string()));
    }

    #[test]
    fn test_series_numeric() {
        let series = Series::new(vec![10.0, 20.0, 30.0], None);
        assert_eq!(series.sum(), 60.0);
        assert_eq!(series.mean().unwrap(), 20.0);
        assert_eq!(series.min().unwrap(), 10.0);
        assert_eq!(series.max().unwrap(), 30.0);
    }

    #[test]
    fn test_empty_series() {
        let empty: Series<f64> = Series::new(vec![], None);
        assert!(empty.is_empty());
        // 空のSeriesでの統計計算はエラーになるはず
        assert!(empty.mean().is_err());
        assert!(empty.min().is_err());
        assert!(empty.max().is_err());
    }
}
