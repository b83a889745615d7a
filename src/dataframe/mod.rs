//! 表形式データを扱うモジュール
//!
//! レポートで使うデータセットは全て小さな表なので、列を文字列として
//! 保持する単純な実装を採用している。Rustのf64のDisplayは往復可能な
//! 最短表現を出力するため、数値列もこの表現で損失なく保持できる。

pub mod transform;

use std::collections::HashMap;

use crate::error::{CorrvisError, Result};
use crate::series::Series;

pub use transform::{LongToWideOptions, WideToLongOptions};

/// データフレーム構造体: 順序付きの列の集合
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    data: HashMap<String, Series<String>>,
    /// 列の順序を保持
    columns: Vec<String>,
    row_count: usize,
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFrame {
    /// 空のDataFrameを作成
    pub fn new() -> Self {
        DataFrame {
            data: HashMap::new(),
            columns: Vec::new(),
            row_count: 0,
        }
    }

    /// 列を追加
    ///
    /// 既存の列と行数が一致しない場合はエラーになる。
    pub fn add_column(&mut self, name: impl Into<String>, series: Series<String>) -> Result<()> {
        let name = name.into();
        if self.data.contains_key(&name) {
            return Err(CorrvisError::DuplicateColumnName(name));
        }
        if !self.columns.is_empty() && series.len() != self.row_count {
            return Err(CorrvisError::InconsistentRowCount {
                expected: self.row_count,
                found: series.len(),
            });
        }

        if self.columns.is_empty() {
            self.row_count = series.len();
        }
        self.columns.push(name.clone());
        self.data.insert(name, series);
        Ok(())
    }

    /// 数値列を追加するショートカット
    pub fn add_numeric_column(&mut self, name: impl Into<String>, values: &[f64]) -> Result<()> {
        let name = name.into();
        let series = Series::new(
            values.iter().map(|v| v.to_string()).collect(),
            Some(name.clone()),
        );
        self.add_column(name, series)
    }

    /// 行を追加
    ///
    /// 全ての列の値を含む行データが必要。
    pub fn add_row(&mut self, mut row: HashMap<String, String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(CorrvisError::InconsistentRowCount {
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        // 列の順序に従って値を追加
        for column_name in &self.columns {
            match row.remove(column_name) {
                Some(value) => {
                    self.data.get_mut(column_name).unwrap().push(value);
                }
                None => {
                    return Err(CorrvisError::ColumnNotFound(column_name.clone()));
                }
            }
        }
        self.row_count += 1;
        Ok(())
    }

    /// 列名の一覧を取得
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// 指定された列が存在するか確認
    pub fn contains_column(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// 行が存在しないかどうか
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// 列をSeriesとして取得
    pub fn get_column(&self, name: &str) -> Option<&Series<String>> {
        self.data.get(name)
    }

    /// 列の値を文字列として取得
    pub fn get_column_string_values(&self, name: &str) -> Result<Vec<String>> {
        self.data
            .get(name)
            .map(|s| s.values().to_vec())
            .ok_or_else(|| CorrvisError::ColumnNotFound(name.to_string()))
    }

    /// 列の値を数値に変換して取得
    pub fn get_column_numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        let series = self
            .data
            .get(name)
            .ok_or_else(|| CorrvisError::ColumnNotFound(name.to_string()))?;

        series
            .values()
            .iter()
            .map(|v| {
                v.parse::<f64>().map_err(|_| {
                    CorrvisError::Cast(format!("列 '{}' の値 '{}' を数値に変換できません", name, v))
                })
            })
            .collect()
    }

    /// 指定した列だけからなるDataFrameを作成
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let mut result = DataFrame::new();
        for &name in names {
            let series = self
                .data
                .get(name)
                .ok_or_else(|| CorrvisError::ColumnNotFound(name.to_string()))?;
            result.add_column(name, series.clone())?;
        }
        Ok(result)
    }

    /// 指定した行インデックスだけからなるDataFrameを作成
    ///
    /// インデックスの並び順がそのまま結果の行順になる。
    pub fn take(&self, indices: &[usize]) -> Result<DataFrame> {
        for &idx in indices {
            if idx >= self.row_count {
                return Err(CorrvisError::Consistency(format!(
                    "行インデックス {} が範囲外です (行数 {})",
                    idx, self.row_count
                )));
            }
        }

        let mut result = DataFrame::new();
        for name in &self.columns {
            let series = &self.data[name];
            let values: Vec<String> = indices
                .iter()
                .map(|&idx| series.values()[idx].clone())
                .collect();
            result.add_column(name.clone(), Series::new(values, Some(name.clone())))?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_numeric_column("a", &[1.0, 2.0, 3.0]).unwrap();
        df.add_numeric_column("b", &[4.0, 5.5, 6.25]).unwrap();
        df
    }

    #[test]
    fn test_add_column_and_access() {
        let df = sample_df();
        assert_eq!(df.row_count(), 3);
        assert_eq!(df.column_names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(
            df.get_column_numeric_values("b").unwrap(),
            vec![4.0, 5.5, 6.25]
        );
        assert!(df.get_column_numeric_values("c").is_err());
    }

    #[test]
    fn test_duplicate_and_mismatched_columns() {
        let mut df = sample_df();
        assert!(matches!(
            df.add_numeric_column("a", &[0.0, 0.0, 0.0]),
            Err(CorrvisError::DuplicateColumnName(_))
        ));
        assert!(matches!(
            df.add_numeric_column("c", &[0.0]),
            Err(CorrvisError::InconsistentRowCount { .. })
        ));
    }

    #[test]
    fn test_add_row() {
        let mut df = sample_df();
        let mut row = HashMap::new();
        row.insert("a".to_string(), "4".to_string());
        row.insert("b".to_string(), "7".to_string());
        df.add_row(row).unwrap();
        assert_eq!(df.row_count(), 4);
        assert_eq!(df.get_column_numeric_values("a").unwrap()[3], 4.0);
    }

    #[test]
    fn test_select_columns() {
        let mut df = sample_df();
        df.add_numeric_column("c", &[7.0, 8.0, 9.0]).unwrap();

        let selected = df.select(&["c", "a"]).unwrap();
        assert_eq!(selected.column_names(), &["c".to_string(), "a".to_string()]);
        assert_eq!(selected.row_count(), 3);
        assert!(df.select(&["missing"]).is_err());
    }

    #[test]
    fn test_take_preserves_order() {
        let df = sample_df();
        let taken = df.take(&[2, 0]).unwrap();
        assert_eq!(taken.get_column_numeric_values("a").unwrap(), vec![3.0, 1.0]);
        assert!(df.take(&[5]).is_err());
    }

    #[test]
    fn test_numeric_roundtrip_is_lossless() {
        // f64のDisplay表現は最短の往復可能表現なので、文字列を
        // 経由しても値が変わらないことを確認する
        let values = [0.1, 1.0 / 3.0, -0.7, 1e-12, 123456.789];
        let mut df = DataFrame::new();
        df.add_numeric_column("v", &values).unwrap();
        let parsed = df.get_column_numeric_values("v").unwrap();
        assert_eq!(parsed, values);
    }
}
