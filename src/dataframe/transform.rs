//! ワイド形式とロング形式の相互変換
//!
//! `x1,x2,...,y1,y2,...` のように「スタブ名 + 接尾辞」の規約で対になった
//! 列を持つ表を、接尾辞をグループラベルとするロング形式へ変換する。
//! `long_to_wide`は厳密な逆変換で、`wide_to_long`の結果に適用すると
//! 元の表を完全に再現する。

use std::collections::{HashMap, HashSet};

use super::DataFrame;
use crate::error::{CorrvisError, Result};
use crate::series::Series;

/// ワイド形式からロング形式への変換オプション
#[derive(Debug, Clone)]
pub struct WideToLongOptions {
    /// 対になった列のスタブ名（例: "x", "y"）
    pub stubs: Vec<String>,
    /// グループラベルの列名
    pub group_name: Option<String>,
}

impl Default for WideToLongOptions {
    fn default() -> Self {
        Self {
            stubs: Vec::new(),
            group_name: Some("group".to_string()),
        }
    }
}

/// ロング形式からワイド形式への変換オプション
#[derive(Debug, Clone)]
pub struct LongToWideOptions {
    /// グループラベルを含む列名
    pub group_column: String,
    /// ワイド化する値列（Noneの場合はグループ列以外の全て）
    pub value_columns: Option<Vec<String>>,
}

impl Default for LongToWideOptions {
    fn default() -> Self {
        Self {
            group_column: "group".to_string(),
            value_columns: None,
        }
    }
}

impl DataFrame {
    /// ワイド形式の表をロング形式に変換
    ///
    /// 全ての列が `スタブ名 + 接尾辞` の形式で名付けられている必要があり、
    /// 全スタブで共有される接尾辞がグループラベルになる。出力は
    /// `[グループ, スタブ1, スタブ2, ...]` の列構成で、グループごとに
    /// 元の行順を保ったまま縦に並ぶ。
    ///
    /// # 例
    /// ```
    /// use corrvis::{DataFrame, WideToLongOptions};
    ///
    /// let mut df = DataFrame::new();
    /// df.add_numeric_column("x1", &[1.0, 2.0]).unwrap();
    /// df.add_numeric_column("x2", &[3.0, 4.0]).unwrap();
    /// df.add_numeric_column("y1", &[10.0, 20.0]).unwrap();
    /// df.add_numeric_column("y2", &[30.0, 40.0]).unwrap();
    ///
    /// let options = WideToLongOptions {
    ///     stubs: vec!["x".to_string(), "y".to_string()],
    ///     group_name: Some("dataset".to_string()),
    /// };
    /// let long = df.wide_to_long(&options).unwrap();
    /// assert_eq!(long.row_count(), 4);
    /// assert_eq!(
    ///     long.column_names(),
    ///     &["dataset".to_string(), "x".to_string(), "y".to_string()]
    /// );
    /// ```
    pub fn wide_to_long(&self, options: &WideToLongOptions) -> Result<DataFrame> {
        if options.stubs.is_empty() {
            return Err(CorrvisError::InvalidParameter(
                "スタブ名が指定されていません".to_string(),
            ));
        }

        let group_name = options
            .group_name
            .clone()
            .unwrap_or_else(|| "group".to_string());

        // 長いスタブ名から先に照合する（"x"が"xy1"を誤って拾わないように）
        let mut stubs_by_len: Vec<&String> = options.stubs.iter().collect();
        stubs_by_len.sort_by_key(|s| std::cmp::Reverse(s.len()));

        // 各列を (スタブ, 接尾辞) に分解
        let mut parsed: HashMap<(String, String), String> = HashMap::new();
        let mut suffixes: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for column in self.column_names() {
            let mut matched = None;
            for stub in &stubs_by_len {
                if let Some(suffix) = column.strip_prefix(stub.as_str()) {
                    if !suffix.is_empty() {
                        matched = Some((stub.to_string(), suffix.to_string()));
                        break;
                    }
                }
            }

            let (stub, suffix) = matched.ok_or_else(|| {
                CorrvisError::Consistency(format!(
                    "列 '{}' はどのスタブ名にも一致しません",
                    column
                ))
            })?;

            // 接尾辞の初出順を保持
            if seen.insert(suffix.clone()) {
                suffixes.push(suffix.clone());
            }
            parsed.insert((stub, suffix), column.clone());
        }

        // 全スタブが全接尾辞を持っているか確認
        for suffix in &suffixes {
            for stub in &options.stubs {
                if !parsed.contains_key(&(stub.clone(), suffix.clone())) {
                    return Err(CorrvisError::Consistency(format!(
                        "列 '{}{}' がありません（対になる列が不足しています）",
                        stub, suffix
                    )));
                }
            }
        }

        // グループ優先（接尾辞ごとに元の行順）で縦に展開する
        let n_rows = self.row_count();
        let mut group_values = Vec::with_capacity(n_rows * suffixes.len());
        let mut stub_values: Vec<Vec<String>> = options
            .stubs
            .iter()
            .map(|_| Vec::with_capacity(n_rows * suffixes.len()))
            .collect();

        for suffix in &suffixes {
            for i in 0..n_rows {
                group_values.push(suffix.clone());
                for (k, stub) in options.stubs.iter().enumerate() {
                    let column = &parsed[&(stub.clone(), suffix.clone())];
                    let series = self.get_column(column).unwrap();
                    stub_values[k].push(series.values()[i].clone());
                }
            }
        }

        let mut result = DataFrame::new();
        result.add_column(
            group_name.clone(),
            Series::new(group_values, Some(group_name)),
        )?;
        for (stub, values) in options.stubs.iter().zip(stub_values) {
            result.add_column(stub.clone(), Series::new(values, Some(stub.clone())))?;
        }
        Ok(result)
    }

    /// ロング形式の表をワイド形式に変換（`wide_to_long`の逆変換）
    ///
    /// グループ列の値が接尾辞に戻り、列は値列ごとにまとめて
    /// `スタブ名 + 接尾辞` の名前で並ぶ。グループは初出順。
    pub fn long_to_wide(&self, options: &LongToWideOptions) -> Result<DataFrame> {
        if !self.contains_column(&options.group_column) {
            return Err(CorrvisError::ColumnNotFound(options.group_column.clone()));
        }

        let value_columns: Vec<String> = match &options.value_columns {
            Some(columns) => {
                for column in columns {
                    if !self.contains_column(column) {
                        return Err(CorrvisError::ColumnNotFound(column.clone()));
                    }
                }
                columns.clone()
            }
            None => self
                .column_names()
                .iter()
                .filter(|c| **c != options.group_column)
                .cloned()
                .collect(),
        };

        if value_columns.is_empty() {
            return Err(CorrvisError::Empty(
                "ワイド化する値列がありません".to_string(),
            ));
        }

        // グループごとの行インデックスを初出順で収集
        let group_values = self.get_column_string_values(&options.group_column)?;
        let mut groups: Vec<String> = Vec::new();
        let mut group_rows: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, group) in group_values.iter().enumerate() {
            if !group_rows.contains_key(group) {
                groups.push(group.clone());
            }
            group_rows.entry(group.clone()).or_default().push(i);
        }

        // ワイド形式は長方形の表でなければならない
        let rows_per_group = group_rows[&groups[0]].len();
        for group in &groups {
            if group_rows[group].len() != rows_per_group {
                return Err(CorrvisError::Consistency(format!(
                    "グループ '{}' の行数が他のグループと一致しません",
                    group
                )));
            }
        }

        let mut result = DataFrame::new();
        for stub in &value_columns {
            let series = self.get_column(stub).unwrap();
            for group in &groups {
                let name = format!("{}{}", stub, group);
                let values: Vec<String> = group_rows[group]
                    .iter()
                    .map(|&i| series.values()[i].clone())
                    .collect();
                result.add_column(name.clone(), Series::new(values, Some(name)))?;
            }
        }
        Ok(result)
    }
}
