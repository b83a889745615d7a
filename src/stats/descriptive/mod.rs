// 記述統計モジュール

use crate::error::{CorrvisError, Result};
use crate::stats::DescriptiveStats;

/// 対になった2列の長さと件数を検証する
pub(crate) fn check_pair(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(CorrvisError::Consistency(format!(
            "データ長が一致しません: x={}, y={}",
            x.len(),
            y.len()
        )));
    }

    if x.len() < 2 {
        return Err(CorrvisError::InsufficientData(
            "相関係数の計算には少なくとも2つの観測値が必要です".into(),
        ));
    }

    Ok(())
}

/// 記述統計量を計算する内部実装
pub(crate) fn describe_impl(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(CorrvisError::Empty(
            "記述統計量の計算には少なくとも1つのデータが必要です".into(),
        ));
    }

    let count = data.len();
    let mean = data.iter().sum::<f64>() / count as f64;

    // 標準偏差の計算（不偏推定量）
    let variance = if count > 1 {
        data.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64
    } else {
        0.0
    };
    let std = variance.sqrt();

    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min,
        max,
    })
}

/// 共分散を計算する内部実装
pub(crate) fn covariance_impl(x: &[f64], y: &[f64]) -> Result<f64> {
    check_pair(x, y)?;

    let n = x.len();
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let cov = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>()
        / (n - 1) as f64;

    Ok(cov)
}
