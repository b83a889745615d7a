// 回帰モジュール
//
// 傾向線の描画に必要な単回帰のみを実装する。信頼区間は扱わない。

use crate::error::{CorrvisError, Result};
use crate::stats::descriptive::check_pair;
use crate::stats::LinearFit;

/// yをxに回帰する最小二乗直線を計算する内部実装
pub(crate) fn linear_fit_impl(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    check_pair(x, y)?;

    let n = x.len();
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let sxx = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum::<f64>();
    if sxx.abs() < f64::EPSILON {
        return Err(CorrvisError::InsufficientData(
            "xの分散がゼロのため回帰直線は定義できません".into(),
        ));
    }

    let sxy = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>();

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    Ok(LinearFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fit() {
        // y = 2x + 1
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let fit = linear_fit_impl(&x, &y).unwrap();

        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 1.0).abs() < 1e-10);
        assert!((fit.eval(10.0) - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_constant_x_is_error() {
        let x = vec![2.0, 2.0, 2.0];
        let y = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            linear_fit_impl(&x, &y),
            Err(CorrvisError::InsufficientData(_))
        ));
    }
}
