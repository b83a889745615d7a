// サンプリングモジュール

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dataframe::DataFrame;
use crate::error::{CorrvisError, Result};

/// シード付きの非復元抽出を行う内部実装
///
/// 同じシードなら常に同じ部分集合になる。抽出した行は元の並び順に
/// 戻してから返す。
pub(crate) fn subsample_impl(df: &DataFrame, size: usize, seed: u64) -> Result<DataFrame> {
    if size == 0 {
        return Err(CorrvisError::InvalidParameter(
            "サンプルサイズは正の値である必要があります".into(),
        ));
    }

    let n_rows = df.row_count();
    if size > n_rows {
        return Err(CorrvisError::SubsampleSize {
            requested: size,
            available: n_rows,
        });
    }

    // シード付きの乱数生成器を使用（再現性のため）
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, n_rows, size).into_vec();
    indices.sort_unstable();

    df.take(&indices)
}
