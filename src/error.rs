use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("入出力エラー")]
    Io(#[source] std::io::Error),

    #[error("CSVエラー")]
    Csv(#[source] csv::Error),

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("列名が重複しています: {0}")]
    DuplicateColumnName(String),

    #[error("行数が一致しません: 期待値 {expected}, 実際 {found}")]
    InconsistentRowCount { expected: usize, found: usize },

    #[error("型変換エラー: {0}")]
    Cast(String),

    #[error("無効なパラメータです: {0}")]
    InvalidParameter(String),

    #[error("データ不足エラー: {0}")]
    InsufficientData(String),

    #[error("サブサンプルサイズエラー: 要求 {requested}, 利用可能 {available}")]
    SubsampleSize { requested: usize, available: usize },

    #[error("データ一貫性エラー: {0}")]
    Consistency(String),

    #[error("空データエラー: {0}")]
    Empty(String),

    #[error("可視化エラー: {0}")]
    Visualization(String),
}

pub type CorrvisError = Error;

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

// Plottersエラーの変換
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("プロット描画エラー: {}", err))
    }
}
