use corrvis::datasets;
use corrvis::{DataFrame, LongToWideOptions, WideToLongOptions};

#[test]
fn test_anscombe_wide_to_long_shape() {
    let long = datasets::anscombe_long().unwrap();
    assert_eq!(long.row_count(), 44);
    assert_eq!(
        long.column_names(),
        &["dataset".to_string(), "x".to_string(), "y".to_string()]
    );

    // グループラベルは接尾辞から来る
    let labels = long.get_column_string_values("dataset").unwrap();
    assert_eq!(labels[0], "1");
    assert_eq!(labels[43], "4");

    // 最初の組の先頭行は (10, 8.04)
    let x = long.get_column_numeric_values("x").unwrap();
    let y = long.get_column_numeric_values("y").unwrap();
    assert_eq!(x[0], 10.0);
    assert_eq!(y[0], 8.04);
}

#[test]
fn test_anscombe_round_trip_is_exact() {
    // ワイド→ロング→ワイドで元の表を完全に再現する
    let wide = datasets::anscombe().unwrap();
    let long = wide
        .wide_to_long(&WideToLongOptions {
            stubs: vec!["x".to_string(), "y".to_string()],
            group_name: Some("dataset".to_string()),
        })
        .unwrap();
    let back = long
        .long_to_wide(&LongToWideOptions {
            group_column: "dataset".to_string(),
            value_columns: None,
        })
        .unwrap();

    assert_eq!(back, wide);
}

#[test]
fn test_long_to_wide_requires_rectangular_groups() {
    let mut df = DataFrame::new();
    df.add_column(
        "dataset",
        corrvis::Series::new(
            vec!["1".to_string(), "1".to_string(), "2".to_string()],
            Some("dataset".to_string()),
        ),
    )
    .unwrap();
    df.add_numeric_column("x", &[1.0, 2.0, 3.0]).unwrap();

    let result = df.long_to_wide(&LongToWideOptions {
        group_column: "dataset".to_string(),
        value_columns: None,
    });
    assert!(result.is_err());
}
