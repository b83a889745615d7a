use corrvis::datasets::{self, BivariateNormalOptions};
use corrvis::report;
use corrvis::stats;
use corrvis::vis::{OutputType, PlotSettings};

/// レポートと同じパラメータでフルサンプルを生成する
fn full_sample() -> corrvis::DataFrame {
    datasets::bivariate_normal(&BivariateNormalOptions {
        mean: [4.0, 4.0],
        cov: [[1.0, -0.7], [-0.7, 1.0]],
        n: 500,
        seed: 42,
    })
    .unwrap()
}

/// (18, 8) を注入したときのピアソン相関の変化量を返す
fn outlier_shift(df: &corrvis::DataFrame) -> f64 {
    let mut x = df.get_column_numeric_values("x").unwrap();
    let mut y = df.get_column_numeric_values("y").unwrap();
    let before = stats::pearson(&x, &y).unwrap();

    x.push(18.0);
    y.push(8.0);
    let after = stats::pearson(&x, &y).unwrap();

    (after - before).abs()
}

#[test]
fn test_outlier_influence_shrinks_with_sample_size() {
    let full = full_sample();
    let small = stats::subsample(&full, 15, 7).unwrap();
    let medium = stats::subsample(&full, 50, 7).unwrap();

    let shift_small = outlier_shift(&small);
    let shift_medium = outlier_shift(&medium);
    let shift_full = outlier_shift(&full);

    // 同じ外れ値でも、サンプルが大きいほど係数の動きは小さい
    assert!(
        shift_small > shift_full,
        "15点: {:.3} <= 500点: {:.3}",
        shift_small,
        shift_full
    );
    assert!(
        shift_medium > shift_full,
        "50点: {:.3} <= 500点: {:.3}",
        shift_medium,
        shift_full
    );
}

#[test]
fn test_rank_methods_move_less_than_pearson() {
    let cars = datasets::mtcars().unwrap();
    let (augmented, _) = datasets::append_sd_outliers(
        &cars,
        "hp",
        "mpg",
        &[2.0, 3.0, 4.0, 5.0, 6.0, 8.0],
    )
    .unwrap();

    let base_hp = cars.get_column_numeric_values("hp").unwrap();
    let base_mpg = cars.get_column_numeric_values("mpg").unwrap();
    let aug_hp = augmented.get_column_numeric_values("hp").unwrap();
    let aug_mpg = augmented.get_column_numeric_values("mpg").unwrap();

    let pearson_shift = (stats::pearson(&aug_hp, &aug_mpg).unwrap()
        - stats::pearson(&base_hp, &base_mpg).unwrap())
    .abs();
    let spearman_shift = (stats::spearman(&aug_hp, &aug_mpg).unwrap()
        - stats::spearman(&base_hp, &base_mpg).unwrap())
    .abs();
    let kendall_shift = (stats::kendall(&aug_hp, &aug_mpg).unwrap()
        - stats::kendall(&base_hp, &base_mpg).unwrap())
    .abs();

    // 順位ベースの2手法は外れ値なしの値の近くに留まる
    assert!(
        spearman_shift < pearson_shift,
        "spearman: {:.3}, pearson: {:.3}",
        spearman_shift,
        pearson_shift
    );
    assert!(
        kendall_shift < pearson_shift,
        "kendall: {:.3}, pearson: {:.3}",
        kendall_shift,
        pearson_shift
    );
}

#[test]
fn test_all_three_figures_render_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PlotSettings::default();

    let targets: [(&str, fn(&std::path::Path, &PlotSettings) -> corrvis::Result<()>); 3] = [
        ("anscombe_quartet.png", |p, s| {
            report::anscombe_quartet_figure(p, s)
        }),
        ("outlier_sample_size.png", |p, s| {
            report::outlier_sample_size_figure(p, s)
        }),
        ("rank_methods.png", |p, s| report::rank_methods_figure(p, s)),
    ];

    for (name, render) in targets {
        let path = dir.path().join(name);
        render(&path, &settings).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "{} が空ファイルです", name);
    }
}

#[test]
fn test_figure_renders_to_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("anscombe_quartet.svg");
    let settings = PlotSettings {
        output_type: OutputType::SVG,
        ..PlotSettings::default()
    };

    report::anscombe_quartet_figure(&path, &settings).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("<svg"));
}
