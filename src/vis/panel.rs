//! 注釈付き散布図パネル

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{CorrvisError, Result};
use crate::stats::{self, CorrMethod, LinearFit};
use crate::vis::config::PlotSettings;

/// 1つのデータセット分の散布図仕様
///
/// 散布点に加えて、強調表示する点の範囲、傾向線、左上に積む注釈行、
/// 共有凡例に出すラベルを保持する。
#[derive(Debug, Clone)]
pub struct Panel {
    /// パネルの見出し
    pub label: String,
    x: Vec<f64>,
    y: Vec<f64>,
    /// この行以降の点を強調表示する（Noneなら強調なし）
    highlight_start: Option<usize>,
    /// 基本系列の凡例ラベル
    base_label: Option<String>,
    /// 強調系列の凡例ラベル
    highlight_label: Option<String>,
    /// 左上に縦に積む注釈（上から順に表示）
    annotations: Vec<String>,
    fit: Option<LinearFit>,
}

impl Panel {
    /// 新しいパネルを作成
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(CorrvisError::Consistency(format!(
                "データ長が一致しません: x={}, y={}",
                x.len(),
                y.len()
            )));
        }
        if x.is_empty() {
            return Err(CorrvisError::Empty(
                "プロットするデータがありません".to_string(),
            ));
        }

        Ok(Panel {
            label: label.into(),
            x,
            y,
            highlight_start: None,
            base_label: None,
            highlight_label: None,
            annotations: Vec::new(),
            fit: None,
        })
    }

    /// 全ての点に対する最小二乗直線を傾向線として重ねる
    pub fn with_fit(mut self) -> Result<Self> {
        self.fit = Some(stats::linear_fit(&self.x, &self.y)?);
        Ok(self)
    }

    /// 指定した手法の相関係数を計算して注釈に積む
    ///
    /// 複数の手法を渡すと、注釈が重ならないよう縦にずらして表示される。
    pub fn annotate_methods(mut self, methods: &[CorrMethod]) -> Result<Self> {
        for &method in methods {
            let result = stats::correlation(&self.x, &self.y, method)?;
            self.annotations.push(result.annotation());
        }
        Ok(self)
    }

    /// 任意の注釈行を追加
    pub fn annotate(mut self, text: impl Into<String>) -> Self {
        self.annotations.push(text.into());
        self
    }

    /// 指定した行以降の点を強調表示の対象にする
    pub fn highlight_from(mut self, start: usize) -> Self {
        self.highlight_start = Some(start.min(self.x.len()));
        self
    }

    /// 共有凡例に出す系列ラベルを設定
    pub fn with_series_labels(
        mut self,
        base: impl Into<String>,
        highlight: Option<String>,
    ) -> Self {
        self.base_label = Some(base.into());
        self.highlight_label = highlight;
        self
    }

    /// 凡例エントリ (ラベル, パレット番号) を列挙
    pub(crate) fn legend_entries(&self) -> Vec<(String, usize)> {
        let mut entries = Vec::new();
        if let Some(label) = &self.base_label {
            entries.push((label.clone(), 0));
        }
        if let Some(label) = &self.highlight_label {
            entries.push((label.clone(), 1));
        }
        entries
    }
}

/// 値域に5%のマージンを加える（幅ゼロの範囲は単位幅に広げる）
fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let margin = if max > min { (max - min) * 0.05 } else { 0.5 };
    (min - margin, max + margin)
}

/// パネルを描画領域に描く
pub(crate) fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_lo, x_hi) = padded_range(&panel.x);
    let (y_lo, y_hi) = padded_range(&panel.y);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.label, ("sans-serif", 18).into_font())
        .margin(8)
        .x_label_area_size(28)
        .y_label_area_size(40)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(6)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{:.1}", v))
            .y_label_formatter(&|v| format!("{:.1}", v))
            .x_desc(&settings.x_label)
            .y_desc(&settings.y_label)
            .draw()?;
    }

    let base_rgb = settings.color_palette[0];
    let base_color = RGBColor(base_rgb.0, base_rgb.1, base_rgb.2);
    let highlight_rgb = settings.color_palette[1];
    let highlight_color = RGBColor(highlight_rgb.0, highlight_rgb.1, highlight_rgb.2);

    let split = panel.highlight_start.unwrap_or(panel.x.len());

    // 基本系列の散布点
    chart.draw_series(
        panel.x[..split]
            .iter()
            .zip(panel.y[..split].iter())
            .map(|(&x, &y)| Circle::new((x, y), 3, base_color.filled())),
    )?;

    // 強調系列の散布点（少し大きく描く）
    chart.draw_series(
        panel.x[split..]
            .iter()
            .zip(panel.y[split..].iter())
            .map(|(&x, &y)| Circle::new((x, y), 5, highlight_color.filled())),
    )?;

    // 傾向線
    if let Some(fit) = &panel.fit {
        let fit_rgb = settings.color_palette[2];
        let fit_color = RGBColor(fit_rgb.0, fit_rgb.1, fit_rgb.2);
        chart.draw_series(LineSeries::new(
            vec![(x_lo, fit.eval(x_lo)), (x_hi, fit.eval(x_hi))],
            fit_color.stroke_width(2),
        ))?;
    }

    // 注釈を左上に縦に積む（行ごとにずらして重なりを防ぐ）
    for (k, text) in panel.annotations.iter().enumerate() {
        let ax = x_lo + (x_hi - x_lo) * 0.04;
        let ay = y_hi - (y_hi - y_lo) * (0.07 + 0.09 * k as f64);
        chart.draw_series(std::iter::once(Text::new(
            text.clone(),
            (ax, ay),
            ("sans-serif", 15).into_font(),
        )))?;
    }

    Ok(())
}
