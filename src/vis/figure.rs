//! 複数パネルを1枚の図に合成するモジュール

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{CorrvisError, Result};
use crate::vis::config::{OutputType, PlotSettings};
use crate::vis::panel::{draw_panel, Panel};

/// 凡例の帯の高さ（ピクセル）
const LEGEND_HEIGHT: u32 = 32;

/// グリッド状に並べた複数パネルの図
///
/// 各パネルは独立に描画され、タイトルと凡例は図全体で共有する。
/// 凡例は全パネルの系列ラベルを初出順に重複なく集めて1箇所に描く。
#[derive(Debug, Clone)]
pub struct Figure {
    /// 図全体のタイトル
    pub title: String,
    /// グリッドの形 (行数, 列数)
    pub shape: (usize, usize),
    panels: Vec<Panel>,
}

impl Figure {
    /// 新しい図を作成
    pub fn new(title: impl Into<String>, shape: (usize, usize)) -> Self {
        Figure {
            title: title.into(),
            shape,
            panels: Vec::new(),
        }
    }

    /// パネルを追加
    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    /// パネルの数を取得
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// 図をファイルに描画
    ///
    /// 出力形式は設定に従ってPNGまたはSVGになる。描画が全て成功した
    /// 場合のみファイルが確定する（途中で失敗した場合に中途半端な図を
    /// 残さない）。
    pub fn render<P: AsRef<Path>>(&self, path: P, settings: &PlotSettings) -> Result<()> {
        self.validate(settings)?;

        match settings.output_type {
            OutputType::PNG => {
                let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
                    .into_drawing_area();
                self.render_into(&root, settings)?;
                root.present()?;
            }
            OutputType::SVG => {
                let root = SVGBackend::new(path.as_ref(), (settings.width, settings.height))
                    .into_drawing_area();
                self.render_into(&root, settings)?;
                root.present()?;
            }
        }

        log::info!("図を出力しました: {}", path.as_ref().display());
        Ok(())
    }

    fn validate(&self, settings: &PlotSettings) -> Result<()> {
        if self.panels.is_empty() {
            return Err(CorrvisError::Empty(
                "図にパネルがありません".to_string(),
            ));
        }

        let (rows, cols) = self.shape;
        if rows * cols < self.panels.len() {
            return Err(CorrvisError::InvalidParameter(format!(
                "{}x{} のグリッドに {} パネルは収まりません",
                rows,
                cols,
                self.panels.len()
            )));
        }

        if settings.color_palette.len() < 3 {
            return Err(CorrvisError::InvalidParameter(
                "色のパレットには少なくとも3色が必要です".to_string(),
            ));
        }

        Ok(())
    }

    /// 全パネルの凡例エントリを初出順に重複なく集める
    fn collect_legend(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for panel in &self.panels {
            for entry in panel.legend_entries() {
                if !entries.iter().any(|e| e.0 == entry.0) {
                    entries.push(entry);
                }
            }
        }
        entries
    }

    fn render_into<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        settings: &PlotSettings,
    ) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let titled = root.titled(&self.title, ("sans-serif", 24).into_font())?;

        let legend = if settings.show_legend {
            self.collect_legend()
        } else {
            Vec::new()
        };

        // 凡例がある場合は下端に帯を確保する
        let (panel_area, legend_area) = if legend.is_empty() {
            (titled, None)
        } else {
            let (_, height) = titled.dim_in_pixel();
            let split_at = height.saturating_sub(LEGEND_HEIGHT) as i32;
            let (upper, lower) = titled.split_vertically(split_at);
            (upper, Some(lower))
        };

        let cells = panel_area.split_evenly(self.shape);
        for (panel, cell) in self.panels.iter().zip(cells.iter()) {
            draw_panel(cell, panel, settings)?;
        }

        if let Some(area) = legend_area {
            draw_legend(&area, &legend, settings)?;
        }

        Ok(())
    }
}

/// 共有凡例を帯状の領域に横並びで描く
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(String, usize)],
    settings: &PlotSettings,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let y = (LEGEND_HEIGHT / 2) as i32;
    let mut x = 16i32;

    for (label, palette_index) in entries {
        let rgb = settings.color_palette[*palette_index];
        let color = RGBColor(rgb.0, rgb.1, rgb.2);

        area.draw(&Circle::new((x, y), 4, color.filled()))?;
        area.draw(&Text::new(
            label.clone(),
            (x + 10, y - 7),
            ("sans-serif", 14).into_font(),
        ))?;

        // 次のエントリの開始位置（ラベル幅の概算で進める）
        x += 24 + label.len() as i32 * 7;
    }

    Ok(())
}
