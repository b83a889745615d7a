//! プロット設定

/// プロットの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// PNG画像
    PNG,
    /// SVG形式
    SVG,
}

/// 図全体の描画設定
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// X軸のラベル
    pub x_label: String,
    /// Y軸のラベル
    pub y_label: String,
    /// 図の幅（ピクセル）
    pub width: u32,
    /// 図の高さ（ピクセル）
    pub height: u32,
    /// 出力形式
    pub output_type: OutputType,
    /// 共有凡例の表示
    pub show_legend: bool,
    /// グリッドの表示
    pub show_grid: bool,
    /// 色のパレット（0: 基本系列, 1: 強調系列, 2: 傾向線）
    pub color_palette: Vec<(u8, u8, u8)>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            width: 1000,
            height: 700,
            output_type: OutputType::PNG,
            show_legend: true,
            show_grid: true,
            color_palette: vec![
                (0, 123, 255),  // 青
                (255, 99, 71),  // 赤
                (46, 204, 113), // 緑
                (255, 193, 7),  // 黄
                (142, 68, 173), // 紫
            ],
        }
    }
}
