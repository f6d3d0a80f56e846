use crate::core::comparison::MAX_COMPARISON_ITEMS;
use crate::domain::model::RacketSummary;

const EMPTY_COMPARISON: &str = "No hay palas en la comparación";
const ROW_LABELS: [&str; 4] = ["Nombre", "Marca", "Precio", "Imágenes"];

/// 浮動按鈕：清單為空時不顯示
pub fn render_badge(count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }
    Some(format!("🎾 Comparar ({}/{})", count, MAX_COMPARISON_ITEMS))
}

pub fn format_price(precio: Option<f64>) -> String {
    match precio {
        Some(p) => format!("{:.2} €", p),
        None => "-".to_string(),
    }
}

fn cells(racket: &RacketSummary) -> [String; 4] {
    [
        racket.nombre.clone(),
        racket.marca.clone().unwrap_or_else(|| "-".to_string()),
        format_price(racket.precio_actual),
        racket.imagenes.len().to_string(),
    ]
}

/// 並排比較表：每支球拍一欄，每個屬性一列
pub fn render_comparison(rackets: &[RacketSummary]) -> String {
    if rackets.is_empty() {
        return EMPTY_COMPARISON.to_string();
    }

    let columns: Vec<[String; 4]> = rackets.iter().map(cells).collect();
    let label_width = ROW_LABELS
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|c| c.chars().count()).max().unwrap_or(0))
        .collect();

    let mut lines = Vec::with_capacity(ROW_LABELS.len() + 1);
    for (row, label) in ROW_LABELS.iter().enumerate() {
        let mut line = pad(label, label_width);
        for (col, width) in columns.iter().zip(&widths) {
            line.push_str(" | ");
            line.push_str(&pad(&col[row], *width));
        }
        lines.push(line.trim_end().to_string());

        if row == 0 {
            let total = lines[0].chars().count();
            lines.push("-".repeat(total));
        }
    }
    lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}
