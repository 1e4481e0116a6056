// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

// Colores de corrección, compartidos por el quiz y los resultados
pub const COLOR_OK: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
pub const COLOR_WARN: Color32 = Color32::from_rgb(0xff, 0x98, 0x00);
pub const COLOR_BAD: Color32 = Color32::from_rgb(0xff, 0x52, 0x52);

/// Fila de opción de respuesta con marcador de selección. `tint` pinta el
/// fondo al revelar la corrección. Devuelve true si se ha pulsado.
pub fn option_row(
    ui: &mut Ui,
    label: &str,
    width: f32,
    height: f32,
    selected: bool,
    tint: Option<Color32>,
) -> bool {
    let marcador = if selected { "◉" } else { "○" };
    let mut btn = Button::new(RichText::new(format!("{marcador}  {label}")))
        .min_size(Vec2::new(width, height))
        .wrap();
    if let Some(color) = tint {
        btn = btn.fill(color);
    }
    ui.add(btn).clicked()
}
