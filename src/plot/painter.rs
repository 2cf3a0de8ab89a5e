use super::logic::{PlotArea, ScatterPlot, is_visible};
use bevy::math::Vec2;
use bevy_egui::egui;

const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 12.0;
const MARGIN_BOTTOM: f32 = 48.0;
const POINT_RADIUS: f32 = 3.5;
const TICK_LENGTH: f32 = 4.0;

// matplotlib's default scatter blue
const POINT_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Draw a titled scatter plot filling the remaining space of `ui`
pub fn draw_scatter(ui: &mut egui::Ui, plot: &ScatterPlot) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&plot.title).strong());
    });

    let size = ui.available_size().max(egui::vec2(240.0, 180.0));
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    let area = PlotArea::new(
        Vec2::new(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        Vec2::new(rect.right() - MARGIN_RIGHT, rect.bottom() - MARGIN_BOTTOM),
    );

    let text_color = ui.visuals().text_color();
    let grid_color = ui.visuals().weak_text_color().gamma_multiply(0.3);
    let axis_stroke = egui::Stroke::new(1.0, text_color);
    let grid_stroke = egui::Stroke::new(1.0, grid_color);
    let font = egui::FontId::proportional(12.0);

    let bottom_left = to_pos(area.to_screen(0.0, 0.0));
    painter.line_segment([bottom_left, to_pos(area.to_screen(1.0, 0.0))], axis_stroke);
    painter.line_segment([bottom_left, to_pos(area.to_screen(0.0, 1.0))], axis_stroke);

    for tick in plot.x_axis.ticks() {
        let Some(fx) = plot.x_axis.fraction(tick) else {
            continue;
        };
        let base = to_pos(area.to_screen(fx, 0.0));
        painter.line_segment([base, to_pos(area.to_screen(fx, 1.0))], grid_stroke);
        painter.line_segment([base, base + egui::vec2(0.0, TICK_LENGTH)], axis_stroke);
        painter.text(
            base + egui::vec2(0.0, TICK_LENGTH + 2.0),
            egui::Align2::CENTER_TOP,
            plot.x_axis.tick_label(tick),
            font.clone(),
            text_color,
        );
    }

    for tick in plot.y_axis.ticks() {
        let Some(fy) = plot.y_axis.fraction(tick) else {
            continue;
        };
        let base = to_pos(area.to_screen(0.0, fy));
        painter.line_segment([base, to_pos(area.to_screen(1.0, fy))], grid_stroke);
        painter.line_segment([base, base - egui::vec2(TICK_LENGTH, 0.0)], axis_stroke);
        painter.text(
            base - egui::vec2(TICK_LENGTH + 2.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            plot.y_axis.tick_label(tick),
            font.clone(),
            text_color,
        );
    }

    for &(x, y) in &plot.points {
        let (Some(fx), Some(fy)) = (plot.x_axis.fraction(x), plot.y_axis.fraction(y)) else {
            continue;
        };
        if is_visible(fx) && is_visible(fy) {
            painter.circle_filled(to_pos(area.to_screen(fx, fy)), POINT_RADIUS, POINT_COLOR);
        }
    }

    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 4.0),
        egui::Align2::CENTER_BOTTOM,
        &plot.x_label,
        egui::FontId::proportional(13.0),
        text_color,
    );
}
