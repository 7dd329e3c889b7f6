use eframe::egui::{
    self, epaint::TextShape, pos2, vec2, Align2, Color32, CornerRadius, FontId, Id, Rect,
    ScrollArea, Sense, Stroke, StrokeKind, Ui,
};

use crate::chart::layout::{build_cells, month_label, Cell, ChartLayout, FONT_SIZE};
use crate::chart::legend::{Legend, LEGEND_HEIGHT};
use crate::color::TemperatureColorMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Heat map (central panel)
// ---------------------------------------------------------------------------

/// Render the heat-map calendar in the central panel.
pub fn heatmap_panel(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) if !ds.is_empty() => ds,
        Some(_) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Dataset contains no monthly readings.");
            });
            return;
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(if state.loading {
                    "Fetching global temperature data…"
                } else {
                    "No dataset loaded.  (File → Open…)"
                });
            });
            return;
        }
    };

    let Some((min_temp, max_temp)) = dataset.temperature_range() else {
        return;
    };

    // Derived per frame from the dataset; nothing is cached across frames.
    let colors = TemperatureColorMap::new(min_temp, max_temp);
    let layout = ChartLayout::new(dataset);
    let cells = build_cells(dataset, &layout, &colors);
    let legend = Legend::build(&colors, min_temp, max_temp);

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            draw_chart(ui, &layout, &cells, &legend);
        });
}

fn draw_chart(ui: &mut Ui, layout: &ChartLayout, cells: &[Cell], legend: &Legend) {
    let (response, painter) = ui.allocate_painter(layout.outer_size(), Sense::hover());
    let origin = response.rect.min + vec2(layout.padding.left, layout.padding.top);

    let text_color = ui.visuals().text_color();
    let tick_stroke = Stroke::new(1.0, text_color);
    let tick_font = FontId::proportional(12.0);
    let title_font = FontId::proportional(FONT_SIZE);

    // ---- Cell grid ----
    let hover_pos = response.hover_pos();
    let mut hovered: Option<(&Cell, Rect)> = None;
    for cell in cells {
        let rect = cell.rect.translate(origin.to_vec2());
        painter.rect_filled(rect, CornerRadius::ZERO, cell.color);
        if hover_pos.is_some_and(|p| rect.contains(p)) {
            hovered = Some((cell, rect));
        }
    }

    // ---- Month (y) axis ----
    for &month in layout.y.domain() {
        let Some(y) = layout.y.position(&month) else {
            continue;
        };
        let cy = origin.y + y + layout.y.bandwidth() / 2.0;
        painter.line_segment(
            [pos2(origin.x - 11.0, cy), pos2(origin.x, cy)],
            tick_stroke,
        );
        painter.text(
            pos2(origin.x - 14.0, cy),
            Align2::RIGHT_CENTER,
            month_label(month),
            tick_font.clone(),
            text_color,
        );
    }

    let months_galley = painter.layout_no_wrap("Months".to_owned(), title_font.clone(), text_color);
    let months_pos = pos2(
        origin.x - 7.0 * FONT_SIZE,
        origin.y + (layout.height + months_galley.size().x) / 2.0,
    );
    painter.add(
        TextShape::new(months_pos, months_galley, text_color)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );

    // ---- Year (x) axis ----
    let axis_y = origin.y + layout.height;
    for year in layout.x_ticks() {
        let Some(x) = layout.x.position(&year) else {
            continue;
        };
        let cx = origin.x + x + layout.x.bandwidth() / 2.0;
        painter.line_segment([pos2(cx, axis_y), pos2(cx, axis_y + 10.0)], tick_stroke);
        painter.text(
            pos2(cx, axis_y + 12.0),
            Align2::CENTER_TOP,
            format!("{year:04}"),
            tick_font.clone(),
            text_color,
        );
    }
    painter.text(
        pos2(origin.x + layout.width / 2.0, axis_y + 3.0 * FONT_SIZE),
        Align2::CENTER_TOP,
        "Years",
        title_font,
        text_color,
    );

    // ---- Legend ----
    let legend_origin = pos2(
        origin.x,
        response.rect.min.y + layout.padding.top + layout.height + layout.padding.bottom
            - 2.0 * LEGEND_HEIGHT,
    );
    for swatch in &legend.swatches {
        painter.rect_filled(
            swatch.rect.translate(legend_origin.to_vec2()),
            CornerRadius::ZERO,
            swatch.color,
        );
    }
    let tick_top = legend_origin.y + LEGEND_HEIGHT;
    for tick in &legend.ticks {
        let x = legend_origin.x + tick.x;
        painter.line_segment([pos2(x, tick_top), pos2(x, tick_top + 10.0)], tick_stroke);
        painter.text(
            pos2(x, tick_top + 12.0),
            Align2::CENTER_TOP,
            &tick.label,
            tick_font.clone(),
            text_color,
        );
    }

    // ---- Hover: outline + tooltip ----
    if let Some((cell, rect)) = hovered {
        painter.rect_stroke(
            rect,
            CornerRadius::ZERO,
            Stroke::new(1.0, Color32::BLACK),
            StrokeKind::Outside,
        );
        egui::show_tooltip_at_pointer(ui.ctx(), ui.layer_id(), Id::new("cell_tooltip"), |ui: &mut Ui| {
            ui.strong(format!("{} {}", month_label(cell.month), cell.year));
            ui.label(format!(
                "{:.2} °C  ({:+.2} °C from base)",
                cell.temperature, cell.variance
            ));
        });
    }
}
