use std::f32::consts::TAU;

use chrono::Datelike;
use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};

use crate::model::calendar::{Arc, DayCell};
use crate::model::progress::stage_progress;
use crate::model::{Calendar, DayFill, MonthGrid, Stage};
use crate::ui::theme;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
/// Angular resolution of the pie wedges, in degrees.
const WEDGE_STEP_DEG: f64 = 6.0;

/// Render one grid per month covered by the stages.
pub fn show_calendar(calendar: &Calendar, stages: &[Stage], ui: &mut Ui) {
    for month in &calendar.months {
        show_month(month, stages, ui);
        ui.add_space(8.0);
    }
}

fn show_month(month: &MonthGrid, stages: &[Stage], ui: &mut Ui) {
    ui.label(RichText::new(month.title()).strong().size(14.0));
    ui.add_space(2.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for name in WEEKDAYS {
            ui.allocate_ui(theme::DAY_CELL * Vec2::new(1.0, 0.4), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(name).strong().size(11.0).color(theme::TEXT_SECONDARY));
                });
            });
        }
    });

    for week in month.weeks() {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for cell in week {
                match cell {
                    Some(cell) => show_day(cell, stages, ui),
                    None => {
                        ui.allocate_exact_size(theme::DAY_CELL, Sense::hover());
                    }
                }
            }
        });
    }
}

fn show_day(cell: &DayCell, stages: &[Stage], ui: &mut Ui) {
    let (rect, response) = ui.allocate_exact_size(theme::DAY_CELL, Sense::hover());
    let painter = ui.painter_at(rect);
    let center = Pos2::new(rect.center().x, rect.top() + theme::DAY_RADIUS + 2.0);
    let radius = theme::DAY_RADIUS;
    let day = cell.date.day().to_string();

    let text_color = match &cell.fill {
        DayFill::Empty => {
            painter.circle_filled(center, radius, theme::DAY_EMPTY_FILL);
            painter.circle_stroke(center, radius, Stroke::new(2.0, theme::DAY_EMPTY_BORDER));
            theme::DAY_EMPTY_TEXT
        }
        DayFill::Solid { color, .. } => {
            painter.circle_filled(center, radius, *color);
            painter.circle_stroke(center, radius, Stroke::new(2.0, theme::DAY_ACTIVE_BORDER));
            theme::TEXT_ON_BAR
        }
        DayFill::Split { arcs, .. } => {
            // Uncovered remainder of the circle stays neutral.
            painter.circle_filled(center, radius, theme::DAY_EMPTY_FILL);
            for arc in arcs {
                paint_arc(&painter, center, radius, arc);
            }
            painter.circle_stroke(center, radius, Stroke::new(2.0, theme::DAY_ACTIVE_BORDER));
            Color32::BLACK
        }
    };

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        day,
        theme::font_day(),
        text_color,
    );

    if let Some(label) = cell.fill.label() {
        painter.text(
            Pos2::new(center.x, rect.bottom() - 6.0),
            egui::Align2::CENTER_CENTER,
            label,
            theme::font_small(),
            theme::TEXT_SECONDARY,
        );

        let active = cell.fill.active_stages();
        response.on_hover_ui(|ui| {
            ui.strong(cell.date.format("%d.%m.%y").to_string());
            for idx in active {
                if let Some(stage) = stages.get(idx) {
                    let pct = stage_progress(stage, cell.date) * 100.0;
                    ui.label(format!("{}: {:.0}%", stage.description, pct));
                }
            }
        });
    }
}

/// Fill a clockwise pie slice starting at 12 o'clock, as a CSS conic gradient does.
fn paint_arc(painter: &egui::Painter, center: Pos2, radius: f32, arc: &Arc) {
    let from = arc.from_deg.clamp(0.0, 360.0);
    let to = arc.to_deg.clamp(0.0, 360.0);
    if to <= from {
        return;
    }
    let point = |deg: f64| {
        let rad = (deg / 360.0) as f32 * TAU;
        Pos2::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
    };

    let mut a = from;
    while a < to {
        let b = (a + WEDGE_STEP_DEG).min(to);
        painter.add(Shape::convex_polygon(
            vec![center, point(a), point(b)],
            arc.color,
            Stroke::NONE,
        ));
        a = b;
    }
}
