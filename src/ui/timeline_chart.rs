use crate::model::{TimelineChart, TimelineScale, TimelineViewport};
use crate::ui::theme;
use chrono::{Datelike, NaiveDate};
use egui::{Color32, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;
const LABEL_WIDTH: f32 = theme::LABEL_COLUMN_WIDTH;

/// Render the stage timeline. `zoom` persists between frames.
pub fn show_timeline(chart: &TimelineChart, zoom: &mut f32, ui: &mut Ui) {
    let available_width = (ui.available_width() - LABEL_WIDTH).max(200.0);
    let mut viewport = TimelineViewport::fit(chart.range_start, chart.range_end, available_width);
    viewport.zoom = *zoom;
    viewport.refit(available_width);

    // Handle zoom with scroll wheel
    if ui.rect_contains_pointer(ui.max_rect()) && ui.input(|i| i.modifiers.ctrl) {
        let scroll_delta = ui.input(|i| i.smooth_scroll_delta);
        if scroll_delta.y > 0.0 {
            viewport.zoom_in();
        } else if scroll_delta.y < 0.0 {
            viewport.zoom_out();
        }
        viewport.refit(available_width);
    }
    *zoom = viewport.zoom;

    let chart_width = LABEL_WIDTH + viewport.total_width();
    let chart_height =
        HEADER_HEIGHT + chart.bars.len() as f32 * (ROW_HEIGHT + ROW_PADDING) + 12.0;

    egui::ScrollArea::horizontal()
        .id_salt("timeline_scroll")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            let (response, painter) =
                ui.allocate_painter(Vec2::new(chart_width, chart_height), Sense::hover());
            let origin = response.rect.min;
            let bars_origin = Pos2::new(origin.x + LABEL_WIDTH, origin.y);

            painter.rect_filled(response.rect, Rounding::same(6.0), theme::BG_DARK);

            draw_timeline_header(&painter, bars_origin, &viewport, chart_height);

            // Rows, labels and bars; the first stage sits at the top.
            for bar in &chart.bars {
                let y = origin.y + HEADER_HEIGHT + bar.row as f32 * (ROW_HEIGHT + ROW_PADDING);
                let row_bg = if bar.row % 2 == 0 {
                    theme::BG_PANEL
                } else {
                    theme::BG_DARK
                };
                painter.rect_filled(
                    Rect::from_min_size(
                        Pos2::new(origin.x, y),
                        Vec2::new(chart_width, ROW_HEIGHT + ROW_PADDING),
                    ),
                    0.0,
                    row_bg,
                );

                let label_rect = Rect::from_min_size(
                    Pos2::new(origin.x, y),
                    Vec2::new(LABEL_WIDTH - 8.0, ROW_HEIGHT),
                );
                painter.with_clip_rect(label_rect).text(
                    Pos2::new(origin.x + 10.0, y + ROW_HEIGHT / 2.0),
                    egui::Align2::LEFT_CENTER,
                    &bar.label,
                    theme::font_bar(),
                    theme::TEXT_PRIMARY,
                );

                let bar_rect = draw_stage_bar(
                    &painter,
                    bars_origin,
                    &viewport,
                    bar.start,
                    bar.end(),
                    bar.color,
                    y,
                );
                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("stage-bar", bar.row)),
                    Sense::hover(),
                );
                bar_response.on_hover_ui_at_pointer(|ui| {
                    let mut lines = bar.hover.iter();
                    if let Some(head) = lines.next() {
                        ui.strong(head);
                    }
                    for line in lines {
                        ui.label(line);
                    }
                });
            }

            if chart.today_visible() {
                draw_today_line(&painter, bars_origin, &viewport, chart.today, chart_height);
            }
        });
}

fn draw_timeline_header(
    painter: &egui::Painter,
    origin: Pos2,
    viewport: &TimelineViewport,
    height: f32,
) {
    let width = viewport.total_width();
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );
    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    let grid_line = |x: f32| {
        painter.line_segment(
            [
                Pos2::new(x, origin.y + HEADER_HEIGHT),
                Pos2::new(x, origin.y + height),
            ],
            Stroke::new(0.5, theme::GRID_LINE),
        );
    };

    let mut date = viewport.start;
    let end = viewport.end;

    match viewport.scale() {
        TimelineScale::Days => {
            while date <= end {
                let x = origin.x + viewport.date_to_x(date);
                grid_line(x);

                let is_weekend = date.weekday().num_days_from_monday() >= 5;
                painter.text(
                    Pos2::new(x + 3.0, origin.y + 30.0),
                    egui::Align2::LEFT_CENTER,
                    date.format("%d").to_string(),
                    theme::font_sub(),
                    if is_weekend {
                        theme::TEXT_DIM
                    } else {
                        theme::TEXT_SECONDARY
                    },
                );

                if date.day() == 1 || date == viewport.start {
                    painter.text(
                        Pos2::new(x + 3.0, origin.y + 12.0),
                        egui::Align2::LEFT_CENTER,
                        date.format("%b %Y").to_string(),
                        theme::font_header(),
                        theme::TEXT_PRIMARY,
                    );
                }

                date += chrono::Duration::days(1);
            }
        }
        TimelineScale::Weeks => {
            while date <= end {
                let x = origin.x + viewport.date_to_x(date);
                grid_line(x);

                painter.text(
                    Pos2::new(x + 3.0, origin.y + 30.0),
                    egui::Align2::LEFT_CENTER,
                    date.format("%d.%m.%y").to_string(),
                    theme::font_sub(),
                    theme::TEXT_SECONDARY,
                );

                date += chrono::Duration::days(7);
            }
        }
        TimelineScale::Months => {
            date = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);

            while date <= end {
                if date >= viewport.start {
                    let x = origin.x + viewport.date_to_x(date);
                    grid_line(x);
                    painter.text(
                        Pos2::new(x + 5.0, origin.y + 22.0),
                        egui::Align2::LEFT_CENTER,
                        date.format("%b %Y").to_string(),
                        theme::font_header(),
                        theme::TEXT_PRIMARY,
                    );
                }

                let (y, m) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                date = NaiveDate::from_ymd_opt(y, m, 1)
                    .unwrap_or(date + chrono::Duration::days(30));
            }
        }
    }
}

fn draw_today_line(
    painter: &egui::Painter,
    origin: Pos2,
    viewport: &TimelineViewport,
    today: NaiveDate,
    height: f32,
) {
    let x = origin.x + viewport.date_to_x(today);

    // Dashed marker from the header to the bottom of the chart
    let top = Pos2::new(x, origin.y + HEADER_HEIGHT);
    let bottom = Pos2::new(x, origin.y + height);
    painter.extend(egui::Shape::dashed_line(
        &[top, bottom],
        Stroke::new(1.5, theme::TODAY_LINE),
        6.0,
        4.0,
    ));

    let badge_w = 42.0;
    let badge_rect = Rect::from_min_size(
        Pos2::new(x - badge_w / 2.0, origin.y + HEADER_HEIGHT - 1.0),
        Vec2::new(badge_w, 14.0),
    );
    painter.rect_filled(badge_rect, Rounding::same(3.0), theme::TODAY_LINE);
    painter.text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Today",
        theme::font_small(),
        theme::TEXT_ON_BAR,
    );
}

fn draw_stage_bar(
    painter: &egui::Painter,
    origin: Pos2,
    viewport: &TimelineViewport,
    start: NaiveDate,
    end: NaiveDate,
    color: Color32,
    y: f32,
) -> Rect {
    let x_start = origin.x + viewport.date_to_x(start);
    let x_end = origin.x + viewport.date_to_x(end);
    let bar_width = (x_end - x_start).max(6.0);
    let inset = theme::BAR_INSET;

    let bar_rect = Rect::from_min_size(
        Pos2::new(x_start, y + ROW_PADDING + inset),
        Vec2::new(bar_width, ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(1.0, 2.0)),
        rounding,
        Color32::from_black_alpha(35),
    );
    painter.rect_filled(bar_rect, rounding, color);

    // Lighter top highlight
    let highlight_rect = Rect::from_min_size(
        bar_rect.min,
        Vec2::new(bar_width, (bar_rect.height() * 0.45).max(4.0)),
    );
    painter.rect_filled(
        highlight_rect,
        Rounding {
            nw: theme::BAR_ROUNDING,
            ne: theme::BAR_ROUNDING,
            sw: 0.0,
            se: 0.0,
        },
        Color32::from_white_alpha(25),
    );

    bar_rect
}
