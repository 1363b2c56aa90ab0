//! Standalone HTML export of the stage timeline.
//!
//! The page embeds the figure as JSON and pulls plotly.js from its CDN, so
//! the file opens in any browser without further assets.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde_json::{json, Value};

use crate::error::ExportError;
use crate::model::chart::TimelineChart;
use crate::model::palette::css_color;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DEFAULT_TITLE: &str = "Project Schedule";
const CHART_DIV_ID: &str = "stage-timeline";

/// Turn the user's file name into `<name>.html`.
pub fn normalize_file_name(name: &str) -> Result<String, ExportError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ExportError::MissingFileName);
    }
    if name.to_lowercase().ends_with(".html") {
        Ok(name.to_string())
    } else {
        Ok(format!("{}.html", name))
    }
}

/// Chart title for the export; falls back to [`DEFAULT_TITLE`].
pub fn chart_title(project_name: &str) -> String {
    let name = project_name.trim();
    if name.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        format!("{} - {}", DEFAULT_TITLE, name)
    }
}

/// Milliseconds since the epoch at midnight UTC, the unit plotly date axes use.
fn millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Build the plotly `{data, layout}` figure for a chart.
pub fn figure(chart: &TimelineChart, title: &str) -> Value {
    let data: Vec<Value> = chart
        .bars
        .iter()
        .map(|bar| {
            let mut lines = bar.hover.iter().map(|l| escape_html(l));
            let head = lines.next().map(|l| format!("<b>{}</b>", l)).unwrap_or_default();
            let hover = std::iter::once(head).chain(lines).collect::<Vec<_>>().join("<br>");
            json!({
                "type": "bar",
                "orientation": "h",
                "name": bar.label,
                "y": [bar.label],
                "x": [bar.duration_days * MILLIS_PER_DAY],
                "base": [millis(bar.start)],
                "marker": { "color": css_color(bar.color) },
                "hoverinfo": "text",
                "hovertext": [hover],
            })
        })
        .collect();

    let today = millis(chart.today);
    let layout = json!({
        "title": { "text": title },
        "barmode": "stack",
        "height": 500,
        "hovermode": "closest",
        "legend": {
            "orientation": "h",
            "yanchor": "bottom",
            "y": 1.02,
            "xanchor": "right",
            "x": 1,
        },
        "xaxis": {
            "title": { "text": "Timeline" },
            "type": "date",
            "range": [
                chart.range_start.format("%Y-%m-%d").to_string(),
                chart.range_end.format("%Y-%m-%d").to_string(),
            ],
            "tickformat": "%d.%m.%y",
        },
        "yaxis": { "autorange": "reversed", "title": { "text": "" } },
        "shapes": [{
            "type": "line",
            "xref": "x",
            "yref": "paper",
            "x0": today,
            "x1": today,
            "y0": 0,
            "y1": 1,
            "line": { "color": "red", "dash": "dash" },
        }],
        "annotations": [{
            "x": today,
            "xref": "x",
            "y": 1,
            "yref": "paper",
            "text": "Today",
            "showarrow": false,
            "xanchor": "left",
            "yanchor": "bottom",
        }],
    });

    json!({ "data": data, "layout": layout })
}

/// Render a complete HTML document for the chart.
pub fn render_html(chart: &TimelineChart, title: &str) -> Result<String, ExportError> {
    let fig = figure(chart, title);
    let data = script_safe(serde_json::to_string(&fig["data"])?);
    let layout = script_safe(serde_json::to_string(&fig["layout"])?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{title}</title>
<script src="{cdn}" charset="utf-8"></script>
</head>
<body>
<div id="{div}" style="height:100%; width:100%;"></div>
<script type="text/javascript">
Plotly.newPlot("{div}", {data}, {layout}, {{"responsive": true}});
</script>
</body>
</html>
"#,
        title = escape_html(title),
        cdn = PLOTLY_CDN,
        div = CHART_DIV_ID,
        data = data,
        layout = layout,
    ))
}

/// Render and write the document to `path`.
pub fn export_html(chart: &TimelineChart, title: &str, path: &Path) -> Result<(), ExportError> {
    let html = render_html(chart, title)?;
    std::fs::write(path, html).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported timeline with {} stages to {}", chart.bars.len(), path.display());
    Ok(())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stage;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chart() -> TimelineChart {
        let stages = vec![
            Stage::new("Design", "Ana", ymd(2025, 1, 1), ymd(2025, 1, 11)).unwrap(),
            Stage::new("Build <core>", "Bruno", ymd(2025, 1, 5), ymd(2025, 1, 20)).unwrap(),
        ];
        TimelineChart::build(&stages, ymd(2025, 1, 6)).unwrap()
    }

    #[test]
    fn test_normalize_file_name() {
        assert_eq!(normalize_file_name(" schedule ").unwrap(), "schedule.html");
        assert_eq!(normalize_file_name("plan.HTML").unwrap(), "plan.HTML");
        assert!(matches!(
            normalize_file_name("  "),
            Err(ExportError::MissingFileName)
        ));
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(chart_title(""), "Project Schedule");
        assert_eq!(chart_title("Alpha"), "Project Schedule - Alpha");
    }

    #[test]
    fn test_figure_bars() {
        let fig = figure(&chart(), "T");
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["y"][0], "Design");
        assert_eq!(data[0]["base"][0], 1_735_689_600_000i64);
        assert_eq!(data[0]["x"][0], 10 * MILLIS_PER_DAY);
        assert_eq!(data[0]["marker"]["color"], "#1f77b4");
        let hover = data[1]["hovertext"][0].as_str().unwrap();
        assert!(hover.starts_with("<b>Build &lt;core&gt;</b><br>Start: 05.01.25"));
        assert!(hover.ends_with("Owner: Bruno"));
    }

    #[test]
    fn test_figure_layout() {
        let fig = figure(&chart(), "T");
        let layout = &fig["layout"];
        assert_eq!(layout["yaxis"]["autorange"], "reversed");
        assert_eq!(layout["xaxis"]["range"][0], "2024-12-29");
        assert_eq!(layout["xaxis"]["range"][1], "2025-01-23");
        assert_eq!(layout["xaxis"]["tickformat"], "%d.%m.%y");
        assert_eq!(layout["shapes"][0]["x0"], millis(ymd(2025, 1, 6)));
        assert_eq!(layout["annotations"][0]["text"], "Today");
    }

    #[test]
    fn test_render_html_is_standalone() {
        let html = render_html(&chart(), "Plan & <Go>").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<script src=\"{}\"", PLOTLY_CDN)));
        assert!(html.contains("<title>Plan &amp; &lt;Go&gt;</title>"));
        assert!(html.contains("Plotly.newPlot(\"stage-timeline\""));
        assert!(!html.contains("</b>"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.html");
        export_html(&chart(), "Plan", &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_export_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plan.html");
        let err = export_html(&chart(), "Plan", &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
