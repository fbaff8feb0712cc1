//! HTML rendering for the dashboard page.
//!
//! The page is rebuilt from a [`DashboardView`] on every request; no widget
//! state lives on the server. The sidebar selection travels with each form
//! as hidden fields.

use std::fmt::Write;

use evaldash_core::{CsvPreview, DashboardView, Metric, SimulationStatus, PREVIEW_ROWS};

use crate::chart;

const PAGE_TITLE: &str = "AI Model Evaluation Dashboard";
const BALLOON_COUNT: usize = 12;

const STYLE: &str = r#"
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: #f5f7fa; color: #2c3e50; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 260px; background: #eef1f5; padding: 1.5rem; box-sizing: border-box; }
.sidebar label { display: block; font-weight: bold; margin: 1rem 0 0.4rem; }
.sidebar select { width: 100%; }
.main { flex: 1; padding: 2rem 3rem; }
.cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.card { background-color: white; padding: 1.5rem; border-radius: 10px; box-shadow: 0px 2px 8px rgba(0,0,0,0.1); margin-bottom: 1rem; }
.metric-title { font-weight: bold; color: #2c3e50; }
.metric-value { font-size: 1.5rem; color: #3498db; }
.chart { width: 100%; max-width: 720px; background: white; border-radius: 10px; }
table.preview { border-collapse: collapse; background: white; }
table.preview th, table.preview td { border: 1px solid #dde2e8; padding: 0.3rem 0.6rem; }
.spinner { margin-left: 0.6rem; color: #7f8c8d; }
.alert { padding: 0.8rem 1rem; border-radius: 6px; margin: 1rem 0; }
.alert-success { background: #e3f6e8; color: #1e7b34; }
.alert-error { background: #fde8e8; color: #a02222; }
.balloons { position: fixed; inset: 0; pointer-events: none; overflow: hidden; }
.balloon { position: absolute; bottom: -120px; width: 40px; height: 52px; border-radius: 50% 50% 48% 48%; opacity: 0.85; animation: rise 4s ease-in forwards; }
@keyframes rise { to { transform: translateY(-130vh); } }
footer { margin-top: 3rem; border-top: 1px solid #dde2e8; padding-top: 1rem; font-size: 0.9rem; }
"#;

/// Disables the button and shows the pending label while the 2 s run is in flight.
const SIMULATE_ONSUBMIT: &str =
    "this.querySelector('button').disabled=true;this.querySelector('.spinner').hidden=false;";

const BALLOON_COLORS: &[&str] = &["#e74c3c", "#3498db", "#f1c40f", "#2ecc71", "#9b59b6", "#e67e22"];

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page(view: &DashboardView) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<div class=\"layout\">\n"
    );

    html.push_str(&sidebar(view));

    html.push_str("<main class=\"main\">\n");
    let _ = writeln!(html, "<h1>{PAGE_TITLE}</h1>");
    if let Some(message) = &view.selection_error {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-error\">Invalid selection, showing defaults: {}</div>",
            escape_html(message)
        );
    }
    html.push_str(
        "<p>This app evaluates and compares the performance of machine learning models. \
         It shows evaluation results on sample data with interactive visualization.</p>\n",
    );

    html.push_str(&results_section(view));
    html.push_str(&upload_section(view));
    html.push_str(&simulation_section(view));

    html.push_str(
        "<footer><strong>Publishing note:</strong> this app was built for a lecture \
         and is intended to be published on GitHub.</footer>\n",
    );
    html.push_str("</main>\n</div>\n");

    if view.simulation.is_completed() {
        html.push_str(&balloons());
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn sidebar(view: &DashboardView) -> String {
    let mut html = String::from("<aside class=\"sidebar\">\n<h2>Settings</h2>\n<form method=\"get\" action=\"/\">\n");

    html.push_str("<label for=\"model\">Select model</label>\n<select id=\"model\" name=\"model\">\n");
    for model in &view.models {
        let selected = if *model == view.selection.model { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            model.slug(),
            escape_html(model.label())
        );
    }
    html.push_str("</select>\n");

    html.push_str(
        "<label for=\"metrics\">Evaluation metrics</label>\n<select id=\"metrics\" name=\"metrics\" multiple size=\"4\">\n",
    );
    for metric in Metric::all() {
        let selected = if view.selection.is_metric_selected(*metric) { " selected" } else { "" };
        let _ = writeln!(
            html,
            "<option value=\"{0}\"{selected}>{0}</option>",
            metric.label()
        );
    }
    html.push_str("</select>\n<p><button type=\"submit\">Apply</button></p>\n</form>\n</aside>\n");
    html
}

/// Hidden inputs replaying the sidebar selection into another form.
fn selection_fields(view: &DashboardView) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<input type=\"hidden\" name=\"model\" value=\"{}\">",
        view.selection.model.slug()
    );
    for metric in &view.selection.metrics {
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"metrics\" value=\"{}\">",
            metric.label()
        );
    }
    html
}

fn results_section(view: &DashboardView) -> String {
    let mut html = String::from("<section id=\"results\">\n<h2>Model evaluation results</h2>\n");
    html.push_str("<h3>Evaluation metrics (card UI)</h3>\n<div class=\"cards\">\n");
    for card in &view.cards {
        let _ = writeln!(
            html,
            "<div class='card'><div class='metric-title'>{}</div><div class='metric-value'>{}</div></div>",
            card.metric.label(),
            card.display
        );
    }
    html.push_str("</div>\n<h3>Chart comparison</h3>\n");
    html.push_str(&chart::bar_chart_svg(&view.chart));
    html.push_str("\n</section>\n");
    html
}

fn upload_section(view: &DashboardView) -> String {
    let mut html = String::from("<section id=\"upload\">\n<h2>Upload and review data</h2>\n");
    html.push_str("<form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n");
    html.push_str(&selection_fields(view));
    html.push_str(
        "<label for=\"file\">Upload a CSV file</label>\n\
         <input id=\"file\" type=\"file\" name=\"file\" accept=\".csv,text/csv\">\n\
         <button type=\"submit\">Upload</button>\n</form>\n",
    );

    if let Some(message) = &view.upload_error {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-error\">Could not read the uploaded file: {}</div>",
            escape_html(message)
        );
    }

    if let Some(preview) = &view.preview {
        html.push_str(&preview_table(preview));
    }

    html.push_str("</section>\n");
    html
}

fn preview_table(preview: &CsvPreview) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<p>Uploaded data: <code>{}</code></p>\n<table class=\"preview\">\n<thead><tr>",
        escape_html(&preview.file_name)
    );
    for header in &preview.headers {
        let _ = write!(html, "<th>{}</th>", escape_html(header));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &preview.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", escape_html(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    if preview.is_truncated() {
        let _ = writeln!(
            html,
            "<p class=\"note\">Showing the first {PREVIEW_ROWS} of {} rows.</p>",
            preview.total_rows
        );
    }
    html
}

fn simulation_section(view: &DashboardView) -> String {
    let mut html = String::from("<section id=\"simulation\">\n<h2>Evaluation simulation</h2>\n");
    html.push_str("<p>Press the button to simulate an evaluation.</p>\n");
    html.push_str(&format!("<form method=\"post\" action=\"/simulate\" onsubmit=\"{SIMULATE_ONSUBMIT}\">\n"));
    html.push_str(&selection_fields(view));
    html.push_str(
        "<button type=\"submit\">Start simulation</button>\n\
         <span class=\"spinner\" hidden>Evaluating...</span>\n</form>\n",
    );

    if let SimulationStatus::Completed { elapsed_ms } = view.simulation {
        let _ = writeln!(
            html,
            "<div class=\"alert alert-success\" data-elapsed-ms=\"{elapsed_ms}\">Evaluation complete!</div>"
        );
    }

    html.push_str("</section>\n");
    html
}

fn balloons() -> String {
    let mut html = String::from("<div class=\"balloons\" aria-hidden=\"true\">\n");
    for i in 0..BALLOON_COUNT {
        let left = (i * 97 + 13) % 100;
        let delay = (i % 4) as f64 * 0.35;
        let color = BALLOON_COLORS[i % BALLOON_COLORS.len()];
        let _ = writeln!(
            html,
            "<span class=\"balloon\" style=\"left:{left}%;background:{color};animation-delay:{delay:.2}s\"></span>"
        );
    }
    html.push_str("</div>\n");
    html
}
