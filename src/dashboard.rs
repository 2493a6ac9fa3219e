//! Static HTML dashboard
//!
//! One page, one section per partition, each holding an inline SVG chart.

use std::{fs, io, path::Path};

use tracing::info;

use crate::chart::{ChartLayout, Trace};

const SWEEP_PARAMETERS: [(&str, &str, &str); 4] = [
    ("Inertia Factor", "Market resistance to change", "0.65, 0.75, 0.85"),
    ("Mean Price", "Average price sensitivity", "0.2, 0.3"),
    ("Price SD", "Price sensitivity variation", "0.01, 0.05"),
    ("Smoothing", "Price smoothing factor", "0.01, 0.05"),
];

#[derive(Debug, Clone)]
pub struct Section {
    pub subheader: String,
    pub svg: String,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub title: String,
    pub intro: Option<String>,
    pub sections: Vec<Section>,
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Explains the marker colors and the sweep grid.
pub fn series_legend_html(layout: &ChartLayout) -> String {
    let mut html = String::from(
        "<p>Each point is one scenario's profit for one of three competitors, \
         alongside the scenario's total reward pool.</p>\n<ul>\n",
    );
    for trace in Trace::all() {
        let color = trace.marker(layout).color.css();
        html.push_str(&format!(
            "  <li><span style=\"color:{color}\">&#9679;</span> <strong>{}</strong></li>\n",
            escape(&trace.name())
        ));
    }
    html.push_str("</ul>\n<p>The x-axis shows the parameter combination of each scenario:</p>\n<ul>\n");
    for (name, meaning, values) in SWEEP_PARAMETERS {
        html.push_str(&format!(
            "  <li><strong>{name}</strong>: {meaning} ({values})</li>\n"
        ));
    }
    html.push_str("</ul>\n");
    html
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_intro(mut self, html: String) -> Self {
        self.intro = Some(html);
        self
    }

    pub fn push_section(&mut self, subheader: impl Into<String>, svg: String) {
        self.sections.push(Section {
            subheader: subheader.into(),
            svg,
        });
    }

    pub fn to_html(&self) -> String {
        let title = escape(&self.title);
        let mut html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <style>body {{ font-family: sans-serif; margin: 2em; }} \
             .chart svg {{ width: 100%; height: auto; }}</style>\n\
             </head>\n<body>\n<h1>{title}</h1>\n"
        );
        if let Some(intro) = &self.intro {
            html.push_str(intro);
        }
        for section in &self.sections {
            html.push_str(&format!(
                "<h2>{}</h2>\n<div class=\"chart\">\n{}\n</div>\n",
                escape(&section.subheader),
                section.svg
            ));
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_html())?;
        info!(path = %path.display(), sections = self.sections.len(), "wrote dashboard");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let mut dashboard = Dashboard::new("Economic Results Visualization");
        dashboard.push_section("Baseline Inertia Environment", "<svg id=\"a\"></svg>".into());
        dashboard.push_section("Changing Inertia Environment", "<svg id=\"b\"></svg>".into());
        let html = dashboard.to_html();

        let first = html.find("Baseline Inertia Environment").unwrap();
        let second = html.find("Changing Inertia Environment").unwrap();
        assert!(first < second);
        assert!(html.contains("<svg id=\"a\"></svg>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_escapes_text() {
        let dashboard = Dashboard::new("Profits <draft> & notes");
        let html = dashboard.to_html();
        assert!(html.contains("Profits &lt;draft&gt; &amp; notes"));
    }

    #[test]
    fn test_series_legend_lists_colors() {
        let html = series_legend_html(&ChartLayout::row_index());
        assert!(html.contains("color:orange"));
        assert!(html.contains("Competitor 3 Profit (Aggressive)"));
        assert!(html.contains("Smoothing"));

        let dashboard = Dashboard::new("Results").with_intro(html.clone());
        assert!(dashboard.to_html().contains(&html));
    }
}
