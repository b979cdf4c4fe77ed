use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that serializes each frame into a standalone SVG document.
///
/// Segments with no visible area are skipped. The latest document is kept in
/// memory for the host to read back.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.last_document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_document = frame_to_svg(frame);
        Ok(())
    }
}

/// Serializes `frame` as an SVG document sized to the chart.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#,
        size = frame.size
    ));
    out.push('\n');

    for segment in frame.visible_segments() {
        out.push_str(&format!(
            r#"<path data-index="{}" d="{}" fill="{}"/>"#,
            segment.index,
            escape_xml(&segment.path_data),
            escape_xml(&segment.fill)
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
