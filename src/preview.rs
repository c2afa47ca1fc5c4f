//! Full-page preview of a generated layout: sections, rows and columns laid out
//! with the builder's preview stylesheet, modules rendered by [`Renderer`].

use std::fmt::{self, Write};

use crate::attrs::Attrs;
use crate::html::escape_html;
use crate::node::{Layout, ModuleNode};
use crate::renderer::Renderer;

const EMPTY_LAYOUT: &str = "<div style=\"padding:60px 20px;text-align:center;color:#6b7280;font-family:Inter,sans-serif;\">No content generated</div>";

const DEFAULT_SECTION_PADDING: &str = "60";

/// Base stylesheet defining the `jtb-*` classes modules rely on.
pub const PREVIEW_STYLES: &str = "<style>\
.jtb-preview{font-family:'Inter',-apple-system,BlinkMacSystemFont,sans-serif;line-height:1.6;color:#1f2937;transform-origin:top left;}\
.jtb-preview *{box-sizing:border-box;margin:0;padding:0;}\
.jtb-preview-section{position:relative;overflow:hidden;clear:both;}\
.jtb-preview-container{max-width:100%;margin:0 auto;padding:0 20px;}\
.jtb-preview-row{display:flex;flex-wrap:nowrap;margin:0 -10px 20px;gap:0;}\
.jtb-preview-row:last-child{margin-bottom:0;}\
.jtb-preview-col{padding:0 10px;min-height:1px;flex-shrink:0;}\
.jtb-col-12{width:100%;}.jtb-col-6{width:50%;}.jtb-col-4{width:33.333%;}.jtb-col-3{width:25%;}.jtb-col-2{width:16.666%;}\
.jtb-card{background:#fff;border-radius:16px;box-shadow:0 4px 6px -1px rgba(0,0,0,0.1),0 2px 4px -1px rgba(0,0,0,0.06);padding:32px 24px;height:100%;transition:transform 0.2s,box-shadow 0.2s;}\
.jtb-card:hover{transform:translateY(-4px);box-shadow:0 20px 25px -5px rgba(0,0,0,0.1),0 10px 10px -5px rgba(0,0,0,0.04);}\
.jtb-preview h1{font-size:48px;font-weight:800;line-height:1.1;margin-bottom:24px;}\
.jtb-preview h2{font-size:36px;font-weight:700;line-height:1.2;margin-bottom:20px;}\
.jtb-preview h3{font-size:28px;font-weight:700;line-height:1.3;margin-bottom:16px;}\
.jtb-preview h4{font-size:20px;font-weight:600;line-height:1.4;margin-bottom:12px;}\
.jtb-preview p{margin-bottom:16px;line-height:1.7;}\
.jtb-btn{display:inline-block;padding:14px 28px;font-size:16px;font-weight:600;text-decoration:none;border-radius:8px;transition:all 0.2s;cursor:pointer;border:none;}\
.jtb-btn-primary{background:linear-gradient(135deg,#3b82f6,#2563eb);color:#fff;}\
.jtb-btn-secondary{background:#f3f4f6;color:#1f2937;}\
.jtb-btn-white{background:#fff;color:#3b82f6;}\
.jtb-avatar{width:80px;height:80px;border-radius:50%;overflow:hidden;border:3px solid #e5e7eb;}\
.jtb-avatar img{width:100%;height:100%;object-fit:cover;object-position:center top;}\
.jtb-icon-box{width:64px;height:64px;border-radius:16px;display:flex;align-items:center;justify-content:center;font-size:28px;}\
.jtb-input{width:100%;padding:14px 18px;font-size:16px;border:1px solid #e5e7eb;border-radius:8px;margin-bottom:16px;font-family:inherit;}\
.jtb-textarea{min-height:120px;resize:vertical;}\
.jtb-grid{display:grid;gap:24px;}\
.jtb-grid-2{grid-template-columns:repeat(2, 1fr);}\
.jtb-grid-3{grid-template-columns:repeat(3, 1fr);}\
.jtb-grid-4{grid-template-columns:repeat(4, 1fr);}\
</style>";

const COLUMN_WIDTHS: &[(&str, &str)] = &[
    ("1_1", "100%"),
    ("1_2", "50%"),
    ("1_3", "33.333%"),
    ("2_3", "66.666%"),
    ("1_4", "25%"),
    ("3_4", "75%"),
    ("1_5", "20%"),
    ("2_5", "40%"),
    ("3_5", "60%"),
    ("4_5", "80%"),
    ("1_6", "16.666%"),
    ("5_6", "83.333%"),
];

/// CSS width for a builder column fraction such as `1_3`. Unknown → `100%`.
pub fn column_width(fraction: &str) -> &'static str {
    COLUMN_WIDTHS
        .iter()
        .find(|(key, _)| *key == fraction)
        .map(|(_, width)| *width)
        .unwrap_or("100%")
}

fn section_padding(attrs: &Attrs, side: &str) -> String {
    let value = attrs
        .path(&["padding", side])
        .unwrap_or_else(|| DEFAULT_SECTION_PADDING.to_string());
    crate::renderer::css_px(&value)
}

impl Renderer {
    /// Render a whole layout for the preview canvas.
    pub fn render_preview(&self, layout: &Layout) -> String {
        if layout.sections.is_empty() {
            return EMPTY_LAYOUT.to_string();
        }
        let mut out = String::from(PREVIEW_STYLES);
        if let Err(e) = self.write_preview(layout, &mut out) {
            tracing::error!("failed to format layout preview: {}", e);
        }
        out
    }

    fn write_preview(&self, layout: &Layout, out: &mut String) -> fmt::Result {
        write!(out, "<div class=\"jtb-preview\">")?;
        for (index, section) in layout.sections.iter().enumerate() {
            self.write_section(index, section, out)?;
        }
        write!(out, "</div>")
    }

    fn write_section(&self, index: usize, section: &ModuleNode, out: &mut String) -> fmt::Result {
        let a = &section.attrs;
        let background = a
            .str("background_color")
            .unwrap_or_else(|| {
                let alternate = if index % 2 == 0 { "#ffffff" } else { "#f9fafb" };
                alternate.to_string()
            });
        write!(
            out,
            "<div class=\"jtb-preview-section\" style=\"background:{};padding:{} 0 {};\"><div class=\"jtb-preview-container\">",
            escape_html(&self.options().theme.map_color(&background)),
            section_padding(a, "top"),
            section_padding(a, "bottom")
        )?;
        for row in &section.children {
            write!(out, "<div class=\"jtb-preview-row\">")?;
            for column in &row.children {
                let fraction = column.attrs.str_or("width", "1_1");
                write!(
                    out,
                    "<div class=\"jtb-preview-col\" style=\"width:{};\">",
                    column_width(&fraction)
                )?;
                for module in &column.children {
                    out.push_str(&self.render(module));
                }
                write!(out, "</div>")?;
            }
            write!(out, "</div>")?;
        }
        write!(out, "</div></div>")
    }
}

/// Preview with default options and sample listings.
pub fn render_preview(layout: &Layout) -> String {
    Renderer::default().render_preview(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(width: &str, modules: Vec<ModuleNode>) -> ModuleNode {
        ModuleNode::new("column")
            .with_attrs(Attrs::new().with("width", width))
            .with_children(modules)
    }

    fn section(attrs: Attrs, columns: Vec<ModuleNode>) -> ModuleNode {
        ModuleNode::new("section")
            .with_attrs(attrs)
            .with_children(vec![ModuleNode::new("row").with_children(columns)])
    }

    #[test]
    fn test_empty_layout() {
        assert!(render_preview(&Layout::default()).contains("No content generated"));
    }

    #[test]
    fn test_column_width_map() {
        assert_eq!(column_width("1_3"), "33.333%");
        assert_eq!(column_width("5_6"), "83.333%");
        assert_eq!(column_width("7_8"), "100%");
    }

    #[test]
    fn test_sections_alternate_background() {
        let layout = Layout {
            sections: vec![
                section(Attrs::new(), vec![column("1_1", vec![])]),
                section(Attrs::new(), vec![column("1_1", vec![])]),
                section(Attrs::new().with("background_color", "#000000"), vec![]),
            ],
        };
        let html = render_preview(&layout);
        assert!(html.starts_with("<style>"));
        assert!(html.contains("background:#ffffff;padding:60px 0 60px;"));
        assert!(html.contains("background:#f9fafb;padding:60px 0 60px;"));
        assert!(html.contains("background:#000000;"));
    }

    #[test]
    fn test_columns_and_modules() {
        let heading = ModuleNode::new("heading").with_attrs(Attrs::new().with("text", "Left"));
        let layout = Layout {
            sections: vec![section(
                serde_json::from_value(serde_json::json!({"padding": {"top": 80}})).unwrap(),
                vec![column("1_2", vec![heading]), column("1_2", vec![])],
            )],
        };
        let html = render_preview(&layout);
        assert_eq!(html.matches("style=\"width:50%;\"").count(), 2);
        assert!(html.contains("padding:80px 0 60px;"));
        assert!(html.contains(">Left</h2>"));
    }
}
