//! Edge-to-edge variants used in full-width sections.

use std::fmt::{self, Write};

use super::RenderCtx;
use crate::html::{css_url, escape_html, SafeHtml};
use crate::node::ModuleNode;

const MENU_PREVIEW: &[&str] = &["Home", "About", "Services", "Contact"];

pub(super) fn header(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let bg_image = a.str("background_image");
    let background = match &bg_image {
        Some(src) => format!("{} center/cover", css_url(src)),
        None => ctx.color(&a.str_or("background_color", "#1e293b")),
    };
    write!(
        out,
        "<div style=\"background:{};padding:120px 40px;text-align:center;position:relative;\">",
        background
    )?;
    if bg_image.is_some() {
        write!(out, "<div style=\"position:absolute;inset:0;background:rgba(0,0,0,0.5);\"></div>")?;
    }
    write!(
        out,
        "<div style=\"position:relative;z-index:1;max-width:800px;margin:0 auto;\"><h1 style=\"color:#fff;font-size:56px;font-weight:800;margin-bottom:24px;\">{}</h1>",
        escape_html(&a.str_or("title", "Welcome"))
    )?;
    if let Some(subtitle) = a.str("subtitle") {
        write!(
            out,
            "<p style=\"color:rgba(255,255,255,0.9);font-size:20px;margin-bottom:32px;\">{}</p>",
            escape_html(&subtitle)
        )?;
    }
    if let Some(label) = a.str("button_text") {
        write!(
            out,
            "<a href=\"{}\" class=\"jtb-btn jtb-btn-primary\" style=\"font-size:18px;padding:18px 36px;\">{}</a>",
            escape_html(&a.str_or("link_url", "#")),
            escape_html(&label)
        )?;
    }
    write!(out, "</div></div>")
}

pub(super) fn image(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    match a.str("src") {
        Some(src) => write!(
            out,
            "<div style=\"margin:0;\"><img src=\"{}\" alt=\"{}\" style=\"width:100%;height:auto;display:block;\" /></div>",
            escape_html(&src),
            escape_html(&a.str_or("alt", ""))
        ),
        None => write!(
            out,
            "<div style=\"height:400px;background:#f3f4f6;display:flex;align-items:center;justify-content:center;color:#9ca3af;\">Full Width Image</div>"
        ),
    }
}

pub(super) fn menu(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<nav style=\"background:#fff;padding:20px 40px;display:flex;justify-content:space-between;align-items:center;box-shadow:0 1px 3px rgba(0,0,0,0.1);\"><div style=\"font-size:24px;font-weight:700;color:#111827;\">Logo</div><div style=\"display:flex;gap:32px;\">"
    )?;
    for item in MENU_PREVIEW {
        write!(
            out,
            "<a href=\"#\" style=\"color:#4b5563;text-decoration:none;font-weight:500;\">{}</a>",
            item
        )?;
    }
    write!(out, "</div><a href=\"#\" class=\"jtb-btn jtb-btn-primary\">Get Started</a></nav>")
}

pub(super) fn code(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let content = node
        .attrs
        .str("content")
        .unwrap_or_else(|| "// Full width code block".to_string());
    write!(
        out,
        "<pre style=\"background:#1e293b;color:#e2e8f0;padding:40px;overflow-x:auto;font-family:monospace;font-size:14px;margin:0;\"><code>{}</code></pre>",
        SafeHtml::trusted(content)
    )
}

pub(super) fn post_title(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"background:#1e293b;padding:80px 40px;text-align:center;\"><h1 style=\"color:#fff;font-size:48px;font-weight:800;margin-bottom:16px;\">{}</h1><div style=\"color:rgba(255,255,255,0.7);\">By {} • {}</div></div>",
        escape_html(&a.str_or("title", "Post Title")),
        escape_html(&a.str_or("author", "Author")),
        escape_html(&a.str_or("date", "January 1, 2024"))
    )
}

#[cfg(test)]
mod tests {
    use crate::attrs::Attrs;
    use crate::node::ModuleNode;
    use crate::renderer::Renderer;

    fn render(kind: &str, attrs: Attrs) -> String {
        Renderer::default().render(&ModuleNode::new(kind).with_attrs(attrs))
    }

    #[test]
    fn test_header_defaults() {
        let html = render("fullwidth_header", Attrs::new());
        assert!(html.contains(">Welcome</h1>"));
        assert!(html.contains("background:#1e293b"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("rgba(0,0,0,0.5)"));
    }

    #[test]
    fn test_header_background_image() {
        let html = render(
            "fullwidth_header",
            Attrs::new().with("background_image", "/bg.jpg").with("button_text", "Go"),
        );
        assert!(html.contains("url('/bg.jpg') center/cover"));
        assert!(html.contains("rgba(0,0,0,0.5)"));
        assert!(html.contains(">Go</a>"));
    }

    #[test]
    fn test_post_title_byline() {
        let html = render("fullwidth_post_title", Attrs::new().with("author", "Ana"));
        assert!(html.contains("By Ana • January 1, 2024"));
    }

    #[test]
    fn test_code_and_image_defaults() {
        assert!(render("fullwidth_code", Attrs::new()).contains("// Full width code block"));
        assert!(render("fullwidth_image", Attrs::new()).contains("Full Width Image"));
        assert_eq!(render("fullwidth_menu", Attrs::new()).matches("<a ").count(), 5);
    }
}
