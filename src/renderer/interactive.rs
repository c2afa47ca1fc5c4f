//! Modules whose markup is driven by their child items.

use std::borrow::Cow;
use std::fmt::{self, Write};

use super::RenderCtx;
use crate::attrs::Attrs;
use crate::html::{escape_html, SafeHtml};
use crate::node::ModuleNode;

/// Item attrs from child nodes, or from an inline `key` array when the module
/// has no children.
fn item_attrs<'a>(node: &'a ModuleNode, key: &str) -> Vec<Cow<'a, Attrs>> {
    if node.children.is_empty() {
        node.attrs.object_list(key).into_iter().map(Cow::Owned).collect()
    } else {
        node.children.iter().map(|c| Cow::Borrowed(&c.attrs)).collect()
    }
}

fn stripped_content(attrs: &Attrs) -> SafeHtml {
    SafeHtml::stripped(&attrs.str_or("content", ""))
}

pub(super) fn accordion(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let items = item_attrs(node, "items");
    write!(
        out,
        "<div style=\"border:1px solid #e5e7eb;border-radius:12px;overflow:hidden;margin:20px 0;\">"
    )?;
    if items.is_empty() {
        write!(out, "<div style=\"padding:20px;color:#6b7280;\">Accordion placeholder</div>")?;
    }
    for (idx, item) in items.iter().enumerate() {
        let title = item.str("title").unwrap_or_else(|| format!("Item {}", idx + 1));
        let (border, hidden) = if idx > 0 {
            ("border-top:1px solid #e5e7eb;", "display:none;")
        } else {
            ("", "")
        };
        write!(
            out,
            "<div style=\"{}\"><div style=\"padding:16px 20px;background:#f9fafb;font-weight:600;color:#111827;cursor:pointer;\">{}</div><div style=\"padding:16px 20px;color:#4b5563;line-height:1.6;{}\">{}</div></div>",
            border,
            escape_html(&title),
            hidden,
            stripped_content(item)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn accordion_item(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"border-bottom:1px solid #e5e7eb;\"><div style=\"padding:16px 20px;background:#f9fafb;font-weight:600;color:#111827;\">{}</div><div style=\"padding:16px 20px;color:#4b5563;line-height:1.6;\">{}</div></div>",
        escape_html(&a.str_or("title", "Accordion Item")),
        stripped_content(a)
    )
}

pub(super) fn tabs(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let items = item_attrs(node, "tabs");
    write!(
        out,
        "<div style=\"margin:20px 0;\"><div style=\"display:flex;border-bottom:2px solid #e5e7eb;margin-bottom:20px;\">"
    )?;
    for (i, item) in items.iter().enumerate() {
        let title = item.str("title").unwrap_or_else(|| format!("Tab {}", i + 1));
        let style = if i == 0 {
            "border-bottom:2px solid #3b82f6;margin-bottom:-2px;color:#3b82f6;font-weight:600;"
        } else {
            "color:#6b7280;"
        };
        write!(
            out,
            "<div style=\"padding:12px 24px;cursor:pointer;{}\">{}</div>",
            style,
            escape_html(&title)
        )?;
    }
    write!(out, "</div>")?;
    if let Some(first) = items.first() {
        write!(
            out,
            "<div style=\"color:#4b5563;line-height:1.6;\">{}</div>",
            stripped_content(first)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn tabs_item(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"color:#4b5563;line-height:1.6;\">{}</div>",
        stripped_content(&node.attrs)
    )
}

pub(super) fn toggle(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"border:1px solid #e5e7eb;border-radius:8px;margin:10px 0;\"><div style=\"padding:16px 20px;display:flex;justify-content:space-between;align-items:center;cursor:pointer;\"><span style=\"font-weight:600;color:#111827;\">{}</span><span style=\"color:#3b82f6;\">+</span></div><div style=\"padding:0 20px 16px;color:#4b5563;line-height:1.6;\">{}</div></div>",
        escape_html(&a.str_or("title", "Toggle")),
        stripped_content(a)
    )
}

/// `slider` and `fullwidth_slider`: first slide plus one indicator per slide.
pub(super) fn slider(_ctx: &RenderCtx, node: &ModuleNode, fullwidth: bool, out: &mut String) -> fmt::Result {
    let default_slide = Attrs::new()
        .with("heading", "Slide 1")
        .with("content", "Slider content");
    let first = node.children.first().map(|c| &c.attrs).unwrap_or(&default_slide);
    let slide_count = node.children.len().max(1);
    let radius = if fullwidth { "0" } else { "16px" };
    write!(
        out,
        "<div style=\"position:relative;background:linear-gradient(135deg,#1e293b,#334155);border-radius:{};padding:80px 40px;text-align:center;margin:20px 0;\"><h2 style=\"color:#fff;font-size:36px;margin-bottom:16px;\">{}</h2><p style=\"color:rgba(255,255,255,0.8);max-width:600px;margin:0 auto 24px;\">{}</p><div style=\"display:flex;justify-content:center;gap:8px;margin-top:30px;\">",
        radius,
        escape_html(&first.str_or("heading", "Slide Title")),
        stripped_content(first)
    )?;
    for i in 0..slide_count {
        let (width, background) = if i == 0 {
            ("24px", "#fff")
        } else {
            ("8px", "rgba(255,255,255,0.4)")
        };
        write!(
            out,
            "<div style=\"width:{};height:8px;background:{};border-radius:4px;\"></div>",
            width, background
        )?;
    }
    write!(out, "</div></div>")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::attrs::Attrs;
    use crate::node::ModuleNode;
    use crate::renderer::Renderer;

    fn render(node: ModuleNode) -> String {
        Renderer::default().render(&node)
    }

    fn item(kind: &str, title: Option<&str>, content: &str) -> ModuleNode {
        let mut attrs = Attrs::new().with("content", content);
        if let Some(title) = title {
            attrs.insert("title", title);
        }
        ModuleNode::new(kind).with_attrs(attrs)
    }

    #[test]
    fn test_accordion_placeholder() {
        assert!(render(ModuleNode::new("accordion")).contains("Accordion placeholder"));
    }

    #[test]
    fn test_accordion_children() {
        let node = ModuleNode::new("accordion").with_children(vec![
            item("accordion_item", Some("First"), "<p>one</p>"),
            item("accordion_item", None, "two"),
        ]);
        let html = render(node);
        assert!(html.contains(">First</div>"));
        assert!(html.contains(">Item 2</div>"));
        assert!(html.contains(">one</div>"));
        assert_eq!(html.matches("display:none;").count(), 1);
        assert!(!html.contains("Accordion placeholder"));
    }

    #[test]
    fn test_accordion_inline_items() {
        let attrs: Attrs = serde_json::from_value(json!({
            "items": [{"title": "Q1", "content": "A1"}, {"title": "Q2", "content": "A2"}]
        }))
        .unwrap();
        let html = render(ModuleNode::new("accordion").with_attrs(attrs));
        assert!(html.contains(">Q1</div>"));
        assert!(html.contains(">A2</div>"));
    }

    #[test]
    fn test_tabs_renders_only_first_body() {
        let node = ModuleNode::new("tabs").with_children(vec![
            item("tabs_item", Some("One"), "body one"),
            item("tabs_item", None, "body two"),
        ]);
        let html = render(node);
        assert!(html.contains(">One</div>"));
        assert!(html.contains(">Tab 2</div>"));
        assert!(html.contains("body one"));
        assert!(!html.contains("body two"));
        assert_eq!(html.matches("border-bottom:2px solid #3b82f6").count(), 1);
    }

    #[test]
    fn test_tabs_inline_tabs() {
        let attrs: Attrs = serde_json::from_value(json!({"tabs": [{"title": "Specs", "content": "<b>fast</b>"}]})).unwrap();
        let html = render(ModuleNode::new("tabs").with_attrs(attrs));
        assert!(html.contains(">Specs</div>"));
        assert!(html.contains(">fast</div>"));
    }

    #[test]
    fn test_slider_dots_and_radius() {
        let node = ModuleNode::new("slider").with_children(vec![
            ModuleNode::new("slider_item").with_attrs(Attrs::new().with("heading", "Hello")),
            ModuleNode::new("slider_item"),
            ModuleNode::new("slider_item"),
        ]);
        let html = render(node);
        assert!(html.contains(">Hello</h2>"));
        assert_eq!(html.matches("height:8px;background:").count(), 3);
        assert_eq!(html.matches("width:24px").count(), 1);
        assert!(html.contains("border-radius:16px"));

        let html = render(ModuleNode::new("fullwidth_slider"));
        assert!(html.contains(">Slide 1</h2>"));
        assert!(html.contains("border-radius:0;"));
        assert_eq!(html.matches("height:8px;background:").count(), 1);
    }

    #[test]
    fn test_toggle_default_title() {
        assert!(render(ModuleNode::new("toggle")).contains(">Toggle</span>"));
    }
}
