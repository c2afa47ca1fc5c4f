//! Theme-builder parts: post templates, header and footer pieces.

use std::fmt::{self, Write};

use super::{css_px, RenderCtx};
use crate::attrs::LinkItem;
use crate::html::{escape_html, SafeHtml};
use crate::icons::{social_badge, DEFAULT_SOCIAL_NETWORKS};
use crate::node::ModuleNode;

fn default_links(labels: &[&str]) -> Vec<LinkItem> {
    labels
        .iter()
        .map(|label| LinkItem {
            label: label.to_string(),
            url: "#".to_string(),
        })
        .collect()
}

fn placeholder_panel(title: &str, title_size: u32, body: &str, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"padding:20px;background:#f9fafb;border-radius:12px;\"><h4 style=\"color:#111827;font-size:{}px;margin-bottom:20px;\">{}</h4><div style=\"color:#6b7280;\">{}</div></div>",
        title_size, title, body
    )
}

pub(super) fn social_follow(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let networks = a
        .string_list("networks")
        .unwrap_or_else(|| DEFAULT_SOCIAL_NETWORKS.iter().map(|n| n.to_string()).collect());
    write!(
        out,
        "<div style=\"display:flex;gap:12px;justify-content:{};margin:20px 0;\">",
        escape_html(&a.str_or("align", "center"))
    )?;
    for network in &networks {
        let (color, glyph) = social_badge(network);
        write!(
            out,
            "<a href=\"#\" style=\"width:40px;height:40px;background:{};border-radius:50%;display:flex;align-items:center;justify-content:center;color:#fff;text-decoration:none;font-weight:bold;\">{}</a>",
            color,
            escape_html(&glyph)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn comments(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    placeholder_panel("Comments", 20, "Comments section placeholder", out)
}

pub(super) fn sidebar(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    placeholder_panel("Sidebar", 18, "Sidebar content placeholder", out)
}

pub(super) fn post_navigation(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"display:flex;justify-content:space-between;padding:20px 0;border-top:1px solid #e5e7eb;border-bottom:1px solid #e5e7eb;\"><a href=\"#\" style=\"color:#3b82f6;text-decoration:none;\">← Previous Post</a><a href=\"#\" style=\"color:#3b82f6;text-decoration:none;\">Next Post →</a></div>"
    )
}

pub(super) fn featured_image(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    match node.attrs.str("src") {
        Some(src) => write!(
            out,
            "<div style=\"margin-bottom:30px;\"><img src=\"{}\" alt=\"\" style=\"width:100%;height:auto;border-radius:12px;\" /></div>",
            escape_html(&src)
        ),
        None => write!(
            out,
            "<div style=\"height:300px;background:#f3f4f6;border-radius:12px;margin-bottom:30px;display:flex;align-items:center;justify-content:center;color:#9ca3af;\">Featured Image</div>"
        ),
    }
}

pub(super) fn post_excerpt(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<p style=\"color:#6b7280;font-size:18px;line-height:1.8;margin-bottom:24px;\">{}</p>",
        escape_html(&node.attrs.str_or("excerpt", "Post excerpt goes here..."))
    )
}

pub(super) fn post_meta(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"display:flex;gap:16px;color:#6b7280;font-size:14px;margin-bottom:20px;\"><span>📅 {}</span><span>👤 {}</span><span>📁 {}</span></div>",
        escape_html(&a.str_or("date", "Jan 1, 2024")),
        escape_html(&a.str_or("author", "Author")),
        escape_html(&a.str_or("category", "Category"))
    )
}

pub(super) fn author_box(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"display:flex;gap:20px;padding:24px;background:#f9fafb;border-radius:12px;margin:30px 0;\"><div style=\"width:80px;height:80px;border-radius:50%;background:#e5e7eb;flex-shrink:0;\"></div><div><h4 style=\"color:#111827;font-size:18px;font-weight:600;margin-bottom:8px;\">{}</h4><p style=\"color:#6b7280;font-size:14px;line-height:1.6;margin:0;\">{}</p></div></div>",
        escape_html(&a.str_or("author", "Author Name")),
        escape_html(&a.str_or("bio", "Author bio goes here..."))
    )
}

pub(super) fn archive_title(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<h1 style=\"color:#111827;font-size:36px;font-weight:700;margin-bottom:24px;\">{}</h1>",
        escape_html(&node.attrs.str_or("title", "Archive"))
    )
}

pub(super) fn breadcrumbs(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let crumbs = node
        .attrs
        .string_list("items")
        .unwrap_or_else(|| vec!["Home".into(), "Blog".into(), "Current".into()]);
    write!(out, "<nav style=\"color:#6b7280;font-size:14px;margin-bottom:24px;\">")?;
    let last = crumbs.len().saturating_sub(1);
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            out.push_str(" / ");
        }
        let color = if i == last { "#111827" } else { "#3b82f6" };
        write!(
            out,
            "<a href=\"#\" style=\"color:{};text-decoration:none;\">{}</a>",
            color,
            escape_html(crumb)
        )?;
    }
    write!(out, "</nav>")
}

pub(super) fn menu(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let items = node
        .attrs
        .link_items("items")
        .unwrap_or_else(|| default_links(&["Home", "About", "Services", "Contact"]));
    write!(out, "<nav style=\"display:flex;gap:24px;\">")?;
    for item in &items {
        write!(
            out,
            "<a href=\"{}\" style=\"color:#4b5563;text-decoration:none;font-weight:500;\">{}</a>",
            escape_html(&item.url),
            escape_html(&item.label)
        )?;
    }
    write!(out, "</nav>")
}

/// Post body from the editor, emitted as-is.
pub(super) fn post_content(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let content = node
        .attrs
        .str("content")
        .unwrap_or_else(|| "<p>Post content goes here...</p>".to_string());
    write!(
        out,
        "<div style=\"color:#374151;line-height:1.8;font-size:17px;\">{}</div>",
        SafeHtml::trusted(content)
    )
}

pub(super) fn post_title(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<h1 style=\"color:#111827;font-size:42px;font-weight:800;line-height:1.2;margin-bottom:16px;\">{}</h1>",
        escape_html(&node.attrs.str_or("title", "Post Title"))
    )
}

pub(super) fn site_logo(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    match a.str("logo") {
        Some(src) => write!(
            out,
            "<img src=\"{}\" alt=\"{}\" style=\"max-height:{};\" />",
            escape_html(&src),
            escape_html(&a.str_or("alt", "Logo")),
            css_px(&a.str_or("height", "50"))
        ),
        None => write!(
            out,
            "<div style=\"font-size:28px;font-weight:800;color:#111827;\">{}</div>",
            escape_html(&a.str_or("text", "Logo"))
        ),
    }
}

pub(super) fn footer_info(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div><div style=\"font-size:24px;font-weight:700;color:#111827;margin-bottom:16px;\">Company</div><p style=\"color:#6b7280;line-height:1.7;\">{}</p></div>",
        escape_html(&node.attrs.str_or("description", "Company description goes here."))
    )
}

pub(super) fn footer_menu(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let links = a
        .link_items("items")
        .unwrap_or_else(|| default_links(&["About", "Services", "Contact", "Privacy"]));
    write!(
        out,
        "<div><h4 style=\"color:#111827;font-size:16px;font-weight:600;margin-bottom:16px;\">{}</h4><ul style=\"list-style:none;\">",
        escape_html(&a.str_or("title", "Links"))
    )?;
    for link in &links {
        write!(
            out,
            "<li style=\"margin-bottom:8px;\"><a href=\"{}\" style=\"color:#6b7280;text-decoration:none;\">{}</a></li>",
            escape_html(&link.url),
            escape_html(&link.label)
        )?;
    }
    write!(out, "</ul></div>")
}

pub(super) fn copyright(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"text-align:center;padding:20px 0;border-top:1px solid #e5e7eb;color:#6b7280;font-size:14px;\">{}</div>",
        escape_html(&node.attrs.str_or("text", "© 2024 Company. All rights reserved."))
    )
}

pub(super) fn header_button(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<a href=\"{}\" class=\"jtb-btn jtb-btn-primary\">{}</a>",
        escape_html(&a.str_or("url", "#")),
        escape_html(&a.str_or("text", "Get Started"))
    )
}

pub(super) fn cart_icon(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<a href=\"#\" style=\"position:relative;color:#111827;font-size:24px;\">🛒<span style=\"position:absolute;top:-8px;right:-8px;background:#3b82f6;color:#fff;font-size:12px;width:20px;height:20px;border-radius:50%;display:flex;align-items:center;justify-content:center;\">{}</span></a>",
        escape_html(&node.attrs.str_or("count", "0"))
    )
}
