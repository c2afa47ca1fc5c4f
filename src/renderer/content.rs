//! Leaf content modules: typography, media blocks, cards.

use std::fmt::{self, Write};

use super::{css_px, RenderCtx};
use crate::html::{css_url, escape_html, SafeHtml};
use crate::icons::resolve_icon;
use crate::node::ModuleNode;

const HEADING_LEVELS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

fn heading_size(level: &str) -> &'static str {
    match level {
        "h1" => "48",
        "h2" => "36",
        "h3" => "28",
        _ => "20",
    }
}

pub(super) fn heading(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let level = a
        .str("level")
        .map(|l| l.to_lowercase())
        .filter(|l| HEADING_LEVELS.contains(&l.as_str()))
        .unwrap_or_else(|| "h2".to_string());
    let size = a.str("font_size").unwrap_or_else(|| heading_size(&level).to_string());
    let color = ctx.color(&a.str_or("text_color", "#111827"));
    let align = escape_html(&a.str_or("text_align", "left"));
    let weight = escape_html(&a.str_or("font_weight", "700"));
    write!(
        out,
        "<{level} style=\"font-size:{};color:{};text-align:{};font-weight:{};line-height:1.2;margin-bottom:20px;\">{}</{level}>",
        css_px(&size),
        color,
        align,
        weight,
        escape_html(&a.str_or("text", "")),
        level = level
    )
}

/// Rich text block; content is trusted markup from the builder's editor.
pub(super) fn text(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let content = SafeHtml::trusted(a.str_or("content", ""));
    let color = ctx.color(&a.str_or("text_color", "#4b5563"));
    let size = a.str_or("font_size", "16");
    write!(
        out,
        "<div style=\"color:{};font-size:{};line-height:1.7;margin-bottom:20px;\">{}</div>",
        color,
        css_px(&size),
        content
    )
}

pub(super) fn image(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let radius = a
        .path(&["border_radius", "top_left"])
        .unwrap_or_else(|| "12".to_string());
    match a.first_str(&["src", "image_url", "url"]) {
        Some(src) => write!(
            out,
            "<div style=\"margin-bottom:20px;\"><img src=\"{}\" alt=\"{}\" style=\"max-width:100%;height:auto;border-radius:{};display:block;\" /></div>",
            escape_html(&src),
            escape_html(&a.str_or("alt", "")),
            css_px(&radius)
        ),
        None => write!(
            out,
            "<div style=\"background:#f3f4f6;height:250px;border-radius:{};display:flex;align-items:center;justify-content:center;color:#9ca3af;margin-bottom:20px;\">Image</div>",
            css_px(&radius)
        ),
    }
}

pub(super) fn button(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let radius = a
        .path(&["border_radius", "top_left"])
        .unwrap_or_else(|| "8".to_string());
    write!(
        out,
        "<div style=\"margin:20px 0;text-align:{};\"><a href=\"{}\" class=\"jtb-btn\" style=\"background:{};color:{};border-radius:{};\">{}</a></div>",
        escape_html(&a.str_or("align", "left")),
        escape_html(&a.str_or("link_url", "#")),
        ctx.color(&a.str_or("background_color", "#3b82f6")),
        ctx.color(&a.str_or("text_color", "#ffffff")),
        css_px(&radius),
        escape_html(&a.str_or("text", "Button"))
    )
}

pub(super) fn blurb(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let icon = resolve_icon(&a.str_or("font_icon", "star"));
    let icon_color = ctx.color(&a.str_or("icon_color", "#3b82f6"));
    let align = a.str_or("text_orientation", "center");
    let icon_margin = if align == "center" { "0 auto 20px" } else { "0 0 20px" };
    write!(
        out,
        "<div class=\"jtb-card\" style=\"text-align:{};\"><div class=\"jtb-icon-box\" style=\"background:linear-gradient(135deg,{c}15,{c}25);margin:{};\">{}</div><h4 style=\"color:#111827;font-size:20px;font-weight:700;margin-bottom:12px;\">{}</h4><p style=\"color:#6b7280;font-size:15px;line-height:1.7;margin:0;\">{}</p></div>",
        escape_html(&align),
        icon_margin,
        icon,
        escape_html(&a.str_or("title", "")),
        SafeHtml::stripped(&a.str_or("content", "")),
        c = icon_color
    )
}

pub(super) fn icon(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"text-align:center;font-size:{};color:{};margin:20px 0;\">{}</div>",
        css_px(&a.str_or("icon_size", "48")),
        ctx.color(&a.str_or("icon_color", "#3b82f6")),
        resolve_icon(&a.str_or("font_icon", "star"))
    )
}

pub(super) fn divider(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<hr style=\"border:none;border-top:{} {} {};margin:30px 0;\" />",
        css_px(&a.str_or("divider_weight", "1px")),
        escape_html(&a.str_or("divider_style", "solid")),
        ctx.color(&a.str_or("divider_color", "#e5e7eb"))
    )
}

/// Code blocks arrive pre-highlighted from the editor and are emitted as-is.
pub(super) fn code(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let content = node
        .attrs
        .first_str(&["content", "code"])
        .unwrap_or_else(|| "// Code here".to_string());
    write!(
        out,
        "<pre style=\"background:#1e293b;color:#e2e8f0;padding:20px;border-radius:8px;overflow-x:auto;font-family:monospace;font-size:14px;margin:20px 0;\"><code>{}</code></pre>",
        SafeHtml::trusted(content)
    )
}

pub(super) fn cta(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let bg = a
        .first_str(&["promo_color", "background_color"])
        .unwrap_or_else(|| "#3b82f6".to_string());
    write!(
        out,
        "<div style=\"text-align:center;padding:60px 40px;background:{};border-radius:16px;\">",
        ctx.color(&bg)
    )?;
    if let Some(title) = a.str("title") {
        write!(
            out,
            "<h3 style=\"color:#fff;font-size:32px;font-weight:700;margin-bottom:16px;\">{}</h3>",
            escape_html(&title)
        )?;
    }
    let body = SafeHtml::stripped(&a.str_or("content", ""));
    if !body.is_empty() {
        write!(
            out,
            "<p style=\"color:rgba(255,255,255,0.9);margin-bottom:24px;max-width:600px;margin-left:auto;margin-right:auto;line-height:1.6;\">{}</p>",
            body
        )?;
    }
    write!(
        out,
        "<a href=\"{}\" class=\"jtb-btn jtb-btn-white\">{}</a></div>",
        escape_html(&a.str_or("link_url", "#")),
        escape_html(&a.str_or("button_text", "Get Started"))
    )
}

pub(super) fn testimonial(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let author = a.str_or("author", "");
    write!(out, "<div class=\"jtb-card\" style=\"text-align:center;\">")?;
    match a.str("portrait_url") {
        Some(portrait) => write!(
            out,
            "<div class=\"jtb-avatar\" style=\"margin:0 auto 16px;\"><img src=\"{}\" alt=\"{}\" /></div>",
            escape_html(&portrait),
            escape_html(&author)
        )?,
        None => write!(
            out,
            "<div style=\"width:80px;height:80px;border-radius:50%;background:#e5e7eb;margin:0 auto 16px;\"></div>"
        )?,
    }
    let quote = SafeHtml::stripped(&a.str_or("content", ""));
    let quote = if quote.is_empty() {
        SafeHtml::text("Great experience!")
    } else {
        quote
    };
    write!(
        out,
        "<div style=\"font-size:28px;color:#3b82f6;margin-bottom:12px;font-family:Georgia,serif;\">&quot;</div><p style=\"color:#374151;font-style:italic;line-height:1.8;margin-bottom:20px;font-size:15px;\">{}</p>",
        quote
    )?;
    if !author.is_empty() {
        write!(
            out,
            "<div style=\"font-weight:700;color:#111827;font-size:16px;\">{}</div>",
            escape_html(&author)
        )?;
    }
    let job = a.str_or("job_title", "");
    let company = a.str_or("company", "");
    if !job.is_empty() || !company.is_empty() {
        let sep = if !job.is_empty() && !company.is_empty() { ", " } else { "" };
        write!(
            out,
            "<div style=\"color:#6b7280;font-size:13px;\">{}{}{}</div>",
            escape_html(&job),
            sep,
            escape_html(&company)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn team_member(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let name = a.str_or("name", "");
    write!(out, "<div class=\"jtb-card\" style=\"text-align:center;\">")?;
    match a.first_str(&["image", "photo_url"]) {
        Some(src) => write!(
            out,
            "<div style=\"width:120px;height:120px;border-radius:50%;overflow:hidden;margin:0 auto 16px;border:4px solid #f3f4f6;\"><img src=\"{}\" alt=\"{}\" style=\"width:100%;height:100%;object-fit:cover;object-position:center top;\" /></div>",
            escape_html(&src),
            escape_html(&name)
        )?,
        None => write!(
            out,
            "<div style=\"width:120px;height:120px;border-radius:50%;background:#e5e7eb;margin:0 auto 16px;\"></div>"
        )?,
    }
    if !name.is_empty() {
        write!(
            out,
            "<h4 style=\"color:#111827;font-size:20px;font-weight:700;margin-bottom:4px;\">{}</h4>",
            escape_html(&name)
        )?;
    }
    if let Some(position) = a.str("position") {
        write!(
            out,
            "<div style=\"color:#3b82f6;font-size:14px;font-weight:500;margin-bottom:12px;\">{}</div>",
            escape_html(&position)
        )?;
    }
    let bio = SafeHtml::stripped(&a.first_str(&["content", "bio"]).unwrap_or_default());
    if !bio.is_empty() {
        write!(
            out,
            "<p style=\"color:#6b7280;font-size:14px;line-height:1.7;margin:0;\">{}</p>",
            bio
        )?;
    }
    write!(out, "</div>")
}

/// Newline-separated feature list with blank lines dropped.
fn feature_lines(features: &str) -> Vec<&str> {
    features
        .split('\n')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

pub(super) fn pricing_table(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let featured = a.flag("featured");
    let features = a
        .string_list("features")
        .unwrap_or_else(|| {
            feature_lines(&a.str_or("features", ""))
                .into_iter()
                .map(String::from)
                .collect()
        });
    if featured {
        write!(
            out,
            "<div class=\"jtb-card\" style=\"text-align:center;border:2px solid #3b82f6;box-shadow:0 25px 50px -12px rgba(59,130,246,0.25);transform:scale(1.02);\"><div style=\"background:linear-gradient(135deg,#3b82f6,#2563eb);color:#fff;padding:6px 16px;border-radius:20px;font-size:11px;font-weight:700;display:inline-block;margin-bottom:16px;text-transform:uppercase;\">POPULAR</div>"
        )?;
    } else {
        write!(
            out,
            "<div class=\"jtb-card\" style=\"text-align:center;border:1px solid #e5e7eb;\">"
        )?;
    }
    write!(
        out,
        "<h4 style=\"color:#111827;font-size:24px;font-weight:700;margin-bottom:8px;\">{}</h4><div style=\"margin-bottom:24px;\"><span style=\"font-size:48px;font-weight:800;color:#111827;\">{}</span><span style=\"color:#6b7280;font-size:16px;\">{}</span></div><ul style=\"list-style:none;margin-bottom:28px;text-align:left;\">",
        escape_html(&a.str_or("title", "Plan")),
        escape_html(&a.str_or("price", "$0")),
        escape_html(&a.str_or("period", "/month"))
    )?;
    for feature in features.iter().filter(|f| !f.trim().is_empty()) {
        write!(
            out,
            "<li style=\"padding:10px 0;border-bottom:1px solid #f3f4f6;color:#4b5563;font-size:15px;\"><span style=\"color:#10B981;margin-right:8px;\">✓</span>{}</li>",
            escape_html(feature.trim())
        )?;
    }
    let btn_class = if featured { "jtb-btn-primary" } else { "jtb-btn-secondary" };
    write!(
        out,
        "</ul><a href=\"{}\" class=\"jtb-btn {}\" style=\"display:block;text-align:center;\">{}</a></div>",
        escape_html(&a.str_or("link_url", "#")),
        btn_class,
        escape_html(&a.str_or("button_text", "Get Started"))
    )
}

pub(super) fn spacer(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div class=\"jtb-spacer\" style=\"height:{};\"></div>",
        css_px(&node.attrs.str_or("height", "40"))
    )
}

pub(super) fn quote(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let text = a.first_str(&["quote", "text", "content"]).unwrap_or_default();
    write!(
        out,
        "<blockquote style=\"border-left:4px solid #3b82f6;padding:16px 24px;margin:20px 0;background:#f9fafb;border-radius:0 8px 8px 0;\"><p style=\"color:#374151;font-size:18px;font-style:italic;line-height:1.7;margin:0;\">{}</p>",
        SafeHtml::stripped(&text)
    )?;
    let author = a.str("author");
    let source = a.str("source");
    if author.is_some() || source.is_some() {
        write!(out, "<footer style=\"margin-top:12px;color:#6b7280;font-size:14px;\">")?;
        if let Some(author) = &author {
            write!(out, "<cite style=\"font-style:normal;font-weight:600;color:#111827;\">{}</cite>", escape_html(author))?;
        }
        if let Some(source) = &source {
            let sep = if author.is_some() { ", " } else { "" };
            write!(out, "<span>{}{}</span>", sep, escape_html(source))?;
        }
        write!(out, "</footer>")?;
    }
    write!(out, "</blockquote>")
}

pub(super) fn list(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let items = a
        .string_list("items")
        .filter(|items| !items.is_empty())
        .unwrap_or_else(|| vec!["Item 1".into(), "Item 2".into(), "Item 3".into()]);
    let tag = if a.str("type").as_deref() == Some("ordered") { "ol" } else { "ul" };
    write!(out, "<{} style=\"margin:0 0 20px;padding-left:20px;color:#4b5563;line-height:1.7;\">", tag)?;
    for item in items.iter().filter(|i| !i.is_empty()) {
        write!(out, "<li>{}</li>", escape_html(item))?;
    }
    write!(out, "</{}>", tag)
}

pub(super) fn hero(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let bg_image = a.first_str(&["bg_image", "background_image"]);
    let text_color = ctx.color(&a.str_or("text_color", "#ffffff"));
    let alignment = a.str_or("alignment", "center");
    let background = match &bg_image {
        Some(src) => format!(
            "background-image:{};background-size:cover;background-position:center",
            css_url(src)
        ),
        None => format!("background:{}", ctx.color(&a.str_or("background_color", "#1e1e2e"))),
    };
    write!(
        out,
        "<div class=\"jtb-hero\" style=\"{};min-height:{};display:flex;align-items:center;justify-content:center;position:relative;\">",
        background,
        css_px(&a.str_or("min_height", "500px"))
    )?;
    if bg_image.is_some() {
        let overlay = a.number("overlay_opacity").unwrap_or(0.5);
        write!(
            out,
            "<div style=\"position:absolute;inset:0;background:rgba(0,0,0,{});\"></div>",
            overlay
        )?;
    }
    write!(
        out,
        "<div style=\"position:relative;z-index:1;text-align:{};padding:40px;max-width:800px;\">",
        escape_html(&alignment)
    )?;
    if let Some(title) = a.first_str(&["title", "label"]) {
        write!(out, "<h1 style=\"color:{};margin:0 0 15px;font-size:3em;\">{}</h1>", text_color, escape_html(&title))?;
    }
    if let Some(subtitle) = a.str("subtitle") {
        write!(out, "<h3 style=\"color:{};opacity:0.8;margin:0 0 25px;font-size:1.1em;\">{}</h3>", text_color, escape_html(&subtitle))?;
    }
    if let Some(text) = a.first_str(&["text", "description"]) {
        write!(out, "<p style=\"color:{};margin:0 0 30px;font-size:1.2em;line-height:1.6;\">{}</p>", text_color, escape_html(&text))?;
    }
    let primary = a.first_str(&["button_text", "primary_button_text"]);
    let secondary = a.str("secondary_button_text");
    if primary.is_some() || secondary.is_some() {
        let justify = match alignment.as_str() {
            "center" => "center",
            "right" => "flex-end",
            _ => "flex-start",
        };
        write!(out, "<div style=\"display:flex;gap:15px;justify-content:{};\">", justify)?;
        if let Some(label) = primary {
            let url = a.first_str(&["button_url", "primary_button_url"]).unwrap_or_else(|| "#".into());
            write!(out, "<a href=\"{}\" class=\"jtb-btn jtb-btn-primary\">{}</a>", escape_html(&url), escape_html(&label))?;
        }
        if let Some(label) = secondary {
            write!(
                out,
                "<a href=\"{}\" class=\"jtb-btn\" style=\"background:transparent;border:2px solid #fff;color:#fff;\">{}</a>",
                escape_html(&a.str_or("secondary_button_url", "#")),
                escape_html(&label)
            )?;
        }
        write!(out, "</div>")?;
    }
    write!(out, "</div></div>")
}
