use std::fmt::{self, Write};

use super::RenderCtx;
use crate::html::escape_html;
use crate::node::ModuleNode;

const COUNTDOWN_PREVIEW: [(u32, &str); 4] = [(30, "Days"), (12, "Hours"), (45, "Mins"), (30, "Secs")];

struct Counter {
    number: String,
    prefix: String,
    suffix: String,
    title: String,
    color: String,
}

impl Counter {
    fn read(ctx: &RenderCtx, node: &ModuleNode, default_suffix: &str) -> Self {
        let a = &node.attrs;
        let color = a
            .first_str(&["bar_color", "circle_color"])
            .unwrap_or_else(|| "#3b82f6".to_string());
        Counter {
            number: escape_html(&a.first_str(&["number", "percent"]).unwrap_or_else(|| "100".into())),
            prefix: escape_html(&a.str_or("prefix", "")),
            suffix: escape_html(&a.str_or("suffix", default_suffix)),
            title: escape_html(&a.str_or("title", "")),
            color: ctx.color(&color),
        }
    }
}

pub(super) fn number_counter(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let c = Counter::read(ctx, node, "+");
    write!(
        out,
        "<div style=\"text-align:center;padding:30px;\"><div style=\"font-size:48px;font-weight:700;color:{};\">{}{}{}</div>",
        c.color, c.prefix, c.number, c.suffix
    )?;
    if !c.title.is_empty() {
        write!(out, "<div style=\"color:#6b7280;font-size:16px;margin-top:8px;\">{}</div>", c.title)?;
    }
    write!(out, "</div>")
}

pub(super) fn circle_counter(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let c = Counter::read(ctx, node, "%");
    write!(
        out,
        "<div style=\"text-align:center;padding:30px;\"><div style=\"width:120px;height:120px;border-radius:50%;border:8px solid #e5e7eb;display:flex;align-items:center;justify-content:center;margin:0 auto 16px;position:relative;\"><div style=\"position:absolute;inset:0;border-radius:50%;border:8px solid transparent;border-top-color:{color};\"></div><span style=\"font-size:32px;font-weight:700;color:{color};\">{}{}</span></div>",
        c.number,
        c.suffix,
        color = c.color
    )?;
    if !c.title.is_empty() {
        write!(out, "<div style=\"color:#6b7280;font-size:16px;\">{}</div>", c.title)?;
    }
    write!(out, "</div>")
}

pub(super) fn bar_counter(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let c = Counter::read(ctx, node, "%");
    write!(out, "<div style=\"padding:20px 0;\">")?;
    if !c.title.is_empty() {
        write!(
            out,
            "<div style=\"display:flex;justify-content:space-between;margin-bottom:8px;\"><span style=\"color:#111827;font-weight:600;\">{}</span><span style=\"color:{};font-weight:700;\">{}{}</span></div>",
            c.title, c.color, c.number, c.suffix
        )?;
    }
    write!(
        out,
        "<div style=\"height:8px;background:#e5e7eb;border-radius:4px;overflow:hidden;\"><div style=\"width:{}%;height:100%;background:{};border-radius:4px;\"></div></div></div>",
        c.number, c.color
    )
}

/// Static preview: the builder shows fixed values instead of a live timer.
pub(super) fn countdown(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div style=\"display:flex;justify-content:center;gap:20px;padding:30px;\">")?;
    for (value, label) in COUNTDOWN_PREVIEW {
        write!(
            out,
            "<div style=\"text-align:center;\"><div style=\"font-size:48px;font-weight:700;color:#111827;\">{}</div><div style=\"color:#6b7280;font-size:14px;\">{}</div></div>",
            value, label
        )?;
    }
    write!(out, "</div>")
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
    fn test_number_counter_defaults() {
        let html = render("number_counter", Attrs::new());
        assert!(html.contains(">100+</div>"));
        let html = render("number_counter", Attrs::new().with("number", 5).with("prefix", "$").with("suffix", "k"));
        assert!(html.contains(">$5k</div>"));
    }

    #[test]
    fn test_percent_counters() {
        let html = render("circle_counter", Attrs::new().with("percent", 75).with("title", "Done"));
        assert!(html.contains("75%</span>"));
        assert!(html.contains(">Done</div>"));

        let html = render("bar_counter", Attrs::new().with("percent", 60).with("bar_color", "#ff0000"));
        assert!(html.contains("width:60%"));
        assert!(html.contains("background:#ff0000"));
    }

    #[test]
    fn test_countdown_is_fixed() {
        let html = render("countdown", Attrs::new().with("date", "2030-01-01"));
        for needle in [">30</div>", ">12</div>", ">45</div>", ">Days<", ">Hours<", ">Mins<", ">Secs<"] {
            assert!(html.contains(needle), "missing {}", needle);
        }
    }
}
