//! Preview listings backed by the renderer's [`ContentSource`](crate::content::ContentSource).

use std::fmt::{self, Write};

use super::{listing_count, RenderCtx};
use crate::html::escape_html;
use crate::node::ModuleNode;

pub(super) fn shop(ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div class=\"jtb-grid jtb-grid-4\" style=\"margin:20px 0;\">")?;
    for product in ctx.content().products(4) {
        write!(
            out,
            "<div class=\"jtb-card\" style=\"padding:0;overflow:hidden;\"><div style=\"height:200px;background:#f3f4f6;\"></div><div style=\"padding:16px;\"><h4 style=\"font-size:16px;color:#111827;margin-bottom:8px;\">{}</h4><div style=\"color:#3b82f6;font-weight:700;\">${:.2}</div></div></div>",
            escape_html(&product.name),
            product.price
        )?;
    }
    write!(out, "</div>")
}

/// `blog` and `archive-posts`.
pub(super) fn blog(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let columns = listing_count(a, "columns", 3);
    let count = listing_count(a, "posts_number", 3);
    write!(
        out,
        "<div class=\"jtb-grid\" style=\"grid-template-columns:repeat({}, 1fr);margin:20px 0;\">",
        columns
    )?;
    for post in ctx.content().blog_posts(count) {
        write!(
            out,
            "<div class=\"jtb-card\" style=\"padding:0;overflow:hidden;\"><div style=\"height:200px;background:linear-gradient(135deg,#f3f4f6,#e5e7eb);\"></div><div style=\"padding:20px;\"><div style=\"color:#6b7280;font-size:14px;margin-bottom:8px;\">{}</div><h4 style=\"color:#111827;font-size:18px;font-weight:600;margin-bottom:12px;\">{}</h4><p style=\"color:#6b7280;font-size:14px;line-height:1.6;margin:0;\">{}</p></div></div>",
            escape_html(&post.date),
            escape_html(&post.title),
            escape_html(&post.excerpt)
        )?;
    }
    write!(out, "</div>")
}

/// `portfolio`, `filterable_portfolio`, and `fullwidth_portfolio` with a
/// forced column count.
pub(super) fn portfolio(
    ctx: &RenderCtx,
    node: &ModuleNode,
    columns_override: Option<usize>,
    out: &mut String,
) -> fmt::Result {
    let a = &node.attrs;
    let columns = columns_override.unwrap_or_else(|| listing_count(a, "columns", 4));
    let count = listing_count(a, "posts_number", 8);
    write!(
        out,
        "<div class=\"jtb-grid\" style=\"grid-template-columns:repeat({}, 1fr);margin:20px 0;\">",
        columns
    )?;
    for project in ctx.content().projects(count) {
        write!(
            out,
            "<div style=\"position:relative;aspect-ratio:1;background:linear-gradient(135deg,#f3f4f6,#e5e7eb);border-radius:8px;overflow:hidden;\"><div style=\"position:absolute;inset:0;background:rgba(0,0,0,0.4);opacity:0;transition:opacity 0.3s;display:flex;align-items:center;justify-content:center;\"><span style=\"color:#fff;font-weight:600;\">{}</span></div></div>",
            escape_html(&project.title)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn post_slider(ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"display:flex;gap:24px;overflow-x:auto;padding:20px 0;margin:0 -24px;padding-left:24px;padding-right:24px;\">"
    )?;
    for post in ctx.content().featured_posts(4) {
        write!(
            out,
            "<div style=\"flex:0 0 300px;background:#fff;border-radius:12px;overflow:hidden;box-shadow:0 4px 6px rgba(0,0,0,0.1);\"><div style=\"height:180px;background:linear-gradient(135deg,#f3f4f6,#e5e7eb);\"></div><div style=\"padding:16px;\"><div style=\"color:#6b7280;font-size:12px;margin-bottom:8px;\">{}</div><h4 style=\"color:#111827;font-size:16px;font-weight:600;\">{}</h4></div></div>",
            escape_html(&post.date),
            escape_html(&post.title)
        )?;
    }
    write!(out, "</div>")
}

pub(super) fn related_posts(ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"margin:40px 0;\"><h3 style=\"color:#111827;font-size:24px;margin-bottom:24px;\">Related Posts</h3><div class=\"jtb-grid jtb-grid-3\">"
    )?;
    for post in ctx.content().related_posts(3) {
        write!(
            out,
            "<div class=\"jtb-card\" style=\"padding:0;overflow:hidden;\"><div style=\"height:150px;background:#f3f4f6;\"></div><div style=\"padding:16px;\"><h4 style=\"font-size:16px;color:#111827;\">{}</h4></div></div>",
            escape_html(&post.title)
        )?;
    }
    write!(out, "</div></div>")
}

#[cfg(test)]
mod tests {
    use crate::attrs::Attrs;
    use crate::content::{ContentSource, PostSummary, Product, Project};
    use crate::node::ModuleNode;
    use crate::options::RenderOptions;
    use crate::renderer::{Renderer, MAX_LISTING_ITEMS};

    fn render(kind: &str, attrs: Attrs) -> String {
        Renderer::default().render(&ModuleNode::new(kind).with_attrs(attrs))
    }

    #[test]
    fn test_shop_products() {
        let html = render("shop", Attrs::new());
        assert!(html.contains("jtb-grid jtb-grid-4"));
        assert!(html.contains("$19.99"));
        assert!(html.contains("$79.96"));
        assert_eq!(html.matches("jtb-card").count(), 4);
    }

    #[test]
    fn test_huge_listing_sizes_are_capped() {
        let attrs: Attrs = serde_json::from_value(serde_json::json!({
            "posts_number": 1e18,
            "columns": 1e18,
        }))
        .unwrap();
        let blog = render("blog", attrs.clone());
        assert_eq!(blog.matches("jtb-card").count(), MAX_LISTING_ITEMS);
        assert!(blog.contains("repeat(100, 1fr)"));

        let portfolio = render("portfolio", attrs);
        assert_eq!(portfolio.matches("aspect-ratio:1").count(), MAX_LISTING_ITEMS);
    }

    #[test]
    fn test_blog_defaults_and_archive_alias() {
        let html = render("blog", Attrs::new());
        assert!(html.contains("repeat(3, 1fr)"));
        assert!(html.contains("Blog Post Title 3"));
        assert!(html.contains("Jan 1, 2024"));
        assert!(!html.contains("Blog Post Title 4"));
        assert_eq!(render("archive-posts", Attrs::new()), html);
    }

    #[test]
    fn test_blog_posts_number() {
        let html = render("blog", Attrs::new().with("posts_number", 5).with("columns", 2));
        assert!(html.contains("repeat(2, 1fr)"));
        assert!(html.contains("Blog Post Title 5"));
    }

    #[test]
    fn test_fullwidth_portfolio_forces_four_columns() {
        let html = render("fullwidth_portfolio", Attrs::new().with("columns", 2));
        assert!(html.contains("repeat(4, 1fr)"));
        assert!(html.contains("Project 8"));
        let html = render("portfolio", Attrs::new().with("columns", 2));
        assert!(html.contains("repeat(2, 1fr)"));
    }

    #[test]
    fn test_related_posts() {
        let html = render("related-posts", Attrs::new());
        assert!(html.contains("jtb-grid jtb-grid-3"));
        assert!(html.contains("Related Post 3"));
    }

    struct OneProduct;

    impl ContentSource for OneProduct {
        fn blog_posts(&self, _count: usize) -> Vec<PostSummary> {
            Vec::new()
        }
        fn featured_posts(&self, _count: usize) -> Vec<PostSummary> {
            Vec::new()
        }
        fn related_posts(&self, _count: usize) -> Vec<PostSummary> {
            Vec::new()
        }
        fn products(&self, _count: usize) -> Vec<Product> {
            vec![Product { name: "Mug <XL>".into(), price: 7.5 }]
        }
        fn projects(&self, _count: usize) -> Vec<Project> {
            Vec::new()
        }
    }

    #[test]
    fn test_custom_content_source() {
        let renderer = Renderer::new(RenderOptions::default()).with_content_source(OneProduct);
        let html = renderer.render(&ModuleNode::new("shop"));
        assert!(html.contains("Mug &lt;XL&gt;"));
        assert!(html.contains("$7.50"));
        assert_eq!(html.matches("jtb-card").count(), 1);
    }
}
