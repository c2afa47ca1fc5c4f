use regex::Regex;
use std::fmt::{self, Write};
use std::sync::OnceLock;

use super::{css_px, listing_count, RenderCtx};
use crate::html::escape_html;
use crate::node::ModuleNode;

const RESPONSIVE_FRAME: &str = "position:relative;padding-bottom:56.25%;height:0;margin:20px 0;";
const FRAME_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;border:none;border-radius:12px;";

#[derive(Debug, PartialEq)]
enum Embed {
    YouTube(String),
    Vimeo(String),
}

fn youtube_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&?/]+)").unwrap())
}

fn vimeo_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"vimeo\.com/(\d+)").unwrap())
}

fn detect_embed(src: &str) -> Option<Embed> {
    if let Some(caps) = youtube_regex().captures(src) {
        return Some(Embed::YouTube(caps[1].to_string()));
    }
    vimeo_regex()
        .captures(src)
        .map(|caps| Embed::Vimeo(caps[1].to_string()))
}

fn play_button(size: u32, font_size: u32) -> String {
    format!(
        "<div style=\"width:{s}px;height:{s}px;background:rgba(255,255,255,0.9);border-radius:50%;display:flex;align-items:center;justify-content:center;font-size:{}px;cursor:pointer;\">▶</div>",
        font_size,
        s = size
    )
}

pub(super) fn audio(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"background:#f9fafb;border-radius:12px;padding:20px;margin:20px 0;\"><div style=\"display:flex;align-items:center;gap:16px;\"><div style=\"width:60px;height:60px;background:#3b82f6;border-radius:50%;display:flex;align-items:center;justify-content:center;color:#fff;font-size:24px;\">▶</div><div style=\"flex:1;\"><div style=\"height:4px;background:#e5e7eb;border-radius:2px;\"><div style=\"width:30%;height:100%;background:#3b82f6;border-radius:2px;\"></div></div><div style=\"display:flex;justify-content:space-between;margin-top:8px;font-size:12px;color:#6b7280;\"><span>1:23</span><span>4:56</span></div></div></div></div>"
    )
}

pub(super) fn video(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let src = node.attrs.first_str(&["src", "url"]).unwrap_or_default();
    let embed_url = match detect_embed(&src) {
        Some(Embed::YouTube(id)) => format!("https://www.youtube.com/embed/{}", id),
        Some(Embed::Vimeo(id)) => format!("https://player.vimeo.com/video/{}", id),
        None => {
            return write!(
                out,
                "<div style=\"position:relative;background:#1e293b;border-radius:12px;padding-bottom:56.25%;margin:20px 0;\"><div style=\"position:absolute;inset:0;display:flex;align-items:center;justify-content:center;\">{}</div></div>",
                play_button(80, 32)
            );
        }
    };
    write!(
        out,
        "<div style=\"{}\"><iframe src=\"{}\" style=\"{}\" allowfullscreen></iframe></div>",
        RESPONSIVE_FRAME,
        escape_html(&embed_url),
        FRAME_STYLE
    )
}

pub(super) fn gallery(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let images = a.images("images");
    write!(
        out,
        "<div class=\"jtb-grid\" style=\"grid-template-columns:repeat({}, 1fr);gap:{};margin:20px 0;\">",
        listing_count(a, "columns", 3),
        css_px(&a.str_or("gap", "20"))
    )?;
    if images.is_empty() {
        for i in 1..=6 {
            write!(
                out,
                "<div style=\"background:#f3f4f6;border-radius:8px;aspect-ratio:1;display:flex;align-items:center;justify-content:center;color:#9ca3af;\">Image {}</div>",
                i
            )?;
        }
    }
    for image in &images {
        write!(
            out,
            "<div style=\"border-radius:8px;overflow:hidden;aspect-ratio:1;\"><img src=\"{}\" alt=\"{}\" style=\"width:100%;height:100%;object-fit:cover;\" /></div>",
            escape_html(&image.src),
            escape_html(&image.alt)
        )?;
    }
    write!(out, "</div>")
}

/// `map` and `fullwidth_map` share a static location card.
pub(super) fn map(_ctx: &RenderCtx, node: &ModuleNode, fullwidth: bool, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(
        out,
        "<div style=\"height:{};background:#e5e7eb;border-radius:{};display:flex;align-items:center;justify-content:center;margin:20px 0;\"><div style=\"text-align:center;color:#6b7280;\"><div style=\"font-size:48px;margin-bottom:8px;\">📍</div><div>{}</div></div></div>",
        css_px(&a.str_or("height", "400")),
        if fullwidth { "0" } else { "12px" },
        escape_html(&a.str_or("address", "Map Location"))
    )
}

pub(super) fn video_slider(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div style=\"display:flex;gap:24px;overflow-x:auto;padding:20px 0;\">")?;
    for _ in 0..3 {
        write!(
            out,
            "<div style=\"flex:0 0 350px;position:relative;aspect-ratio:16/9;background:#1e293b;border-radius:12px;\"><div style=\"position:absolute;inset:0;display:flex;align-items:center;justify-content:center;\">{}</div></div>",
            play_button(60, 24)
        )?;
    }
    write!(out, "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attrs;
    use crate::renderer::Renderer;

    fn render(kind: &str, attrs: Attrs) -> String {
        Renderer::default().render(&ModuleNode::new(kind).with_attrs(attrs))
    }

    #[test]
    fn test_detect_embed() {
        assert_eq!(
            detect_embed("https://www.youtube.com/watch?v=abc123&t=10"),
            Some(Embed::YouTube("abc123".into()))
        );
        assert_eq!(detect_embed("https://youtu.be/xyz"), Some(Embed::YouTube("xyz".into())));
        assert_eq!(detect_embed("https://vimeo.com/76979871"), Some(Embed::Vimeo("76979871".into())));
        assert_eq!(detect_embed("/media/clip.mp4"), None);
    }

    #[test]
    fn test_video_embed_and_placeholder() {
        let html = render("video", Attrs::new().with("src", "https://youtu.be/xyz"));
        assert!(html.contains("https://www.youtube.com/embed/xyz"));
        let html = render("video", Attrs::new());
        assert!(!html.contains("<iframe"));
        assert!(html.contains("background:#1e293b"));
    }

    #[test]
    fn test_gallery_placeholders() {
        let html = render("gallery", Attrs::new());
        assert!(html.contains("class=\"jtb-grid\""));
        assert!(html.contains("repeat(3, 1fr);gap:20px"));
        assert!(html.contains("Image 6"));
        assert!(!html.contains("Image 7"));
    }

    #[test]
    fn test_gallery_columns_are_capped() {
        let html = render("gallery", Attrs::new().with("columns", 1e18));
        assert!(html.contains("repeat(100, 1fr)"));
    }

    #[test]
    fn test_gallery_images() {
        let html = render("gallery", Attrs::new().with("images", vec!["a.jpg", "b.jpg"]));
        assert_eq!(html.matches("<img").count(), 2);
        assert!(!html.contains("Image 1"));
    }

    #[test]
    fn test_map_variants() {
        let html = render("map", Attrs::new());
        assert!(html.contains("height:400px"));
        assert!(html.contains("border-radius:12px"));
        assert!(html.contains("Map Location"));
        let html = render("fullwidth_map", Attrs::new().with("address", "Paris"));
        assert!(html.contains("border-radius:0;"));
        assert!(html.contains(">Paris</div>"));
    }
}
