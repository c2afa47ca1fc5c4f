//! Module tree → HTML.
//!
//! Every node passes through [`RenderCtx::render_child`], which resolves the
//! node type to a [`ModuleKind`] and hands it to that kind's formatting rule.
//! Rules append to a shared `String` buffer; nested modules recurse through the
//! same entry point so the depth guard applies uniformly.

mod content;
mod counters;
mod forms;
mod fullwidth;
mod interactive;
mod listings;
mod media;
mod site;
mod structure;

use std::fmt::{self, Write};

use crate::attrs::Attrs;
use crate::content::{ContentSource, SampleContent};
use crate::html::escape_html;
use crate::node::ModuleNode;
use crate::options::RenderOptions;

/// Every module type the renderer knows how to format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Section,
    Row,
    Column,
    Heading,
    Text,
    Image,
    Button,
    Blurb,
    Icon,
    Divider,
    Code,
    Cta,
    Testimonial,
    TeamMember,
    PricingTable,
    NumberCounter,
    CircleCounter,
    BarCounter,
    Countdown,
    SocialFollow,
    Comments,
    Sidebar,
    PostNavigation,
    Shop,
    Accordion,
    AccordionItem,
    Tabs,
    TabsItem,
    Toggle,
    Audio,
    Video,
    Gallery,
    Slider,
    FullwidthSlider,
    Map,
    FullwidthMap,
    ContactForm,
    ContactFormField,
    Login,
    Signup,
    Search,
    Blog,
    ArchivePosts,
    Portfolio,
    PostSlider,
    FullwidthHeader,
    FullwidthImage,
    FullwidthMenu,
    FullwidthPortfolio,
    FullwidthCode,
    FullwidthPostTitle,
    FeaturedImage,
    PostExcerpt,
    PostMeta,
    AuthorBox,
    RelatedPosts,
    ArchiveTitle,
    Breadcrumbs,
    Menu,
    PostContent,
    PostTitle,
    SiteLogo,
    FooterInfo,
    FooterMenu,
    Copyright,
    HeaderButton,
    CartIcon,
    VideoSlider,
    Spacer,
    Quote,
    List,
    Hero,
    /// Items drawn by their parent (slides, map pins); only a marker comment on their own.
    ParentRendered,
}

/// Legacy and generated type names mapped onto their canonical module.
const TYPE_ALIASES: &[(&str, &str)] = &[
    ("social-icons", "social_icons"),
    ("newsletter", "signup"),
    ("nav", "menu"),
    ("navigation", "menu"),
    ("title", "heading"),
    ("paragraph", "text"),
    ("btn", "button"),
    ("img", "image"),
];

pub fn canonical_type(kind: &str) -> &str {
    TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == kind)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(kind)
}

impl ModuleKind {
    pub fn from_type(kind: &str) -> Option<Self> {
        use ModuleKind::*;
        let kind = match canonical_type(kind) {
            "section" => Section,
            "row" => Row,
            "column" => Column,
            "heading" => Heading,
            "text" => Text,
            "image" => Image,
            "button" => Button,
            "blurb" => Blurb,
            "icon" => Icon,
            "divider" => Divider,
            "code" => Code,
            "cta" => Cta,
            "testimonial" => Testimonial,
            "team_member" => TeamMember,
            "pricing_table" => PricingTable,
            "number_counter" => NumberCounter,
            "circle_counter" => CircleCounter,
            "bar_counter" => BarCounter,
            "countdown" => Countdown,
            "social_follow" | "social_icons" => SocialFollow,
            "comments" => Comments,
            "sidebar" => Sidebar,
            "post_navigation" => PostNavigation,
            "shop" => Shop,
            "accordion" => Accordion,
            "accordion_item" => AccordionItem,
            "tabs" => Tabs,
            "tabs_item" => TabsItem,
            "toggle" => Toggle,
            "audio" => Audio,
            "video" => Video,
            "gallery" => Gallery,
            "slider" => Slider,
            "fullwidth_slider" => FullwidthSlider,
            "slider_item" | "fullwidth_slider_item" | "map_pin" | "video_slider_item" => {
                ParentRendered
            }
            "map" => Map,
            "fullwidth_map" => FullwidthMap,
            "contact_form" => ContactForm,
            "contact_form_field" => ContactFormField,
            "login" => Login,
            "signup" => Signup,
            "search" | "search-form" => Search,
            "blog" => Blog,
            "archive-posts" => ArchivePosts,
            "portfolio" | "filterable_portfolio" => Portfolio,
            "post_slider" | "fullwidth_post_slider" => PostSlider,
            "fullwidth_header" => FullwidthHeader,
            "fullwidth_image" => FullwidthImage,
            "fullwidth_menu" => FullwidthMenu,
            "fullwidth_portfolio" => FullwidthPortfolio,
            "fullwidth_code" => FullwidthCode,
            "fullwidth_post_title" => FullwidthPostTitle,
            "featured-image" => FeaturedImage,
            "post-excerpt" => PostExcerpt,
            "post-meta" => PostMeta,
            "author-box" => AuthorBox,
            "related-posts" => RelatedPosts,
            "archive-title" => ArchiveTitle,
            "breadcrumbs" => Breadcrumbs,
            "menu" => Menu,
            "post-content" => PostContent,
            "post-title" => PostTitle,
            "site-logo" => SiteLogo,
            "footer-info" => FooterInfo,
            "footer-menu" => FooterMenu,
            "copyright" => Copyright,
            "header-button" => HeaderButton,
            "cart-icon" => CartIcon,
            "video_slider" => VideoSlider,
            "spacer" => Spacer,
            "quote" => Quote,
            "list" => List,
            "hero" => Hero,
            _ => return None,
        };
        Some(kind)
    }
}

/// Stateless renderer: configuration plus the listing content source.
pub struct Renderer {
    options: RenderOptions,
    content: Box<dyn ContentSource>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            content: Box::new(SampleContent),
        }
    }

    /// Replace the sample listings with real posts/products.
    pub fn with_content_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.content = Box::new(source);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one module tree to an HTML fragment.
    pub fn render(&self, node: &ModuleNode) -> String {
        let mut out = String::new();
        let ctx = RenderCtx { renderer: self, depth: 0 };
        if let Err(e) = ctx.render_child(node, &mut out) {
            tracing::error!("failed to format module '{}': {}", node.kind, e);
        }
        out
    }
}

/// Per-call rendering state handed to every formatting rule.
#[derive(Clone, Copy)]
pub(crate) struct RenderCtx<'a> {
    renderer: &'a Renderer,
    depth: usize,
}

impl<'a> RenderCtx<'a> {
    pub(crate) fn content(&self) -> &dyn ContentSource {
        self.renderer.content.as_ref()
    }

    /// Theme-mapped, attribute-safe color value.
    pub(crate) fn color(&self, color: &str) -> String {
        escape_html(&self.renderer.options.theme.map_color(color))
    }

    /// Render `node` one level below the current one.
    pub(crate) fn render_nested(&self, node: &ModuleNode, out: &mut String) -> fmt::Result {
        let inner = RenderCtx {
            renderer: self.renderer,
            depth: self.depth + 1,
        };
        inner.render_child(node, out)
    }

    pub(crate) fn render_children(&self, children: &[ModuleNode], out: &mut String) -> fmt::Result {
        for child in children {
            self.render_nested(child, out)?;
        }
        Ok(())
    }

    fn render_child(&self, node: &ModuleNode, out: &mut String) -> fmt::Result {
        let max_depth = self.renderer.options.max_depth;
        if self.depth > max_depth {
            tracing::warn!(
                module = %node.kind,
                max_depth,
                "module tree nested too deeply, subtree replaced"
            );
            return write!(
                out,
                "<div style=\"padding:20px;background:#fee2e2;border:1px dashed #ef4444;border-radius:8px;color:#991b1b;text-align:center;margin:10px 0;\">[max depth {} exceeded]</div>",
                max_depth
            );
        }

        let Some(kind) = ModuleKind::from_type(&node.kind) else {
            if self.renderer.options.log_unknown {
                tracing::warn!(module = %node.kind, "unknown module type");
            }
            return unknown_placeholder(&node.kind, out);
        };

        self.dispatch(kind, node, out)
    }

    fn dispatch(&self, kind: ModuleKind, node: &ModuleNode, out: &mut String) -> fmt::Result {
        use ModuleKind::*;
        match kind {
            Section | Row | Column => structure::container(self, node, out),
            Heading => content::heading(self, node, out),
            Text => content::text(self, node, out),
            Image => content::image(self, node, out),
            Button => content::button(self, node, out),
            Blurb => content::blurb(self, node, out),
            Icon => content::icon(self, node, out),
            Divider => content::divider(self, node, out),
            Code => content::code(self, node, out),
            Cta => content::cta(self, node, out),
            Testimonial => content::testimonial(self, node, out),
            TeamMember => content::team_member(self, node, out),
            PricingTable => content::pricing_table(self, node, out),
            Spacer => content::spacer(self, node, out),
            Quote => content::quote(self, node, out),
            List => content::list(self, node, out),
            Hero => content::hero(self, node, out),
            NumberCounter => counters::number_counter(self, node, out),
            CircleCounter => counters::circle_counter(self, node, out),
            BarCounter => counters::bar_counter(self, node, out),
            Countdown => counters::countdown(self, node, out),
            SocialFollow => site::social_follow(self, node, out),
            Comments => site::comments(self, node, out),
            Sidebar => site::sidebar(self, node, out),
            PostNavigation => site::post_navigation(self, node, out),
            Shop => listings::shop(self, node, out),
            Accordion => interactive::accordion(self, node, out),
            AccordionItem => interactive::accordion_item(self, node, out),
            Tabs => interactive::tabs(self, node, out),
            TabsItem => interactive::tabs_item(self, node, out),
            Toggle => interactive::toggle(self, node, out),
            Slider => interactive::slider(self, node, false, out),
            FullwidthSlider => interactive::slider(self, node, true, out),
            Audio => media::audio(self, node, out),
            Video => media::video(self, node, out),
            Gallery => media::gallery(self, node, out),
            Map => media::map(self, node, false, out),
            FullwidthMap => media::map(self, node, true, out),
            VideoSlider => media::video_slider(self, node, out),
            ContactForm => forms::contact_form(self, node, out),
            ContactFormField => forms::contact_form_field(self, node, out),
            Login => forms::login(self, node, out),
            Signup => forms::signup(self, node, out),
            Search => forms::search(self, node, out),
            Blog | ArchivePosts => listings::blog(self, node, out),
            Portfolio => listings::portfolio(self, node, None, out),
            FullwidthPortfolio => listings::portfolio(self, node, Some(4), out),
            PostSlider => listings::post_slider(self, node, out),
            RelatedPosts => listings::related_posts(self, node, out),
            FullwidthHeader => fullwidth::header(self, node, out),
            FullwidthImage => fullwidth::image(self, node, out),
            FullwidthMenu => fullwidth::menu(self, node, out),
            FullwidthCode => fullwidth::code(self, node, out),
            FullwidthPostTitle => fullwidth::post_title(self, node, out),
            FeaturedImage => site::featured_image(self, node, out),
            PostExcerpt => site::post_excerpt(self, node, out),
            PostMeta => site::post_meta(self, node, out),
            AuthorBox => site::author_box(self, node, out),
            ArchiveTitle => site::archive_title(self, node, out),
            Breadcrumbs => site::breadcrumbs(self, node, out),
            Menu => site::menu(self, node, out),
            PostContent => site::post_content(self, node, out),
            PostTitle => site::post_title(self, node, out),
            SiteLogo => site::site_logo(self, node, out),
            FooterInfo => site::footer_info(self, node, out),
            FooterMenu => site::footer_menu(self, node, out),
            Copyright => site::copyright(self, node, out),
            HeaderButton => site::header_button(self, node, out),
            CartIcon => site::cart_icon(self, node, out),
            ParentRendered => write!(out, "<!-- {} -->", escape_html(&node.kind)),
        }
    }
}

fn unknown_placeholder(kind: &str, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"padding:20px;background:#fef3c7;border:1px dashed #f59e0b;border-radius:8px;color:#92400e;text-align:center;margin:10px 0;\">[{}]</div>",
        escape_html(kind)
    )
}

/// Cap on listing sizes and grid columns read from attrs.
pub const MAX_LISTING_ITEMS: usize = 100;

/// Count read from `key`, capped at [`MAX_LISTING_ITEMS`].
pub(crate) fn listing_count(attrs: &Attrs, key: &str, default: usize) -> usize {
    attrs.count_or(key, default).min(MAX_LISTING_ITEMS)
}

/// `48` → `48px`; values that already carry a unit pass through.
pub(crate) fn css_px(value: &str) -> String {
    if value.trim().parse::<f64>().is_ok() {
        format!("{}px", value.trim())
    } else {
        escape_html(value)
    }
}
