//! # JTB Module Renderer
//!
//! Renders page-builder module trees (`{type, attrs, children}`) to HTML for
//! the builder's preview canvas and generated-layout previews.
//!
//! ## Features
//! - Total rendering: every node produces markup, unknown types get a visible placeholder
//! - Type aliases for legacy and generated module names
//! - Theme palette mapping of literal colors onto CSS variables
//! - Nesting depth guard for malformed or hostile trees
//! - Pluggable listing content for blog, shop and portfolio modules
//!
//! ## Example: single module
//! ```ignore
//! use jtb_render::{parse_module, render_module};
//!
//! let node = parse_module(r#"{"type":"heading","attrs":{"text":"Hello","level":"h1"}}"#)
//!     .expect("Failed to parse module");
//! let html = render_module(&node);
//! ```
//!
//! ## Example: layout preview with options
//! ```ignore
//! use jtb_render::{parse_layout, RenderOptions, Renderer};
//!
//! let options = RenderOptions::from_yaml_str("max_depth: 10\n")?;
//! let layout = parse_layout(&std::fs::read_to_string("layout.json")?)?;
//! let html = Renderer::new(options).render_preview(&layout);
//! ```

pub mod attrs;
pub mod content;
pub mod error;
pub mod html;
pub mod icons;
pub mod node;
pub mod options;
pub mod preview;
pub mod renderer;
pub mod theme;

// --- Core types ---
pub use attrs::Attrs;
pub use content::{ContentSource, SampleContent};
pub use error::{RenderError, RenderResult};
pub use html::SafeHtml;
pub use node::{Layout, ModuleNode};
pub use options::RenderOptions;
pub use renderer::{ModuleKind, Renderer};
pub use theme::Theme;

pub use node::{layout_from_value, module_from_value, parse_layout, parse_module};
pub use preview::render_preview;

/// Render a module tree with default options and sample listings.
pub fn render_module(node: &ModuleNode) -> String {
    Renderer::default().render(node)
}
