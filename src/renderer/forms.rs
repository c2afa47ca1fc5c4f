use std::fmt::{self, Write};

use super::RenderCtx;
use crate::html::escape_html;
use crate::node::ModuleNode;

const INPUT_TYPES: &[&str] = &["text", "email", "tel", "number", "url", "password", "date"];

fn input(kind: &str, placeholder: &str, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<input type=\"{}\" placeholder=\"{}\" class=\"jtb-input\" />",
        kind,
        escape_html(placeholder)
    )
}

fn submit(label: &str, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<button class=\"jtb-btn jtb-btn-primary\" style=\"width:100%;\">{}</button>",
        escape_html(label)
    )
}

fn card_heading(title: &str, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<h4 style=\"color:#111827;font-size:24px;text-align:center;margin-bottom:24px;\">{}</h4>",
        title
    )
}

pub(super) fn contact_form(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    write!(out, "<div class=\"jtb-card\">")?;
    write!(
        out,
        "<h4 style=\"color:#111827;font-size:24px;font-weight:600;margin-bottom:8px;\">{}</h4>",
        escape_html(&a.str_or("title", "Contact Us"))
    )?;
    if let Some(description) = a.str("description") {
        write!(
            out,
            "<p style=\"color:#6b7280;margin-bottom:24px;\">{}</p>",
            escape_html(&description)
        )?;
    }
    input("text", "Your Name", out)?;
    input("email", "Your Email", out)?;
    write!(out, "<textarea placeholder=\"Your Message\" class=\"jtb-input jtb-textarea\"></textarea>")?;
    submit(&a.str_or("submit_text", "Send Message"), out)?;
    write!(out, "</div>")
}

pub(super) fn contact_form_field(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    let a = &node.attrs;
    let field_type = a.str_or("field_type", "text");
    let placeholder = a.str_or("placeholder", "");
    write!(out, "<div style=\"margin-bottom:16px;\">")?;
    if let Some(label) = a.str("label") {
        write!(
            out,
            "<label style=\"display:block;margin-bottom:8px;font-weight:500;color:#374151;\">{}</label>",
            escape_html(&label)
        )?;
    }
    if field_type == "textarea" {
        write!(
            out,
            "<textarea placeholder=\"{}\" class=\"jtb-input jtb-textarea\"></textarea>",
            escape_html(&placeholder)
        )?;
    } else {
        let kind = if INPUT_TYPES.contains(&field_type.as_str()) { field_type.as_str() } else { "text" };
        input(kind, &placeholder, out)?;
    }
    write!(out, "</div>")
}

pub(super) fn login(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div class=\"jtb-card\" style=\"max-width:400px;margin:0 auto;\">")?;
    card_heading("Login", out)?;
    input("email", "Email", out)?;
    input("password", "Password", out)?;
    submit("Sign In", out)?;
    write!(
        out,
        "<p style=\"text-align:center;margin-top:16px;color:#6b7280;font-size:14px;\">Don't have an account? <a href=\"#\" style=\"color:#3b82f6;\">Sign up</a></p></div>"
    )
}

pub(super) fn signup(_ctx: &RenderCtx, _node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div class=\"jtb-card\" style=\"max-width:400px;margin:0 auto;\">")?;
    card_heading("Create Account", out)?;
    input("text", "Full Name", out)?;
    input("email", "Email", out)?;
    input("password", "Password", out)?;
    input("password", "Confirm Password", out)?;
    submit("Create Account", out)?;
    write!(out, "</div>")
}

pub(super) fn search(_ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(
        out,
        "<div style=\"display:flex;gap:12px;margin:20px 0;\"><input type=\"text\" placeholder=\"{}\" class=\"jtb-input\" style=\"margin:0;flex:1;\" /><button class=\"jtb-btn jtb-btn-primary\">🔍</button></div>",
        escape_html(&node.attrs.str_or("placeholder", "Search..."))
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
    fn test_contact_form_defaults() {
        let html = render("contact_form", Attrs::new());
        assert!(html.starts_with("<div class=\"jtb-card\">"));
        assert!(html.contains(">Contact Us</h4>"));
        assert_eq!(html.matches("class=\"jtb-input\"").count(), 2);
        assert!(html.contains("class=\"jtb-input jtb-textarea\""));
        assert!(html.contains(">Send Message</button>"));
    }

    #[test]
    fn test_contact_form_field_kinds() {
        let html = render("contact_form_field", Attrs::new().with("field_type", "textarea").with("label", "Msg"));
        assert!(html.contains("<textarea"));
        assert!(html.contains(">Msg</label>"));
        let html = render("contact_form_field", Attrs::new().with("field_type", "email"));
        assert!(html.contains("type=\"email\""));
        let html = render("contact_form_field", Attrs::new().with("field_type", "\"><script>"));
        assert!(html.contains("type=\"text\""));
    }

    #[test]
    fn test_signup_and_newsletter_alias() {
        let html = render("signup", Attrs::new());
        assert_eq!(html.matches("<input").count(), 4);
        assert_eq!(render("newsletter", Attrs::new()), html);
    }

    #[test]
    fn test_search_placeholder() {
        assert!(render("search-form", Attrs::new()).contains("placeholder=\"Search...\""));
        assert!(render("search", Attrs::new().with("placeholder", "Find")).contains("placeholder=\"Find\""));
    }
}
