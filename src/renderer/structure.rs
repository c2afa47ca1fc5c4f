use std::fmt::{self, Write};

use super::RenderCtx;
use crate::node::ModuleNode;

/// `section`, `row` and `column` wrap their children and ignore attrs.
pub(super) fn container(ctx: &RenderCtx, node: &ModuleNode, out: &mut String) -> fmt::Result {
    write!(out, "<div class=\"jtb-{}\">", node.kind)?;
    ctx.render_children(&node.children, out)?;
    write!(out, "</div>")
}
