use crate::block::{Block, List};
use crate::config::OutputConfig;
use crate::inline::{escape, format_inline};

/// Convert blocks to an HTML fragment
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, &mut out);
    }
    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            out.push_str(&format_inline(content));
            out.push_str(&format!("</h{level}>"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            out.push_str(&format_inline(content));
            out.push_str("</p>");
        }
        Block::List(list) => list_to_html(list, out),
        Block::Break => out.push_str("<br>"),
    }
}

fn list_to_html(list: &List, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };

    out.push('<');
    out.push_str(tag);
    out.push('>');
    for item in &list.items {
        out.push_str("<li>");
        out.push_str(&format_inline(&item.content));
        out.push_str("</li>");
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Wrap a rendered fragment according to the output settings.
///
/// With a `container_class` the fragment is placed in a `<div>`; with
/// `standalone` the result becomes a complete HTML page.
pub fn wrap_page(fragment: &str, output: &OutputConfig) -> String {
    let body = match &output.container_class {
        Some(class) => format!("<div class=\"{}\">{fragment}</div>", escape(class)),
        None => fragment.to_string(),
    };

    if !output.standalone {
        return body;
    }

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape(&output.title)));
    page.push_str("</head>\n<body>\n");
    page.push_str(&body);
    page.push_str("\n</body>\n</html>\n");
    page
}
