//! Lightweight Markdown-to-HTML renderer for model-generated analysis text.
//!
//! Supports `#`/`##`/`###` headings (emitted as h3/h4/h5), `-`/`*` and
//! `N.` list items, paragraphs, blank-line breaks, and `**bold**`,
//! `*italic*` and `` `code` `` spans. Text is HTML-escaped before any span
//! formatting is applied. Rendering is total: every input produces output.
//!
//! ```
//! assert_eq!(
//!     analysis_render::render("# Notes\n- **one**\n- two"),
//!     "<h3>Notes</h3><ul><li><strong>one</strong></li><li>two</li></ul>"
//! );
//! ```

mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod response;

pub use block::{Block, List, ListItem};
pub use config::{CONFIG_FILE_NAME, Config, ConfigError, OutputConfig};
pub use error::Error;
pub use inline::{escape, format_inline};
pub use response::AnalysisResponse;

/// Parse analysis text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Render analysis text to an HTML fragment.
pub fn render(text: &str) -> String {
    let blocks = parse(text);
    html::blocks_to_html(&blocks)
}

/// Render analysis text that may be absent. `None` renders as empty output.
pub fn render_analysis(text: Option<&str>) -> String {
    render(text.unwrap_or_default())
}

/// Render the `analysis` field of a backend JSON response.
///
/// # Errors
///
/// Returns `Error::Response` if the body is not a valid response object.
pub fn render_response(json: &str) -> Result<String, Error> {
    let response = AnalysisResponse::from_json(json)?;
    Ok(render(response.text()))
}

/// Render analysis text and wrap it according to `config.output`.
pub fn render_page(text: &str, config: &Config) -> String {
    html::wrap_page(&render(text), &config.output)
}
