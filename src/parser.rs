use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, List, ListItem};

/// Heading markers and the level each one is emitted at, longest marker first.
///
/// The mapping is fixed: `#` renders as h3, `##` as h4, `###` as h5.
const HEADING_MARKERS: [(&str, u8); 3] = [("### ", 5), ("## ", 4), ("# ", 3)];

// Marker whitespace is Unicode White_Space without U+0085, plus U+FEFF.
// Item text stops at the first of `\n`, `\r`, U+2028 or U+2029.
static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*][\x{FEFF}[^\S\x{85}]]").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[\x{FEFF}[^\S\x{85}]]([^\n\r\x{2028}\x{2029}]+)").unwrap()
});

/// Whitespace stripped from both ends of every line.
fn is_line_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Parse Markdown-like text into a list of blocks
pub fn parse(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut state = ParseState::default();
    for line in text.split('\n') {
        process_line(line.trim_matches(is_line_space), &mut state);
    }
    let blocks = state.finish();

    tracing::debug!(blocks = blocks.len(), "parsed analysis text");
    blocks
}

/// Line-boundary state. `open_list` is `None` outside a list, otherwise the
/// list currently collecting items; its `ordered` flag is the list state.
#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    open_list: Option<List>,
}

impl ParseState {
    fn close_list(&mut self) {
        if let Some(list) = self.open_list.take() {
            self.blocks.push(Block::List(list));
        }
    }

    /// Close any open list, then emit a non-list block.
    fn push_block(&mut self, block: Block) {
        self.close_list();
        self.blocks.push(block);
    }

    fn push_item(&mut self, ordered: bool, content: &str) {
        if self.open_list.as_ref().is_some_and(|list| list.ordered != ordered) {
            self.close_list();
        }
        let list = self.open_list.get_or_insert_with(|| List {
            ordered,
            items: Vec::new(),
        });
        list.items.push(ListItem {
            content: content.to_string(),
        });
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_list();
        self.blocks
    }
}

fn process_line(line: &str, state: &mut ParseState) {
    if line.is_empty() {
        tracing::trace!("break");
        state.push_block(Block::Break);
        return;
    }

    if let Some((level, rest)) = heading(line) {
        tracing::trace!(level, "heading");
        state.push_block(Block::Heading {
            level,
            content: rest.to_string(),
        });
        return;
    }

    if UNORDERED_ITEM.is_match(line) {
        tracing::trace!("unordered item");
        // Marker and its whitespace are one character each
        let mut chars = line.chars();
        chars.next();
        chars.next();
        state.push_item(false, chars.as_str());
        return;
    }

    if let Some(caps) = ORDERED_ITEM.captures(line) {
        tracing::trace!("ordered item");
        state.push_item(true, &caps[1]);
        return;
    }

    tracing::trace!("paragraph");
    state.push_block(Block::Paragraph {
        content: line.to_string(),
    });
}

fn heading(line: &str) -> Option<(u8, &str)> {
    HEADING_MARKERS
        .iter()
        .find_map(|(marker, level)| line.strip_prefix(*marker).map(|rest| (*level, rest)))
}
