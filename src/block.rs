/// A single list item. Content is the raw item text after the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: String,
}

/// A run of consecutive items of the same kind (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Block-level elements, in source line order.
///
/// Text content is kept unescaped; it is escaped and inline-formatted when
/// the block is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Emitted heading level (3, 4 or 5), not the number of `#` markers
        level: u8,
        content: String,
    },
    Paragraph {
        content: String,
    },
    List(List),
    Break,
}
