use crate::stage::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub index: Option<usize>, // None when the embedded attribute is missing or unparseable
    pub active: bool,
}

impl Tab {
    pub fn points_at(&self, index: usize) -> bool {
        self.index == Some(index)
    }
}

/// Parses an embedded index attribute leniently: leading whitespace and a `+`
/// sign are accepted, parsing stops at the first non-digit. Negative numbers
/// and inputs without leading digits yield `None`.
pub fn parse_index_attr(raw: Option<&str>) -> Option<usize> {
    let trimmed = raw?.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
