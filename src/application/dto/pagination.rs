use serde::{Deserialize, Serialize};

/// Offset-paginated response envelope: one page of items plus the metadata
/// a client needs to walk the full result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_offset: Option<u32>,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, total: u64, limit: u32, offset: u32) -> Self {
        let next_offset = (limit > 0 && u64::from(offset) + u64::from(limit) < total)
            .then(|| offset.saturating_add(limit));
        let prev_offset = (offset > 0).then(|| offset.saturating_sub(limit));
        Self {
            items,
            total,
            limit,
            offset,
            next_offset,
            prev_offset,
        }
    }
}
