use crate::domain::article::entity::Article;

/// One bounded, offset-positioned slice of a filtered and sorted result set.
///
/// `total` counts every article matching the filter, before limit/offset
/// were applied.
#[derive(Debug, Clone)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}
