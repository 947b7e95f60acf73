use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, OffsetPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::SortOrder,
};

pub struct ListArticlesQuery {
    pub keyword: Option<String>,
    pub order: String,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let keyword = normalize_keyword(query.keyword)?;
        let order = parse_order(&query.order)?;

        let page = self
            .read_repo
            .search(keyword.as_deref(), order, query.limit, query.offset)
            .await?;

        let items = page.articles.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, page.total, page.limit, page.offset))
    }
}

/// The keyword filter is constrained to alphanumeric characters. An empty
/// value counts as absent.
fn normalize_keyword(keyword: Option<String>) -> ApplicationResult<Option<String>> {
    match keyword {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => {
            if value.chars().all(|c| c.is_ascii_alphanumeric()) {
                Ok(Some(value))
            } else {
                Err(ApplicationError::invalid_parameter(
                    "keyword must contain only alphanumeric characters",
                ))
            }
        }
    }
}

fn parse_order(raw: &str) -> ApplicationResult<SortOrder> {
    match raw {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        other => Err(ApplicationError::invalid_parameter(format!(
            "order must be \"asc\" or \"desc\", got \"{other}\""
        ))),
    }
}
