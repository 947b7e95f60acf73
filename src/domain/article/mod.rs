pub mod draft;
pub mod entity;
pub mod page;
pub mod repository;
pub mod value_objects;

pub use draft::{ArticleDraft, Violation};
pub use entity::{Article, ArticleUpdate, NewArticle};
pub use page::ArticlePage;
pub use repository::{ArticleReadRepository, ArticleWriteRepository, SortOrder};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle};
