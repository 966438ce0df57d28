use {
    std::collections::HashMap,
    async_trait::async_trait,
    anyhow::Result,
    tokio::sync::RwLock,
    crate::entity::{AuthorEntity, WorkEntity},
};

/// Store handle shared by both import passes. `save_author` and `save_work`
/// are upserts keyed by id.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn save_author(&self, author: &AuthorEntity) -> Result<()>;

    async fn author_by_id(&self, id: &str) -> Result<Option<AuthorEntity>>;

    async fn save_work(&self, work: &WorkEntity) -> Result<()>;

    async fn work_by_id(&self, id: &str) -> Result<Option<WorkEntity>>;
}

/// In-memory catalog, used by tests instead of a live database.
pub struct MemoryCatalog {
    authors: RwLock<HashMap<String, AuthorEntity>>,
    works: RwLock<HashMap<String, WorkEntity>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
            works: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn save_author(&self, author: &AuthorEntity) -> Result<()> {
        self.authors.write().await.insert(author.id().to_owned(), author.clone());
        Ok(())
    }

    async fn author_by_id(&self, id: &str) -> Result<Option<AuthorEntity>> {
        Ok(self.authors.read().await.get(id).cloned())
    }

    async fn save_work(&self, work: &WorkEntity) -> Result<()> {
        self.works.write().await.insert(work.id().to_owned(), work.clone());
        Ok(())
    }

    async fn work_by_id(&self, id: &str) -> Result<Option<WorkEntity>> {
        Ok(self.works.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        chrono::NaiveDate,
        crate::entity::{AuthorEntity, WorkEntity},
    };

    #[tokio::test]
    async fn author_roundtrip() {
        let catalog = MemoryCatalog::new();
        let author = AuthorEntity::builder()
            .id("OL1A".to_owned())
            .name("Jane Doe".to_owned())
            .personal_name("Jane".to_owned())
            .build();

        catalog.save_author(&author).await.unwrap();

        assert_eq!(catalog.author_by_id("OL1A").await.unwrap(), Some(author));
        assert_eq!(catalog.author_by_id("OL9A").await.unwrap(), None);
    }

    #[tokio::test]
    async fn work_roundtrip() {
        let catalog = MemoryCatalog::new();
        let work = WorkEntity::builder()
            .id("OL1W".to_owned())
            .title("Flatland".to_owned())
            .description(Some("A romance of many dimensions".to_owned()))
            .publish_date(NaiveDate::from_ymd_opt(1884, 1, 1))
            .cover_ids(Some(vec!["135182".to_owned()]))
            .author_ids(Some(vec!["OL2A".to_owned()]))
            .author_names(Some(vec!["Edwin Abbott Abbott".to_owned()]))
            .build();

        catalog.save_work(&work).await.unwrap();

        assert_eq!(catalog.work_by_id("OL1W").await.unwrap(), Some(work));
    }

    #[tokio::test]
    async fn saving_same_author_id_overwrites() {
        let catalog = MemoryCatalog::new();
        let first = AuthorEntity::builder()
            .id("OL1A".to_owned())
            .name("Jane Doe".to_owned())
            .personal_name("".to_owned())
            .build();
        let second = AuthorEntity::builder()
            .id("OL1A".to_owned())
            .name("Jane Q. Doe".to_owned())
            .personal_name("Jane".to_owned())
            .build();

        catalog.save_author(&first).await.unwrap();
        catalog.save_author(&second).await.unwrap();

        assert_eq!(catalog.author_by_id("OL1A").await.unwrap(), Some(second));
    }
}
