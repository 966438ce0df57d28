use {
    std::sync::Arc,
    openlib_loader_core::{
        config::Config,
        database::Database,
        store::CatalogStore,
    },
    openlib_loader_steps::{
        author_import::author_import_step,
        utils::init_logging,
        work_import::work_import_step,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load();
    let store: Arc<dyn CatalogStore> = Arc::new(Database::new(config.infra().database()).await?);

    // works denormalize author names, so the author pass has to finish first
    author_import_step(&config.steps.author_import, store.clone()).await?;
    work_import_step(&config.steps.work_import, store).await?;

    Ok(())
}
