use {
    std::sync::Arc,
    tracing::{info, error},
    tokio::{fs::File, io::{AsyncBufReadExt, BufReader}},
    openlib_loader_core::{
        config::AuthorImportStepConfig,
        dump::AuthorRecord,
        entity::into_author_entity,
        store::CatalogStore,
    },
    crate::progress::Progress,
};

pub async fn author_import_step(config: &AuthorImportStepConfig, store: Arc<dyn CatalogStore>) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dump_path = match config.dump_path() {
        Some(v) => v,
        None => {
            error!("author import is enabled, but no dump path is configured");
            return Ok(());
        }
    };

    info!("running author import step on {}", dump_path);

    let file = match File::open(dump_path).await {
        Ok(v) => v,
        Err(err) => {
            error!("failed to open authors dump {}: {}", dump_path, err);
            return Ok(());
        }
    };

    let mut lines = BufReader::new(file).lines();
    let mut progress = Progress::new("loading authors".to_owned());

    loop {
        let line = match lines.next_line().await {
            Ok(Some(v)) => v,
            Ok(None) => break,
            Err(err) => {
                error!("failed to read from authors dump {}: {}", dump_path, err);
                break;
            }
        };
        progress.line_read();

        let record = match AuthorRecord::from_line(&line) {
            Ok(v) => v,
            Err(err) => {
                error!("failed to parse author line ({}): {}", err, line);
                progress.line_skipped();
                continue;
            }
        };

        store.save_author(&into_author_entity(record)).await?;
        progress.record_saved();
    }

    progress.finish();

    Ok(())
}
