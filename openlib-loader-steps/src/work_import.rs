use {
    std::sync::Arc,
    tracing::{info, error},
    tokio::{fs::File, io::{AsyncBufReadExt, BufReader}},
    openlib_loader_core::{
        config::WorkImportStepConfig,
        dump::WorkRecord,
        entity::into_work_entity,
        store::CatalogStore,
    },
    crate::progress::Progress,
};

const UNKNOWN_AUTHOR_NAME: &str = "Unknown Author";

pub async fn work_import_step(config: &WorkImportStepConfig, store: Arc<dyn CatalogStore>) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dump_path = match config.dump_path() {
        Some(v) => v,
        None => {
            error!("work import is enabled, but no dump path is configured");
            return Ok(());
        }
    };

    info!("running work import step on {}", dump_path);

    let file = match File::open(dump_path).await {
        Ok(v) => v,
        Err(err) => {
            error!("failed to open works dump {}: {}", dump_path, err);
            return Ok(());
        }
    };

    let mut lines = BufReader::new(file).lines();
    let mut progress = Progress::new("loading works".to_owned());
    let mut lines_read = 0;

    loop {
        if let Some(limit) = config.line_limit() {
            if lines_read >= limit {
                info!("reached works dump line limit of {}", limit);
                break;
            }
        }

        let line = match lines.next_line().await {
            Ok(Some(v)) => v,
            Ok(None) => break,
            Err(err) => {
                error!("failed to read from works dump {}: {}", dump_path, err);
                break;
            }
        };
        // the cap counts lines consumed, valid or not
        lines_read += 1;
        progress.line_read();

        let record = match WorkRecord::from_line(&line) {
            Ok(v) => v,
            Err(err) => {
                error!("failed to parse work line ({}): {}", err, line);
                progress.line_skipped();
                continue;
            }
        };

        let author_names = match record.author_ids.as_ref() {
            Some(ids) => Some(resolve_author_names(ids, store.as_ref()).await?),
            None => None,
        };

        store.save_work(&into_work_entity(record, author_names)).await?;
        progress.record_saved();
    }

    progress.finish();

    Ok(())
}

async fn resolve_author_names(author_ids: &[String], store: &dyn CatalogStore) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::with_capacity(author_ids.len());
    for id in author_ids {
        let name = store.author_by_id(id).await?
            .map(|author| author.name().to_owned())
            .unwrap_or_else(|| UNKNOWN_AUTHOR_NAME.to_owned());
        names.push(name);
    }

    Ok(names)
}
