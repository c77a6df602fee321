use tracing::warn;

use super::WorkerContext;
use crate::popular_tables::get_popular_tables_failure;
use crate::popular_tables::get_popular_tables_success;

pub(super) async fn get_popular_tables_worker(ctx: WorkerContext) {
    match ctx.services.metadata.popular_tables().await {
        Ok(tables) => ctx.put(get_popular_tables_success(tables)),
        Err(err) => {
            warn!("failed to fetch popular tables: {err:#}");
            ctx.put(get_popular_tables_failure());
        }
    }
}
