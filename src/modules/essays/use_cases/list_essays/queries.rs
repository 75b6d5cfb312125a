use crate::modules::essays::core::essay::EssayRecord;
use crate::shared::core::primitives::DateOrder;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};

/// Every stored essay, most recent first. Same-day essays keep id order.
pub async fn essays_newest_first(
    store: &dyn RecordStore<EssayRecord>,
) -> Result<Vec<EssayRecord>, RecordStoreError> {
    let mut essays = store.get_all().await?;
    essays.sort_by(|a, b| a.id.cmp(&b.id));
    DateOrder::NewestFirst.sort_by_date(&mut essays, |e| e.date);
    Ok(essays)
}
