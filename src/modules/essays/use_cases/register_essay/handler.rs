use crate::modules::essays::core::essay::EssayRecord;
use crate::modules::essays::use_cases::register_essay::command::RegisterEssay;
use crate::modules::essays::use_cases::register_essay::decide::decide_register;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct RegisterEssayHandler<TStore>
where
    TStore: RecordStore<EssayRecord> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterEssayHandler<TStore>
where
    TStore: RecordStore<EssayRecord> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterEssay) -> Result<EssayRecord, ApplicationError> {
        let essay = decide_register(command).inspect_err(|reason| {
            tracing::warn!(%reason, "essay registration rejected");
        })?;
        let essay = self.store.insert(essay).await?;
        tracing::info!(essay_id = %essay.id, total_score = essay.total_score, "essay registered");
        Ok(essay)
    }
}
