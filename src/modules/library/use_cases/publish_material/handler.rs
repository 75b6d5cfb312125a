use crate::modules::library::core::material::Material;
use crate::modules::library::use_cases::publish_material::decide::{PublishMaterial, decide_publish};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct PublishMaterialHandler<TStore>
where
    TStore: RecordStore<Material> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PublishMaterialHandler<TStore>
where
    TStore: RecordStore<Material> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: PublishMaterial) -> Result<Material, ApplicationError> {
        let material = decide_publish(command).inspect_err(|reason| {
            tracing::warn!(%reason, "material rejected");
        })?;
        let material = self.store.insert(material).await?;
        tracing::info!(material_id = %material.id, title = %material.title, "material published");
        Ok(material)
    }
}
