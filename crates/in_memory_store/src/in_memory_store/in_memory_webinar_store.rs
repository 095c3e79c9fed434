use std::{collections::BTreeMap, sync::Arc};

use command_use_case::port::webinar_repository;
use tokio::sync::Mutex;
use write_model::{aggregate::Webinar, value_object::WebinarId};

#[derive(Clone)]
pub struct InMemoryWebinarStore {
    data: Arc<Mutex<BTreeMap<WebinarId, Webinar>>>,
}

impl InMemoryWebinarStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            data: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    pub fn with_webinars(webinars: impl IntoIterator<Item = Webinar>) -> Self {
        Self {
            data: Arc::new(Mutex::new(
                webinars
                    .into_iter()
                    .map(|webinar| (webinar.id().clone(), webinar))
                    .collect(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl command_use_case::port::WebinarRepository for InMemoryWebinarStore {
    async fn create(&self, webinar: &Webinar) -> Result<(), webinar_repository::Error> {
        let mut data = self.data.lock().await;
        if data.contains_key(webinar.id()) {
            return Err(webinar_repository::Error::new("already exists"));
        }
        data.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, webinar_repository::Error> {
        let data = self.data.lock().await;
        Ok(data.get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), webinar_repository::Error> {
        let mut data = self.data.lock().await;
        let stored = data
            .get_mut(webinar.id())
            .ok_or_else(|| webinar_repository::Error::new("not found"))?;
        *stored = webinar.clone();
        Ok(())
    }
}

#[async_trait::async_trait]
impl query_use_case::port::WebinarReader for InMemoryWebinarStore {
    async fn get(
        &self,
        id: &WebinarId,
    ) -> Result<Option<query_use_case::port::WebinarQueryData>, Box<dyn std::error::Error + Send + Sync>>
    {
        let data = self.data.lock().await;
        Ok(data
            .get(id)
            .map(|webinar| query_use_case::port::WebinarQueryData {
                end_date: webinar.end_date(),
                id: webinar.id().clone(),
                organizer_id: webinar.organizer_id().clone(),
                seats: webinar.seats(),
                start_date: webinar.start_date(),
                title: webinar.title().to_string(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use command_use_case::port::WebinarRepository as _;
    use query_use_case::port::WebinarReader as _;
    use write_model::value_object::{DateTime, Seats, UserId};

    use super::*;

    fn build_webinar(title: &str, seats: u32) -> anyhow::Result<Webinar> {
        Ok(Webinar::reconstruct(
            WebinarId::from_str("webinar-id")?,
            UserId::from_str("organizer-id")?,
            title.to_string(),
            DateTime::from_str("2022-01-01T00:00:00Z")?,
            DateTime::from_str("2022-01-01T01:00:00Z")?,
            Seats::try_from(seats)?,
        ))
    }

    #[tokio::test]
    async fn test_repository() -> anyhow::Result<()> {
        let store = InMemoryWebinarStore::new();
        let webinar = build_webinar("Webinar title", 100)?;
        assert_eq!(store.find_by_id(webinar.id()).await?, None);

        store.create(&webinar).await?;
        assert_eq!(store.find_by_id(webinar.id()).await?, Some(webinar.clone()));
        assert!(store.create(&webinar).await.is_err());

        let updated = build_webinar("New webinar title", 200)?;
        store.update(&updated).await?;
        assert_eq!(store.find_by_id(webinar.id()).await?, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing() -> anyhow::Result<()> {
        let store = InMemoryWebinarStore::new();
        assert!(store
            .update(&build_webinar("Webinar title", 100)?)
            .await
            .is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_reader() -> anyhow::Result<()> {
        let webinar = build_webinar("Webinar title", 100)?;
        let store = InMemoryWebinarStore::with_webinars([webinar.clone()]);
        let query_data = store
            .get(webinar.id())
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(
            query_data,
            Some(query_use_case::port::WebinarQueryData {
                end_date: webinar.end_date(),
                id: webinar.id().clone(),
                organizer_id: webinar.organizer_id().clone(),
                seats: webinar.seats(),
                start_date: webinar.start_date(),
                title: "Webinar title".to_string(),
            })
        );
        let missing = store
            .get(&WebinarId::from_str("unknown-webinar-id")?)
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(missing, None);
        Ok(())
    }
}
