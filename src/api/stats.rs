use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::Error,
    model::{image::ImageDto, stats::ServiceStats},
    util::time::{is_on_date, parse_timestamp, today},
};

pub struct StatsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StatsApi<'a> {
    /// Creates a new instance of [`StatsApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Count users, images and images analysed today.
    ///
    /// # Logic
    /// - `GET /users` and `GET /images` are issued independently
    /// - A collection the server rejects (non-2xx) counts as zero, the server is still online
    /// - If either request cannot complete or returns an undecodable body, the whole result
    ///   is [`ServiceStats::offline`]
    pub async fn fetch(&self) -> ServiceStats {
        match self.try_fetch().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Failed to load stats: {}", e);
                ServiceStats::offline()
            }
        }
    }

    async fn try_fetch(&self) -> Result<ServiceStats, Error> {
        let total_users = match self.client.get_json::<Vec<serde_json::Value>>("/users").await {
            Ok(users) => users.len(),
            Err(Error::Api(e)) => {
                tracing::warn!("Users count unavailable: {}", e);
                0
            }
            Err(e) => return Err(e),
        };

        let images = match self.client.get_json::<Vec<ImageDto>>("/images").await {
            Ok(images) => images,
            Err(Error::Api(e)) => {
                tracing::warn!("Images count unavailable: {}", e);
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let date = today();
        let today_analyses = images
            .iter()
            .filter_map(|image| image.created_at.as_deref().and_then(parse_timestamp))
            .filter(|created_at| is_on_date(created_at, date))
            .count();

        Ok(ServiceStats {
            total_users,
            total_images: images.len(),
            today_analyses,
            online: true,
        })
    }
}
