use dioxus_logger::tracing;
use reqwest::multipart::{Form, Part};

use crate::{
    api::ApiClient,
    error::{Error, ValidationError},
    model::image::{ImageDto, ImageRecord, OneOrMany, UploadAnalysis},
};

/// An image picked by the user, read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub struct ImageApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ImageApi<'a> {
    /// Creates a new instance of [`ImageApi`]
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch analysed images, optionally only those uploaded by `user_id`.
    ///
    /// Entries without an id are dropped since they cannot be addressed afterwards.
    pub async fn list(&self, user_id: Option<i64>) -> Result<Vec<ImageRecord>, Error> {
        let path = match user_id {
            Some(user_id) => format!("/images?userId={}", user_id),
            None => "/images".to_string(),
        };

        let images: Vec<ImageDto> = self.client.get_json(&path).await?;
        let total = images.len();

        let records: Vec<ImageRecord> = images
            .into_iter()
            .filter_map(ImageDto::into_record)
            .collect();

        if records.len() != total {
            tracing::warn!(
                "Dropped {} image entries without an id from {}",
                total - records.len(),
                path
            );
        }

        Ok(records)
    }

    /// Fetch one image by id.
    ///
    /// Accepts an object or a one-element array. A payload without its own id is keyed by the
    /// requested id. Returns `None` for `null` or an empty array.
    pub async fn get(&self, id: i64) -> Result<Option<ImageRecord>, Error> {
        let path = format!("/images/{}", id);
        let body: Option<OneOrMany<ImageDto>> = self.client.get_json(&path).await?;

        Ok(body
            .and_then(OneOrMany::into_first)
            .map(|dto| dto.into_record_with_id(id)))
    }

    /// Upload an image for analysis as multipart `userId` + `image`
    pub async fn upload(&self, user_id: i64, file: &ImageFile) -> Result<UploadAnalysis, Error> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|_| ValidationError::UnsupportedFileType)?;

        let form = Form::new()
            .text("userId", user_id.to_string())
            .part("image", part);

        let dto: ImageDto = self.client.send_multipart("/images/upload", form).await?;

        dto.into_upload().ok_or_else(|| Error::InvalidResponse {
            path: "/images/upload".to_string(),
            reason: "analysis result has no id".to_string(),
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.client.delete(&format!("/images/{}", id)).await
    }
}
