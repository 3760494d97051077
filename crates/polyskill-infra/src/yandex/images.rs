//! DialogsImageStore -- concrete [`ImageStore`] over the Yandex Dialogs
//! skill image API.
//!
//! Uploaded images count against a per-skill quota, which is why the
//! maps state prunes them aggressively. All three operations share the
//! same collection URL; delete appends the image id.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use polyskill_core::geo::ImageStore;
use polyskill_types::error::ImageError;

pub struct DialogsImageStore {
    client: reqwest::Client,
    skill_id: String,
    oauth_token: SecretString,
    base_url: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    image: ImageMeta,
}

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    images: Vec<ImageMeta>,
}

#[derive(Deserialize)]
struct ImageMeta {
    id: String,
}

impl DialogsImageStore {
    pub fn new(skill_id: String, oauth_token: SecretString, timeout: Duration) -> Self {
        Self {
            client: crate::http::client(timeout),
            skill_id,
            oauth_token,
            base_url: "https://dialogs.yandex.net".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/api/v1/skills/{}/images/", self.base_url, self.skill_id)
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.oauth_token.expose_secret())
    }
}

impl ImageStore for DialogsImageStore {
    async fn upload_by_url(&self, url: &str) -> Result<String, ImageError> {
        let response = self
            .client
            .post(self.collection_url())
            .header("Authorization", self.auth_header())
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageError::UploadFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageError::UploadFailed(e.to_string()))?;
        Ok(body.image.id)
    }

    async fn list(&self) -> Result<Vec<String>, ImageError> {
        let response = self
            .client
            .get(self.collection_url())
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageError::Transport(format!(
                "status {}",
                response.status()
            )));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;
        Ok(body.images.into_iter().map(|image| image.id).collect())
    }

    async fn delete(&self, image_id: &str) -> Result<(), ImageError> {
        let response = self
            .client
            .delete(format!("{}{}", self.collection_url(), image_id))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|e| ImageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageError::Transport(format!(
                "delete failed with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DialogsImageStore {
        DialogsImageStore::new(
            "skill-1".to_string(),
            SecretString::from("token"),
            Duration::from_secs(1),
        )
    }

    #[test]
    fn test_collection_url_embeds_skill_id() {
        assert_eq!(
            store().collection_url(),
            "https://dialogs.yandex.net/api/v1/skills/skill-1/images/"
        );
    }

    #[test]
    fn test_upload_response_parses() {
        let body: UploadResponse = serde_json::from_str(
            r#"{"image": {"id": "img-1", "origUrl": "https://maps.test/x", "size": 12345}}"#,
        )
        .unwrap();
        assert_eq!(body.image.id, "img-1");
    }

    #[test]
    fn test_list_response_parses() {
        let body: ListResponse = serde_json::from_str(
            r#"{"images": [{"id": "img-1"}, {"id": "img-2"}], "total": 2}"#,
        )
        .unwrap();
        let ids: Vec<String> = body.images.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["img-1", "img-2"]);
    }
}
