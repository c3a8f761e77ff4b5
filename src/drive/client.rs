use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use super::auth::{ServiceAccountKey, fetch_access_token};
use super::error::DriveError;
use super::types::{DriveFile, FileList, UploadedFile};

const API_BASE_URL: &str = "https://www.googleapis.com/drive/v3";
const UPLOAD_BASE_URL: &str = "https://www.googleapis.com/upload/drive/v3";

// Boundary of the multipart/related upload body. Fixed: Drive only requires
// that it does not collide with the part delimiters.
const UPLOAD_BOUNDARY: &str = "poddump_related_boundary";

/// Authenticated client for the Drive v3 `files` endpoints.
pub struct DriveClient {
    token: String,
    client: Client,
    base_url: String,
    upload_base_url: String,
}

impl DriveClient {
    /// Authenticate with a service account key file against the real API.
    pub async fn authenticate(key_file: &Path) -> Result<Self, DriveError> {
        let client = build_http_client();
        let key = ServiceAccountKey::from_file(key_file)?;
        let token = fetch_access_token(&client, &key).await?;
        Ok(Self {
            token,
            client,
            base_url: API_BASE_URL.to_string(),
            upload_base_url: UPLOAD_BASE_URL.to_string(),
        })
    }

    /// Create a client with a fixed token and custom base URLs (useful for testing).
    pub fn with_base_urls(token: String, base_url: String, upload_base_url: String) -> Self {
        Self {
            token,
            client: build_http_client(),
            base_url,
            upload_base_url,
        }
    }

    /// List the files inside a folder, with name, id and creation time.
    pub async fn list_folder(&self, folder_id: &str) -> Result<Vec<DriveFile>, DriveError> {
        let response = self
            .client
            .get(format!("{}/files", self.base_url))
            .bearer_auth(&self.token)
            .query(&[
                ("q", format!("'{folder_id}' in parents")),
                ("fields", "files(id, name, createdTime)".to_string()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?.json::<FileList>().await?;
        Ok(body.files)
    }

    /// Permanently delete a file by id.
    pub async fn delete_file(&self, file_id: &str) -> Result<(), DriveError> {
        let response = self
            .client
            .delete(format!("{}/files/{file_id}", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    /// Upload a local file into `folder_id` under `name`, returning the id
    /// of the created object.
    pub async fn upload_file(
        &self,
        path: &Path,
        name: &str,
        folder_id: &str,
    ) -> Result<String, DriveError> {
        let contents = tokio::fs::read(path).await?;
        let metadata = serde_json::json!({ "name": name, "parents": [folder_id] });
        let body = multipart_related_body(&metadata.to_string(), &contents);

        let response = self
            .client
            .post(format!("{}/files", self.upload_base_url))
            .query(&[("uploadType", "multipart"), ("fields", "id")])
            .bearer_auth(&self.token)
            .header(
                "content-type",
                format!("multipart/related; boundary={UPLOAD_BOUNDARY}"),
            )
            .body(body)
            .send()
            .await?;

        let body = check_status(response).await?.json::<UploadedFile>().await?;
        Ok(body.id)
    }
}

fn build_http_client() -> Client {
    // No request timeout: heap dump archives can take minutes to push.
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client")
}

// Drive multipart uploads use multipart/related, which reqwest does not
// build natively: a JSON metadata part followed by the raw media part.
fn multipart_related_body(metadata: &str, media: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + media.len() + 256);
    body.extend_from_slice(
        format!(
            "--{UPLOAD_BOUNDARY}\r\n\
             content-type: application/json; charset=UTF-8\r\n\r\n\
             {metadata}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!("--{UPLOAD_BOUNDARY}\r\ncontent-type: application/gzip\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(media);
    body.extend_from_slice(format!("\r\n--{UPLOAD_BOUNDARY}--\r\n").as_bytes());
    body
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DriveError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(DriveError::ApiError {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> DriveClient {
        DriveClient::with_base_urls("test-token".into(), server.uri(), server.uri())
    }

    #[tokio::test]
    async fn list_folder_queries_parent_and_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files"))
            .and(query_param("q", "'folder123' in parents"))
            .and(query_param("fields", "files(id, name, createdTime)"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "files": [
                    {"id": "1a", "name": "app_dumps_2026-08-05-09-00.tar.gz",
                     "createdTime": "2026-08-05T09:00:00.000Z"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let files = test_client(&server).list_folder("folder123").await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, "1a");
    }

    #[tokio::test]
    async fn list_folder_handles_empty_folder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let files = test_client(&server).list_folder("folder123").await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn delete_file_hits_file_id_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/files/abc123"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server).delete_file("abc123").await.unwrap();
    }

    #[tokio::test]
    async fn api_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/files/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("File not found"))
            .mount(&server)
            .await;

        let err = test_client(&server).delete_file("gone").await.unwrap_err();
        match err {
            DriveError::ApiError { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("File not found"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upload_file_sends_metadata_and_media() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/files"))
            .and(query_param("uploadType", "multipart"))
            .and(query_param("fields", "id"))
            .and(body_string_contains("app-123_dumps_2026-08-06-10-15.tar.gz"))
            .and(body_string_contains("folder123"))
            .and(body_string_contains("gzip bytes here"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "new-id-42"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("app-123_dumps_2026-08-06-10-15.tar.gz");
        std::fs::write(&archive, "gzip bytes here").unwrap();

        let id = test_client(&server)
            .upload_file(&archive, "app-123_dumps_2026-08-06-10-15.tar.gz", "folder123")
            .await
            .unwrap();
        assert_eq!(id, "new-id-42");
    }

    #[tokio::test]
    async fn upload_file_missing_local_file_is_io_error() {
        let server = MockServer::start().await;
        let err = test_client(&server)
            .upload_file(Path::new("/tmp/absent.tar.gz"), "absent.tar.gz", "f")
            .await
            .unwrap_err();
        assert!(matches!(err, DriveError::Io(_)));
    }

    #[test]
    fn multipart_body_is_well_formed() {
        let body = multipart_related_body(r#"{"name":"a.tar.gz"}"#, b"DATA");
        let text = String::from_utf8_lossy(&body);
        assert!(text.starts_with(&format!("--{UPLOAD_BOUNDARY}\r\n")));
        assert!(text.contains(r#"{"name":"a.tar.gz"}"#));
        assert!(text.contains("DATA"));
        assert!(text.ends_with(&format!("\r\n--{UPLOAD_BOUNDARY}--\r\n")));
    }
}
