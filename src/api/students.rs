use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::{EntityId, LoadStudentsParams, NewStudent, Student};

/// Student resource operations.
#[async_trait]
pub trait StudentGateway: Send + Sync {
    /// `GET /students` with optional filter and sort query parameters.
    async fn list(&self, params: &LoadStudentsParams) -> Result<Vec<Student>, ApiError>;

    /// `GET /students/{id}`.
    async fn get(&self, id: EntityId) -> Result<Student, ApiError>;

    /// `POST /students`. The returned record carries the server-assigned id.
    async fn create(&self, student: &NewStudent) -> Result<Student, ApiError>;

    /// `PUT /students/{id}` with the full record.
    async fn update(&self, student: &Student) -> Result<Student, ApiError>;

    /// `DELETE /students/{id}`.
    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}

#[async_trait]
impl StudentGateway for ApiClient {
    async fn list(&self, params: &LoadStudentsParams) -> Result<Vec<Student>, ApiError> {
        let mut url = self.url("/students")?;
        let pairs = params.query_pairs();
        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in &pairs {
                query.append_pair(key, value);
            }
        }
        self.get_json(url).await
    }

    async fn get(&self, id: EntityId) -> Result<Student, ApiError> {
        let url = self.url(&format!("/students/{}", id))?;
        self.get_json(url).await
    }

    async fn create(&self, student: &NewStudent) -> Result<Student, ApiError> {
        let url = self.url("/students")?;
        self.send_json(Method::POST, url, student).await
    }

    async fn update(&self, student: &Student) -> Result<Student, ApiError> {
        let url = self.url(&format!("/students/{}", student.id))?;
        self.send_json(Method::PUT, url, student).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let url = self.url(&format!("/students/{}", id))?;
        self.delete_resource(url).await
    }
}
