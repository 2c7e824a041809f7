use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::{EntityId, Grade, NewGrade};

/// Grade resource operations.
#[async_trait]
pub trait GradeGateway: Send + Sync {
    /// `GET /grades`.
    async fn list(&self) -> Result<Vec<Grade>, ApiError>;

    /// `GET /students/{student_id}/grades`.
    async fn list_for_student(&self, student_id: EntityId) -> Result<Vec<Grade>, ApiError>;

    /// `GET /grades/{id}`.
    async fn get(&self, id: EntityId) -> Result<Grade, ApiError>;

    /// `POST /students/{student_id}/grades`, scoped by the draft's student.
    async fn create(&self, grade: &NewGrade) -> Result<Grade, ApiError>;

    /// `PUT /grades/{id}` with the full record.
    async fn update(&self, grade: &Grade) -> Result<Grade, ApiError>;

    /// `DELETE /grades/{id}`.
    async fn delete(&self, id: EntityId) -> Result<(), ApiError>;
}

#[async_trait]
impl GradeGateway for ApiClient {
    async fn list(&self) -> Result<Vec<Grade>, ApiError> {
        let url = self.url("/grades")?;
        self.get_json(url).await
    }

    async fn list_for_student(&self, student_id: EntityId) -> Result<Vec<Grade>, ApiError> {
        let url = self.url(&format!("/students/{}/grades", student_id))?;
        self.get_json(url).await
    }

    async fn get(&self, id: EntityId) -> Result<Grade, ApiError> {
        let url = self.url(&format!("/grades/{}", id))?;
        self.get_json(url).await
    }

    async fn create(&self, grade: &NewGrade) -> Result<Grade, ApiError> {
        let url = self.url(&format!("/students/{}/grades", grade.student_id))?;
        self.send_json(Method::POST, url, grade).await
    }

    async fn update(&self, grade: &Grade) -> Result<Grade, ApiError> {
        let url = self.url(&format!("/grades/{}", grade.id))?;
        self.send_json(Method::PUT, url, grade).await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        let url = self.url(&format!("/grades/{}", id))?;
        self.delete_resource(url).await
    }
}
