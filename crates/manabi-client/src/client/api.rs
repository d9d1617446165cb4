use std::sync::{PoisonError, RwLock};

use reqwest::Method;

use manabi_model::course::{Content, Course, CourseUpdate, NewContent, NewCourse};
use manabi_model::id::DocumentId;
use manabi_model::quiz::{NewQuiz, Quiz};
use manabi_model::result::QuizResult;
use manabi_model::user::SessionUser;

use crate::client::base::{BaseClient, Config, SecureClient};
use crate::error::Error;
use crate::http::{BaseHttpClient, ReqwestHttpClient};
use crate::payload::{
    EnrollmentRequest, LoginRequest, ProgressUpdate, QuizOutcome, QuizSubmission, RegisterRequest,
};

/// The platform API client. Signing in stores the bearer token; every
/// other endpoint sends it.
pub struct ApiClient<H: BaseHttpClient = ReqwestHttpClient> {
    config: Config,
    http_client: H,
    token: RwLock<Option<String>>,
}

impl ApiClient<ReqwestHttpClient> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, ReqwestHttpClient::default())
    }
}

impl<H: BaseHttpClient> ApiClient<H> {
    #[must_use]
    pub fn with_http_client(config: Config, http_client: H) -> Self {
        Self {
            config,
            http_client,
            token: RwLock::new(None),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub async fn login(&self, form: &LoginRequest) -> Result<SessionUser, Error> {
        let user: SessionUser = self
            .api_request(Method::POST, "Auth/login", Some(serde_json::to_value(form)?))
            .await?;
        self.set_token(Some(user.token.clone()));
        Ok(user)
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<SessionUser, Error> {
        let user: SessionUser = self
            .api_request(Method::POST, "Auth/register", Some(serde_json::to_value(form)?))
            .await?;
        self.set_token(Some(user.token.clone()));
        Ok(user)
    }

    pub async fn courses(&self) -> Result<Vec<Course>, Error> {
        self.api_authenticated_request(Method::GET, "Course", None).await
    }

    pub async fn course(&self, id: DocumentId) -> Result<Course, Error> {
        self.api_authenticated_request(Method::GET, &format!("Course/{id}"), None)
            .await
    }

    pub async fn create_course(&self, form: &NewCourse) -> Result<Course, Error> {
        self.api_authenticated_request(Method::POST, "Course", Some(serde_json::to_value(form)?))
            .await
    }

    pub async fn update_course(&self, id: DocumentId, form: &CourseUpdate) -> Result<Course, Error> {
        self.api_authenticated_request(Method::PUT, &format!("Course/{id}"), Some(serde_json::to_value(form)?))
            .await
    }

    /// The delete endpoint answers with an arbitrary payload; nothing in
    /// it is load-bearing for the caller.
    pub async fn delete_course(&self, id: DocumentId) -> Result<serde_json::Value, Error> {
        self.api_authenticated_request(Method::DELETE, &format!("Course/{id}"), None)
            .await
    }

    pub async fn enroll(&self, request: &EnrollmentRequest) -> Result<serde_json::Value, Error> {
        self.api_authenticated_request(Method::POST, "Enrollment", Some(serde_json::to_value(request)?))
            .await
    }

    pub async fn enrolled_courses(&self) -> Result<Vec<Course>, Error> {
        self.api_authenticated_request(Method::GET, "Enrollment", None).await
    }

    pub async fn add_content(&self, course_id: DocumentId, form: &NewContent) -> Result<Content, Error> {
        let mut body = serde_json::to_value(form)?;
        if let Some(object) = body.as_object_mut() {
            object.insert("courseId".to_owned(), serde_json::to_value(course_id)?);
        }
        self.api_authenticated_request(Method::POST, "Content", Some(body)).await
    }

    pub async fn contents_for_course(&self, course_id: DocumentId) -> Result<Vec<Content>, Error> {
        self.api_authenticated_request(Method::GET, &format!("Content/{course_id}"), None)
            .await
    }

    pub async fn create_quiz(&self, course_id: DocumentId, form: &NewQuiz) -> Result<Quiz, Error> {
        self.api_authenticated_request(Method::POST, &format!("Quiz/{course_id}"), Some(serde_json::to_value(form)?))
            .await
    }

    pub async fn quizzes_for_course(&self, course_id: DocumentId) -> Result<Vec<Quiz>, Error> {
        self.api_authenticated_request(Method::GET, &format!("Quiz/{course_id}"), None)
            .await
    }

    pub async fn submit_quiz(&self, submission: &QuizSubmission) -> Result<QuizOutcome, Error> {
        self.api_authenticated_request(Method::POST, "Quiz/take", Some(serde_json::to_value(submission)?))
            .await
    }

    pub async fn completed_videos(&self, course_id: DocumentId) -> Result<Vec<DocumentId>, Error> {
        self.api_authenticated_request(Method::GET, &format!("Progress/GetCompletedVideos/{course_id}"), None)
            .await
    }

    pub async fn update_video_progress(&self, update: &ProgressUpdate) -> Result<serde_json::Value, Error> {
        self.api_authenticated_request(
            Method::POST,
            "Progress/UpdateVideoProgress",
            Some(serde_json::to_value(update)?),
        )
        .await
    }

    pub async fn quiz_result(&self, quiz_id: DocumentId, course_id: DocumentId) -> Result<QuizResult, Error> {
        self.api_authenticated_request(Method::GET, &format!("Result/{quiz_id}/{course_id}"), None)
            .await
    }
}

impl<H: BaseHttpClient> BaseClient for ApiClient<H> {
    type Http = H;

    fn get_http_client(&self) -> &Self::Http {
        &self.http_client
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

impl<H: BaseHttpClient> SecureClient for ApiClient<H> {
    fn auth_token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
