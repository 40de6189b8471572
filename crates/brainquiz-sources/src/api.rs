//! Backend API client and the API-backed quiz sources.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use brainquiz_core::model::RawQuiz;
use brainquiz_core::report::SessionRecord;
use brainquiz_core::traits::QuizSource;

use crate::error::SourceError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// The three places the backend can hand out a quiz to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// A specific quiz requested by id.
    ById(String),
    /// The quiz currently selected on the dashboard.
    Current,
    /// A freshly generated quiz that has not been saved yet.
    Temporary,
}

impl ApiEndpoint {
    pub fn path(&self) -> String {
        match self {
            ApiEndpoint::ById(id) => format!("/api/quiz/{id}"),
            ApiEndpoint::Current => "/api/quiz-atual".to_string(),
            ApiEndpoint::Temporary => "/api/quiz-temp".to_string(),
        }
    }

    /// Source name used in load reports.
    pub fn source_name(&self) -> &'static str {
        match self {
            ApiEndpoint::ById(_) => "api:by-id",
            ApiEndpoint::Current => "api:current",
            ApiEndpoint::Temporary => "api:temporary",
        }
    }
}

/// Dashboard listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizListKind {
    #[default]
    Active,
    Archived,
    Deleted,
}

impl QuizListKind {
    pub fn path(self) -> &'static str {
        match self {
            QuizListKind::Active => "/api/quizzes",
            QuizListKind::Archived => "/api/quizzes/arquivados",
            QuizListKind::Deleted => "/api/quizzes/excluidos",
        }
    }

    /// Key the backend stores this listing under.
    pub fn key(self) -> &'static str {
        match self {
            QuizListKind::Active => "quizzes",
            QuizListKind::Archived => "arquivados",
            QuizListKind::Deleted => "excluidos",
        }
    }
}

impl fmt::Display for QuizListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizListKind::Active => "active",
            QuizListKind::Archived => "archived",
            QuizListKind::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

impl FromStr for QuizListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" | "quizzes" => Ok(QuizListKind::Active),
            "archived" | "arquivados" => Ok(QuizListKind::Archived),
            "deleted" | "excluidos" => Ok(QuizListKind::Deleted),
            other => Err(format!(
                "unknown listing '{other}' (expected active, archived or deleted)"
            )),
        }
    }
}

/// Dashboard actions on stored quizzes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Move an active quiz to the archive.
    Archive(String),
    /// Move a quiz to the trash.
    Delete(String),
    /// Bring an archived quiz back to the active list.
    Restore(String),
    /// Permanently delete one quiz.
    Purge(String),
    /// Permanently delete everything in the trash.
    EmptyTrash,
}

impl QuizAction {
    pub fn method(&self) -> reqwest::Method {
        match self {
            QuizAction::Archive(_) | QuizAction::Restore(_) => reqwest::Method::POST,
            QuizAction::Delete(_) | QuizAction::Purge(_) | QuizAction::EmptyTrash => {
                reqwest::Method::DELETE
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            QuizAction::Archive(id) => format!("/api/quiz/{id}/arquivar"),
            QuizAction::Delete(id) => format!("/api/quiz/{id}"),
            QuizAction::Restore(id) => format!("/api/quiz/{id}/restaurar"),
            QuizAction::Purge(id) => format!("/api/quiz/{id}/definitivo"),
            QuizAction::EmptyTrash => "/api/quizzes/limpar-lixeira".to_string(),
        }
    }

    /// Listings whose contents change when the action succeeds.
    pub fn affected_listings(&self) -> &'static [QuizListKind] {
        match self {
            QuizAction::Archive(_) | QuizAction::Restore(_) => {
                &[QuizListKind::Active, QuizListKind::Archived]
            }
            QuizAction::Delete(_) => &[QuizListKind::Active, QuizListKind::Deleted],
            QuizAction::Purge(_) => &[QuizListKind::Archived, QuizListKind::Deleted],
            QuizAction::EmptyTrash => &[QuizListKind::Deleted],
        }
    }
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizAction::Archive(id) => write!(f, "archive quiz {id}"),
            QuizAction::Delete(id) => write!(f, "delete quiz {id}"),
            QuizAction::Restore(id) => write!(f, "restore quiz {id}"),
            QuizAction::Purge(id) => write!(f, "permanently delete quiz {id}"),
            QuizAction::EmptyTrash => f.write_str("empty the trash"),
        }
    }
}

/// Result payload posted to `/api/resultado`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubmission {
    pub quiz_id: Option<String>,
    pub quiz_titulo: String,
    pub acertos: usize,
    pub total: usize,
    pub porcentagem: u32,
    pub data: DateTime<Utc>,
    pub detalhes: Vec<Option<usize>>,
}

impl From<&SessionRecord> for ResultSubmission {
    fn from(record: &SessionRecord) -> Self {
        Self {
            quiz_id: record.quiz_id.clone(),
            quiz_titulo: record.quiz_title.clone(),
            acertos: record.grade.correct_count,
            total: record.grade.total,
            porcentagem: record.grade.score_percent,
            data: record.created_at,
            detalhes: record.answers.clone(),
        }
    }
}

/// The logged-in user as reported by `/usuario`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.tipo.as_deref() == Some("administrador")
    }
}

#[derive(Deserialize)]
struct QuizEnvelope {
    #[serde(default)]
    quiz: Option<RawQuiz>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    usuario: Option<UserProfile>,
}

/// Authenticated client for the quiz backend.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
    timeout_secs: u64,
    max_retries: u32,
    retry_delay: Duration,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>, timeout_secs: u64) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            client,
            timeout_secs,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        })
    }

    /// Bound token validation to `max_retries` attempts.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries.max(1);
        self.retry_delay = retry_delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            SourceError::Network(format!("backend not reachable at {}", self.base_url))
        } else {
            SourceError::Network(e.to_string())
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, SourceError> {
        let response = builder.send().await.map_err(|e| self.send_error(e))?;

        let status = response.status().as_u16();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unauthorized(if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body
            }));
        }
        Ok(response)
    }

    async fn error_for(response: reqwest::Response) -> SourceError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        SourceError::Api { status, message }
    }

    /// Fetch a quiz from one of the quiz endpoints.
    ///
    /// `Ok(None)` when the backend has no quiz there (404 or no `quiz` key).
    #[instrument(skip(self), fields(path = %endpoint.path()))]
    pub async fn quiz(&self, endpoint: &ApiEndpoint) -> Result<Option<RawQuiz>, SourceError> {
        let response = self
            .send(self.request(reqwest::Method::GET, &endpoint.path()))
            .await?;

        let status = response.status().as_u16();
        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            return Err(Self::error_for(response).await);
        }

        let envelope: QuizEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(format!("failed to parse quiz: {e}")))?;
        Ok(envelope.quiz)
    }

    /// Fetch a dashboard listing.
    #[instrument(skip(self))]
    pub async fn list(&self, kind: QuizListKind) -> Result<Vec<RawQuiz>, SourceError> {
        let response = self
            .send(self.request(reqwest::Method::GET, kind.path()))
            .await?;
        if response.status().as_u16() >= 400 {
            return Err(Self::error_for(response).await);
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(format!("failed to parse listing: {e}")))?;

        let items = data
            .get(kind.key())
            .and_then(Value::as_array)
            .or_else(|| data.get("quizzes").and_then(Value::as_array))
            .cloned()
            .unwrap_or_default();

        let mut quizzes = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<RawQuiz>(item) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => tracing::warn!("skipping unreadable listing entry: {e}"),
            }
        }
        Ok(quizzes)
    }

    /// Post a graded result.
    #[instrument(skip(self, submission), fields(quiz = %submission.quiz_titulo))]
    pub async fn submit_result(&self, submission: &ResultSubmission) -> Result<(), SourceError> {
        let response = self
            .send(
                self.request(reqwest::Method::POST, "/api/resultado")
                    .json(submission),
            )
            .await?;
        if response.status().as_u16() >= 400 {
            return Err(Self::error_for(response).await);
        }
        tracing::info!("result saved to backend");
        Ok(())
    }

    /// Run a dashboard action against a stored quiz.
    #[instrument(skip(self), fields(path = %action.path()))]
    pub async fn quiz_action(&self, action: &QuizAction) -> Result<(), SourceError> {
        let response = self
            .send(self.request(action.method(), &action.path()))
            .await?;
        if response.status().as_u16() >= 400 {
            return Err(Self::error_for(response).await);
        }
        tracing::info!("{action} done");
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<UserProfile, SourceError> {
        let response = self
            .send(self.request(reqwest::Method::GET, "/usuario"))
            .await?;
        if response.status().as_u16() >= 400 {
            return Err(Self::error_for(response).await);
        }

        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(format!("failed to parse user: {e}")))?;
        match envelope.usuario {
            Some(user) if envelope.success => Ok(user),
            _ => Err(SourceError::Unauthorized(
                "backend did not confirm the session".into(),
            )),
        }
    }

    /// Validate the configured token against `/usuario`.
    ///
    /// Transient failures are retried up to `max_retries` attempts in total,
    /// sleeping `retry_delay * attempt` between them. Rejected tokens are not
    /// retried.
    #[instrument(skip(self))]
    pub async fn validate_token(&self) -> Result<UserProfile, SourceError> {
        if self.token.is_none() {
            return Err(SourceError::Unauthorized("no token configured".into()));
        }

        let mut attempt: u32 = 1;
        loop {
            match self.fetch_profile().await {
                Ok(user) => return Ok(user),
                Err(e) if e.is_permanent() || attempt >= self.max_retries => return Err(e),
                Err(e) => {
                    let delay = self.retry_delay * attempt;
                    tracing::warn!(attempt, ?delay, "token validation failed, retrying: {e}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// A quiz source backed by one API endpoint.
pub struct ApiQuizSource {
    client: Arc<ApiClient>,
    endpoint: ApiEndpoint,
}

impl ApiQuizSource {
    pub fn new(client: Arc<ApiClient>, endpoint: ApiEndpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl QuizSource for ApiQuizSource {
    fn name(&self) -> &str {
        self.endpoint.source_name()
    }

    async fn fetch(&self) -> anyhow::Result<Option<RawQuiz>> {
        Ok(self.client.quiz(&self.endpoint).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri(), Some("tok".into()), 5)
            .unwrap()
            .with_retry(3, Duration::from_millis(1))
    }

    fn quiz_body() -> Value {
        json!({
            "quiz": {
                "id": 7,
                "titulo": "Remote",
                "perguntas": [{"pergunta": "?", "alternativas": ["a", "b"], "respostaCorreta": 1}]
            }
        })
    }

    #[tokio::test]
    async fn fetches_quiz_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quiz/7"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quiz_body()))
            .mount(&server)
            .await;

        let quiz = client(&server)
            .quiz(&ApiEndpoint::ById("7".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(quiz.id_string().as_deref(), Some("7"));
        assert_eq!(quiz.question_count(), 1);
    }

    #[tokio::test]
    async fn missing_quiz_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quiz-atual"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/quiz-temp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let api = client(&server);
        assert!(api.quiz(&ApiEndpoint::Current).await.unwrap().is_none());
        assert!(api.quiz(&ApiEndpoint::Temporary).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn forbidden_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quiz-atual"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = client(&server)
            .quiz(&ApiEndpoint::Current)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quiz-atual"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server)
            .quiz(&ApiEndpoint::Current)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn listing_reads_kind_key_then_quizzes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quizzes/arquivados"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "arquivados": [{"id": 1, "titulo": "Old"}, {"id": 2, "nome": "Older"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/quizzes/excluidos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "quizzes": [{"id": 3, "titulo": "Gone"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/quizzes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&server)
            .await;

        let api = client(&server);
        let archived = api.list(QuizListKind::Archived).await.unwrap();
        assert_eq!(archived.len(), 2);
        assert_eq!(archived[1].display_title(), Some("Older"));

        let deleted = api.list(QuizListKind::Deleted).await.unwrap();
        assert_eq!(deleted.len(), 1);

        assert!(api.list(QuizListKind::Active).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submits_result_with_backend_field_names() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/resultado"))
            .and(body_partial_json(json!({
                "quizId": "7",
                "quizTitulo": "Remote",
                "acertos": 2,
                "total": 3,
                "porcentagem": 67
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let submission = ResultSubmission {
            quiz_id: Some("7".into()),
            quiz_titulo: "Remote".into(),
            acertos: 2,
            total: 3,
            porcentagem: 67,
            data: Utc::now(),
            detalhes: vec![Some(0), None, Some(1)],
        };
        client(&server).submit_result(&submission).await.unwrap();
    }

    #[tokio::test]
    async fn token_validation_retries_transient_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usuario"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/usuario"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "usuario": {"id": 1, "nome": "Ana", "tipo": "administrador"}
            })))
            .mount(&server)
            .await;

        let user = client(&server).validate_token().await.unwrap();
        assert_eq!(user.nome.as_deref(), Some("Ana"));
        assert!(user.is_admin());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn token_validation_gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usuario"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).validate_token().await.unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 500, .. }));
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn rejected_token_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usuario"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server).validate_token().await.unwrap_err();
        assert!(err.is_permanent());
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unconfirmed_session_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/usuario"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let err = client(&server).validate_token().await.unwrap_err();
        assert!(matches!(err, SourceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn api_source_reports_endpoint_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/quiz-temp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quiz_body()))
            .mount(&server)
            .await;

        let source = ApiQuizSource::new(Arc::new(client(&server)), ApiEndpoint::Temporary);
        assert_eq!(source.name(), "api:temporary");
        assert!(source.fetch().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn quiz_actions_hit_dashboard_endpoints() {
        let server = MockServer::start().await;
        for (verb, route) in [
            ("POST", "/api/quiz/5/arquivar"),
            ("DELETE", "/api/quiz/5"),
            ("POST", "/api/quiz/5/restaurar"),
            ("DELETE", "/api/quiz/5/definitivo"),
            ("DELETE", "/api/quizzes/limpar-lixeira"),
        ] {
            Mock::given(method(verb))
                .and(path(route))
                .and(header("authorization", "Bearer tok"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
                .expect(1)
                .mount(&server)
                .await;
        }

        let api = client(&server);
        for action in [
            QuizAction::Archive("5".into()),
            QuizAction::Delete("5".into()),
            QuizAction::Restore("5".into()),
            QuizAction::Purge("5".into()),
            QuizAction::EmptyTrash,
        ] {
            api.quiz_action(&action).await.unwrap();
        }
    }

    #[tokio::test]
    async fn failed_quiz_action_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/quiz/9/arquivar"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such quiz"))
            .mount(&server)
            .await;

        let err = client(&server)
            .quiz_action(&QuizAction::Archive("9".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Api { status: 404, .. }));
    }

    #[test]
    fn quiz_action_describes_itself() {
        assert_eq!(QuizAction::Purge("3".into()).to_string(), "permanently delete quiz 3");
        assert_eq!(QuizAction::EmptyTrash.method(), reqwest::Method::DELETE);
        assert_eq!(
            QuizAction::Delete("3".into()).affected_listings(),
            &[QuizListKind::Active, QuizListKind::Deleted]
        );
    }

    #[test]
    fn list_kind_parses_names() {
        assert_eq!("archived".parse::<QuizListKind>(), Ok(QuizListKind::Archived));
        assert_eq!("excluidos".parse::<QuizListKind>(), Ok(QuizListKind::Deleted));
        assert!("pdfs".parse::<QuizListKind>().is_err());
        assert_eq!(QuizListKind::Active.to_string(), "active");
    }
}
