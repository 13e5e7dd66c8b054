//! HTTP access to the course service feeds.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Result, ScoreError};
use crate::models::{
    ActivityRead, ActivityReadsResponse, ExamsResponse, Feed, HomeworkResponse, TitleEntry,
};

pub const DEFAULT_BASE_URL: &str = "https://courses.zju.edu.cn";

/// Source of the three feeds one refresh cycle needs
#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn activity_reads(&self) -> Result<Vec<ActivityRead>>;
    async fn homework_titles(&self) -> Result<Vec<TitleEntry>>;
    async fn exam_titles(&self) -> Result<Vec<TitleEntry>>;
}

/// Connection settings for [`CourseClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub course_id: u64,
    /// Raw `Cookie` header value of a logged-in browser session
    pub cookie: Option<String>,
    pub timeout: Duration,
}

/// Feed endpoints for one course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub activity_reads: Url,
    pub homework: Url,
    pub exams: Url,
}

impl Endpoints {
    pub fn new(base_url: &str, course_id: u64) -> Result<Self> {
        let invalid = |source| ScoreError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        };

        // join() replaces the last path segment unless the base ends in '/'
        let mut base = Url::parse(base_url).map_err(invalid)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let activity_reads = base
            .join(&format!("api/course/{course_id}/activity-reads-for-user"))
            .map_err(invalid)?;
        let mut homework = base
            .join(&format!("api/course/{course_id}/homework-scores"))
            .map_err(invalid)?;
        homework.set_query(Some("fields=id,title"));
        let exams = base
            .join(&format!("api/courses/{course_id}/exams"))
            .map_err(invalid)?;

        Ok(Self {
            activity_reads,
            homework,
            exams,
        })
    }

    pub fn for_feed(&self, feed: Feed) -> &Url {
        match feed {
            Feed::ActivityReads => &self.activity_reads,
            Feed::Homework => &self.homework,
            Feed::Exams => &self.exams,
        }
    }
}

/// Decode a feed body into its typed envelope
pub fn decode_feed<T: DeserializeOwned>(feed: Feed, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| ScoreError::Decode { feed, source })
}

/// reqwest-backed [`ScoreSource`]
pub struct CourseClient {
    client: Client,
    endpoints: Endpoints,
}

impl CourseClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoints = Endpoints::new(&config.base_url, config.course_id)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = config.cookie.as_deref() {
            let value = HeaderValue::from_str(cookie).map_err(ScoreError::InvalidCookie)?;
            headers.insert(COOKIE, value);
        }

        // Falling back to a bare client would drop the cookie and timeout
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ScoreError::Client)?;

        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn fetch<T: DeserializeOwned>(&self, feed: Feed) -> Result<T> {
        let url = self.endpoints.for_feed(feed).clone();
        let transport = |source| ScoreError::Transport { feed, source };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(transport)?;
        let body = response.bytes().await.map_err(transport)?;
        debug!(feed = %feed, bytes = body.len(), "feed received");

        decode_feed(feed, &body)
    }
}

#[async_trait]
impl ScoreSource for CourseClient {
    async fn activity_reads(&self) -> Result<Vec<ActivityRead>> {
        let response: ActivityReadsResponse = self.fetch(Feed::ActivityReads).await?;
        Ok(response.activity_reads)
    }

    async fn homework_titles(&self) -> Result<Vec<TitleEntry>> {
        let response: HomeworkResponse = self.fetch(Feed::Homework).await?;
        Ok(response.homework_activities)
    }

    async fn exam_titles(&self) -> Result<Vec<TitleEntry>> {
        let response: ExamsResponse = self.fetch(Feed::Exams).await?;
        Ok(response.exams)
    }
}
