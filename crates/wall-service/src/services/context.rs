//! Service context - dependency container for services
//!
//! Explicitly constructed once at process start and passed into each
//! handler, replacing any ambient singleton state. Holds repositories, the
//! pub/sub publisher, the identity service, the id generator, and the
//! sentiment classifier.

use std::sync::Arc;

use wall_cache::Publisher;
use wall_common::IdentityService;
use wall_core::traits::{LikeRepository, MessageRepository, SettingsRepository};
use wall_core::SnowflakeGenerator;

use crate::classifier::SentimentClassifier;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    message_repo: Arc<dyn MessageRepository>,
    like_repo: Arc<dyn LikeRepository>,
    settings_repo: Arc<dyn SettingsRepository>,

    // Pub/Sub
    publisher: Publisher,

    // Services
    identity_service: Arc<IdentityService>,
    classifier: Arc<SentimentClassifier>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        like_repo: Arc<dyn LikeRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
        publisher: Publisher,
        identity_service: Arc<IdentityService>,
        classifier: Arc<SentimentClassifier>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            message_repo,
            like_repo,
            settings_repo,
            publisher,
            identity_service,
            classifier,
            snowflake_generator,
        }
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    /// Get the Redis pub/sub publisher
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Get the identity service
    pub fn identity_service(&self) -> &IdentityService {
        self.identity_service.as_ref()
    }

    /// Get the sentiment classifier
    pub fn classifier(&self) -> &SentimentClassifier {
        self.classifier.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> wall_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("publisher", &"Publisher")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    message_repo: Option<Arc<dyn MessageRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    publisher: Option<Publisher>,
    identity_service: Option<Arc<IdentityService>>,
    classifier: Option<Arc<SentimentClassifier>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn identity_service(mut self, service: Arc<IdentityService>) -> Self {
        self.identity_service = Some(service);
        self
    }

    pub fn classifier(mut self, classifier: Arc<SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.like_repo
                .ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            self.settings_repo
                .ok_or_else(|| ServiceError::validation("settings_repo is required"))?,
            self.publisher
                .ok_or_else(|| ServiceError::validation("publisher is required"))?,
            self.identity_service
                .ok_or_else(|| ServiceError::validation("identity_service is required"))?,
            self.classifier
                .ok_or_else(|| ServiceError::validation("classifier is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
