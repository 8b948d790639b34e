use actix_web::web;
use std::sync::Arc;

use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, UpdateTopicUseCase,
};
use crate::AppState;

pub struct TestAppStateBuilder {
    create_topic: Option<Arc<dyn CreateTopicUseCase + Send + Sync>>,
    update_topic: Option<Arc<dyn UpdateTopicUseCase + Send + Sync>>,
    delete_topic: Option<Arc<dyn DeleteTopicUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_topic: Some(Arc::new(StubCreateTopicUseCase)),
            update_topic: Some(Arc::new(StubUpdateTopicUseCase)),
            delete_topic: Some(Arc::new(StubDeleteTopicUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_topic(
        mut self,
        use_case: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Some(Arc::new(use_case));
        self
    }

    pub fn with_update_topic(
        mut self,
        use_case: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_topic = Some(Arc::new(use_case));
        self
    }

    pub fn with_delete_topic(
        mut self,
        use_case: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_topic = Some(Arc::new(use_case));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_topic_use_case: self.create_topic.unwrap(),
            update_topic_use_case: self.update_topic.unwrap(),
            delete_topic_use_case: self.delete_topic.unwrap(),
        })
    }
}
