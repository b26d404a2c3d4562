use std::sync::Arc;

use crate::core::classifier::IrisModel;
use crate::core::store::RecordStore;
use crate::domain::ports::PatientSource;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: RecordStore,
    model: Option<IrisModel>,
}

impl AppState {
    pub fn new(source: Arc<dyn PatientSource>, model: Option<IrisModel>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RecordStore::new(source),
                model,
            }),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    pub fn model(&self) -> Option<&IrisModel> {
        self.inner.model.as_ref()
    }
}
