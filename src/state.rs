use crate::day::DaySelector;
use crate::store::TaskStore;
use crate::sync::SyncForwarder;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TaskStore>>,
    pub selector: Arc<Mutex<DaySelector>>,
    pub forwarder: Arc<dyn SyncForwarder>,
}

impl AppState {
    pub fn new(store: TaskStore, selector: DaySelector, forwarder: Arc<dyn SyncForwarder>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            selector: Arc::new(Mutex::new(selector)),
            forwarder,
        }
    }
}
