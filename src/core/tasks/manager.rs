use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::TaskResult;
use crate::core::{
    models::{
        CardTier,
        CATALOG_RESOURCE,
    },
    source::DataSource,
    table,
};

/// Runs fetches off the UI thread. Each task gets a clone of the
/// sender and reports exactly one `TaskResult`; the app drains the
/// channel every frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fire-and-forget catalog fetch. Issued once at startup and again
    /// only when the data source setting changes.
    pub fn load_catalog(&self, source: DataSource) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let bytes = source.fetch(CATALOG_RESOURCE).await.map_err(|e| e.to_string())?;
                table::parse_cards(&bytes).map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::CatalogLoaded(result));
        });
    }

    /// Fetch the offers file for a tier. The generation travels with
    /// the result so the controller can drop superseded responses.
    pub fn load_offers(&self, source: DataSource, tier: CardTier, generation: u64) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let bytes =
                    source.fetch(tier.resource_name()).await.map_err(|e| e.to_string())?;
                table::parse_offers(&bytes).map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::OffersLoaded { generation, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        path::PathBuf,
        time::Duration,
    };

    use super::*;

    #[test]
    fn test_catalog_fetch_failure_reports_error() {
        let mut manager = TaskManager::new();
        manager.load_catalog(DataSource::Local { dir: PathBuf::from("no-such-dir") });

        let mut result = None;
        for _ in 0..50 {
            if let Some(r) = manager.poll_results().pop() {
                result = Some(r);
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        match result {
            Some(TaskResult::CatalogLoaded(Err(_))) => {}
            other => panic!("Expected CatalogLoaded error, got {:?}", other),
        }
    }

    #[test]
    fn test_offers_fetch_round_trip() {
        let dir = std::env::temp_dir().join("cardscout-task-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CardTier::Gold.resource_name()),
            "Title,Image,Link\nLounge,https://img.example/a.png,https://example.com/a\n",
        )
        .unwrap();

        let mut manager = TaskManager::new();
        manager.load_offers(DataSource::Local { dir }, CardTier::Gold, 7);

        let mut result = None;
        for _ in 0..50 {
            if let Some(r) = manager.poll_results().pop() {
                result = Some(r);
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        match result {
            Some(TaskResult::OffersLoaded { generation, result: Ok(offers) }) => {
                assert_eq!(generation, 7);
                assert_eq!(offers.len(), 1);
                assert_eq!(offers[0].title, "Lounge");
            }
            other => panic!("Expected OffersLoaded, got {:?}", other),
        }
    }
}
