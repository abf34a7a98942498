//! Initialize-once shared access to a NER model.
//!
//! Model initialization can be slow (remote warm-up, weight loading). The
//! handle guards it with a `tokio::sync::OnceCell`: the first caller runs the
//! loader, every concurrent caller awaits that same initialization, and later
//! callers reuse the loaded model for the rest of the process lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::{ModelError, NerModel, Result};

/// One-time model initialization.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Perform the (potentially slow) initialization and return the model.
    async fn load(&self) -> Result<Arc<dyn NerModel>>;
}

/// Cloneable, initialize-once handle to a shared NER model.
///
/// Clones share the same cell: no matter how many handles exist, the loader
/// runs at most once. A failed load is reported to every waiter; the next
/// call retries the loader.
#[derive(Clone)]
pub struct ModelHandle {
    cell: Arc<OnceCell<Arc<dyn NerModel>>>,
    loader: Arc<dyn ModelLoader>,
}

impl ModelHandle {
    /// Create a handle that initializes lazily through `loader`.
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            cell: Arc::new(OnceCell::new()),
            loader,
        }
    }

    /// Create a handle around an already-initialized model.
    pub fn from_model(model: Arc<dyn NerModel>) -> Self {
        Self {
            cell: Arc::new(OnceCell::new_with(Some(model))),
            loader: Arc::new(ReadyLoader),
        }
    }

    /// Get the model, initializing it on first use.
    pub async fn get(&self) -> Result<Arc<dyn NerModel>> {
        let model = self
            .cell
            .get_or_try_init(|| async {
                info!("initializing NER model");
                self.loader.load().await
            })
            .await?;
        debug!("NER model ready");
        Ok(Arc::clone(model))
    }

    /// Whether initialization has already completed.
    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }
}

/// Loader used by `from_model`; the cell is pre-filled so it never runs.
struct ReadyLoader;

#[async_trait]
impl ModelLoader for ReadyLoader {
    async fn load(&self) -> Result<Arc<dyn NerModel>> {
        Err(ModelError::NotReady("handle has no loader".into()))
    }
}
