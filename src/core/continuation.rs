use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{
    sync::Semaphore,
    task::JoinHandle,
    time::sleep,
};

use crate::{core::option::SkipOption, prelude::*};

/// Moves the customer on to the next step with the chosen skip.
#[async_trait]
pub trait ContinueAction: Send + Sync {
    async fn proceed(&self, option: &SkipOption) -> Result;
}

/// Stand-in for the permits step: just takes its time.
pub struct SimulatedContinue {
    pub delay: Duration,
}

impl Default for SimulatedContinue {
    fn default() -> Self {
        Self { delay: Duration::from_millis(1500) }
    }
}

#[async_trait]
impl ContinueAction for SimulatedContinue {
    #[instrument(skip_all, fields(size = %option.size))]
    async fn proceed(&self, option: &SkipOption) -> Result {
        info!(delay = ?self.delay, "continuing to permits…");
        sleep(self.delay).await;
        info!("continued");
        Ok(())
    }
}

/// Continue button which allows at most one action in flight.
pub struct ContinueButton {
    action: Arc<dyn ContinueAction>,
    permit: Arc<Semaphore>,
}

impl ContinueButton {
    pub fn new(action: Arc<dyn ContinueAction>) -> Self {
        Self { action, permit: Arc::new(Semaphore::new(1)) }
    }

    /// Start the action unless one is already pending, in which case the press is ignored.
    pub fn press(&self, option: SkipOption) -> Option<JoinHandle<Result>> {
        let Ok(permit) = Arc::clone(&self.permit).try_acquire_owned() else {
            warn!("continue is already in progress");
            return None;
        };
        let action = Arc::clone(&self.action);
        Some(tokio::spawn(async move {
            let _permit = permit;
            action.proceed(&option).await
        }))
    }

    /// Whether the button is disabled by a pending action.
    pub fn is_pending(&self) -> bool {
        self.permit.available_permits() == 0
    }
}
