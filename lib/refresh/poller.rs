use std::time::Duration;

use tokio::{
    task::{JoinHandle, spawn},
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::info;

use crate::sources::ReleaseSource;

use super::Refresher;

/**
    Handle to the recurring refresh timer.

    Dropping the handle does not stop the timer, use [`Poller::stop`].
*/
#[derive(Debug)]
pub struct Poller {
    task: Option<JoinHandle<()>>,
}

impl Poller {
    /**
        Performs the initial refresh and, if `period` is non-zero,
        starts refreshing again every `period` in the background.

        With a zero `period` only the initial refresh happens, and
        any later refreshes must be triggered using webhooks.
    */
    pub async fn start<S: ReleaseSource>(refresher: &Refresher<S>, period: Duration) -> Self {
        let task = if period.is_zero() {
            info!("Not polling for releases, performing one off fetch and relying on webhooks");
            None
        } else {
            info!(
                "Polling for releases once every {} seconds",
                period.as_secs()
            );
            let refresher = refresher.clone();
            Some(spawn(async move {
                let mut ticker = interval_at(Instant::now() + period, period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticker.tick().await;
                    refresher.refresh().await;
                }
            }))
        };

        refresher.refresh().await;

        Self { task }
    }

    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.task.is_some()
    }

    /**
        Stops the recurring timer, abandoning any refresh it has in flight.
    */
    pub fn stop(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
