use std::time::Duration;

use tokio::sync::watch;

use crate::models::SubmissionStatus;

/// Stand-in for a network round trip: waits a fixed latency, then accepts
/// the input unchanged. It cannot fail and cannot be cancelled once started.
pub struct SimulatedSubmission<T> {
    latency: Duration,
    status: watch::Sender<SubmissionStatus<T>>,
}

impl<T> SimulatedSubmission<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(latency: Duration) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self { latency, status }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus<T>> {
        self.status.subscribe()
    }

    pub fn status(&self) -> SubmissionStatus<T> {
        self.status.borrow().clone()
    }

    /// Runs one submission to completion and returns the accepted input.
    pub async fn run(&self, input: T) -> T {
        self.status.send_modify(|s| {
            s.reset();
            s.begin();
        });
        log::debug!("submission started, completes in {:?}", self.latency);

        tokio::time::sleep(self.latency).await;

        self.status.send_modify(|s| {
            s.complete(input.clone());
        });
        log::debug!("submission accepted");

        input
    }
}
