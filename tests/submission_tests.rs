mod common;

#[cfg(test)]
pub mod submission_tests {
    use std::time::Duration;

    use savory_bistro::models::SubmissionStatus;
    use savory_bistro::services::SimulatedSubmission;

    #[test]
    fn test_status_transitions() {
        let mut status = SubmissionStatus::<u32>::Idle;

        assert!(!status.complete(1));
        assert!(status.begin());
        assert!(!status.begin());
        assert_eq!(status.label(), "submitting");
        assert!(status.complete(7));
        assert_eq!(status.submitted(), Some(&7));
        assert!(!status.begin());

        status.reset();
        assert!(status.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_completes_after_latency() {
        let submission = SimulatedSubmission::new(Duration::from_millis(1500));
        let mut rx = submission.subscribe();
        assert!(submission.status().is_idle());

        let handle = {
            let started = tokio::time::Instant::now();
            async move {
                let value = submission.run("table for two".to_string()).await;
                (value, started.elapsed(), submission.status())
            }
        };
        let task = tokio::spawn(handle);

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_submitting());

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().submitted().map(String::as_str),
            Some("table for two")
        );

        let (value, elapsed, status) = task.await.unwrap();
        assert_eq!(value, "table for two");
        assert!(elapsed >= Duration::from_millis(1500));
        assert!(status.submitted().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_still_pending_before_latency() {
        let submission = SimulatedSubmission::new(Duration::from_millis(1500));
        let rx = submission.subscribe();

        let task = tokio::spawn(async move { submission.run(3u32).await });

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.borrow().is_submitting());

        assert_eq!(task.await.unwrap(), 3);
        assert_eq!(rx.borrow().submitted(), Some(&3));
    }
}
