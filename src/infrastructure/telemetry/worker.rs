//! Background worker delivering telemetry events to a sink.

use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::sink::TelemetrySink;
use crate::domain::log_event::LogEvent;

/// Drains the telemetry channel until every sender is dropped.
///
/// Up to `concurrency` deliveries run at once. Failed deliveries are logged
/// at `warn` and dropped; nothing is retried. When the channel closes, the
/// worker waits for in-flight deliveries before returning.
pub async fn run_telemetry_worker(
    mut rx: mpsc::Receiver<LogEvent>,
    sink: Arc<dyn TelemetrySink>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut in_flight = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let sink = sink.clone();
        in_flight.spawn(async move {
            let _permit = permit;
            if let Err(e) = sink.send(&event).await {
                warn!(
                    sink = sink.name(),
                    level = %event.level,
                    message = %event.message,
                    "Failed to deliver telemetry event: {}",
                    e
                );
            }
        });

        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}

    debug!("Telemetry worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::log_event::LogLevel;
    use crate::infrastructure::telemetry::sink::{MockTelemetrySink, TelemetryError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_worker_delivers_every_event() {
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = delivered.clone();

        let mut sink = MockTelemetrySink::new();
        sink.expect_send().times(5).returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        sink.expect_name().return_const("mock");

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_telemetry_worker(rx, Arc::new(sink), 2));

        for i in 0..5 {
            tx.send(LogEvent::new(
                "backend",
                LogLevel::Info,
                "controller",
                format!("event {i}"),
            ))
            .await
            .unwrap();
        }
        drop(tx);

        worker.await.unwrap();
        assert_eq!(delivered.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_worker_survives_sink_failures() {
        let mut sink = MockTelemetrySink::new();
        sink.expect_send()
            .times(3)
            .returning(|_| Err(TelemetryError::Rejected(503)));
        sink.expect_name().return_const("mock");

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_telemetry_worker(rx, Arc::new(sink), 1));

        for _ in 0..3 {
            tx.send(LogEvent::new("backend", LogLevel::Error, "controller", "x"))
                .await
                .unwrap();
        }
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_passes_event_through() {
        let mut sink = MockTelemetrySink::new();
        sink.expect_send()
            .withf(|event| {
                event.level == LogLevel::Warn && event.message == "Expired URL accessed: abc"
            })
            .times(1)
            .returning(|_| Ok(()));
        sink.expect_name().return_const("mock");

        let (tx, rx) = mpsc::channel(1);
        let worker = tokio::spawn(run_telemetry_worker(rx, Arc::new(sink), 4));

        tx.send(LogEvent::new(
            "backend",
            LogLevel::Warn,
            "controller",
            "Expired URL accessed: abc",
        ))
        .await
        .unwrap();
        drop(tx);

        worker.await.unwrap();
    }
}
