//! In-memory [`AccessLog`] implementation.

use dashmap::DashMap;

use crate::domain::entities::AccessEvent;
use crate::domain::repositories::AccessLog;
use crate::error::AppError;
use crate::utils::code_generator::normalize_code;

/// Process-local access log keyed by normalized short code.
///
/// Each code's sequence lives behind its shard lock, so appends to one code
/// never contend with reads of another. Sequences grow without bound for as
/// long as the process runs.
#[derive(Debug, Default)]
pub struct InMemoryAccessLog {
    events: DashMap<String, Vec<AccessEvent>>,
}

impl InMemoryAccessLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccessLog for InMemoryAccessLog {
    fn init(&self, code: &str) -> Result<(), AppError> {
        self.events.entry(normalize_code(code)).or_default();
        Ok(())
    }

    fn append(&self, code: &str, event: AccessEvent) -> Result<(), AppError> {
        let mut events = self.events.entry(normalize_code(code)).or_default();

        // Concurrent resolves may arrive slightly out of timestamp order.
        let position = events.partition_point(|e| e.timestamp <= event.timestamp);
        events.insert(position, event);

        Ok(())
    }

    fn count(&self, code: &str) -> Result<usize, AppError> {
        Ok(self
            .events
            .get(&normalize_code(code))
            .map_or(0, |events| events.len()))
    }

    fn events(&self, code: &str) -> Result<Vec<AccessEvent>, AppError> {
        Ok(self
            .events
            .get(&normalize_code(code))
            .map(|events| events.value().clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RequestContext;
    use chrono::{Duration, Utc};
    use std::sync::Arc;
    use std::thread;

    fn event(user_agent: &str) -> AccessEvent {
        AccessEvent::from_context(RequestContext::new(Some(user_agent), None, None), Utc::now())
    }

    #[test]
    fn test_init_creates_empty_sequence() {
        let log = InMemoryAccessLog::new();
        log.init("abc").unwrap();

        assert_eq!(log.count("abc").unwrap(), 0);
        assert!(log.events("abc").unwrap().is_empty());
    }

    #[test]
    fn test_init_does_not_clear_existing_events() {
        let log = InMemoryAccessLog::new();
        log.append("abc", event("first")).unwrap();
        log.init("abc").unwrap();

        assert_eq!(log.count("abc").unwrap(), 1);
    }

    #[test]
    fn test_append_without_init() {
        let log = InMemoryAccessLog::new();
        log.append("fresh", event("ua")).unwrap();

        assert_eq!(log.count("fresh").unwrap(), 1);
    }

    #[test]
    fn test_events_keep_insertion_order() {
        let log = InMemoryAccessLog::new();
        let start = Utc::now();

        for i in 0..5 {
            let mut e = event(&format!("agent-{i}"));
            e.timestamp = start + Duration::milliseconds(i);
            log.append("ord", e).unwrap();
        }

        let events = log.events("ord").unwrap();
        let agents: Vec<_> = events.iter().map(|e| e.user_agent.as_str()).collect();

        assert_eq!(
            agents,
            vec!["agent-0", "agent-1", "agent-2", "agent-3", "agent-4"]
        );
        assert!(events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_late_append_is_placed_chronologically() {
        let log = InMemoryAccessLog::new();
        let start = Utc::now();

        let mut later = event("later");
        later.timestamp = start + Duration::milliseconds(5);
        let mut earlier = event("earlier");
        earlier.timestamp = start;

        log.append("race", later).unwrap();
        log.append("race", earlier).unwrap();

        let agents: Vec<_> = log
            .events("race")
            .unwrap()
            .into_iter()
            .map(|e| e.user_agent)
            .collect();
        assert_eq!(agents, vec!["earlier", "later"]);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let log = InMemoryAccessLog::new();
        log.append("ABC", event("ua")).unwrap();

        assert_eq!(log.count("abc").unwrap(), 1);
        assert_eq!(log.events("aBc").unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_appends() {
        let log = InMemoryAccessLog::new();
        log.append("snap", event("one")).unwrap();

        let snapshot = log.events("snap").unwrap();
        log.append("snap", event("two")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.count("snap").unwrap(), 2);
    }

    #[test]
    fn test_unknown_code_is_empty() {
        let log = InMemoryAccessLog::new();
        assert_eq!(log.count("missing").unwrap(), 0);
        assert!(log.events("missing").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let log = Arc::new(InMemoryAccessLog::new());
        log.init("hot").unwrap();

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let log = log.clone();
                thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        log.append("hot", event(&format!("{t}-{i}"))).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.count("hot").unwrap(), THREADS * PER_THREAD);
    }
}
