use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Per-route request counters for the dashboard bridge.
pub struct MetricsRecorder {
    inner: Mutex<BTreeMap<String, RouteCounters>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RouteCounters {
    pub served: usize,
    pub misses: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn record_served(&self, route: &str) {
        if let Ok(mut routes) = self.inner.lock() {
            routes.entry(route.to_string()).or_default().served += 1;
        }
    }

    /// Counts a request that named a record or value the store does not hold.
    pub fn record_miss(&self, route: &str) {
        if let Ok(mut routes) = self.inner.lock() {
            routes.entry(route.to_string()).or_default().misses += 1;
        }
    }

    pub fn route(&self, route: &str) -> RouteCounters {
        self.inner
            .lock()
            .ok()
            .and_then(|routes| routes.get(route).copied())
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> BTreeMap<String, RouteCounters> {
        if let Ok(routes) = self.inner.lock() {
            routes.clone()
        } else {
            BTreeMap::new()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_kept_per_route() {
        let metrics = MetricsRecorder::new();
        metrics.record_served("incidents");
        metrics.record_served("incidents");
        metrics.record_miss("incident");

        assert_eq!(metrics.route("incidents").served, 2);
        assert_eq!(metrics.route("incident").misses, 1);
        assert_eq!(metrics.route("users"), RouteCounters::default());
        assert_eq!(metrics.snapshot().len(), 2);
    }
}
