use crate::generator::profile::build_store_from_config;
use crate::workflow::config::ConsoleConfig;
use crate::workflow::query::IncidentQuery;
use anyhow::Context;
use eyeguardcore::aggregate::CameraBreakdown;
use eyeguardcore::domain::{DashboardStats, Incident};
use eyeguardcore::Store;

pub struct RunReport {
    pub stats: DashboardStats,
    pub breakdown: CameraBreakdown,
    pub visible_incidents: Vec<Incident>,
    pub alert_count: usize,
    pub user_count: usize,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: ConsoleConfig,
}

impl Runner {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    pub fn session(&self) -> anyhow::Result<Store> {
        build_store_from_config(&self.config.to_session_config()).context("generating session store")
    }

    /// Runs one incident-log query against `store` and gathers the dashboard figures.
    pub fn execute(&self, store: &Store, query: &IncidentQuery) -> anyhow::Result<RunReport> {
        let filter = query
            .to_filter()
            .with_context(|| format!("parsing incident query ({})", query.describe()))?;

        let mut log = store.incident_log();
        log.set_filter(filter);
        let visible_incidents: Vec<Incident> = log.visible().into_iter().cloned().collect();

        let stats = store.dashboard_stats();
        let breakdown = CameraBreakdown::from_cameras(store.cameras());

        let mut notes = vec![format!(
            "{} of {} incidents match {}",
            visible_incidents.len(),
            store.incidents().len(),
            query.describe()
        )];
        if stats.critical_alerts > 0 {
            notes.push(format!(
                "{} critical incidents awaiting review",
                stats.critical_alerts
            ));
        }
        if breakdown.error > 0 {
            notes.push(format!("{} cameras reporting errors", breakdown.error));
        }

        Ok(RunReport {
            stats,
            breakdown,
            visible_incidents,
            alert_count: store.alerts().len(),
            user_count: store.users().len(),
            notes,
        })
    }

    /// One-line record appended to the offline report file.
    pub fn report_line(&self, store: &Store, report: &RunReport) -> String {
        format!(
            "generated_at={} seed={} bind={} cameras={}/{} errors={} incidents_today={} pending={} critical={} matched={} alerts={} users={}\n",
            store.generated_at().to_rfc3339(),
            store
                .config()
                .seed
                .map_or_else(|| "none".to_string(), |seed| seed.to_string()),
            self.config.bind,
            report.stats.active_cameras,
            report.stats.total_cameras,
            report.breakdown.error,
            report.stats.total_incidents_today,
            report.stats.alerts_pending,
            report.stats.critical_alerts,
            report.visible_incidents.len(),
            report.alert_count,
            report.user_count
        )
    }
}
