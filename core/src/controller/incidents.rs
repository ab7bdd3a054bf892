use crate::controller::query::{Choice, Selection, TextQuery};
use crate::domain::{Incident, IncidentStatus, Severity};
use crate::prelude::RecordFilter;
use crate::telemetry::LogManager;

/// Search text matched against camera name, description, and incident id,
/// combined with severity and review-status selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentFilter {
    pub query: TextQuery,
    pub severity: Choice<Severity>,
    pub status: Choice<IncidentStatus>,
}

impl RecordFilter<Incident> for IncidentFilter {
    fn matches(&self, incident: &Incident) -> bool {
        self.query.matches_any([
            incident.camera_name.as_str(),
            incident.description.as_str(),
            incident.id.as_str(),
        ]) && self.severity.admits(&incident.severity)
            && self.status.admits(&incident.status)
    }
}

/// State behind the incident log screen.
///
/// Works on its own copy of the incidents; status changes made here are not
/// seen by the session store or by other screens.
pub struct IncidentLog {
    incidents: Vec<Incident>,
    filter: IncidentFilter,
    expanded: Selection,
    logger: LogManager,
}

impl IncidentLog {
    pub fn new(incidents: Vec<Incident>) -> Self {
        Self {
            incidents,
            filter: IncidentFilter::default(),
            expanded: Selection::default(),
            logger: LogManager::new("incidents"),
        }
    }

    pub fn search(&mut self, text: &str) {
        self.filter.query = TextQuery::new(text);
    }

    pub fn set_severity(&mut self, severity: Choice<Severity>) {
        self.filter.severity = severity;
    }

    pub fn set_status(&mut self, status: Choice<IncidentStatus>) {
        self.filter.status = status;
    }

    pub fn set_filter(&mut self, filter: IncidentFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> &IncidentFilter {
        &self.filter
    }

    pub fn records(&self) -> &[Incident] {
        &self.incidents
    }

    /// Rows that pass the current filter, newest first.
    pub fn visible(&self) -> Vec<&Incident> {
        self.filter.apply(&self.incidents)
    }

    pub fn detail(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    /// Expands the row for `id`, collapsing it if it was already open.
    pub fn toggle_expanded(&mut self, id: &str) -> Option<&Incident> {
        if self.detail(id).is_none() {
            return None;
        }
        let expanded = self.expanded.toggle(id).map(str::to_string);
        expanded.and_then(|id| self.detail(&id))
    }

    pub fn expanded(&self) -> Option<&Incident> {
        self.expanded.id().and_then(|id| self.detail(id))
    }

    /// Sets the review status of one incident in this screen's copy.
    pub fn mark(&mut self, id: &str, status: IncidentStatus) -> Option<&Incident> {
        let incident = self.incidents.iter_mut().find(|incident| incident.id == id)?;
        incident.status = status;
        self.logger.record(&format!("{} marked {}", incident.id, status));
        Some(&*incident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_cameras, generate_incidents};
    use chrono::Utc;
    use rand::{rngs::StdRng, SeedableRng};

    fn log() -> IncidentLog {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(31);
        let cameras = generate_cameras(28, &mut rng, now);
        IncidentLog::new(generate_incidents(50, &cameras, &mut rng, now))
    }

    #[test]
    fn camera_name_search_is_case_insensitive() {
        let mut log = log();
        let target = log.records()[0].camera_name.clone();
        log.search(&target.to_lowercase());

        let visible = log.visible();
        assert!(!visible.is_empty());
        // Camera names do not appear in descriptions, and ids use a distinct prefix.
        let needle = target.to_lowercase();
        assert!(visible
            .iter()
            .all(|incident| incident.camera_name.to_lowercase().contains(&needle)));
    }

    #[test]
    fn filters_are_conjunctive() {
        let mut log = log();
        log.set_severity(Choice::Only(Severity::Critical));
        log.set_status(Choice::Only(IncidentStatus::Pending));

        let visible = log.visible();
        assert_eq!(visible.len(), 8);
        assert!(visible.iter().all(|incident| {
            incident.severity == Severity::Critical && incident.status == IncidentStatus::Pending
        }));

        log.set_status(Choice::Only(IncidentStatus::Dismissed));
        assert!(log.visible().is_empty());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let mut log = log();
        log.search("detected");
        log.set_severity(Choice::Only(Severity::Warning));

        let once: Vec<Incident> = log.visible().into_iter().cloned().collect();
        let twice: Vec<Incident> = log.filter().apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn search_matches_incident_ids_and_descriptions() {
        let mut log = log();
        log.search("inc-2024001");
        assert!(log.visible().iter().any(|incident| incident.id == "INC-2024001"));

        log.search("TAG REMOVAL");
        let visible = log.visible();
        assert_eq!(visible.len(), 5);
    }

    #[test]
    fn expanding_toggles_and_ignores_unknown_ids() {
        let mut log = log();
        let id = log.records()[4].id.clone();

        assert_eq!(log.toggle_expanded(&id).map(|i| i.id.clone()), Some(id.clone()));
        assert_eq!(log.expanded().map(|i| i.id.as_str()), Some(id.as_str()));
        assert!(log.toggle_expanded(&id).is_none());
        assert!(log.expanded().is_none());
        assert!(log.toggle_expanded("INC-9999999").is_none());
    }

    #[test]
    fn marking_changes_only_the_local_copy() {
        let mut log = log();
        let id = log
            .records()
            .iter()
            .find(|incident| incident.status == IncidentStatus::Pending)
            .map(|incident| incident.id.clone())
            .unwrap();

        let marked = log.mark(&id, IncidentStatus::Reviewed).unwrap();
        assert_eq!(marked.status, IncidentStatus::Reviewed);
        assert_eq!(log.detail(&id).unwrap().status, IncidentStatus::Reviewed);
        assert!(log.mark("INC-0000000", IncidentStatus::Dismissed).is_none());
    }
}
