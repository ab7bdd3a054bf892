use crate::controller::query::{next_number, Choice, Selection, TextQuery};
use crate::domain::{Camera, CameraDraft, CameraStatus};
use crate::generator::cameras::camera_id;
use crate::prelude::{CoreError, CoreResult, RecordFilter};
use crate::telemetry::LogManager;
use chrono::Utc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraFilter {
    pub query: TextQuery,
    pub status: Choice<CameraStatus>,
}

impl RecordFilter<Camera> for CameraFilter {
    fn matches(&self, camera: &Camera) -> bool {
        self.query.matches_any([
            camera.name.as_str(),
            camera.location.as_str(),
            camera.id.as_str(),
        ]) && self.status.admits(&camera.status)
    }
}

/// State behind the camera management screen.
///
/// Toggles, removals, and additions apply to this roster's copy only. A
/// roster rebuilt from the store starts from the generated cameras again.
pub struct CameraRoster {
    cameras: Vec<Camera>,
    filter: CameraFilter,
    selected: Selection,
    logger: LogManager,
}

impl CameraRoster {
    pub fn new(cameras: Vec<Camera>) -> Self {
        Self {
            cameras,
            filter: CameraFilter::default(),
            selected: Selection::default(),
            logger: LogManager::new("cameras"),
        }
    }

    pub fn search(&mut self, text: &str) {
        self.filter.query = TextQuery::new(text);
    }

    pub fn set_status(&mut self, status: Choice<CameraStatus>) {
        self.filter.status = status;
    }

    pub fn filter(&self) -> &CameraFilter {
        &self.filter
    }

    pub fn records(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn configured_count(&self) -> usize {
        self.cameras.len()
    }

    pub fn visible(&self) -> Vec<&Camera> {
        self.filter.apply(&self.cameras)
    }

    pub fn camera(&self, id: &str) -> Option<&Camera> {
        self.cameras.iter().find(|camera| camera.id == id)
    }

    pub fn toggle_selected(&mut self, id: &str) -> Option<&Camera> {
        self.camera(id)?;
        let selected = self.selected.toggle(id).map(str::to_string);
        selected.and_then(|id| self.camera(&id))
    }

    pub fn selected(&self) -> Option<&Camera> {
        self.selected.id().and_then(|id| self.camera(id))
    }

    /// Flips `enabled`. Disabling marks the camera inactive; enabling marks it
    /// active. The frame rate is left as it was.
    pub fn toggle(&mut self, id: &str) -> Option<&Camera> {
        let camera = self.cameras.iter_mut().find(|camera| camera.id == id)?;
        camera.status = if camera.enabled {
            CameraStatus::Inactive
        } else {
            CameraStatus::Active
        };
        camera.enabled = !camera.enabled;
        self.logger.record(&format!(
            "{} {}",
            camera.id,
            if camera.enabled { "enabled" } else { "disabled" }
        ));
        Some(&*camera)
    }

    pub fn remove(&mut self, id: &str) -> Option<Camera> {
        let position = self.cameras.iter().position(|camera| camera.id == id)?;
        self.selected.clear_if(id);
        let removed = self.cameras.remove(position);
        self.logger.record(&format!("{} removed", removed.id));
        Some(removed)
    }

    /// Appends a camera under the next free `cam-NNN` id. New cameras start
    /// enabled but inactive, with no frame rate until a feed reports in.
    pub fn add(&mut self, draft: CameraDraft) -> CoreResult<&Camera> {
        let name = draft.name.trim();
        if name.is_empty() {
            self.logger.reject("camera name is blank");
            return Err(CoreError::InvalidInput("camera name is required".into()));
        }
        if !draft.rtsp_url.starts_with("rtsp://") {
            self.logger
                .reject(&format!("rejected stream url {}", draft.rtsp_url));
            return Err(CoreError::InvalidInput(format!(
                "stream url must use rtsp://, got {}",
                draft.rtsp_url
            )));
        }

        let ids = self.cameras.iter().map(|camera| camera.id.as_str());
        let number = next_number(ids, "cam-");
        let camera = Camera {
            id: camera_id(number),
            name: name.to_string(),
            location: draft.location.trim().to_string(),
            status: CameraStatus::Inactive,
            rtsp_url: draft.rtsp_url,
            last_frame_timestamp: Utc::now(),
            fps: 0,
            detection_model: draft.detection_model,
            enabled: true,
        };
        self.logger
            .record(&format!("{} added at {}", camera.id, camera.location));
        self.cameras.push(camera);
        Ok(&self.cameras[self.cameras.len() - 1])
    }
}
