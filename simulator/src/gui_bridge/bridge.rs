use crate::generator::profile::build_store_from_config;
use crate::gui_bridge::model::DashboardModel;
use crate::workflow::query::{CameraQuery, IncidentQuery, UserQuery};
use eyeguardcore::domain::DetectionModel;
use eyeguardcore::telemetry::MetricsRecorder;
use eyeguardcore::{SessionConfig, Store};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard},
    thread,
};
use tokio::runtime::Builder;
use warp::{
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter, Rejection, Reply,
};

type Response = WithStatus<Json>;

fn respond<T: Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status)
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Store and the dashboard derived from it, swapped together.
struct Session {
    store: Store,
    model: DashboardModel,
}

impl Session {
    fn new(store: Store) -> Self {
        let model = DashboardModel::from_store(&store);
        Self { store, model }
    }
}

/// HTTP bridge that exposes the session store to the dashboard front-end.
#[derive(Clone)]
pub struct GuiBridge {
    session: Arc<RwLock<Session>>,
    metrics: Arc<MetricsRecorder>,
}

impl GuiBridge {
    pub fn new(store: Store) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new(store))),
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    fn session(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn served<T: Serialize>(&self, route: &str, body: &T) -> Response {
        self.metrics.record_served(route);
        respond(body, StatusCode::OK)
    }

    fn missed(&self, route: &str, status: StatusCode, message: String) -> Response {
        self.metrics.record_miss(route);
        warn!("[bridge] {} -> {}: {}", route, status.as_u16(), message);
        respond(&json!({ "error": message }), status)
    }

    fn dashboard(&self) -> Response {
        self.served("dashboard", &self.session().model)
    }

    fn incidents(&self, query: IncidentQuery) -> Response {
        let filter = match query.to_filter() {
            Ok(filter) => filter,
            Err(err) => return self.missed("incidents", StatusCode::BAD_REQUEST, err.to_string()),
        };
        let mut log = self.session().store.incident_log();
        log.set_filter(filter);
        self.served("incidents", &log.visible())
    }

    fn incident(&self, id: String) -> Response {
        let session = self.session();
        match session.store.incident(&id) {
            Some(incident) => self.served("incident", incident),
            None => self.missed(
                "incident",
                StatusCode::NOT_FOUND,
                format!("incident {} not found", id),
            ),
        }
    }

    fn cameras(&self, query: CameraQuery) -> Response {
        let filter = match query.to_filter() {
            Ok(filter) => filter,
            Err(err) => return self.missed("cameras", StatusCode::BAD_REQUEST, err.to_string()),
        };
        let mut roster = self.session().store.camera_roster();
        roster.search(filter.query.as_str());
        roster.set_status(filter.status);
        self.served("cameras", &roster.visible())
    }

    fn users(&self, query: UserQuery) -> Response {
        let filter = match query.to_filter() {
            Ok(filter) => filter,
            Err(err) => return self.missed("users", StatusCode::BAD_REQUEST, err.to_string()),
        };
        let mut directory = self.session().store.user_directory();
        directory.search(filter.query.as_str());
        directory.set_role(filter.role);
        directory.set_status(filter.status);
        self.served("users", &directory.visible())
    }

    fn alerts(&self) -> Response {
        self.served("alerts", &self.session().store.alerts())
    }

    fn models(&self) -> Response {
        let models: Vec<_> = DetectionModel::ALL
            .iter()
            .map(|model| {
                json!({
                    "id": model.as_str(),
                    "label": model.label(),
                    "endpoint": model.endpoint(),
                })
            })
            .collect();
        self.served("models", &models)
    }

    fn health(&self) -> Response {
        let body = json!({
            "system": self.session().store.health(),
            "routes": self.metrics.snapshot(),
        });
        self.served("health", &body)
    }

    /// Accepts any credentials; the console has no authentication.
    fn login(&self, request: LoginRequest) -> Response {
        info!("[bridge] sign-in for {}", request.email);
        self.served("login", &json!({ "status": "ok", "redirect": "/dashboard" }))
    }

    /// Regenerates the session and returns the new dashboard.
    fn regenerate(&self, config: SessionConfig) -> Response {
        match build_store_from_config(&config) {
            Ok(store) => {
                let session = Session::new(store);
                let model = session.model.clone();
                *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
                self.served("session", &model)
            }
            Err(err) => self.missed("session", StatusCode::BAD_REQUEST, format!("{:#}", err)),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static
    {
        let bridge = self.clone();
        let with_bridge = warp::any().map(move || bridge.clone());

        let dashboard = warp::path!("dashboard")
            .and(warp::get())
            .and(with_bridge.clone())
            .map(|bridge: GuiBridge| bridge.dashboard());

        let incidents = warp::path!("incidents")
            .and(warp::get())
            .and(warp::query::<IncidentQuery>())
            .and(with_bridge.clone())
            .map(|query: IncidentQuery, bridge: GuiBridge| bridge.incidents(query));

        let incident = warp::path!("incidents" / String)
            .and(warp::get())
            .and(with_bridge.clone())
            .map(|id: String, bridge: GuiBridge| bridge.incident(id));

        let cameras = warp::path!("cameras")
            .and(warp::get())
            .and(warp::query::<CameraQuery>())
            .and(with_bridge.clone())
            .map(|query: CameraQuery, bridge: GuiBridge| bridge.cameras(query));

        let users = warp::path!("users")
            .and(warp::get())
            .and(warp::query::<UserQuery>())
            .and(with_bridge.clone())
            .map(|query: UserQuery, bridge: GuiBridge| bridge.users(query));

        let alerts = warp::path!("alerts")
            .and(warp::get())
            .and(with_bridge.clone())
            .map(|bridge: GuiBridge| bridge.alerts());

        let models = warp::path!("models")
            .and(warp::get())
            .and(with_bridge.clone())
            .map(|bridge: GuiBridge| bridge.models());

        let health = warp::path!("health")
            .and(warp::get())
            .and(with_bridge.clone())
            .map(|bridge: GuiBridge| bridge.health());

        let login = warp::path!("login")
            .and(warp::post())
            .and(warp::body::json())
            .and(with_bridge.clone())
            .map(|request: LoginRequest, bridge: GuiBridge| bridge.login(request));

        let session = warp::path!("session")
            .and(warp::post())
            .and(warp::body::json())
            .and(with_bridge)
            .map(|config: SessionConfig, bridge: GuiBridge| bridge.regenerate(config));

        dashboard
            .or(incidents)
            .unify()
            .or(incident)
            .unify()
            .or(cameras)
            .unify()
            .or(users)
            .unify()
            .or(alerts)
            .unify()
            .or(models)
            .unify()
            .or(health)
            .unify()
            .or(login)
            .unify()
            .or(session)
            .unify()
    }

    /// Serves the routes on a background thread with its own runtime.
    pub fn serve(&self, addr: SocketAddr) -> thread::JoinHandle<()> {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("[bridge] failed to build runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(warp::serve(routes).run(addr));
        })
    }

    pub fn publish_status(&self, message: &str) {
        info!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> DashboardModel {
        self.session().model.clone()
    }

    #[cfg(test)]
    pub fn store_snapshot(&self) -> Store {
        self.session().store.clone()
    }

    #[cfg(test)]
    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn bridge() -> GuiBridge {
        let config = SessionConfig {
            seed: Some(21),
            ..SessionConfig::default()
        };
        GuiBridge::new(build_store_from_config(&config).unwrap())
    }

    fn body(response: &warp::http::Response<impl AsRef<[u8]>>) -> Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[tokio::test]
    async fn dashboard_route_serves_the_model() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("GET")
            .path("/dashboard")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body(&response);
        assert_eq!(json["stats"]["totalCameras"], 28);
        assert_eq!(json["recentIncidents"].as_array().unwrap().len(), 5);
        assert_eq!(json["cameraPreview"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn incident_listing_applies_query_parameters() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("GET")
            .path("/incidents?severity=critical&status=pending")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let incidents = body(&response);
        assert_eq!(incidents.as_array().unwrap().len(), 8);

        let rejected = warp::test::request()
            .method("GET")
            .path("/incidents?severity=urgent")
            .reply(&routes)
            .await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bridge.metrics().route("incidents").misses, 1);
    }

    #[tokio::test]
    async fn incident_detail_answers_404_for_unknown_ids() {
        let bridge = bridge();
        let routes = bridge.routes();
        let found = warp::test::request()
            .method("GET")
            .path("/incidents/INC-2024001")
            .reply(&routes)
            .await;
        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(body(&found)["id"], "INC-2024001");

        let missing = warp::test::request()
            .method("GET")
            .path("/incidents/INC-1")
            .reply(&routes)
            .await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(&missing)["error"], "incident INC-1 not found");
    }

    #[tokio::test]
    async fn camera_and_user_listings_filter() {
        let bridge = bridge();
        let routes = bridge.routes();
        let cameras = warp::test::request()
            .method("GET")
            .path("/cameras?status=error")
            .reply(&routes)
            .await;
        assert_eq!(body(&cameras).as_array().unwrap().len(), 2);

        let users = warp::test::request()
            .method("GET")
            .path("/users?role=admin")
            .reply(&routes)
            .await;
        let admins = body(&users);
        assert_eq!(admins.as_array().unwrap().len(), 1);
        assert_eq!(admins[0]["email"], "sarah.chen@eyeguard.ai");
    }

    #[tokio::test]
    async fn static_routes_answer() {
        let bridge = bridge();
        let routes = bridge.routes();
        let models = warp::test::request()
            .method("GET")
            .path("/models")
            .reply(&routes)
            .await;
        let models = body(&models);
        assert_eq!(models.as_array().unwrap().len(), 6);
        assert_eq!(models[0]["endpoint"], "/api/detect/theft");

        let alerts = warp::test::request()
            .method("GET")
            .path("/alerts")
            .reply(&routes)
            .await;
        assert_eq!(body(&alerts).as_array().unwrap().len(), 20);

        let health = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes)
            .await;
        let health = body(&health);
        assert_eq!(health["system"]["uptime"], "14d 7h 32m");
        assert_eq!(health["routes"]["models"]["served"], 1);
    }

    #[tokio::test]
    async fn login_accepts_any_credentials() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("POST")
            .path("/login")
            .json(&json!({ "email": "nobody@example.com", "password": "" }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(&response)["redirect"], "/dashboard");
    }

    #[tokio::test]
    async fn session_route_regenerates_the_store() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("POST")
            .path("/session")
            .json(&json!({ "camera_count": 6, "incident_count": 4, "seed": 3 }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(&response)["stats"]["totalCameras"], 6);
        assert_eq!(bridge.snapshot().stats.total_cameras, 6);
        assert_eq!(bridge.snapshot().alerts.len(), 4);

        let rejected = warp::test::request()
            .method("POST")
            .path("/session")
            .json(&json!({ "email_domain": "a@b" }))
            .reply(&routes)
            .await;
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bridge.snapshot().stats.total_cameras, 6);
    }

    #[tokio::test]
    async fn regenerated_store_and_dashboard_agree() {
        let bridge = bridge();
        let routes = bridge.routes();
        warp::test::request()
            .method("POST")
            .path("/session")
            .json(&json!({ "camera_count": 9, "incident_count": 7, "seed": 11 }))
            .reply(&routes)
            .await;

        let model = bridge.snapshot();
        let store = bridge.store_snapshot();
        assert_eq!(model.generated_at, Some(store.generated_at()));
        assert_eq!(model.stats.total_cameras, store.cameras().len());
        assert_eq!(model.alerts, store.alerts().to_vec());
    }

    #[tokio::test]
    async fn oversized_session_is_a_bad_request() {
        let bridge = bridge();
        let routes = bridge.routes();
        let response = warp::test::request()
            .method("POST")
            .path("/session")
            .json(&json!({ "camera_count": u64::MAX, "seed": 3 }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body(&response)["error"]
            .as_str()
            .unwrap()
            .starts_with("camera count"));
        assert_eq!(bridge.snapshot().stats.total_cameras, 28);
        assert_eq!(bridge.metrics().route("session").misses, 1);
    }
}
