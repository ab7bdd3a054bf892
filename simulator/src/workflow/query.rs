use eyeguardcore::controller::{CameraFilter, Choice, IncidentFilter, TextQuery, UserFilter};
use eyeguardcore::{CoreError, CoreResult};
use serde::Deserialize;
use std::str::FromStr;

fn choice<T: FromStr<Err = CoreError>>(value: &Option<String>) -> CoreResult<Choice<T>> {
    value.as_deref().map_or(Ok(Choice::All), str::parse)
}

fn text(value: &Option<String>) -> TextQuery {
    TextQuery::new(value.as_deref().unwrap_or_default())
}

/// Incident listing parameters as typed into the search bar and selectors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentQuery {
    pub search: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
}

impl IncidentQuery {
    pub fn to_filter(&self) -> CoreResult<IncidentFilter> {
        Ok(IncidentFilter {
            query: text(&self.search),
            severity: choice(&self.severity)?,
            status: choice(&self.status)?,
        })
    }

    pub fn describe(&self) -> String {
        let parts: Vec<String> = [
            ("search", &self.search),
            ("severity", &self.severity),
            ("status", &self.status),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| format!("{}={}", name, value)))
        .collect();
        if parts.is_empty() {
            "all incidents".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CameraQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl CameraQuery {
    pub fn to_filter(&self) -> CoreResult<CameraFilter> {
        Ok(CameraFilter {
            query: text(&self.search),
            status: choice(&self.status)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl UserQuery {
    pub fn to_filter(&self) -> CoreResult<UserFilter> {
        Ok(UserFilter {
            query: text(&self.search),
            role: choice(&self.role)?,
            status: choice(&self.status)?,
        })
    }
}
