use crate::controller::query::{next_number, Choice, Selection, TextQuery};
use crate::domain::{Role, User, UserInvite, UserStatus};
use crate::generator::users::user_id;
use crate::prelude::{CoreError, CoreResult, RecordFilter};
use crate::telemetry::LogManager;
use chrono::Utc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub query: TextQuery,
    pub role: Choice<Role>,
    pub status: Choice<UserStatus>,
}

impl RecordFilter<User> for UserFilter {
    fn matches(&self, user: &User) -> bool {
        self.query
            .matches_any([user.name.as_str(), user.email.as_str()])
            && self.role.admits(&user.role)
            && self.status.admits(&user.status)
    }
}

/// State behind the user administration screen. Invitations are kept in this
/// directory's copy only.
pub struct UserDirectory {
    users: Vec<User>,
    filter: UserFilter,
    selected: Selection,
    logger: LogManager,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            filter: UserFilter::default(),
            selected: Selection::default(),
            logger: LogManager::new("users"),
        }
    }

    pub fn search(&mut self, text: &str) {
        self.filter.query = TextQuery::new(text);
    }

    pub fn set_role(&mut self, role: Choice<Role>) {
        self.filter.role = role;
    }

    pub fn set_status(&mut self, status: Choice<UserStatus>) {
        self.filter.status = status;
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn records(&self) -> &[User] {
        &self.users
    }

    pub fn registered_count(&self) -> usize {
        self.users.len()
    }

    pub fn visible(&self) -> Vec<&User> {
        self.filter.apply(&self.users)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn toggle_selected(&mut self, id: &str) -> Option<&User> {
        self.user(id)?;
        let selected = self.selected.toggle(id).map(str::to_string);
        selected.and_then(|id| self.user(&id))
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.id().and_then(|id| self.user(id))
    }

    /// Adds an active account that has not logged in yet.
    pub fn invite(&mut self, invite: UserInvite) -> CoreResult<&User> {
        let name = invite.name.trim();
        let email = invite.email.trim().to_lowercase();

        if name.is_empty() {
            self.logger.reject("invitation without a name");
            return Err(CoreError::InvalidInput("name is required".into()));
        }
        if !email.contains('@') {
            self.logger.reject(&format!("malformed email {}", email));
            return Err(CoreError::InvalidInput(format!("invalid email: {}", email)));
        }
        if self.users.iter().any(|user| user.email.eq_ignore_ascii_case(&email)) {
            self.logger.reject(&format!("duplicate email {}", email));
            return Err(CoreError::InvalidInput(format!(
                "email already registered: {}",
                email
            )));
        }

        let number = next_number(self.users.iter().map(|user| user.id.as_str()), "user-");
        let user = User {
            id: user_id(number),
            name: name.to_string(),
            email,
            role: invite.role,
            status: UserStatus::Active,
            last_login: None,
            created_at: Utc::now(),
        };
        self.logger
            .record(&format!("{} invited as {}", user.email, user.role));
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }
}
