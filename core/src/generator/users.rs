use crate::domain::User;
use crate::generator::policy::{ROLE_POLICY, USER_STATUS_POLICY};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

const DAY_MS: f64 = 86_400_000.0;
const LAST_LOGIN_WINDOW_DAYS: f64 = 7.0;
const ACCOUNT_MIN_AGE_DAYS: f64 = 30.0;
const ACCOUNT_AGE_SPREAD_DAYS: f64 = 300.0;

pub fn user_id(number: usize) -> String {
    format!("user-{:03}", number)
}

/// Derives the login address: lowercased name, first space replaced by a dot.
pub fn email_for(name: &str, domain: &str) -> String {
    format!("{}@{}", name.to_lowercase().replacen(' ', ".", 1), domain)
}

fn days_ago(now: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    now - Duration::milliseconds((days * DAY_MS) as i64)
}

/// One account per name. The first name is the administrator.
pub fn generate_users<R, S>(names: &[S], domain: &str, rng: &mut R, now: DateTime<Utc>) -> Vec<User>
where
    R: Rng,
    S: AsRef<str>,
{
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            let last_login = days_ago(now, rng.gen_range(0.0..LAST_LOGIN_WINDOW_DAYS));
            let created_at = days_ago(
                now,
                ACCOUNT_MIN_AGE_DAYS + rng.gen_range(0.0..ACCOUNT_AGE_SPREAD_DAYS),
            );

            User {
                id: user_id(index + 1),
                name: name.to_string(),
                email: email_for(name, domain),
                role: ROLE_POLICY.assign(index),
                status: USER_STATUS_POLICY.assign(index),
                last_login: Some(last_login),
                created_at,
            }
        })
        .collect()
}
