use serde::Serialize;

use crate::config::Config;
use crate::routes;

/// Authentication endpoints, grouped under their own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub me: String,
}

/// Absolute endpoint URLs for every backend resource.
///
/// Derived once from the configured base URL and immutable afterwards, so it
/// can be read from any number of threads without synchronization. The base
/// URL is joined verbatim: a trailing slash in the override produces a double
/// slash in every derived URL.
///
/// Serialization uses the resource-name spelling (`AUTH.LOGIN`, `USERS`, ...)
/// rather than the field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Endpoints {
    pub auth: AuthEndpoints,
    pub users: String,
    pub pets: String,
    pub services: String,
    pub reservations: String,
    pub employees: String,
    pub activity_logs: String,
    pub medical_history: String,
    pub payments: String,
    pub invoices: String,
    pub assignments: String,
    pub export: String,
}

impl Endpoints {
    /// Derive the full registry by joining every route path onto `base_url`.
    pub fn new(base_url: &str) -> Self {
        let url = |path: &str| format!("{}{}", base_url, path);

        Endpoints {
            auth: AuthEndpoints {
                login: url(routes::AUTH_LOGIN),
                register: url(routes::AUTH_REGISTER),
                me: url(routes::AUTH_ME),
            },
            users: url(routes::USERS),
            pets: url(routes::PETS),
            services: url(routes::SERVICES),
            reservations: url(routes::RESERVATIONS),
            employees: url(routes::EMPLOYEES),
            activity_logs: url(routes::ACTIVITY_LOGS),
            medical_history: url(routes::MEDICAL_HISTORY),
            payments: url(routes::PAYMENTS),
            invoices: url(routes::INVOICES),
            assignments: url(routes::ASSIGNMENTS),
            export: url(routes::EXPORT),
        }
    }

    /// Derive the full registry from configuration.
    pub fn from_config(config: &Config) -> Self {
        Endpoints::new(&config.api_base_url)
    }

    /// Look up an endpoint URL by its logical resource name.
    ///
    /// Auth endpoints use a dotted sub-key, e.g. `"AUTH.LOGIN"`. Names that
    /// are not in the registry return `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        let url = match name {
            "AUTH.LOGIN" => &self.auth.login,
            "AUTH.REGISTER" => &self.auth.register,
            "AUTH.ME" => &self.auth.me,
            "USERS" => &self.users,
            "PETS" => &self.pets,
            "SERVICES" => &self.services,
            "RESERVATIONS" => &self.reservations,
            "EMPLOYEES" => &self.employees,
            "ACTIVITY_LOGS" => &self.activity_logs,
            "MEDICAL_HISTORY" => &self.medical_history,
            "PAYMENTS" => &self.payments,
            "INVOICES" => &self.invoices,
            "ASSIGNMENTS" => &self.assignments,
            "EXPORT" => &self.export,
            _ => return None,
        };
        Some(url)
    }
}
