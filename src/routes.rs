// Route path constants - single source of truth for all backend API paths

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_ME: &str = "/auth/me";

pub const USERS: &str = "/users";
pub const PETS: &str = "/pets";
pub const SERVICES: &str = "/services";
pub const RESERVATIONS: &str = "/reservations";
pub const EMPLOYEES: &str = "/employees";
pub const ACTIVITY_LOGS: &str = "/activitylogs";
pub const MEDICAL_HISTORY: &str = "/medicalhistory";

// The payment-related routes are singular on the backend.
pub const PAYMENTS: &str = "/payment";
pub const INVOICES: &str = "/invoice";
pub const ASSIGNMENTS: &str = "/assignment";

pub const EXPORT: &str = "/export";
