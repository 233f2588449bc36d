pub const DEFAULT_BASE_URL: &str = "https://mywater.veolia.us";

pub(crate) const LOGIN_PATH: &str = "/user/login";
pub(crate) const HOURLY_CONSUMPTION_PATH: &str = "/api/consumption/hourly";
pub(crate) const MONTHLY_CONSUMPTION_PATH: &str = "/api/consumption/monthly";

// Drupal login form constants. The portal rejects submissions that do not
// carry the exact form id and submit label it rendered.
pub(crate) const FORM_BUILD_ID_FIELD: &str = "form_build_id";
pub(crate) const LOGIN_FORM_ID: &str = "user_login_form";
pub(crate) const LOGIN_OP: &str = "Log in";

// A logged-in portal page carries a logout control; its absence after the
// form POST is the only signal the credentials were rejected.
pub(crate) const LOGOUT_MARKER: &str = "logout";
