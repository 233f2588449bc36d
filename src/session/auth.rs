use crate::config::Credentials;
use crate::constants::{FORM_BUILD_ID_FIELD, LOGIN_FORM_ID, LOGIN_OP, LOGOUT_MARKER};
use scraper::{Html, Selector};
use serde::Serialize;

/// Payload for the portal's Drupal login form.
///
/// `form_build_id` is scraped from the rendered login page and only
/// validates against that page instance; the remaining fields are fixed.
#[derive(Debug, Serialize)]
pub struct LoginForm {
    name: String,
    pass: String,
    form_build_id: String,
    form_id: &'static str,
    op: &'static str,
}

impl LoginForm {
    pub fn new(credentials: &Credentials, form_build_id: String) -> Self {
        Self {
            name: credentials.username.clone(),
            pass: credentials.password.clone(),
            form_build_id,
            form_id: LOGIN_FORM_ID,
            op: LOGIN_OP,
        }
    }
}

/// Pulls the hidden `form_build_id` value out of the login page markup.
/// `None` means the page failed to render the login form or its markup
/// drifted.
pub fn extract_form_build_id(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("input[name=\"{}\"]", FORM_BUILD_ID_FIELD)).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
}

/// Success predicate for the login POST: a logged-in page is assumed to
/// contain a logout control. Substring detection is fragile but it is what
/// the portal gives us; swap the strategy here, not at call sites.
pub fn is_logged_in_page(html: &str) -> bool {
    html.to_lowercase().contains(LOGOUT_MARKER)
}
