//! The form snippet catalog.
//!
//! Each entry pairs a single-form HTML snippet with a ground-truth mapping
//! from field `name` attribute to semantic role. The built-in catalog covers
//! login flows captured from real sites plus negative forms (search,
//! newsletter, contact, address, payment) that contain no authentication
//! fields at all.

use crate::enums::FieldRole;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named form snippet with ground-truth labels.
///
/// Negative-example entries omit the label map; every field they contain is
/// labelled `none`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name, used as the sample provenance string.
    pub name: String,
    /// Source URL, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// A single-form HTML snippet.
    pub html: String,
    /// Field `name` attribute → role. Fields absent from the map are `none`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, FieldRole>,
}

fn entry(name: &str, url: &str, labels: &[(&str, FieldRole)], html: &str) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        url: Some(url.to_string()),
        html: html.to_string(),
        labels: labels
            .iter()
            .map(|(field, role)| (field.to_string(), *role))
            .collect(),
    }
}

fn negative(name: &str, html: &str) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        url: None,
        html: html.to_string(),
        labels: HashMap::new(),
    }
}

/// The built-in labelled catalog, in training iteration order.
pub fn builtin_catalog() -> Vec<CatalogEntry> {
    use FieldRole::{Email, Password, Totp, Username};

    vec![
        entry(
            "GitHub Login",
            "https://github.com/login",
            &[("login", Username), ("password", Password)],
            r#"
        <form action="/session" method="post">
          <label for="login_field">Username or email address</label>
          <input type="text" name="login" id="login_field" autocomplete="username" />
          <label for="password">Password</label>
          <input type="password" name="password" id="password" autocomplete="current-password" />
          <input type="submit" name="commit" value="Sign in" />
        </form>
        "#,
        ),
        entry(
            "Google Sign-in Step 1",
            "https://accounts.google.com/signin",
            &[("identifier", Email)],
            r#"
        <form>
          <input type="email" name="identifier" autocomplete="username" aria-label="Email or phone" />
          <button type="button">Next</button>
        </form>
        "#,
        ),
        entry(
            "Google Sign-in Step 2",
            "https://accounts.google.com/signin/challenge",
            &[("Passwd", Password)],
            r#"
        <form>
          <input type="password" name="Passwd" autocomplete="current-password" aria-label="Enter your password" />
          <button type="submit">Next</button>
        </form>
        "#,
        ),
        entry(
            "Microsoft Login",
            "https://login.microsoftonline.com",
            &[("loginfmt", Email), ("passwd", Password)],
            r#"
        <form>
          <input type="email" name="loginfmt" autocomplete="username" placeholder="Email, phone, or Skype" />
          <input type="password" name="passwd" autocomplete="current-password" />
          <button type="submit">Sign in</button>
        </form>
        "#,
        ),
        entry(
            "AWS Console Login",
            "https://signin.aws.amazon.com",
            &[("username", Username), ("password", Password)],
            r#"
        <form id="signin_form">
          <input type="text" id="username" name="username" autocomplete="username" aria-label="Account ID" />
          <input type="password" id="password" name="password" autocomplete="current-password" />
          <button type="submit">Sign In</button>
        </form>
        "#,
        ),
        entry(
            "Stripe Dashboard",
            "https://dashboard.stripe.com/login",
            &[("email", Email), ("password", Password)],
            r#"
        <form>
          <input type="email" name="email" autocomplete="username email" placeholder="Email" />
          <input type="password" name="password" autocomplete="current-password" />
          <button type="submit">Sign in to your account</button>
        </form>
        "#,
        ),
        entry(
            "GitLab Login",
            "https://gitlab.com/users/sign_in",
            &[("user[login]", Username), ("user[password]", Password)],
            r#"
        <form>
          <input type="text" name="user[login]" autocomplete="username" placeholder="Username or email" />
          <input type="password" name="user[password]" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Sign in</button>
        </form>
        "#,
        ),
        entry(
            "Twitter/X Login",
            "https://twitter.com/i/flow/login",
            &[("text", Username), ("password", Password)],
            r#"
        <form>
          <input type="text" name="text" autocomplete="username" placeholder="Phone, email, or username" />
          <input type="password" name="password" autocomplete="current-password" />
          <button type="submit">Log in</button>
        </form>
        "#,
        ),
        entry(
            "Netflix Login",
            "https://www.netflix.com/login",
            &[("userLoginId", Email), ("password", Password)],
            r#"
        <form>
          <input type="email" name="userLoginId" autocomplete="email" placeholder="Email or phone number" />
          <input type="password" name="password" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Sign In</button>
        </form>
        "#,
        ),
        entry(
            "Dropbox Login",
            "https://www.dropbox.com/login",
            &[("login_email", Email), ("login_password", Password)],
            r#"
        <form>
          <input type="email" name="login_email" autocomplete="username email" placeholder="Email" />
          <input type="password" name="login_password" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Sign in</button>
        </form>
        "#,
        ),
        entry(
            "Discord Login",
            "https://discord.com/login",
            &[("email", Email), ("password", Password)],
            r#"
        <form>
          <input type="email" name="email" autocomplete="email" placeholder="Email" />
          <input type="password" name="password" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Log In</button>
        </form>
        "#,
        ),
        entry(
            "Slack Login",
            "https://slack.com/signin",
            &[("email", Email)],
            r#"
        <form>
          <input type="email" name="email" autocomplete="username email" placeholder="name@work-email.com" />
          <button type="submit">Sign In with Email</button>
        </form>
        "#,
        ),
        entry(
            "2FA/TOTP Form",
            "https://example.com/2fa",
            &[("totpPin", Totp)],
            r#"
        <form>
          <input type="tel" name="totpPin" autocomplete="one-time-code" inputmode="numeric" pattern="[0-9]*" placeholder="6-digit code" />
          <button type="submit">Verify</button>
        </form>
        "#,
        ),
        entry(
            "Instagram Login",
            "https://www.instagram.com/accounts/login",
            &[("username", Username), ("password", Password)],
            r#"
        <form>
          <input type="text" name="username" autocomplete="username" placeholder="Phone number, username, or email" />
          <input type="password" name="password" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Log In</button>
        </form>
        "#,
        ),
        entry(
            "LinkedIn Login",
            "https://www.linkedin.com/login",
            &[("session_key", Username), ("session_password", Password)],
            r#"
        <form>
          <input type="text" name="session_key" autocomplete="username" placeholder="Email or phone" />
          <input type="password" name="session_password" autocomplete="current-password" placeholder="Password" />
          <button type="submit">Sign in</button>
        </form>
        "#,
        ),
    ]
}

/// The built-in negative examples: forms with no authentication fields.
pub fn builtin_negatives() -> Vec<CatalogEntry> {
    vec![
        negative(
            "Search Form",
            r#"
        <form action="/search" method="get">
          <input type="text" name="q" placeholder="Search..." />
          <button type="submit">Search</button>
        </form>
        "#,
        ),
        negative(
            "Newsletter Signup",
            r#"
        <form>
          <input type="email" name="email" placeholder="Subscribe to newsletter" />
          <button type="submit">Subscribe</button>
        </form>
        "#,
        ),
        negative(
            "Contact Form",
            r#"
        <form>
          <input type="text" name="name" placeholder="Your name" />
          <input type="email" name="email" placeholder="Your email" />
          <textarea name="message"></textarea>
          <button type="submit">Send</button>
        </form>
        "#,
        ),
        negative(
            "Address Form",
            r#"
        <form>
          <input type="text" name="street" placeholder="Street address" />
          <input type="text" name="city" placeholder="City" />
          <input type="text" name="zip" placeholder="ZIP code" />
          <button type="submit">Continue</button>
        </form>
        "#,
        ),
        negative(
            "Credit Card Form",
            r#"
        <form>
          <input type="text" name="card_number" placeholder="Card number" />
          <input type="text" name="expiry" placeholder="MM/YY" />
          <input type="text" name="cvv" placeholder="CVV" />
          <button type="submit">Pay</button>
        </form>
        "#,
        ),
    ]
}
