//! Route table and navigation guard
//!
//! Paths are matched segment by segment; a `:name` segment captures any
//! non-empty value. Every navigation sets the page title and sends signed-out
//! users to the login page unless the route opts out.

use std::collections::BTreeMap;
use std::sync::Arc;

use ttrpgz_domain::CharacterId;

use crate::application::session::SessionContext;
use crate::ports::outbound::DocumentProvider;

/// Title used when a route does not set one.
pub const DEFAULT_TITLE: &str = "D&D Helper";

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Character { id: CharacterId },
    Login,
}

/// Per-route metadata read by the navigation guard and the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub title: Option<&'static str>,
    /// The shell hides its toolbar on this page
    pub hide_toolbar: bool,
    /// Reachable without a session
    pub bypass_auth: bool,
}

impl RouteMeta {
    pub fn title(&self) -> &'static str {
        self.title.unwrap_or(DEFAULT_TITLE)
    }
}

struct RouteDef {
    name: &'static str,
    pattern: &'static str,
    meta: RouteMeta,
}

static ROUTES: [RouteDef; 3] = [
    RouteDef {
        name: "home",
        pattern: "/",
        meta: RouteMeta {
            title: None,
            hide_toolbar: false,
            bypass_auth: false,
        },
    },
    RouteDef {
        name: "character",
        pattern: "/character/:id",
        meta: RouteMeta {
            title: Some("Character | TTRPGZ"),
            hide_toolbar: false,
            bypass_auth: false,
        },
    },
    RouteDef {
        name: "login",
        pattern: LOGIN_PATH,
        meta: RouteMeta {
            title: None,
            hide_toolbar: true,
            bypass_auth: true,
        },
    },
];

/// A path matched against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub route: Route,
    pub name: &'static str,
    pub path: String,
    pub meta: RouteMeta,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Proceed(ResolvedRoute),
    /// The requested route needs a session; navigation continued to `to`
    Redirect { from: String, to: ResolvedRoute },
    NotFound(String),
}

pub struct Router {
    document: Arc<dyn DocumentProvider>,
}

impl Router {
    pub fn new(document: Arc<dyn DocumentProvider>) -> Self {
        Self { document }
    }

    /// Match a path (query and fragment ignored) against the route table.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = normalize(path);
        let segments = split(&path);

        ROUTES.iter().find_map(|def| {
            let params = match_pattern(def.pattern, &segments)?;
            let route = match def.name {
                "character" => Route::Character {
                    id: CharacterId::new(params.get("id")?.clone()),
                },
                "login" => Route::Login,
                _ => Route::Home,
            };
            Some(ResolvedRoute {
                route,
                name: def.name,
                path: path.clone(),
                meta: def.meta,
                params,
            })
        })
    }

    /// Resolve `path` and run the guard.
    pub fn navigate(&self, path: &str, session: &SessionContext) -> NavigationOutcome {
        tracing::debug!(path, "Navigating");

        let Some(resolved) = self.resolve(path) else {
            self.document.set_page_title(DEFAULT_TITLE);
            return NavigationOutcome::NotFound(normalize(path));
        };

        self.document.set_page_title(resolved.meta.title());

        if resolved.meta.bypass_auth || session.is_authenticated() {
            return NavigationOutcome::Proceed(resolved);
        }

        tracing::info!(path = %resolved.path, "Not signed in; redirecting to login");
        match self.navigate(LOGIN_PATH, session) {
            NavigationOutcome::Proceed(login) => NavigationOutcome::Redirect {
                from: resolved.path,
                to: login,
            },
            other => other,
        }
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, segments: &[&str]) -> Option<BTreeMap<String, String>> {
    let expected = split(pattern);
    if expected.len() != segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (want, got) in expected.iter().zip(segments) {
        match want.strip_prefix(':') {
            Some(name) => {
                params.insert(name.to_string(), got.to_string());
            }
            None if want == got => {}
            None => return None,
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::{encode_test_token, TokenStore};
    use crate::infrastructure::platform::InMemoryStorageProvider;
    use crate::ports::outbound::{
        AuthTokens, MockClockPort, MockDocumentProvider, MockIdentityProviderPort,
        MockSessionBackendPort,
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn session(signed_in: bool) -> SessionContext {
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(Utc::now);
        let session = SessionContext::new(
            TokenStore::new(Arc::new(InMemoryStorageProvider::new())),
            Arc::new(clock),
            Arc::new(MockIdentityProviderPort::new()),
            Arc::new(MockSessionBackendPort::new()),
        );
        if signed_in {
            session
                .login(AuthTokens {
                    access_token: "access".into(),
                    id_token: encode_test_token(&serde_json::json!({ "sub": "user-42" })),
                    refresh_token: None,
                    expires_in: 3600,
                })
                .unwrap();
        }
        session
    }

    fn router_expecting(titles: &[&'static str]) -> Router {
        let mut document = MockDocumentProvider::new();
        let mut seq = Sequence::new();
        for title in titles {
            document
                .expect_set_page_title()
                .with(eq(*title))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }
        Router::new(Arc::new(document))
    }

    #[test]
    fn resolves_parameterised_paths() {
        let router = router_expecting(&[]);
        let resolved = router.resolve("/character/42?tab=skills").unwrap();
        assert_eq!(
            resolved.route,
            Route::Character {
                id: CharacterId::new("42")
            }
        );
        assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
        assert_eq!(resolved.meta.title(), "Character | TTRPGZ");

        assert_eq!(router.resolve("").unwrap().route, Route::Home);
        assert_eq!(router.resolve("/login/").unwrap().route, Route::Login);
        assert!(router.resolve("/character").is_none());
        assert!(router.resolve("/character/42/edit").is_none());
    }

    #[test]
    fn login_route_metadata() {
        let meta = router_expecting(&[]).resolve(LOGIN_PATH).unwrap().meta;
        assert!(meta.hide_toolbar);
        assert!(meta.bypass_auth);
        assert_eq!(meta.title(), DEFAULT_TITLE);
    }

    #[test]
    fn signed_in_navigation_sets_route_title() {
        let router = router_expecting(&["Character | TTRPGZ"]);
        let outcome = router.navigate("/character/1", &session(true));
        assert!(matches!(outcome, NavigationOutcome::Proceed(r) if r.name == "character"));
    }

    #[test]
    fn signed_out_users_are_sent_to_login() {
        let router = router_expecting(&["Character | TTRPGZ", DEFAULT_TITLE]);
        match router.navigate("/character/1", &session(false)) {
            NavigationOutcome::Redirect { from, to } => {
                assert_eq!(from, "/character/1");
                assert_eq!(to.route, Route::Login);
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn login_page_needs_no_session() {
        let router = router_expecting(&[DEFAULT_TITLE]);
        let outcome = router.navigate("/login", &session(false));
        assert!(matches!(outcome, NavigationOutcome::Proceed(r) if r.route == Route::Login));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let router = router_expecting(&[DEFAULT_TITLE]);
        assert_eq!(
            router.navigate("/campaigns/", &session(true)),
            NavigationOutcome::NotFound("/campaigns".into())
        );
    }
}
