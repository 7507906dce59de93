//! Composition root and command execution.

use std::sync::Arc;

use anyhow::{bail, Context};
use ttrpgz_domain::UserId;

use crate::application::services::CatalogService;
use crate::application::session::{SessionContext, TokenStore};
use crate::application::SessionError;
use crate::cli::Commands;
use crate::config::PlayerConfig;
use crate::infrastructure::http::{build_client, BackendSessionClient, CognitoClient};
use crate::infrastructure::platform::{create_storage, DesktopDocumentProvider, SystemClock};
use crate::ports::outbound::{
    ClockPort, IdentityProviderPort, SessionBackendPort, StorageProvider,
};
use crate::ui::presentation::{CharacterSheetView, ListingView};
use crate::ui::{NavigationOutcome, Route, Router};

/// Everything a command needs, wired once at startup.
pub struct AppContext {
    pub session: Arc<SessionContext>,
    pub catalog: CatalogService,
    pub router: Router,
    pub document: Arc<DesktopDocumentProvider>,
}

impl AppContext {
    pub fn build(config: &PlayerConfig) -> Self {
        let client = build_client(config.http_timeout);
        let identity = Arc::new(CognitoClient::new(
            client.clone(),
            config.cognito_url.as_str(),
            &config.client_id,
        ));
        let backend = Arc::new(BackendSessionClient::new(client, config.api_url.as_str()));
        let storage = create_storage(config.storage, config.storage_path.as_deref());

        Self::with_ports(storage, Arc::new(SystemClock), identity, backend)
    }

    pub fn with_ports(
        storage: Arc<dyn StorageProvider>,
        clock: Arc<dyn ClockPort>,
        identity: Arc<dyn IdentityProviderPort>,
        backend: Arc<dyn SessionBackendPort>,
    ) -> Self {
        let session = Arc::new(SessionContext::new(
            TokenStore::new(storage),
            clock,
            identity,
            backend,
        ));
        let document = Arc::new(DesktopDocumentProvider::default());

        Self {
            session,
            catalog: CatalogService::new(),
            router: Router::new(document.clone()),
            document,
        }
    }

    fn require_user(&self) -> Result<UserId, SessionError> {
        self.session.user_id().ok_or(SessionError::NotAuthenticated)
    }
}

/// Run one command and return what should be printed.
pub async fn execute(ctx: &AppContext, command: Commands) -> anyhow::Result<String> {
    match command {
        Commands::Login { username, password } => {
            ctx.session
                .login_with_password(&username, &password)
                .await
                .context("Sign-in failed")?;
            let who = ctx
                .session
                .email()
                .or_else(|| ctx.session.user_id().map(UserId::into_inner))
                .unwrap_or(username);
            Ok(format!("Signed in as {who}"))
        }
        Commands::Logout => {
            ctx.session.logout().await;
            Ok("Signed out".to_string())
        }
        Commands::Whoami => {
            let Some(user_id) = ctx.session.user_id() else {
                return Ok("Not signed in".to_string());
            };
            let mut out = format!("User: {user_id}");
            if let Some(email) = ctx.session.email() {
                out.push_str(&format!("\nEmail: {email}"));
            }
            if let Some(expires_at) = ctx.session.expires_at() {
                out.push_str(&format!("\nExpires: {}", expires_at.to_rfc3339()));
            }
            out.push_str(&format!("\nState: {:?}", ctx.session.state()));
            Ok(out)
        }
        Commands::Token => {
            let token = ctx.session.access_token().await;
            if token.is_empty() {
                return Err(SessionError::NotAuthenticated.into());
            }
            Ok(token)
        }
        Commands::Characters => {
            let user_id = ctx.require_user()?;
            let listings = ctx.catalog.fetch_characters(&user_id).await;
            Ok(ListingView::characters(&listings).render())
        }
        Commands::Campaigns => {
            let user_id = ctx.require_user()?;
            let listings = ctx.catalog.fetch_campaigns(&user_id).await;
            Ok(ListingView::campaigns(&listings).render())
        }
        Commands::Character { id } => {
            let path = format!("/character/{}", id.trim());
            match ctx.router.navigate(&path, &ctx.session) {
                NavigationOutcome::Proceed(resolved) => {
                    let Route::Character { id } = resolved.route else {
                        bail!("{path} is not a character page");
                    };
                    let character = ctx.catalog.fetch_character(&id).await;
                    Ok(CharacterSheetView::from_character(&character).render())
                }
                NavigationOutcome::Redirect { .. } => Err(SessionError::NotAuthenticated.into()),
                NavigationOutcome::NotFound(path) => bail!("No page at {path}"),
            }
        }
        Commands::Navigate { path } => Ok(describe(ctx, ctx.router.navigate(&path, &ctx.session))),
    }
}

fn describe(ctx: &AppContext, outcome: NavigationOutcome) -> String {
    let title = ctx.document.title();
    match outcome {
        NavigationOutcome::Proceed(resolved) => {
            let mut out = format!("{} ({})\nTitle: {title}", resolved.path, resolved.name);
            for (key, value) in &resolved.params {
                out.push_str(&format!("\n{key}: {value}"));
            }
            if resolved.meta.hide_toolbar {
                out.push_str("\nToolbar hidden");
            }
            out
        }
        NavigationOutcome::Redirect { from, to } => {
            format!("{from} requires sign-in; redirected to {}\nTitle: {title}", to.path)
        }
        NavigationOutcome::NotFound(path) => format!("{path}: not found\nTitle: {title}"),
    }
}
