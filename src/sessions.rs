//! In-memory customization sessions.
//!
//! Each browser gets a random token in a cookie; the token keys a
//! `FormStore` held here. This carries the aggregate (images included) from
//! the editing pages to preview and export without putting it in the URL.
//! Nothing is written to disk, and idle sessions expire.

use crate::models::PortfolioData;
use crate::store::FormStore;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session cookie name
pub const SESSION_COOKIE: &str = "portfolio_session";

// ============================================================================
// Session Structure
// ============================================================================

#[derive(Debug)]
pub struct Session {
    pub store: FormStore,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            store: FormStore::new(),
            last_seen: now,
        }
    }

    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_seen >= ttl
    }
}

// ============================================================================
// Session Store
// ============================================================================

pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Start a new session with an empty aggregate and return its token.
    pub async fn create(&self) -> String {
        let token = generate_token();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), Session::new(Utc::now()));
        tracing::debug!(active = sessions.len(), "session created");
        token
    }

    /// Refresh a session's idle timer. Returns false for unknown or expired
    /// tokens; expired sessions are dropped on the spot.
    pub async fn touch(&self, token: &str) -> bool {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(token) {
            Some(session) if !session.is_expired(self.ttl, now) => {
                session.last_seen = now;
                true
            }
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// Run `f` against the session's form store under the write lock.
    pub async fn update<F, R>(&self, token: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut FormStore) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(token)
            .filter(|s| !s.is_expired(self.ttl, now))?;
        session.last_seen = now;
        Some(f(&mut session.store))
    }

    /// Copy of the session's aggregate, if the session is live.
    pub async fn snapshot(&self, token: &str) -> Option<PortfolioData> {
        let now = Utc::now();
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .filter(|s| !s.is_expired(self.ttl, now))
            .map(|s| s.store.snapshot())
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(self.ttl, now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Return a live session token for this browser, minting a session and
    /// cookie when the cookie is missing or stale.
    pub async fn ensure_session(&self, jar: CookieJar) -> (String, CookieJar) {
        if let Some(token) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
            if self.touch(&token).await {
                return (token, jar);
            }
        }

        let token = self.create().await;
        let jar = jar.add(session_cookie(&token));
        (token, jar)
    }

    /// Token from the cookie, if it names a live session.
    pub async fn current(&self, jar: &CookieJar) -> Option<String> {
        let token = jar.get(SESSION_COOKIE)?.value().to_string();
        if self.touch(&token).await {
            Some(token)
        } else {
            None
        }
    }
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn generate_token() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 16] = rng.gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
