use super::provider::{SessionError, SessionProvider};
use super::types::Session;
use crate::common::{Clock, SubscriptionId, Subscribers, SystemClock};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Default length of the dedup window.
pub const DEFAULT_DEDUP_WINDOW: Duration = Duration::from_secs(60);

type FetchResult = Result<Option<Session>, SessionError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

#[derive(Debug, Clone)]
pub struct SessionCacheConfig {
    /// Calls arriving within this long of the last fetch start are served
    /// from the cache.
    pub dedup_window: Duration,
    /// Extra attempts after a failed fetch. Zero leaves retrying to the next
    /// caller.
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for SessionCacheConfig {
    fn default() -> Self {
        Self {
            dedup_window: DEFAULT_DEDUP_WINDOW,
            max_retries: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Where the cache is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing fetched yet.
    Idle,
    /// A fetch is in flight.
    Pending,
    /// A value (possibly `None`, signed out) is cached.
    Resolved,
}

#[derive(Default)]
struct CacheState {
    session: Option<Session>,
    resolved: bool,
    window_started_at: Option<Instant>,
    pending: Option<SharedFetch>,
    // Bumped by revalidate, logout and store_session. A fetch only writes
    // back if the generation it started under is still current.
    generation: u64,
}

impl CacheState {
    fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        self.resolved
            && self
                .window_started_at
                .is_some_and(|started| now.saturating_duration_since(started) < window)
    }
}

struct Inner {
    provider: Arc<dyn SessionProvider>,
    clock: Arc<dyn Clock>,
    config: SessionCacheConfig,
    state: Mutex<CacheState>,
    subscribers: Subscribers<Option<Session>>,
}

/// Deduplicating cache in front of the session-check endpoint.
///
/// At most one fetch is outstanding at any time: callers arriving while a
/// fetch is in flight await that same fetch, and callers arriving within the
/// dedup window after it get the cached value without touching the network.
/// Each resolution is pushed once to every subscriber.
///
/// Sign-out is authoritative. [`SessionCache::logout`] and
/// [`SessionCache::store_session`] supersede any fetch still in flight: its
/// result is discarded and its callers receive the value stored by the
/// logout or store instead of the old session.
///
/// # Examples
///
/// ```no_run
/// use server::session::{HttpSessionConfig, HttpSessionProvider, SessionCache};
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = Arc::new(HttpSessionProvider::new(HttpSessionConfig::default())?);
/// let cache = SessionCache::new(provider);
///
/// cache.subscribe(|session| println!("signed in: {}", session.is_some()));
///
/// // Both calls share one request.
/// let (a, b) = futures::join!(cache.get_session(), cache.get_session());
/// assert_eq!(a?, b?);
///
/// cache.logout().await?;
/// assert!(cache.session().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SessionCache {
    inner: Arc<Inner>,
}

impl SessionCache {
    pub fn new(provider: Arc<dyn SessionProvider>) -> Self {
        Self::with_config(provider, SessionCacheConfig::default())
    }

    pub fn with_config(provider: Arc<dyn SessionProvider>, config: SessionCacheConfig) -> Self {
        Self::with_clock(provider, config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        provider: Arc<dyn SessionProvider>,
        config: SessionCacheConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                clock,
                config,
                state: Mutex::new(CacheState::default()),
                subscribers: Subscribers::new(),
            }),
        }
    }

    pub fn config(&self) -> &SessionCacheConfig {
        &self.inner.config
    }

    /// Returns the session, fetching only when nothing is in flight and the
    /// cached value is older than the dedup window.
    pub async fn get_session(&self) -> FetchResult {
        let fetch = {
            let mut state = self.inner.lock_state();
            if let Some(pending) = &state.pending {
                log::debug!("Joining in-flight session fetch");
                pending.clone()
            } else if state.is_fresh(self.inner.clock.now(), self.inner.config.dedup_window) {
                return Ok(state.session.clone());
            } else {
                Inner::start_fetch(&self.inner, &mut state)
            }
        };
        fetch.await
    }

    /// Forces a new fetch regardless of the dedup window.
    ///
    /// A fetch already in flight is superseded: its result is dropped and its
    /// callers receive this newer fetch's answer instead.
    pub async fn revalidate(&self) -> FetchResult {
        let fetch = {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            log::debug!("Revalidating session (generation {})", state.generation);
            Inner::start_fetch(&self.inner, &mut state)
        };
        fetch.await
    }

    /// Signs out on the backend, then clears the cached session and publishes
    /// `None` whatever the outcome of the backend call.
    ///
    /// The dedup window restarts at the moment of sign-out, so a
    /// `get_session` shortly after keeps answering `None` from the cache.
    /// The backend error, if any, is returned after the local state has been
    /// cleared.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let result = self.inner.provider.logout().await;
        if let Err(e) = &result {
            log::warn!("Sign-out request failed, clearing local session anyway: {e}");
        } else {
            log::info!("Signed out");
        }
        self.replace(None);
        result
    }

    /// Publishes a session obtained elsewhere, e.g. from a login response.
    pub fn store_session(&self, session: Option<Session>) {
        log::debug!("Storing session (signed in: {})", session.is_some());
        self.replace(session);
    }

    /// Cached value without triggering a fetch.
    pub fn session(&self) -> Option<Session> {
        self.inner.lock_state().session.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        let state = self.inner.lock_state();
        if state.pending.is_some() {
            SessionPhase::Pending
        } else if state.resolved {
            SessionPhase::Resolved
        } else {
            SessionPhase::Idle
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Option<Session>) + Send + Sync + 'static,
    {
        self.inner.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.unsubscribe(id)
    }

    fn replace(&self, session: Option<Session>) {
        {
            let mut state = self.inner.lock_state();
            state.generation += 1;
            state.pending = None;
            state.session = session.clone();
            state.resolved = true;
            state.window_started_at = Some(self.inner.clock.now());
        }
        self.inner.subscribers.notify(&session);
    }
}

impl Inner {
    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start_fetch(this: &Arc<Self>, state: &mut CacheState) -> SharedFetch {
        let generation = state.generation;
        state.window_started_at = Some(this.clock.now());

        let inner = Arc::clone(this);
        let fetch = async move { inner.run_fetch(generation).await }
            .boxed()
            .shared();
        state.pending = Some(fetch.clone());
        log::debug!("Started session fetch (generation {generation})");
        fetch
    }

    async fn run_fetch(&self, generation: u64) -> FetchResult {
        let result = self.fetch_with_retry(generation).await;

        let settled = {
            let mut state = self.lock_state();
            if state.generation != generation {
                log::debug!("Discarding superseded session fetch (generation {generation})");
                // Callers of a superseded fetch get the newer answer, never
                // the discarded one.
                match &state.pending {
                    Some(newer) => Settled::Follow(newer.clone()),
                    None => Settled::Current(state.session.clone()),
                }
            } else {
                state.pending = None;
                match &result {
                    Ok(session) => {
                        state.session = session.clone();
                        state.resolved = true;
                        Settled::Publish(session.clone())
                    }
                    Err(e) => {
                        // Leave the cached value as it was and let the next
                        // caller try again.
                        state.window_started_at = None;
                        log::warn!("Session fetch failed: {e}");
                        Settled::Failed
                    }
                }
            }
        };

        match settled {
            Settled::Publish(session) => {
                self.subscribers.notify(&session);
                result
            }
            Settled::Failed => result,
            Settled::Current(session) => Ok(session),
            Settled::Follow(newer) => newer.await,
        }
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.lock_state().generation != generation
    }

    async fn fetch_with_retry(&self, generation: u64) -> FetchResult {
        let mut attempt = 0;
        loop {
            match self.provider.fetch_session().await {
                Ok(session) => return Ok(session),
                Err(e) if attempt < self.config.max_retries && e.is_transient() => {
                    attempt += 1;
                    log::warn!(
                        "Session fetch attempt {attempt} failed, retrying in {:?}: {e}",
                        self.config.retry_delay
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                    if self.is_superseded(generation) {
                        log::debug!("Session fetch superseded, not retrying");
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// How a finished fetch hands its answer back.
enum Settled {
    Publish(Option<Session>),
    Failed,
    Current(Option<Session>),
    Follow(SharedFetch),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ManualClock;
    use crate::session::types::SessionUser;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn session(id: &str) -> Session {
        Session {
            token: format!("token-{id}"),
            create_time: None,
            user: SessionUser {
                id: id.to_string(),
                username: format!("user{id}"),
                nickname: String::new(),
                avatar: String::new(),
                role: None,
                email: None,
            },
        }
    }

    struct CountingProvider {
        fetches: AtomicUsize,
        logouts: AtomicUsize,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                logouts: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl SessionProvider for CountingProvider {
        async fn fetch_session(&self) -> FetchResult {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail {
                Err(SessionError::Provider("backend down".to_string()))
            } else {
                Ok(Some(session(&n.to_string())))
            }
        }

        async fn logout(&self) -> Result<(), SessionError> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn cache_with(provider: Arc<CountingProvider>, clock: Arc<ManualClock>) -> SessionCache {
        SessionCache::with_clock(provider, SessionCacheConfig::default(), clock)
    }

    #[tokio::test]
    async fn test_starts_idle_and_resolves() {
        let provider = Arc::new(CountingProvider::new(false));
        let cache = cache_with(provider.clone(), Arc::new(ManualClock::new()));
        assert_eq!(cache.phase(), SessionPhase::Idle);

        let result = cache.get_session().await.unwrap();
        assert_eq!(result, Some(session("1")));
        assert_eq!(cache.phase(), SessionPhase::Resolved);
        assert_eq!(cache.session(), Some(session("1")));
    }

    #[tokio::test]
    async fn test_calls_within_window_are_served_from_cache() {
        let provider = Arc::new(CountingProvider::new(false));
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(provider.clone(), clock.clone());

        cache.get_session().await.unwrap();
        clock.advance(Duration::from_secs(30));
        cache.get_session().await.unwrap();
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);

        clock.advance(Duration::from_secs(31));
        let third = cache.get_session().await.unwrap();
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(third, Some(session("2")));
    }

    #[tokio::test]
    async fn test_revalidate_ignores_window() {
        let provider = Arc::new(CountingProvider::new(false));
        let cache = cache_with(provider.clone(), Arc::new(ManualClock::new()));

        cache.get_session().await.unwrap();
        let refreshed = cache.revalidate().await.unwrap();

        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(refreshed, Some(session("2")));
        assert_eq!(cache.session(), Some(session("2")));
    }

    #[tokio::test]
    async fn test_failure_is_retried_by_next_call() {
        let provider = Arc::new(CountingProvider::new(true));
        let cache = cache_with(provider.clone(), Arc::new(ManualClock::new()));

        assert!(cache.get_session().await.is_err());
        assert_eq!(cache.phase(), SessionPhase::Idle);
        assert!(cache.get_session().await.is_err());
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_logout_clears_and_keeps_window() {
        let provider = Arc::new(CountingProvider::new(false));
        let cache = cache_with(provider.clone(), Arc::new(ManualClock::new()));

        cache.get_session().await.unwrap();
        cache.logout().await.unwrap();

        assert_eq!(cache.session(), None);
        assert_eq!(cache.get_session().await.unwrap(), None);
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(provider.logouts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_superseded_fetch_stops_retrying() {
        let provider = Arc::new(CountingProvider::new(true));
        let config = SessionCacheConfig {
            max_retries: 3,
            retry_delay: Duration::from_millis(20),
            ..SessionCacheConfig::default()
        };
        let cache = SessionCache::with_clock(provider.clone(), config, Arc::new(ManualClock::new()));

        let in_flight = tokio::spawn({
            let cache = cache.clone();
            async move { cache.get_session().await }
        });
        while provider.fetches.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        cache.store_session(None);

        assert_eq!(in_flight.await.unwrap().unwrap(), None);
        assert_eq!(provider.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_store_session_publishes_once() {
        let provider = Arc::new(CountingProvider::new(false));
        let cache = cache_with(provider, Arc::new(ManualClock::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        cache.subscribe(move |value| sink.lock().unwrap().push(value.clone()));

        cache.store_session(Some(session("42")));

        assert_eq!(*seen.lock().unwrap(), vec![Some(session("42"))]);
        assert_eq!(cache.phase(), SessionPhase::Resolved);
    }
}
