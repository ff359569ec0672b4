//! Session management for authenticated backend operations.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::api::endpoints::{
    self, RefreshRequest, RefreshResponse, SignInRequest, SignInResponse,
};
use crate::api::{
    Categories, Courses, EssayExams, OnlineQuizzes, QuestionBanks, Quizzes, Students, Teachers,
};
use crate::error::{AuthError, Error};
use crate::http::{to_body, ApiClient, ApiRequest};
use crate::live::WaitingRoomStream;
use crate::types::{BaseUrl, ResourceId};

use super::credentials::Credentials;
use super::store::{MemoryTokenStore, TokenStore};
use super::tokens::{AccessToken, RefreshToken};

/// A session representing an authenticated connection to the backend.
///
/// All authenticated operations require a `Session`. Sessions are obtained
/// via [`Session::login()`] or restored from a [`TokenStore`] via
/// [`Session::from_store()`], and renew their access token transparently:
/// a request rejected with 401 triggers one token refresh and one replay.
///
/// # Thread Safety
///
/// Sessions are cheap to clone (they use internal `Arc`) and are safe to
/// share across tasks. Token state lives in the injected [`TokenStore`].
/// There is no single-flight guard around the refresh call: overlapping
/// 401s each trigger their own refresh, and the last one to finish wins.
///
/// # Example
///
/// ```no_run
/// use quizroom::{BaseUrl, Credentials, Session};
///
/// # async fn example() -> Result<(), quizroom::Error> {
/// let base = BaseUrl::new("https://api.quizroom.app")?;
/// let creds = Credentials::new("admin@school.edu", "password");
/// let session = Session::login(&base, creds).await?;
///
/// let courses = session.courses().list().await?;
/// println!("{} courses", courses.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client: ApiClient,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Authenticate with the backend and create a new session.
    ///
    /// Tokens are held in an in-memory store; use
    /// [`Session::login_with_store()`] to persist them.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails or the backend is unreachable.
    pub async fn login(base: &BaseUrl, credentials: Credentials) -> Result<Self, Error> {
        Self::login_with_store(base, credentials, Arc::new(MemoryTokenStore::new())).await
    }

    /// Authenticate with the backend, persisting tokens in `store`.
    ///
    /// The store receives the token pair on success and every subsequent
    /// refreshed access token.
    #[instrument(skip(credentials, store), fields(base = %base, email = %credentials.email()))]
    pub async fn login_with_store(
        base: &BaseUrl,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, Error> {
        info!("Creating new session");

        let client = ApiClient::new(base.clone());

        let request = SignInRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let request =
            ApiRequest::post(endpoints::AUTH_SIGN_IN).with_body(to_body(&request)?);

        // Sign-in is unauthenticated and never triggers a refresh.
        let response = client.dispatch(&request, None).await?;
        let response: SignInResponse = client.json_body(response).await?;

        store.set_tokens(
            AccessToken::new(response.access_token),
            Some(RefreshToken::new(response.refresh_token)),
        );

        debug!("Session created successfully");

        Ok(Self {
            inner: Arc::new(SessionInner { client, store }),
        })
    }

    /// Restore a session from a token store.
    ///
    /// No network call is made; the caller is responsible for ensuring the
    /// stored tokens are still valid. An expired access token is renewed
    /// on first use through the normal refresh path.
    pub fn from_store(base: BaseUrl, store: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                client: ApiClient::new(base),
                store,
            }),
        }
    }

    /// Returns the backend base URL for this session.
    pub fn base(&self) -> &BaseUrl {
        self.inner.client.base()
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// The new token is persisted in the token store and returned. This is
    /// invoked automatically when a request fails with 401; calling it
    /// directly is only needed to renew a restored session eagerly.
    ///
    /// # Errors
    ///
    /// Fails fast with [`AuthError::MissingRefreshToken`] if the store has
    /// no refresh token; backend rejections propagate unmodified. The
    /// refresh call itself is never retried.
    #[instrument(skip(self), fields(base = %self.base()))]
    pub async fn refresh(&self) -> Result<AccessToken, Error> {
        info!("Refreshing access token");

        let refresh_token = self
            .inner
            .store
            .refresh_token()
            .ok_or(AuthError::MissingRefreshToken)?;

        let request = RefreshRequest {
            refresh_token: refresh_token.as_str(),
        };
        let request =
            ApiRequest::post(endpoints::AUTH_REFRESH).with_body(to_body(&request)?);

        // The refresh token travels in the body, never as a bearer header,
        // and the call bypasses the 401 interceptor so it cannot loop.
        let response = self.inner.client.dispatch(&request, None).await?;
        let response: RefreshResponse = self.inner.client.json_body(response).await?;

        let token = AccessToken::new(response.access_token);
        self.inner.store.set_access_token(token.clone());

        debug!("Access token refreshed");
        Ok(token)
    }

    /// Discard the session tokens.
    pub fn logout(&self) {
        self.inner.store.clear();
    }

    /// Export the current access token for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It grants access to the account.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.inner.store.access_token()
    }

    /// Export the current refresh token for persistence.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It can be used to obtain new
    /// access tokens.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.inner.store.refresh_token()
    }

    // ========================================================================
    // Request Pipeline
    // ========================================================================

    /// Dispatch a request with the current access token, refreshing and
    /// replaying exactly once on 401.
    ///
    /// Sign-in and refresh URLs are excluded from the retry policy; their
    /// 401s surface directly. The replay's outcome, success or failure, is
    /// returned unmodified — there is no second attempt.
    async fn perform(&self, request: &ApiRequest) -> Result<reqwest::Response, Error> {
        let token = self.inner.store.access_token();
        let response = self.inner.client.dispatch(request, token.as_ref()).await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            && !is_refresh_exempt(request.path())
        {
            warn!(path = request.path(), "Request unauthorized, refreshing token");
            let fresh = self.refresh().await?;
            return self.inner.client.dispatch(request, Some(&fresh)).await;
        }

        Ok(response)
    }

    pub(crate) async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, Error> {
        let response = self.perform(&request).await?;
        self.inner.client.json_body(response).await
    }

    pub(crate) async fn send_unit(&self, request: ApiRequest) -> Result<(), Error> {
        let response = self.perform(&request).await?;
        self.inner.client.expect_success(response).await
    }

    // ========================================================================
    // Resource Operations
    // ========================================================================

    /// Quiz/course category operations.
    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// Course operations.
    pub fn courses(&self) -> Courses<'_> {
        Courses::new(self)
    }

    /// Student operations.
    pub fn students(&self) -> Students<'_> {
        Students::new(self)
    }

    /// Teacher operations.
    pub fn teachers(&self) -> Teachers<'_> {
        Teachers::new(self)
    }

    /// Quiz operations.
    pub fn quizzes(&self) -> Quizzes<'_> {
        Quizzes::new(self)
    }

    /// Quiz question bank operations.
    pub fn question_banks(&self) -> QuestionBanks<'_> {
        QuestionBanks::new(self)
    }

    /// Online (live) quiz operations.
    pub fn online_quizzes(&self) -> OnlineQuizzes<'_> {
        OnlineQuizzes::new(self)
    }

    /// Essay exam operations.
    pub fn essay_exams(&self) -> EssayExams<'_> {
        EssayExams::new(self)
    }

    // ========================================================================
    // Live
    // ========================================================================

    /// Join the waiting room of an online quiz as its host.
    ///
    /// Returns a stream of [`WaitingRoomEvent`](crate::live::WaitingRoomEvent)s
    /// for the given online quiz.
    #[instrument(skip(self), fields(base = %self.base(), %online_quiz))]
    pub async fn join_waiting_room(
        &self,
        online_quiz: &ResourceId,
    ) -> Result<WaitingRoomStream, Error> {
        let token = self.inner.store.access_token();
        WaitingRoomStream::connect(self.base(), online_quiz, token.as_ref()).await
    }
}

/// True for URLs whose 401 responses must not trigger a token refresh:
/// the sign-in endpoints and the refresh endpoint itself.
fn is_refresh_exempt(path: &str) -> bool {
    path.contains(endpoints::SIGN_IN_MARKER) || path.contains(endpoints::AUTH_REFRESH)
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base", self.base())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
