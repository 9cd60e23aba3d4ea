//! In-memory collaborators and helpers for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use company_core::{ChangeEvent, Company, CompanyId, CompanyPatch, NewCompany, TokenService};
use company_store::{CompanyStore, StoreError, StoreResult};
use tower::ServiceExt;

use crate::notify::{NotifyError, Notifier};
use crate::server::build_app;
use crate::state::AppState;

/// Signing key shared by every test ("test\n", base64).
pub const TEST_KEY: &str = "dGVzdAo=";

/// Issue a token signed with [`TEST_KEY`].
pub fn token(roles: &[&str]) -> String {
    TokenService::from_base64(TEST_KEY)
        .unwrap()
        .issue(roles)
        .unwrap()
}

/// Store that keeps companies in a map and enforces unique names.
#[derive(Default)]
pub struct FakeStore {
    companies: Mutex<HashMap<CompanyId, Company>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakeStore {
    pub fn insert(&self, company: Company) {
        self.companies.lock().unwrap().insert(company.id, company);
    }

    pub fn snapshot(&self, id: CompanyId) -> Option<Company> {
        self.companies.lock().unwrap().get(&id).cloned()
    }

    /// Number of store operations invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail with an unclassified error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::CorruptRow("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyStore for FakeStore {
    async fn create(&self, company: &NewCompany) -> StoreResult<CompanyId> {
        self.enter()?;
        let mut companies = self.companies.lock().unwrap();
        if companies.values().any(|c| c.name == company.name) {
            return Err(StoreError::DuplicateName);
        }
        let id = CompanyId::new();
        companies.insert(id, Company::from_new(id, company.clone()));
        Ok(id)
    }

    async fn update(&self, id: CompanyId, patch: &CompanyPatch) -> StoreResult<()> {
        self.enter()?;
        let mut companies = self.companies.lock().unwrap();
        if let Some(name) = &patch.name
            && companies.values().any(|c| c.id != id && &c.name == name)
        {
            return Err(StoreError::DuplicateName);
        }
        let company = companies.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch.apply_to(company);
        Ok(())
    }

    async fn delete(&self, id: CompanyId) -> StoreResult<()> {
        self.enter()?;
        self.companies
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn get(&self, id: CompanyId) -> StoreResult<Company> {
        self.enter()?;
        self.snapshot(id).ok_or(StoreError::NotFound)
    }

    async fn close(&self) {}
}

/// Notifier that records every event it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<ChangeEvent>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, event: ChangeEvent) -> Result<(), NotifyError> {
        if self.failing.load(Ordering::SeqCst) {
            let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
            return Err(NotifyError::Serialize(err));
        }
        self.events.lock().unwrap().push(event.stamped());
        Ok(())
    }
}

/// Application state wired to in-memory collaborators and the real token service.
pub struct TestHarness {
    pub state: AppState,
    pub store: Arc<FakeStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(FakeStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let auth = Arc::new(TokenService::from_base64(TEST_KEY).unwrap());
        let state = AppState::new(store.clone(), auth, notifier.clone());
        Self {
            state,
            store,
            notifier,
        }
    }

    pub fn app(&self) -> Router {
        build_app(self.state.clone())
    }

    /// Send one request through the full middleware stack.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self.app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }
}

/// Build a request with an optional bearer token and raw body.
pub fn request(method: &str, uri: &str, bearer: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
