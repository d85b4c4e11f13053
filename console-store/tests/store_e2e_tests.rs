//! End-to-end tests for the organization store.
//!
//! The store runs against the real organization service and transport,
//! with wiremock standing in for the backend. These cover the management
//! page flows: load tenants, create, edit, delete and bulk delete.

use console_client::{ClientConfig, OrganizationService};
use console_org::{OrgStatus, OrganizationCreateRequest};
use console_store::OrganizationStore;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARENT: &str = "55cb6fcf-e902-445d-ba00-e51a3b7c216f";

/// Test fixture providing a mock backend and a store wired to it.
struct TestFixture {
    /// Mock organization service.
    server: MockServer,
    /// Store under test.
    store: Arc<OrganizationStore>,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_timeout(Duration::from_secs(2)).await
    }

    async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let config = ClientConfig::new(server.uri())
            .with_timeout(timeout)
            .with_parent_org_uuid(PARENT);
        let service = OrganizationService::from_config(&config).expect("service");
        let store = Arc::new(OrganizationStore::new(Arc::new(service)));

        Self { server, store }
    }

    async fn mount_tenants(&self, tenants: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/organization-service/organizations/tenant/{}", PARENT)))
            .respond_with(ResponseTemplate::new(200).set_body_json(tenants))
            .mount(&self.server)
            .await;
    }
}

fn org_json(id: i64, uuid: &str, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "uuid": uuid,
        "orgTypeId": 1,
        "addressTypeId": 1,
        "name": name,
        "description": "d",
        "status": status
    })
}

#[tokio::test]
async fn test_load_tenants_sets_collection_and_total() {
    let fixture = TestFixture::new().await;
    fixture
        .mount_tenants(json!([
            org_json(1, "a", "Alpha", "A"),
            org_json(2, "b", "Beta", "I"),
            org_json(3, "c", "Gamma", "A"),
        ]))
        .await;

    assert!(fixture.store.get_tenants(PARENT).await);

    let state = fixture.store.snapshot();
    let uuids: Vec<_> = state.organizations.iter().map(|o| o.uuid.as_str()).collect();
    assert_eq!(uuids, ["a", "b", "c"]);
    assert_eq!(state.total, 3);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_create_appends_echoed_entity() {
    let fixture = TestFixture::new().await;
    fixture
        .mount_tenants(json!([org_json(1, "existing", "Existing", "A")]))
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/organization-service/organizations/{}", PARENT)))
        .and(body_json(json!({
            "name": "Acme",
            "description": "d",
            "orgTypeId": 1,
            "addressTypeId": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(org_json(7, "abc", "Acme", "A")))
        .expect(1)
        .mount(&fixture.server)
        .await;

    assert!(fixture.store.get_tenants(PARENT).await);
    let request = OrganizationCreateRequest::new("Acme", "d", 1, 1);
    let created = fixture
        .store
        .create_organization(&request, None)
        .await
        .expect("created");

    let state = fixture.store.snapshot();
    assert_eq!(created.uuid, "abc");
    assert_eq!(state.organization.as_ref().map(|o| o.uuid.as_str()), Some("abc"));
    let uuids: Vec<_> = state.organizations.iter().map(|o| o.uuid.as_str()).collect();
    assert_eq!(uuids, ["existing", "abc"]);
}

#[tokio::test]
async fn test_bulk_delete_removes_both() {
    let fixture = TestFixture::new().await;
    fixture
        .mount_tenants(json!([
            org_json(1, "a", "Alpha", "A"),
            org_json(2, "b", "Beta", "A"),
            org_json(3, "c", "Gamma", "A"),
        ]))
        .await;

    Mock::given(method("DELETE"))
        .and(path("/organization-service/organizations/"))
        .and(body_json(json!(["a", "b"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            org_json(1, "a", "Alpha", "D"),
            org_json(2, "b", "Beta", "D"),
        ])))
        .expect(1)
        .mount(&fixture.server)
        .await;

    assert!(fixture.store.get_tenants(PARENT).await);
    let removed = fixture
        .store
        .bulk_delete_organizations(&["a".to_string(), "b".to_string()])
        .await;

    let state = fixture.store.snapshot();
    assert!(removed);
    assert!(!state.contains("a"));
    assert!(!state.contains("b"));
    assert!(state.contains("c"));
}

#[tokio::test]
async fn test_delete_failure_leaves_collection() {
    let fixture = TestFixture::new().await;
    fixture
        .mount_tenants(json!([org_json(1, "a", "Alpha", "A")]))
        .await;

    Mock::given(method("DELETE"))
        .and(path("/organization-service/organizations/a"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Not allowed",
            "code": "FORBIDDEN"
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    assert!(fixture.store.get_tenants(PARENT).await);
    let before = fixture.store.snapshot().organizations;

    assert!(!fixture.store.delete_organization("a").await);

    let state = fixture.store.snapshot();
    assert_eq!(state.organizations, before);
    let err = state.error.expect("error recorded");
    assert_eq!(err.status(), 403);
    assert_eq!(err.code(), Some("FORBIDDEN"));
    assert_eq!(err.to_string(), "Not allowed");
}

#[tokio::test]
async fn test_status_change_puts_merged_entity() {
    let fixture = TestFixture::new().await;
    fixture
        .mount_tenants(json!([org_json(1, "a", "Alpha", "A")]))
        .await;

    Mock::given(method("PUT"))
        .and(path("/organization-service/organizations/a"))
        .and(body_json(json!({
            "name": "Alpha",
            "description": "d",
            "orgTypeId": 1,
            "addressTypeId": 1,
            "phoneNumberPrimary": null,
            "phoneNumberSecondary": null,
            "faxNumber": null,
            "mobileNumberPrimary": null,
            "mobileNumberSecondary": null,
            "emailId": null,
            "website": null,
            "numberOfUser": null,
            "maxConcurrentUser": null,
            "street": null,
            "city": null,
            "countryId": null,
            "stateId": null,
            "stateOther": null,
            "zipCode": null,
            "status": "I"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(1, "a", "Alpha", "I")))
        .expect(1)
        .mount(&fixture.server)
        .await;

    assert!(fixture.store.get_tenants(PARENT).await);
    let updated = fixture
        .store
        .update_organization_status("a", OrgStatus::Inactive)
        .await
        .expect("updated");

    assert_eq!(updated.status, OrgStatus::Inactive);
    assert_eq!(fixture.store.snapshot().organizations[0].status, OrgStatus::Inactive);
}

#[tokio::test]
async fn test_loading_spans_the_whole_request() {
    let fixture = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path(format!("/organization-service/organizations/tenant/{}", PARENT)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([org_json(1, "a", "Alpha", "A")]))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let mut updates = fixture.store.subscribe();
    let store = fixture.store.clone();
    let task = tokio::spawn(async move { store.get_tenants(PARENT).await });

    updates
        .wait_for(|state| state.loading)
        .await
        .expect("store alive");
    assert!(fixture.store.snapshot().organizations.is_empty());
    assert!(fixture.store.is_loading());

    assert!(task.await.expect("task"));

    let state = fixture.store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.pending(), 0);
    assert_eq!(state.total, 1);
}

#[tokio::test]
async fn test_loading_stays_on_while_any_action_is_pending() {
    let fixture = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/organization-service/organizations/uuid/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_json(1, "slow", "Slow", "A"))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&fixture.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/organization-service/organizations/uuid/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_json(2, "fast", "Fast", "A")))
        .mount(&fixture.server)
        .await;

    let slow_store = fixture.store.clone();
    let slow = tokio::spawn(async move { slow_store.get_organization_by_uuid("slow").await });

    let mut updates = fixture.store.subscribe();
    updates
        .wait_for(|state| state.pending() == 1)
        .await
        .expect("store alive");

    assert!(fixture.store.get_organization_by_uuid("fast").await.is_some());
    assert!(fixture.store.is_loading());

    assert!(slow.await.expect("task").is_some());
    assert!(!fixture.store.is_loading());
}

#[tokio::test]
async fn test_timeout_recorded_as_network_error() {
    let fixture = TestFixture::with_timeout(Duration::from_millis(100)).await;

    Mock::given(method("GET"))
        .and(path("/organization-service/organizations/uuid/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_json(1, "a", "Alpha", "A"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&fixture.server)
        .await;

    assert!(fixture.store.get_organization_by_uuid("a").await.is_none());

    let state = fixture.store.snapshot();
    let err = state.error.expect("error recorded");
    assert_eq!(err.status(), 0);
    assert_eq!(err.code(), Some("NETWORK_ERROR"));
    assert!(!state.loading);
    assert!(state.organization.is_none());
}
