use async_trait::async_trait;
use reviewer::configuration::get_configuration;
use reviewer::db::ReviewRepository;
use reviewer::models;
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ALICE_TOKEN: &str = "token-alice";
pub const BOB_TOKEN: &str = "token-bob";

pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryRepository>,
    // dropping the mock server would shut it down mid-test
    #[allow(dead_code)]
    pub auth_server: MockServer,
}

/// Spawns the application on a random port, backed by an in-memory
/// repository and a mock auth service that knows two actors.
pub async fn spawn_app() -> TestApp {
    let auth_server = MockServer::start().await;
    for (token, id) in [(ALICE_TOKEN, "alice"), (BOB_TOKEN, "bob")] {
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_payload(id)))
            .mount(&auth_server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&auth_server)
        .await;

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.auth_url = format!("{}/me", auth_server.uri());

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let repository = Arc::new(InMemoryRepository::new());
    let server = reviewer::startup::run_with_repository(
        listener,
        repository.clone() as Arc<dyn ReviewRepository>,
        configuration,
    )
    .await
    .expect("Failed to start test server.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        repository,
        auth_server,
    }
}

fn auth_payload(id: &str) -> serde_json::Value {
    serde_json::json!({
        "user": {
            "_id": id,
            "first_name": "Test",
            "last_name": "User",
            "email": format!("{}@example.com", id),
            "email_confirmed": true,
        }
    })
}

/// Client with a cookie jar and no implicit redirects, so flash cookies and
/// `Location` headers stay observable.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("failed to build http client")
}

pub fn user(id: &str) -> models::User {
    models::User {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{}@example.com", id),
        email_confirmed: true,
    }
}

/// Repository over a plain map, enough to drive the lifecycle rules and the
/// HTTP flows without postgres.
pub struct InMemoryRepository {
    reviews: Mutex<HashMap<i32, models::Review>>,
    next_id: AtomicI32,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryRepository {
    async fn fetch(&self, id: i32) -> Result<Option<models::Review>, String> {
        Ok(self.reviews.lock().unwrap().get(&id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<models::Review>, String> {
        Ok(self.reviews.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, mut review: models::Review) -> Result<models::Review, String> {
        review.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.reviews
            .lock()
            .unwrap()
            .insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, review: models::Review) -> Result<models::Review, String> {
        let mut reviews = self.reviews.lock().unwrap();
        match reviews.get_mut(&review.id) {
            Some(slot) => {
                *slot = review.clone();
                Ok(review)
            }
            None => Err("review does not exist".to_string()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        Ok(self.reviews.lock().unwrap().remove(&id).is_some())
    }
}
