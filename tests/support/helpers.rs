// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration as StdDuration;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use car_registry::application::{
    commands::users::SignInCommand,
    dto::Principal,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use car_registry::domain::{
    car::{CarId, CarRepository},
    user::{Login, UserRepository},
};
use car_registry::infrastructure::security::token::JwtTokenManager;
use car_registry::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::builders::{principal_for, sample_user};
use super::mocks::{InMemoryStore, MutableClock, StrictPasswordHasher};

pub const TEST_SECRET: &str = "secret";
pub const TEST_TTL_MINUTES: i64 = 1440;

/// インメモリのストアと本物の JWT マネージャで組み立てたアプリケーション
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<MutableClock>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let clock = Arc::new(MutableClock::default());

        let user_repo: Arc<dyn UserRepository> = store.clone();
        let car_repo: Arc<dyn CarRepository> = store.clone();
        let dyn_clock: Arc<dyn Clock> = clock.clone();
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(StrictPasswordHasher);
        let token_manager: Arc<dyn TokenManager> = Arc::new(JwtTokenManager::new(
            TEST_SECRET,
            chrono::Duration::minutes(TEST_TTL_MINUTES),
            Arc::clone(&dyn_clock),
        ));

        let services = Arc::new(ApplicationServices::new(
            user_repo,
            car_repo,
            password_hasher,
            token_manager,
            dyn_clock,
        ));

        Self {
            services,
            store,
            clock,
        }
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState {
            services: Arc::clone(&self.services),
        })
    }

    /// サインアップしてからサインインし、トークンを返す
    pub async fn register_and_sign_in(&self, login: &str) -> String {
        self.services
            .user_commands
            .save(sample_user(login))
            .await
            .expect("sign-up failed");

        self.services
            .user_commands
            .sign_in(SignInCommand {
                login: Some(login.into()),
                password: Some("abcdef".into()),
            })
            .await
            .expect("sign-in failed")
            .token
    }

    pub async fn principal(&self, login: &str) -> Principal {
        let login = Login::new(login).unwrap();
        let user = UserRepository::find_by_login(self.store.as_ref(), &login)
            .await
            .unwrap()
            .expect("user not stored");
        principal_for(user)
    }

    /// 使用回数フックは非同期で走るため、期待値に達するまでポーリングする
    pub async fn wait_for_usage(&self, car_id: i64, expected: i64) -> bool {
        for _ in 0..50 {
            let current = self
                .store
                .car(CarId(car_id))
                .map(|car| car.usage_counter)
                .unwrap_or_default();
            if current == expected {
                return true;
            }
            tokio::time::sleep(StdDuration::from_millis(10)).await;
        }
        false
    }

    /// 所有者の合計使用回数は車のカウンタの後に更新されるので、別途待つ
    pub async fn wait_for_total(&self, login: &str, expected: i64) -> bool {
        let login = Login::new(login).unwrap();
        for _ in 0..50 {
            let current = UserRepository::find_by_login(self.store.as_ref(), &login)
                .await
                .unwrap()
                .map(|user| user.total_usage_counter)
                .unwrap_or_default();
            if current == expected {
                return true;
            }
            tokio::time::sleep(StdDuration::from_millis(10)).await;
        }
        false
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// リクエストを送り、ステータスと JSON ボディ（空なら Null）を返す
pub async fn send(
    router: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(router, request).await
}

pub async fn send_request(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got: {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, json)
}

/// エラーレスポンスが `{message, errorCode}` 形式であることを確認する
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["message"], message, "unexpected message: {body}");
    assert_eq!(body["errorCode"], expected.as_u16(), "unexpected errorCode: {body}");
}
