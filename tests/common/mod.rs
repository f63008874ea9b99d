#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

use frota_admin::{ApiClient, ClientConfig};

/// Token de dos partes con `{"sub":1}`
pub const TOKEN: &str = "eyJzdWIiOjF9.sig";
pub const EMAIL: &str = "ana@frota.com";
pub const SENHA: &str = "segredo1";

const COLLECTIONS: [&str; 5] = ["usuarios", "veiculos", "manutencoes", "planos", "veiculos-planos"];

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct Store {
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<(Method, String), (StatusCode, String)>,
    requests: Vec<RecordedRequest>,
    next_id: i64,
}

type Shared = Arc<Mutex<Store>>;

/// Backend falso en 127.0.0.1 con almacenamiento en memoria
pub struct FakeBackend {
    pub base_url: String,
    store: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let store: Shared = Arc::new(Mutex::new(Store { next_id: 100, ..Store::default() }));
        let app = Router::new().fallback(handle).with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{addr}"), store }
    }

    /// Cargar registros en una colección (`"veiculos"`, `"planos"`...)
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut store = self.store.lock().unwrap();
        store.collections.entry(collection.to_string()).or_default().extend(records);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        let store = self.store.lock().unwrap();
        store.collections.get(collection).cloned().unwrap_or_default()
    }

    /// Responder siempre con este status y cuerpo crudo a `method path`
    pub fn fail(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        let mut store = self.store.lock().unwrap();
        store.failures.insert((method, path.to_string()), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().last().cloned()
    }

    pub fn clear_requests(&self) {
        self.store.lock().unwrap().requests.clear();
    }

    pub fn config(&self) -> ClientConfig {
        test_config(&self.base_url)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }

    /// Cliente con la cookie de sesión ya guardada
    pub fn logged_client(&self) -> ApiClient {
        let api = self.client();
        api.session().set_token(TOKEN);
        api
    }
}

/// Retardos cortos para que los tests esperen poco
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        success_delay_ms: 20,
        redirect_delay_ms: 20,
        ..ClientConfig::default()
    }
}

/// Dirección donde no escucha nadie
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok().map(|v| v.into_owned()))
}

fn detail(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "detail": text }))).into_response()
}

async fn handle(
    State(store): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let query = uri.query().map(str::to_string);
    let body: Option<Value> = serde_json::from_slice(&body).ok();

    let mut store = store.lock().unwrap();
    store.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        authorization: headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()).map(str::to_string),
        cookie: headers.get(COOKIE).and_then(|v| v.to_str().ok()).map(str::to_string),
        body: body.clone(),
    });

    if let Some((status, raw)) = store.failures.get(&(method.clone(), path.clone())) {
        return (*status, raw.clone()).into_response();
    }

    match (method.as_str(), path.as_str()) {
        ("POST", "/auth/login") => {
            let body = body.unwrap_or_default();
            if body["email"] == EMAIL && body["senha"] == SENHA {
                let cookie = format!("access_token={TOKEN}; HttpOnly; Path=/");
                return (
                    [(SET_COOKIE, cookie)],
                    Json(json!({ "msg": "ok", "redirect": "/ui/dashboard" })),
                )
                    .into_response();
            }
            return detail(StatusCode::UNAUTHORIZED, "credenciais inválidas");
        }
        ("POST", "/auth/registro") => {
            let body = body.unwrap_or_default();
            let taken = store
                .collections
                .get("usuarios")
                .map_or(false, |users| users.iter().any(|u| u["email"] == body["email"]));
            if taken {
                return detail(StatusCode::BAD_REQUEST, "E-mail já cadastrado");
            }
            store.next_id += 1;
            let user = json!({ "id": store.next_id, "nome": body["nome"], "email": body["email"] });
            store.collections.entry("usuarios".to_string()).or_default().push(user.clone());
            return (StatusCode::CREATED, Json(user)).into_response();
        }
        _ => {}
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let collection = match segments.first() {
        Some(name) if COLLECTIONS.contains(name) => name.to_string(),
        _ => return detail(StatusCode::NOT_FOUND, "Not Found"),
    };
    let id = segments.get(1).and_then(|s| s.parse::<i64>().ok());

    match (method.as_str(), id) {
        ("GET", None) => {
            let placa = query_param(query.as_deref(), "placa");
            let records: Vec<Value> = store
                .collections
                .get(&collection)
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .filter(|r| match &placa {
                    Some(placa) => r["placa"].as_str().map_or(false, |p| p.contains(placa.as_str())),
                    None => true,
                })
                .collect();
            Json(Value::Array(records)).into_response()
        }
        ("POST", None) => {
            store.next_id += 1;
            let mut record = body.unwrap_or_else(|| json!({}));
            record["id"] = json!(store.next_id);
            store.collections.entry(collection).or_default().push(record.clone());
            (StatusCode::CREATED, Json(record)).into_response()
        }
        (_, Some(id)) => {
            let records = store.collections.entry(collection).or_default();
            let Some(index) = records.iter().position(|r| r["id"] == id) else {
                return detail(StatusCode::NOT_FOUND, "Registro não encontrado");
            };
            match method.as_str() {
                "GET" => Json(records[index].clone()).into_response(),
                "PUT" => {
                    if let (Some(target), Some(Value::Object(changes))) = (records[index].as_object_mut(), body) {
                        target.extend(changes);
                    }
                    Json(records[index].clone()).into_response()
                }
                "DELETE" => {
                    records.remove(index);
                    StatusCode::NO_CONTENT.into_response()
                }
                _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

pub fn veiculo(id: i64, placa: &str) -> Value {
    json!({ "id": id, "placa": placa, "marca": "Fiat", "modelo": "Uno", "ano": 2015, "km_atual": 85000 })
}

pub fn plano(id: i64, nome: &str) -> Value {
    json!({ "id": id, "nome": nome, "descricao": null, "km_intervalo": 10000, "dias_intervalo": 180 })
}
