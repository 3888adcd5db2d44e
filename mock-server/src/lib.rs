use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

pub const API_KEY_HEADER: &str = "user-key";

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

/// Records per endpoint name (`"games"`, `"pulses"`, ...).
pub type Db = Arc<HashMap<String, Vec<Value>>>;

#[derive(Serialize)]
pub struct CountBody {
    pub count: usize,
}

/// Router seeded with the default fixtures.
pub fn app() -> Router {
    app_with(fixtures())
}

pub fn app_with(records: HashMap<String, Vec<Value>>) -> Router {
    let db: Db = Arc::new(records);
    Router::new()
        .route("/{endpoint}/", get(index))
        .route("/{endpoint}/count", get(count))
        .route("/{endpoint}/meta", get(meta))
        .route("/{endpoint}/{ids}", get(by_ids))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Default data set: a few games and genres plus the pulse list vector.
pub fn fixtures() -> HashMap<String, Vec<Value>> {
    let pulses: Vec<Value> = serde_json::from_str(include_str!("../../test-vectors/pulse_list.json"))
        .expect("pulse_list.json is valid JSON");
    let games = vec![
        json!({
            "id": 1942,
            "name": "The Witcher 3: Wild Hunt",
            "slug": "the-witcher-3-wild-hunt",
            "rating": 93.4,
            "popularity": 81.2,
            "genres": [12, 31],
            "collection": 36
        }),
        json!({
            "id": 472,
            "name": "The Elder Scrolls V: Skyrim",
            "slug": "the-elder-scrolls-v-skyrim",
            "rating": 90.1,
            "popularity": 77.5,
            "genres": [12]
        }),
        json!({
            "id": 1020,
            "name": "Grand Theft Auto V",
            "slug": "grand-theft-auto-v",
            "rating": 89.7,
            "popularity": 92.0,
            "genres": [5, 31]
        }),
    ];
    let genres = vec![
        json!({"id": 5, "name": "Shooter", "slug": "shooter"}),
        json!({"id": 12, "name": "Role-playing (RPG)", "slug": "role-playing-rpg"}),
        json!({"id": 31, "name": "Adventure", "slug": "adventure"}),
    ];
    HashMap::from([
        ("games".to_string(), games),
        ("genres".to_string(), genres),
        ("pulses".to_string(), pulses),
        ("themes".to_string(), Vec::new()),
    ])
}

async fn index(
    State(db): State<Db>,
    Path(endpoint): Path<String>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    authorize(&headers)?;
    let params = Params::parse(&pairs)?;
    let records = collection(&db, &endpoint)?;
    let matched: Vec<&Value> = records.iter().filter(|r| params.matches(r)).collect();
    Ok(Json(params.page(matched)))
}

async fn count(
    State(db): State<Db>,
    Path(endpoint): Path<String>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CountBody>, StatusCode> {
    authorize(&headers)?;
    let params = Params::parse(&pairs)?;
    let records = collection(&db, &endpoint)?;
    let count = records.iter().filter(|r| params.matches(r)).count();
    Ok(Json(CountBody { count }))
}

async fn meta(
    State(db): State<Db>,
    Path(endpoint): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<String>>, StatusCode> {
    authorize(&headers)?;
    let records = collection(&db, &endpoint)?;
    let mut fields: Vec<String> = records
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|obj| obj.keys().cloned())
        .collect();
    fields.sort();
    fields.dedup();
    Ok(Json(fields))
}

async fn by_ids(
    State(db): State<Db>,
    Path((endpoint, ids)): Path<(String, String)>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Value>>, StatusCode> {
    authorize(&headers)?;
    let params = Params::parse(&pairs)?;
    let records = collection(&db, &endpoint)?;
    let ids: Vec<i64> = ids
        .split(',')
        .map(|id| id.parse::<i64>().map_err(|_| StatusCode::BAD_REQUEST))
        .collect::<Result<_, _>>()?;
    let found: Vec<&Value> = ids
        .iter()
        .filter_map(|id| records.iter().find(|r| r["id"].as_i64() == Some(*id)))
        .collect();
    Ok(Json(params.page(found)))
}

fn authorize(headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get(API_KEY_HEADER) {
        Some(key) if !key.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn collection<'a>(db: &'a Db, endpoint: &str) -> Result<&'a [Value], StatusCode> {
    db.get(endpoint).map(Vec::as_slice).ok_or(StatusCode::NOT_FOUND)
}

/// `filter[<field>][<op>]=<value>`
struct FilterClause {
    field: String,
    op: String,
    value: String,
}

impl FilterClause {
    fn parse(key: &str, value: &str) -> Option<Self> {
        let inner = key.strip_prefix("filter[")?.strip_suffix(']')?;
        let (field, op) = inner.split_once("][")?;
        Some(Self {
            field: field.to_string(),
            op: op.to_string(),
            value: value.to_string(),
        })
    }

    fn matches(&self, record: &Value) -> bool {
        let Some(actual) = record.get(&self.field) else {
            return false;
        };
        if self.op == "prefix" {
            return actual.as_str().is_some_and(|s| s.starts_with(&self.value));
        }
        let ordering = match (actual.as_f64(), self.value.parse::<f64>()) {
            (Some(a), Ok(b)) => a.partial_cmp(&b),
            _ => actual.as_str().map(|s| s.cmp(self.value.as_str())),
        };
        let Some(ordering) = ordering else {
            return false;
        };
        match self.op.as_str() {
            "eq" => ordering == Ordering::Equal,
            "not_eq" => ordering != Ordering::Equal,
            "gt" => ordering == Ordering::Greater,
            "gte" => ordering != Ordering::Less,
            "lt" => ordering == Ordering::Less,
            "lte" => ordering != Ordering::Greater,
            _ => false,
        }
    }
}

/// Query parameters understood by the fixture server.
struct Params {
    fields: Option<Vec<String>>,
    filters: Vec<FilterClause>,
    search: Option<String>,
    limit: usize,
    offset: usize,
}

impl Params {
    fn parse(pairs: &[(String, String)]) -> Result<Self, StatusCode> {
        let mut params = Params {
            fields: None,
            filters: Vec::new(),
            search: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        };
        for (key, value) in pairs {
            match key.as_str() {
                "fields" if value != "*" => {
                    params.fields = Some(value.split(',').map(str::to_string).collect());
                }
                "fields" | "order" => {}
                "search" => params.search = Some(value.to_lowercase()),
                "limit" => {
                    params.limit = value.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
                    if params.limit == 0 || params.limit > MAX_LIMIT {
                        return Err(StatusCode::BAD_REQUEST);
                    }
                }
                "offset" => params.offset = value.parse().map_err(|_| StatusCode::BAD_REQUEST)?,
                _ => {
                    let clause = FilterClause::parse(key, value).ok_or(StatusCode::BAD_REQUEST)?;
                    params.filters.push(clause);
                }
            }
        }
        Ok(params)
    }

    fn matches(&self, record: &Value) -> bool {
        if let Some(term) = &self.search {
            let text = ["name", "title"]
                .iter()
                .filter_map(|k| record.get(*k).and_then(Value::as_str))
                .any(|s| s.to_lowercase().contains(term.as_str()));
            if !text {
                return false;
            }
        }
        self.filters.iter().all(|f| f.matches(record))
    }

    /// Apply offset, limit and field projection.
    fn page(&self, records: Vec<&Value>) -> Vec<Value> {
        records
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .map(|r| self.project(r))
            .collect()
    }

    fn project(&self, record: &Value) -> Value {
        let (Some(fields), Some(obj)) = (&self.fields, record.as_object()) else {
            return record.clone();
        };
        let keep: Map<String, Value> = obj
            .iter()
            .filter(|(k, _)| {
                k.as_str() == "id" || fields.iter().any(|f| f.split('.').next() == Some(k.as_str()))
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Value::Object(keep)
    }
}
