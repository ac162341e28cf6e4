//! `/employees` resource: list, create, get-one, replace, delete.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};
use platform_api::{ApiError, ApiResult, CollectionModel, EntityModel, Links};
use products_payroll::{Employee, PayrollError, StoredEmployee};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::http::AppState;

const COLLECTION_PATH: &str = "/employees";
const COLLECTION_REL: &str = "employees";
const EMBEDDED_REL: &str = "employeeList";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(COLLECTION_PATH, get(all).post(create))
        .route("/employees/{id}", get(one).put(replace).delete(remove))
}

/// Inbound create/replace body. Any `id` field is ignored.
#[derive(Debug, Deserialize)]
struct EmployeePayload {
    name: String,
    role: String,
}

impl EmployeePayload {
    /// Only a JSON object is an employee; serde alone would also take `[name, role]`.
    fn from_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Self> {
        let Json(value) = body?;
        if !value.is_object() {
            return Err(ApiError::InvalidInput(
                "employee payload must be a JSON object".into(),
            ));
        }
        serde_json::from_value(value).map_err(|err| ApiError::InvalidInput(err.to_string()))
    }
}

struct EmployeeLinks<'a> {
    base: &'a str,
}

impl<'a> EmployeeLinks<'a> {
    fn new(state: &'a AppState) -> Self {
        Self {
            base: &state.config.public_base_url,
        }
    }

    fn collection(&self) -> String {
        format!("{}{}", self.base, COLLECTION_PATH)
    }

    fn item(&self, id: i64) -> String {
        format!("{}{}/{}", self.base, COLLECTION_PATH, id)
    }

    fn wrap(&self, employee: StoredEmployee) -> EntityModel<StoredEmployee> {
        let links = Links::new()
            .with_self(self.item(employee.id))
            .with_rel(COLLECTION_REL, self.collection());
        EntityModel::new(employee, links)
    }
}

#[instrument(name = "employees.all", skip_all)]
async fn all(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionModel<EntityModel<StoredEmployee>>>> {
    let links = EmployeeLinks::new(&state);
    let items = state
        .store
        .find_all()
        .await?
        .into_iter()
        .map(|employee| links.wrap(employee))
        .collect();
    Ok(Json(CollectionModel::new(
        EMBEDDED_REL,
        items,
        Links::new().with_self(links.collection()),
    )))
}

#[instrument(name = "employees.create", skip_all)]
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<StoredEmployee>> {
    let payload = EmployeePayload::from_body(payload)?;
    let saved = state
        .store
        .save(Employee::new(payload.name, payload.role))
        .await?;
    info!(id = saved.id, "employee created");
    Ok(Json(saved))
}

#[instrument(name = "employees.one", skip(state))]
async fn one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EntityModel<StoredEmployee>>> {
    let employee = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(PayrollError::EmployeeNotFound(id))?;
    Ok(Json(EmployeeLinks::new(&state).wrap(employee)))
}

/// Overwrites an existing employee, or saves the payload as a new one. In the
/// second case the store picks the id, so it can differ from `id`.
#[instrument(name = "employees.replace", skip(state, payload))]
async fn replace(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<StoredEmployee>> {
    let payload = EmployeePayload::from_body(payload)?;
    let candidate = match state.store.find_by_id(id).await? {
        Some(existing) => Employee {
            id: Some(existing.id),
            name: payload.name,
            role: payload.role,
        },
        None => Employee::new(payload.name, payload.role),
    };
    let saved = state.store.save(candidate).await?;
    if saved.id != id {
        info!(requested = id, assigned = saved.id, "replace created a new employee");
    }
    Ok(Json(saved))
}

#[instrument(name = "employees.delete", skip(state))]
async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
