use async_trait::async_trait;
use entity::employee;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use tracing::debug;

use crate::PayrollResult;

/// An employee as handed to the store; `id` is `None` until first saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            role: role.into(),
        }
    }
}

impl From<employee::Model> for Employee {
    fn from(value: employee::Model) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            role: value.role,
        }
    }
}

/// Persistence for employee records.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts when `id` is absent, otherwise overwrites that row.
    async fn save(&self, employee: Employee) -> PayrollResult<employee::Model>;
    async fn find_by_id(&self, id: i64) -> PayrollResult<Option<employee::Model>>;
    /// All employees in ascending id order.
    async fn find_all(&self) -> PayrollResult<Vec<employee::Model>>;
    /// No-op when `id` does not exist.
    async fn delete_by_id(&self, id: i64) -> PayrollResult<()>;
}

#[derive(Clone, Debug)]
pub struct SeaOrmEmployeeStore {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn insert(&self, name: String, role: String) -> PayrollResult<employee::Model> {
        let model = employee::ActiveModel {
            id: NotSet,
            name: Set(name),
            role: Set(role),
        }
        .insert(&self.db)
        .await?;
        debug!(id = model.id, "employee inserted");
        Ok(model)
    }
}

#[async_trait]
impl EmployeeStore for SeaOrmEmployeeStore {
    async fn save(&self, employee: Employee) -> PayrollResult<employee::Model> {
        let Employee { id, name, role } = employee;
        let Some(id) = id else {
            return self.insert(name, role).await;
        };
        let active = employee::ActiveModel {
            id: Unchanged(id),
            name: Set(name.clone()),
            role: Set(role.clone()),
        };
        match active.update(&self.db).await {
            Ok(model) => Ok(model),
            // the row vanished between lookup and save; fall back to a fresh insert
            Err(DbErr::RecordNotUpdated) => self.insert(name, role).await,
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> PayrollResult<Option<employee::Model>> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn find_all(&self) -> PayrollResult<Vec<employee::Model>> {
        Ok(employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn delete_by_id(&self, id: i64) -> PayrollResult<()> {
        let result = employee::Entity::delete_by_id(id).exec(&self.db).await?;
        debug!(id, rows_affected = result.rows_affected, "employee delete");
        Ok(())
    }
}
