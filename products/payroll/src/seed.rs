//! One-shot loading of the bundled employee roster.
//!
//! The roster is a YAML mapping with a single `employees` key holding a
//! sequence of `{name, role}` rows. Rows are saved in file order. Running the
//! seeder twice against the same store duplicates every row.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    Employee, EmployeeStore, PayrollResult,
    resources::{self, INITIAL_EMPLOYEES},
};

#[derive(Debug, Error)]
pub enum SeedLoadError {
    #[error("seed resource {0} is not bundled")]
    Missing(String),
    #[error("seed resource {resource} is malformed: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Roster {
    employees: Vec<RosterRow>,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    role: String,
}

fn parse_roster(resource: &str, raw: &str) -> Result<Vec<Employee>, SeedLoadError> {
    let roster: Roster = serde_yaml::from_str(raw).map_err(|source| SeedLoadError::Malformed {
        resource: resource.to_string(),
        source,
    })?;
    Ok(roster
        .employees
        .into_iter()
        .map(|row| Employee::new(row.name, row.role))
        .collect())
}

pub struct Seeder {
    store: Arc<dyn EmployeeStore>,
}

impl Seeder {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Seeds from `initial_employees.yaml`.
    pub async fn seed_initial(&self) -> PayrollResult<usize> {
        self.seed_resource(INITIAL_EMPLOYEES).await
    }

    pub async fn seed_resource(&self, name: &str) -> PayrollResult<usize> {
        let raw =
            resources::bundled(name).ok_or_else(|| SeedLoadError::Missing(name.to_string()))?;
        self.seed_from_str(name, raw).await
    }

    /// The whole document is parsed before the first save.
    #[instrument(name = "seed.employees", skip(self, raw))]
    pub async fn seed_from_str(&self, resource: &str, raw: &str) -> PayrollResult<usize> {
        let employees = parse_roster(resource, raw)?;
        let total = employees.len();
        for employee in employees {
            self.store.save(employee).await?;
        }
        info!(count = total, "employees seeded");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PayrollError, SeaOrmEmployeeStore, testing::memory_store};

    async fn seeder() -> (Seeder, Arc<SeaOrmEmployeeStore>) {
        let store = Arc::new(memory_store().await);
        (Seeder::new(store.clone()), store)
    }

    #[tokio::test]
    async fn bundled_roster_is_saved_in_file_order() {
        let (seeder, store) = seeder().await;
        assert_eq!(seeder.seed_initial().await.unwrap(), 2);

        let all = store.find_all().await.unwrap();
        let rows: Vec<_> = all
            .iter()
            .map(|e| (e.name.as_str(), e.role.as_str()))
            .collect();
        assert_eq!(
            rows,
            [("Bilbo Baggins", "burglar"), ("Frodo Baggins", "ring bearer")]
        );
        assert_ne!(all[0].id, all[1].id);
    }

    #[tokio::test]
    async fn reseeding_duplicates_rows() {
        let (seeder, store) = seeder().await;
        seeder.seed_initial().await.unwrap();
        seeder.seed_initial().await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn empty_roster_saves_nothing() {
        let (seeder, store) = seeder().await;
        assert_eq!(seeder.seed_from_str("inline", "employees: []").await.unwrap(), 0);
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_resource_is_a_load_failure() {
        let (seeder, _) = seeder().await;
        let err = seeder.seed_resource("missing.yaml").await.unwrap_err();
        assert!(matches!(
            err,
            PayrollError::SeedLoad(SeedLoadError::Missing(ref name)) if name == "missing.yaml"
        ));
    }

    #[tokio::test]
    async fn malformed_documents_save_nothing() {
        let (seeder, store) = seeder().await;
        let cases = [
            "staff:\n  - name: Sam\n    role: gardener\n",
            "employees: Sam\n",
            "employees:\n  - name: Sam\n",
            "employees: [",
        ];
        for raw in cases {
            let err = seeder.seed_from_str("inline", raw).await.unwrap_err();
            assert!(
                matches!(err, PayrollError::SeedLoad(SeedLoadError::Malformed { .. })),
                "{raw:?} should be rejected"
            );
        }
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
