//! CRUD operations shared by every entity.
//!
//! Writes run inside their own transaction: on success it is committed, on failure it
//! is rolled back and the database error is surfaced as a [`DataValidationError`].
//! Reads go straight to the connection and return plain `DbErr`s.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};

use crate::error::DataValidationError;

pub type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

/// Insert the row and commit.
pub async fn create<A>(
    db: &DatabaseConnection,
    model: A,
) -> Result<ModelOf<A>, DataValidationError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
{
    let txn = begin(db).await?;
    let result = model.insert(&txn).await;
    finish(txn, result).await
}

/// Commit pending changes of an existing row.
pub async fn update<A>(
    db: &DatabaseConnection,
    model: A,
) -> Result<ModelOf<A>, DataValidationError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    ModelOf<A>: IntoActiveModel<A>,
{
    let txn = begin(db).await?;
    let result = model.update(&txn).await;
    finish(txn, result).await
}

/// Remove the row and commit.
pub async fn delete<A>(db: &DatabaseConnection, model: A) -> Result<(), DataValidationError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
{
    let txn = begin(db).await?;
    let result = model.delete(&txn).await.map(|_| ());
    finish(txn, result).await
}

pub async fn all<E: EntityTrait>(db: &DatabaseConnection) -> Result<Vec<E::Model>, DbErr> {
    E::find().all(db).await
}

/// Look a row up by primary key; `None` when absent.
pub async fn find<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id).one(db).await
}

pub async fn begin(db: &DatabaseConnection) -> Result<DatabaseTransaction, DataValidationError> {
    Ok(db.begin().await?)
}

/// Commit `txn` if `result` is `Ok`, roll it back otherwise.
pub async fn finish<T>(
    txn: DatabaseTransaction,
    result: Result<T, DbErr>,
) -> Result<T, DataValidationError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            tracing::error!(error = %err, "write failed, rolling back");
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};

    use super::*;
    use crate::{
        db,
        entity::{
            Items, Shopcarts,
            items::ActiveModel as ItemActive,
            shopcarts::ActiveModel as ShopcartActive,
        },
    };

    async fn setup() -> DatabaseConnection {
        db::init("sqlite::memory:").await.expect("in-memory database")
    }

    fn cart(customer_id: i32) -> ShopcartActive {
        ShopcartActive {
            id: NotSet,
            customer_id: Set(customer_id),
            time_atc: Set(Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()),
        }
    }

    fn item(shopcart_id: i32, name: &str) -> ItemActive {
        ItemActive {
            id: NotSet,
            shopcart_id: Set(shopcart_id),
            name: Set(Some(name.to_string())),
            description: Set("fresh".to_string()),
            quantity: Set(2),
            price: Set(3.5),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_find_returns_same_row() {
        let db = setup().await;

        let created = create(&db, cart(7)).await.unwrap();
        assert!(created.id > 0);

        let found = find::<Shopcarts>(&db, created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn find_missing_row_is_none() {
        let db = setup().await;
        assert_eq!(find::<Shopcarts>(&db, 0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_commits_changes() {
        let db = setup().await;
        let created = create(&db, cart(7)).await.unwrap();

        let mut active = created.clone().into_active_model();
        active.customer_id = Set(99);
        let updated = update(&db, active).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.customer_id, 99);
        let found = find::<Shopcarts>(&db, created.id).await.unwrap().unwrap();
        assert_eq!(found.customer_id, 99);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = setup().await;
        let created = create(&db, cart(1)).await.unwrap();

        delete(&db, created.clone().into_active_model()).await.unwrap();
        assert_eq!(find::<Shopcarts>(&db, created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn all_lists_every_row() {
        let db = setup().await;
        for customer in 1..=3 {
            create(&db, cart(customer)).await.unwrap();
        }
        assert_eq!(all::<Shopcarts>(&db).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_and_reports_validation_error() {
        let db = setup().await;
        let parent = create(&db, cart(1)).await.unwrap();
        let first = create(&db, item(parent.id, "Milk")).await.unwrap();

        let mut duplicate = item(parent.id, "Bread");
        duplicate.id = Set(first.id);
        let err = create(&db, duplicate).await.unwrap_err();
        assert!(!err.message.is_empty());

        // The connection is usable again after the rollback.
        create(&db, item(parent.id, "Eggs")).await.unwrap();
        let names: Vec<_> = all::<Items>(&db)
            .await
            .unwrap()
            .into_iter()
            .filter_map(|i| i.name)
            .collect();
        assert_eq!(names.len(), 2);
        assert!(!names.contains(&"Bread".to_string()));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_validation_error() {
        let db = setup().await;
        let ghost = ShopcartActive {
            id: Set(404),
            customer_id: Set(1),
            time_atc: NotSet,
        };
        assert!(update(&db, ghost).await.is_err());
    }
}
