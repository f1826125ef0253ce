use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;

use models::accommodation;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccommodationInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}

/// Admin listing, ordered by name.
pub async fn list_accommodations(db: &DatabaseConnection) -> Result<Vec<accommodation::Model>, ServiceError> {
    Ok(accommodation::Entity::find()
        .order_by_asc(accommodation::Column::Name)
        .all(db)
        .await?)
}

pub async fn get_accommodation(db: &DatabaseConnection, id: i32) -> Result<accommodation::Model, ServiceError> {
    accommodation::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Accommodation"))
}

pub async fn create_accommodation(
    db: &DatabaseConnection,
    input: AccommodationInput,
) -> Result<accommodation::Model, ServiceError> {
    let am = accommodation::ActiveModel {
        name: Set(input.name),
        address: Set(input.address),
        capacity: Set(input.capacity),
        notes: Set(input.notes),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Partial merge: only supplied fields are written.
pub async fn update_accommodation(
    db: &DatabaseConnection,
    id: i32,
    input: AccommodationInput,
) -> Result<accommodation::Model, ServiceError> {
    let found = accommodation::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("Accommodation"))?;
    let mut am: accommodation::ActiveModel = found.clone().into();
    if let Some(v) = input.name {
        am.name = Set(Some(v));
    }
    if let Some(v) = input.address {
        am.address = Set(Some(v));
    }
    if let Some(v) = input.capacity {
        am.capacity = Set(Some(v));
    }
    if let Some(v) = input.notes {
        am.notes = Set(Some(v));
    }
    if !am.is_changed() {
        return Ok(found);
    }
    Ok(am.update(db).await?)
}

pub async fn delete_accommodation(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = accommodation::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Accommodation"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn crud_roundtrip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_accommodation(
            &db,
            AccommodationInput {
                name: Some("Seaside Hotel".into()),
                address: Some("1 Harbour Rd".into()),
                capacity: Some(40),
                ..Default::default()
            },
        )
        .await?;

        let fetched = get_accommodation(&db, created.id).await?;
        assert_eq!(fetched.capacity, Some(40));

        let updated = update_accommodation(&db, created.id, AccommodationInput { capacity: Some(45), ..Default::default() }).await?;
        assert_eq!(updated.capacity, Some(45));
        assert_eq!(updated.address.as_deref(), Some("1 Harbour Rd"));

        delete_accommodation(&db, created.id).await?;
        assert!(matches!(get_accommodation(&db, created.id).await.unwrap_err(), ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn admin_list_orders_by_name() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_accommodation(&db, AccommodationInput { name: Some("Valley Lodge".into()), ..Default::default() }).await?;
        create_accommodation(&db, AccommodationInput { name: Some("Airport B&B".into()), ..Default::default() }).await?;

        let names: Vec<_> = list_accommodations(&db).await?.into_iter().filter_map(|a| a.name).collect();
        assert_eq!(names, vec!["Airport B&B", "Valley Lodge"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(matches!(delete_accommodation(&db, 7).await.unwrap_err(), ServiceError::NotFound(_)));
        Ok(())
    }
}
