/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for hothouse and crop entities

use entity::*;
use sea_orm::{
    ColumnTrait, DatabaseBackend, EntityTrait, MockDatabase, QueryFilter, Transaction,
    entity::prelude::*,
};
use uuid::Uuid;

#[tokio::test]
async fn test_hothouse_without_crop() -> Result<(), DbErr> {
    let hothouse_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![hothouse::Model {
            id: hothouse_id,
            title: "GH1".to_owned(),
            yields: 12.5,
            spent_fertilizers: 3.0,
            crop: None,
        }]])
        .into_connection();

    let result = hothouse::Entity::find()
        .filter(hothouse::Column::Title.eq("GH1"))
        .one(&db)
        .await?
        .expect("hothouse");

    assert_eq!(result.id, hothouse_id);
    assert!(result.crop.is_none());
    assert_eq!(result.yields, 12.5);

    Ok(())
}

#[tokio::test]
async fn test_crop_lookup_by_title_query() -> Result<(), DbErr> {
    let crop_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![crop::Model {
            id: crop_id,
            title: "Tomato".to_owned(),
        }]])
        .into_connection();

    let crop = crop::Entity::find()
        .filter(crop::Column::Title.eq("Tomato"))
        .one(&db)
        .await?;

    assert_eq!(
        crop,
        Some(crop::Model {
            id: crop_id,
            title: "Tomato".to_owned(),
        })
    );

    assert_eq!(
        db.into_transaction_log(),
        [Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "crop"."id", "crop"."title" FROM "crop" WHERE "crop"."title" = $1 LIMIT $2"#,
            ["Tomato".into(), 1u64.into()]
        )]
    );

    Ok(())
}

#[tokio::test]
async fn test_crop_related_hothouses() -> Result<(), DbErr> {
    let crop_id = Uuid::new_v4();
    let crop = crop::Model {
        id: crop_id,
        title: "Tomato".to_owned(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            hothouse::Model {
                id: Uuid::new_v4(),
                title: "GH1".to_owned(),
                yields: 1.0,
                spent_fertilizers: 0.5,
                crop: Some(crop_id),
            },
            hothouse::Model {
                id: Uuid::new_v4(),
                title: "GH2".to_owned(),
                yields: 2.0,
                spent_fertilizers: 1.5,
                crop: Some(crop_id),
            },
        ]])
        .into_connection();

    let hothouses = crop.find_related(hothouse::Entity).all(&db).await?;

    assert_eq!(hothouses.len(), 2);
    assert!(hothouses.iter().all(|h| h.crop == Some(crop_id)));

    Ok(())
}
