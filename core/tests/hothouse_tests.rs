/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for hothouse records

mod common;

use agronomy_core::calendar::{get_works, set_works};
use agronomy_core::crops::{add_crop, get_crop};
use agronomy_core::error::RecordError;
use agronomy_core::hothouses::*;
use agronomy_core::types::*;
use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_add_hothouse() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;

    add_crop(&db, admin, "Tomato").await.unwrap();

    let hothouse = add_hothouse(&db, admin, "GH1", Some("Tomato")).await.unwrap();
    assert_eq!(
        hothouse,
        HothouseSummary {
            title: "GH1".to_string(),
            crop: Some("Tomato".to_string()),
            yields: 0.0,
            spent_fertilizers: 0.0,
        }
    );

    let hothouse = add_hothouse(&db, admin, "GH2", Some("не выбрано")).await.unwrap();
    assert_eq!(hothouse.crop, None);

    assert_eq!(EWorks::find().count(&db).await.unwrap(), 2);
    assert_eq!(get_works(&db, "GH1").await.unwrap(), Calendar::default());

    let titles: Vec<String> = list_hothouses(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.title)
        .collect();
    assert_eq!(titles, vec!["GH1", "GH2"]);
}

#[tokio::test]
async fn test_add_hothouse_rejected() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;
    let visitor = common::visitor(&db, "farmer").await;

    add_hothouse(&db, admin, "GH1", None).await.unwrap();

    let err = add_hothouse(&db, admin, "GH1", None).await.unwrap_err();
    assert!(matches!(err, RecordError::Conflict(_)));

    let err = add_hothouse(&db, admin, "GH2", Some("Potato")).await.unwrap_err();
    assert!(matches!(err, RecordError::NotFound(_)));

    let err = add_hothouse(&db, admin, "GH#2", None).await.unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    let err = add_hothouse(&db, visitor, "GH2", None).await.unwrap_err();
    assert!(matches!(err, RecordError::Forbidden(_)));

    assert_eq!(EHothouse::find().count(&db).await.unwrap(), 1);
    assert_eq!(EWorks::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_hothouse() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;

    add_crop(&db, admin, "Tomato").await.unwrap();
    add_crop(&db, admin, "Cucumber").await.unwrap();
    add_hothouse(&db, admin, "GH1", Some("Tomato")).await.unwrap();

    let changes = HothouseChanges {
        title: Some("GH10".to_string()),
        crop: Some("Cucumber".to_string()),
        yields: Some(Amount::Text("12.5".to_string())),
        spent_fertilizers: Some(Amount::Number(3.0)),
    };
    let hothouse = update_hothouse(&db, admin, "GH1", changes).await.unwrap();

    assert_eq!(
        hothouse,
        HothouseSummary {
            title: "GH10".to_string(),
            crop: Some("Cucumber".to_string()),
            yields: 12.5,
            spent_fertilizers: 3.0,
        }
    );
    assert_eq!(get_hothouse(&db, "GH10").await.unwrap(), hothouse);

    let changes = HothouseChanges {
        crop: Some("не выбрано".to_string()),
        ..Default::default()
    };
    let hothouse = update_hothouse(&db, admin, "GH10", changes).await.unwrap();
    assert_eq!(hothouse.crop, None);
    assert_eq!(hothouse.yields, 12.5);

    let unchanged = update_hothouse(&db, admin, "GH10", HothouseChanges::default())
        .await
        .unwrap();
    assert_eq!(unchanged, hothouse);
}

#[tokio::test]
async fn test_update_hothouse_rejected_keeps_store() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;
    let visitor = common::visitor(&db, "farmer").await;

    add_hothouse(&db, admin, "GH1", None).await.unwrap();
    add_hothouse(&db, admin, "GH2", None).await.unwrap();

    let changes = HothouseChanges {
        title: Some("GH2".to_string()),
        yields: Some(Amount::Number(5.0)),
        ..Default::default()
    };
    let err = update_hothouse(&db, admin, "GH1", changes).await.unwrap_err();
    assert!(matches!(err, RecordError::Conflict(_)));

    let changes = HothouseChanges {
        yields: Some(Amount::Text("five".to_string())),
        ..Default::default()
    };
    let err = update_hothouse(&db, admin, "GH1", changes).await.unwrap_err();
    assert!(matches!(err, RecordError::Validation(_)));

    let changes = HothouseChanges {
        yields: Some(Amount::Number(5.0)),
        ..Default::default()
    };
    let err = update_hothouse(&db, visitor, "GH1", changes).await.unwrap_err();
    assert!(matches!(err, RecordError::Forbidden(_)));

    let hothouse = get_hothouse(&db, "GH1").await.unwrap();
    assert_eq!(hothouse.yields, 0.0);
}

#[tokio::test]
async fn test_delete_hothouse_cascades() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;

    add_crop(&db, admin, "Tomato").await.unwrap();
    add_hothouse(&db, admin, "GH1", Some("Tomato")).await.unwrap();
    add_hothouse(&db, admin, "GH2", Some("Tomato")).await.unwrap();

    let update = CalendarUpdate {
        sowing: Some(date(2026, 3, 1)),
        harvest: Some(date(2026, 7, 1)),
        fertilizer: [date(2026, 4, 1), date(2026, 5, 1)].into(),
        watering: [date(2026, 3, 2)].into(),
    };
    set_works(&db, admin, "GH1", update.clone()).await.unwrap();
    set_works(&db, admin, "GH2", update).await.unwrap();

    delete_hothouse(&db, admin, "GH1").await.unwrap();

    assert!(matches!(
        get_hothouse(&db, "GH1").await.unwrap_err(),
        RecordError::NotFound(_)
    ));
    assert_eq!(EWorks::find().count(&db).await.unwrap(), 1);
    assert_eq!(EFertilizerWork::find().count(&db).await.unwrap(), 2);
    assert_eq!(EWateringWork::find().count(&db).await.unwrap(), 1);
    assert_eq!(ECrop::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_reassign_to_no_crop() {
    let db = common::connect().await;
    let admin = common::admin(&db).await;

    add_crop(&db, admin, "Tomato").await.unwrap();
    let hothouse = add_hothouse(&db, admin, "GH1", Some("Tomato")).await.unwrap();
    assert_eq!(hothouse.crop.as_deref(), Some("Tomato"));
    assert_eq!(get_crop(&db, "Tomato").await.unwrap().hothouses, 1);

    let changes = HothouseChanges {
        crop: Some("не выбрано".to_string()),
        ..Default::default()
    };
    update_hothouse(&db, admin, "GH1", changes).await.unwrap();

    assert_eq!(get_hothouse(&db, "GH1").await.unwrap().crop, None);
    assert_eq!(get_crop(&db, "Tomato").await.unwrap().hothouses, 0);
}
