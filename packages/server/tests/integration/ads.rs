use chrono::{DateTime, SubsecRound, Utc};
use serde_json::json;

use crate::common::{TestApp, routes};

fn parse_timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().expect("timestamp should be a string"))
        .expect("timestamp should be RFC 3339")
        .with_timezone(&Utc)
}

mod ad_creation {
    use super::*;

    #[tokio::test]
    async fn create_returns_id_and_created_at_only() {
        let app = TestApp::spawn().await;
        let before = Utc::now().trunc_subsecs(6);

        let res = app
            .post(
                routes::ADS,
                &json!({"title": "Bike", "description": "Red bike", "owner": "alice"}),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(res.body["id"].is_number());
        assert!(parse_timestamp(&res.body["created_at"]) >= before);
        let keys: Vec<_> = res.body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2, "unexpected keys: {keys:?}");
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let app = TestApp::spawn().await;
        let first = app.create_ad("Bike", "Red bike", "alice").await;
        let second = app.create_ad("Lamp", "Desk lamp", "bob").await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn missing_fields_are_named() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::ADS, &json!({"title": "Bike"})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.error_fields(), ["description", "owner"]);
    }

    #[tokio::test]
    async fn client_cannot_choose_id_or_published_at() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::ADS,
                &json!({
                    "id": 999,
                    "title": "Bike",
                    "description": "Red bike",
                    "owner": "alice",
                    "published_at": "2000-01-01T00:00:00Z",
                }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_ne!(res.id(), 999);
        assert!(parse_timestamp(&res.body["created_at"]).timestamp() > 946_684_800);
    }
}

mod ad_retrieval {
    use super::*;

    #[tokio::test]
    async fn created_ad_round_trips() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.get(&routes::ad(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["title"], "Bike");
        assert_eq!(res.body["description"], "Red bike");
        assert_eq!(res.body["owner"], "alice");
        parse_timestamp(&res.body["published_at"]);
    }

    #[tokio::test]
    async fn non_ascii_text_is_not_escaped() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Велосипед", "Красный", "алиса").await;

        let res = app.get(&routes::ad(id)).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Велосипед"), "{}", res.text);
        assert!(!res.text.contains("\\u"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::ad(12345)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Resource not found"}));
    }
}

mod ad_update {
    use super::*;
    use ads_server::entity::advertisement;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn patch_changes_only_given_fields() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;
        let before = app.get(&routes::ad(id)).await;

        let res = app
            .patch(&routes::ad(id), &json!({"description": "Blue bike"}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({"status": "success"}));

        let after = app.get(&routes::ad(id)).await;
        assert_eq!(after.body["description"], "Blue bike");
        assert_eq!(after.body["title"], "Bike");
        assert_eq!(after.body["owner"], "alice");
        assert_eq!(after.body["published_at"], before.body["published_at"]);
    }

    #[tokio::test]
    async fn patch_title_leaves_description_and_owner() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.patch(&routes::ad(id), &json!({"title": "X"})).await;
        assert_eq!(res.status, 200);

        let row = advertisement::Entity::find_by_id(id)
            .one(&app.db)
            .await
            .expect("DB query failed")
            .expect("advertisement should exist");
        assert_eq!(row.title, "X");
        assert_eq!(row.description, "Red bike");
        assert_eq!(row.owner, "alice");
    }

    #[tokio::test]
    async fn empty_patch_succeeds_and_changes_nothing() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;
        let before = app.get(&routes::ad(id)).await;

        let res = app.patch(&routes::ad(id), &json!({})).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!({"status": "success"}));
        assert_eq!(app.get(&routes::ad(id)).await.body, before.body);
    }

    #[tokio::test]
    async fn empty_description_is_applied() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.patch(&routes::ad(id), &json!({"description": ""})).await;

        assert_eq!(res.status, 200);
        assert_eq!(app.get(&routes::ad(id)).await.body["description"], "");
    }

    #[tokio::test]
    async fn owner_cannot_be_changed() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.patch(&routes::ad(id), &json!({"owner": "mallory"})).await;

        assert_eq!(res.status, 200);
        assert_eq!(app.get(&routes::ad(id)).await.body["owner"], "alice");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.patch(&routes::ad(12345), &json!({"title": "X"})).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Resource not found"}));
    }

    #[tokio::test]
    async fn wrong_type_is_rejected_before_lookup() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.patch(&routes::ad(id), &json!({"title": 42})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.error_fields(), ["title"]);
        assert_eq!(app.get(&routes::ad(id)).await.body["title"], "Bike");
    }
}

mod ad_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        let res = app.delete(&routes::ad(id)).await;
        assert_eq!(res.status, 204);
        assert!(res.text.is_empty());

        let res = app.get(&routes::ad(id)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Resource not found"}));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let app = TestApp::spawn().await;
        let id = app.create_ad("Bike", "Red bike", "alice").await;

        assert_eq!(app.delete(&routes::ad(id)).await.status, 204);
        let res = app.delete(&routes::ad(id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Resource not found"}));
    }

    #[tokio::test]
    async fn delete_leaves_other_ads() {
        let app = TestApp::spawn().await;
        let gone = app.create_ad("Bike", "Red bike", "alice").await;
        let kept = app.create_ad("Lamp", "Desk lamp", "bob").await;

        app.delete(&routes::ad(gone)).await;

        assert_eq!(app.get(&routes::ad(kept)).await.status, 200);
    }
}
