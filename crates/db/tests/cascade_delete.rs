//! Cascade behaviour: deleting a disorder removes its remedies atomically.

use assert_matches::assert_matches;
use sqlx::SqlitePool;

use mindcheck_db::models::disorder::CreateDisorder;
use mindcheck_db::models::remedy::CreateRemedy;
use mindcheck_db::repositories::{DisorderRepo, RemedyRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_disorder_cascades_to_remedies(pool: SqlitePool) {
    let disorder = DisorderRepo::create(
        &pool,
        &CreateDisorder {
            name: "Depression".to_string(),
            description: "Persistent sadness and loss of interest.".to_string(),
            symptoms: None,
        },
    )
    .await
    .unwrap();

    let mut remedy_ids = Vec::new();
    for title in ["Cognitive Behavioral Therapy", "Regular Exercise"] {
        let remedy = RemedyRepo::create(
            &pool,
            &CreateRemedy {
                disorder_id: disorder.id,
                title: title.to_string(),
                description: format!("{title} description"),
                category: None,
            },
        )
        .await
        .unwrap();
        remedy_ids.push(remedy.id);
    }

    assert!(DisorderRepo::delete(&pool, disorder.id).await.unwrap());

    assert_matches!(
        DisorderRepo::find_by_id(&pool, disorder.id).await.unwrap(),
        None
    );
    for id in remedy_ids {
        assert_matches!(RemedyRepo::find_by_id(&pool, id).await.unwrap(), None);
    }
    assert!(RemedyRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_one_disorder_leaves_other_remedies_intact(pool: SqlitePool) {
    let mut disorders = Vec::new();
    for name in ["Depression", "Anxiety Disorder"] {
        let disorder = DisorderRepo::create(
            &pool,
            &CreateDisorder {
                name: name.to_string(),
                description: format!("{name} description"),
                symptoms: None,
            },
        )
        .await
        .unwrap();
        RemedyRepo::create(
            &pool,
            &CreateRemedy {
                disorder_id: disorder.id,
                title: format!("{name} remedy"),
                description: "A remedy".to_string(),
                category: None,
            },
        )
        .await
        .unwrap();
        disorders.push(disorder);
    }

    assert!(DisorderRepo::delete(&pool, disorders[0].id).await.unwrap());

    let remaining = RemedyRepo::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].disorder_id, disorders[1].id);
}
