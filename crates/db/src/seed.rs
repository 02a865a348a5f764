//! One-time seed data for disorders, remedies, and questions.
//!
//! Seeding runs in a single transaction: either the full data set lands or
//! nothing does. When any disorder row already exists the routine is a
//! no-op.

use sqlx::SqlitePool;

use crate::repositories::DisorderRepo;

/// Counts of rows inserted by a successful seed run.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub disorders: usize,
    pub remedies: usize,
    pub questions: usize,
}

/// (name, description, symptoms)
const DISORDERS: &[(&str, &str, &str)] = &[
    (
        "Depression",
        "A mental health disorder characterized by persistent sadness, loss of \
         interest in activities, and difficulty carrying out daily tasks.",
        "Persistent sadness, hopelessness, loss of interest, sleep disturbances, \
         changes in appetite, fatigue, difficulty concentrating",
    ),
    (
        "Anxiety Disorder",
        "Excessive worry, fear, or anxiety that interferes with daily activities \
         and is difficult to control.",
        "Excessive worry, restlessness, fatigue, difficulty concentrating, \
         irritability, muscle tension, sleep problems",
    ),
    (
        "Bipolar Disorder",
        "A disorder associated with episodes of mood swings ranging from \
         depressive lows to manic highs.",
        "Mood swings, manic episodes, depressive episodes, racing thoughts, \
         irritability, sleep changes, risk-taking behavior",
    ),
];

/// (disorder index, title, description, category)
const REMEDIES: &[(usize, &str, &str, &str)] = &[
    (
        0,
        "Cognitive Behavioral Therapy",
        "A type of psychotherapy that helps identify and change negative thought patterns.",
        "therapy",
    ),
    (
        0,
        "Antidepressant Medication",
        "Medications that can help relieve symptoms of depression.",
        "medication",
    ),
    (
        0,
        "Regular Exercise",
        "Physical activity releases endorphins and improves mood.",
        "lifestyle",
    ),
    (
        1,
        "Exposure Therapy",
        "Gradual exposure to feared situations to reduce anxiety.",
        "therapy",
    ),
    (
        1,
        "Mindfulness Meditation",
        "Practice focusing on the present moment to reduce worry.",
        "lifestyle",
    ),
    (
        1,
        "Anti-anxiety Medication",
        "Medications that can help reduce anxiety symptoms.",
        "medication",
    ),
    (
        2,
        "Mood Stabilizers",
        "Medications that help control mood swings.",
        "medication",
    ),
    (
        2,
        "Psychoeducation",
        "Learning about the disorder and developing coping strategies.",
        "therapy",
    ),
    (
        2,
        "Regular Sleep Schedule",
        "Maintaining consistent sleep patterns to help stabilize mood.",
        "lifestyle",
    ),
];

/// (text, category, weight, order_index)
const QUESTIONS: &[(&str, &str, i64, i64)] = &[
    (
        "Have you experienced persistent feelings of sadness or hopelessness?",
        "mood",
        2,
        1,
    ),
    (
        "Have you lost interest or pleasure in activities you used to enjoy?",
        "interest",
        2,
        2,
    ),
    (
        "Have you noticed changes in your appetite or weight?",
        "appetite",
        1,
        3,
    ),
    ("Do you have trouble sleeping or sleep too much?", "sleep", 1, 4),
    ("Do you often feel tired or lack energy?", "energy", 1, 5),
];

/// Seed the database with the initial disorder, remedy, and question set.
///
/// Returns `Ok(None)` without writing anything when disorders already
/// exist, otherwise `Ok(Some(summary))` with the inserted row counts.
pub async fn seed_initial_data(pool: &SqlitePool) -> Result<Option<SeedSummary>, sqlx::Error> {
    if DisorderRepo::count(pool).await? > 0 {
        tracing::debug!("Seed skipped, disorders already present");
        return Ok(None);
    }

    let mut tx = pool.begin().await?;

    let mut disorder_ids = Vec::with_capacity(DISORDERS.len());
    for (name, description, symptoms) in DISORDERS {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO disorders (name, description, symptoms)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind(symptoms)
        .fetch_one(&mut *tx)
        .await?;
        disorder_ids.push(id);
    }

    for (disorder_index, title, description, category) in REMEDIES {
        sqlx::query(
            "INSERT INTO remedies (disorder_id, title, description, category)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(disorder_ids[*disorder_index])
        .bind(title)
        .bind(description)
        .bind(category)
        .execute(&mut *tx)
        .await?;
    }

    for (text, category, weight, order_index) in QUESTIONS {
        sqlx::query(
            "INSERT INTO questions (text, category, weight, order_index)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(text)
        .bind(category)
        .bind(weight)
        .bind(order_index)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        disorders: DISORDERS.len(),
        remedies: REMEDIES.len(),
        questions: QUESTIONS.len(),
    };
    tracing::info!(
        disorders = summary.disorders,
        remedies = summary.remedies,
        questions = summary.questions,
        "Seed data inserted"
    );
    Ok(Some(summary))
}
