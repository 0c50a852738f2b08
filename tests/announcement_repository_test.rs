use chrono::Utc;
use clubhouse::{
    domain::NewAnnouncement,
    repository::{schema, AnnouncementRepository, SqliteAnnouncementRepository},
};
use sqlx::SqlitePool;

async fn setup() -> anyhow::Result<SqliteAnnouncementRepository> {
    let pool = SqlitePool::connect(":memory:").await?;
    schema::init_schema(&pool).await?;
    Ok(SqliteAnnouncementRepository::new(pool))
}

#[tokio::test]
async fn test_create_increments_count_and_stamps_creation_time() -> anyhow::Result<()> {
    let repo = setup().await?;
    assert_eq!(repo.count().await?, 0);

    let before = Utc::now();
    let created = repo
        .create(NewAnnouncement {
            title: "Bake sale".to_string(),
            content: "Saturday at the clubhouse.".to_string(),
        })
        .await?;

    assert_eq!(repo.count().await?, 1);
    assert_eq!(created.title, "Bake sale");
    assert!(created.created_at >= before);

    let found = repo.find_by_id(created.id).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().content, "Saturday at the clubhouse.");

    Ok(())
}

#[tokio::test]
async fn test_list_returns_newest_first() -> anyhow::Result<()> {
    let repo = setup().await?;

    for title in ["first", "second", "third"] {
        repo.create(NewAnnouncement {
            title: title.to_string(),
            content: "body".to_string(),
        })
        .await?;
    }

    let listed = repo.list().await?;
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].title, "third");
    assert_eq!(listed[2].title, "first");

    Ok(())
}

#[tokio::test]
async fn test_reads_are_idempotent_without_writes() -> anyhow::Result<()> {
    let repo = setup().await?;
    repo.create(NewAnnouncement {
        title: "once".to_string(),
        content: "only".to_string(),
    })
    .await?;

    let first = repo.list().await?;
    let second = repo.list().await?;

    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id, second[0].id);
    assert_eq!(first[0].title, second[0].title);
    assert_eq!(first[0].created_at, second[0].created_at);

    Ok(())
}

#[tokio::test]
async fn test_count_per_day_groups_same_day_posts() -> anyhow::Result<()> {
    let repo = setup().await?;

    // Empty table produces no buckets at all.
    assert!(repo.count_per_day().await?.is_empty());

    for i in 0..3 {
        repo.create(NewAnnouncement {
            title: format!("post {i}"),
            content: "body".to_string(),
        })
        .await?;
    }

    let per_day = repo.count_per_day().await?;
    // All three inserts happened just now, so they share one bucket.
    assert_eq!(per_day.len(), 1);
    assert_eq!(per_day[0].count, 3);
    assert_eq!(per_day[0].day, Utc::now().date_naive());

    Ok(())
}
