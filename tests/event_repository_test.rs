use chrono::{Duration, Local, NaiveDate};
use clubhouse::{
    domain::NewEvent,
    repository::{schema, EventRepository, SqliteEventRepository},
    web::pages::events::partition_events,
};
use sqlx::SqlitePool;

async fn setup() -> anyhow::Result<SqliteEventRepository> {
    let pool = SqlitePool::connect(":memory:").await?;
    schema::init_schema(&pool).await?;
    Ok(SqliteEventRepository::new(pool))
}

fn event_on(date: NaiveDate) -> NewEvent {
    NewEvent {
        name: format!("event on {date}"),
        description: None,
        date,
        time: Some("19:00".to_string()),
        location: Some("Clubhouse".to_string()),
    }
}

#[tokio::test]
async fn test_list_orders_by_date_ascending() -> anyhow::Result<()> {
    let repo = setup().await?;
    let base = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

    // Insert out of order.
    for offset in [20, 5, 12] {
        repo.create(event_on(base + Duration::days(offset))).await?;
    }

    let listed = repo.list().await?;
    assert_eq!(listed.len(), 3);
    assert!(listed.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(listed[0].date, base + Duration::days(5));

    Ok(())
}

#[tokio::test]
async fn test_optional_fields_round_trip_as_none() -> anyhow::Result<()> {
    let repo = setup().await?;
    let created = repo
        .create(NewEvent {
            name: "Minimal".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: None,
            location: None,
        })
        .await?;

    assert!(created.description.is_none());
    assert!(created.time.is_none());
    assert!(created.location.is_none());

    Ok(())
}

#[tokio::test]
async fn test_partitions_are_disjoint_and_cover_all_rows() -> anyhow::Result<()> {
    let repo = setup().await?;
    let today = Local::now().date_naive();

    repo.create(event_on(today - Duration::days(10))).await?;
    repo.create(event_on(today - Duration::days(1))).await?;
    repo.create(event_on(today)).await?;
    repo.create(event_on(today + Duration::days(3))).await?;

    let all = repo.list().await?;
    let total = all.len();
    let (upcoming, past) = partition_events(all, today);

    // Strictly-past dates only in past, today-or-later only in upcoming.
    assert!(past.iter().all(|e| e.date < today));
    assert!(upcoming.iter().all(|e| e.date >= today));
    assert_eq!(past.len(), 2);
    assert_eq!(upcoming.len(), 2);
    assert_eq!(past.len() + upcoming.len(), total);

    // An event scheduled for today counts as upcoming.
    assert!(upcoming.iter().any(|e| e.date == today));

    Ok(())
}

#[tokio::test]
async fn test_count_per_month_buckets_by_calendar_month() -> anyhow::Result<()> {
    let repo = setup().await?;

    assert!(repo.count_per_month().await?.is_empty());

    repo.create(event_on(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap())).await?;
    repo.create(event_on(NaiveDate::from_ymd_opt(2025, 4, 28).unwrap())).await?;
    repo.create(event_on(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap())).await?;

    let per_month = repo.count_per_month().await?;
    assert_eq!(per_month.len(), 2);
    assert_eq!(per_month[0].month, "2025-04");
    assert_eq!(per_month[0].count, 2);
    assert_eq!(per_month[1].month, "2025-05");
    assert_eq!(per_month[1].count, 1);

    Ok(())
}
