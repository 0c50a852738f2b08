use chrono::{Duration, NaiveDate};
use clubhouse::{
    domain::NewMember,
    repository::{schema, MemberRepository, SqliteMemberRepository},
};
use sqlx::SqlitePool;

async fn setup() -> anyhow::Result<SqliteMemberRepository> {
    let pool = SqlitePool::connect(":memory:").await?;
    schema::init_schema(&pool).await?;
    Ok(SqliteMemberRepository::new(pool))
}

#[tokio::test]
async fn test_new_member_shows_up_in_listing_and_role_counts() -> anyhow::Result<()> {
    let repo = setup().await?;
    let joined = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();

    repo.create(NewMember {
        name: "Jordan".to_string(),
        role: Some("Treasurer".to_string()),
        joined_date: joined - Duration::days(90),
    })
    .await?;

    let treasurers_before = repo
        .count_by_role()
        .await?
        .into_iter()
        .find(|r| r.role == "Treasurer")
        .map(|r| r.count)
        .unwrap_or(0);

    repo.create(NewMember {
        name: "Alex".to_string(),
        role: Some("Treasurer".to_string()),
        joined_date: joined,
    })
    .await?;

    let listed = repo.list().await?;
    let alex = listed
        .iter()
        .find(|m| m.name == "Alex")
        .expect("Alex should be listed");
    assert_eq!(alex.role.as_deref(), Some("Treasurer"));

    let treasurers_after = repo
        .count_by_role()
        .await?
        .into_iter()
        .find(|r| r.role == "Treasurer")
        .map(|r| r.count)
        .unwrap_or(0);
    assert_eq!(treasurers_after, treasurers_before + 1);

    Ok(())
}

#[tokio::test]
async fn test_list_orders_by_joined_date_descending() -> anyhow::Result<()> {
    let repo = setup().await?;
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for (name, offset) in [("old", 0), ("newest", 200), ("middle", 100)] {
        repo.create(NewMember {
            name: name.to_string(),
            role: None,
            joined_date: base + Duration::days(offset),
        })
        .await?;
    }

    let listed = repo.list().await?;
    assert_eq!(listed[0].name, "newest");
    assert_eq!(listed[2].name, "old");

    Ok(())
}

#[tokio::test]
async fn test_missing_roles_aggregate_as_unassigned() -> anyhow::Result<()> {
    let repo = setup().await?;
    let joined = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    repo.create(NewMember {
        name: "No role".to_string(),
        role: None,
        joined_date: joined,
    })
    .await?;
    repo.create(NewMember {
        name: "Blank role".to_string(),
        role: Some("  ".to_string()),
        joined_date: joined,
    })
    .await?;
    repo.create(NewMember {
        name: "Coach".to_string(),
        role: Some("Coach".to_string()),
        joined_date: joined,
    })
    .await?;

    let counts = repo.count_by_role().await?;
    let unassigned = counts.iter().find(|r| r.role == "Unassigned").unwrap();
    assert_eq!(unassigned.count, 2);
    let coach = counts.iter().find(|r| r.role == "Coach").unwrap();
    assert_eq!(coach.count, 1);

    Ok(())
}
