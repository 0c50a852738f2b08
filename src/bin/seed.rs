use chrono::{Duration, Local};
use clap::Parser;
use fake::{
    faker::{
        address::en::CityName,
        lorem::en::{Paragraph, Sentence},
        name::en::Name,
    },
    Fake,
};
use sqlx::sqlite::SqlitePoolOptions;

use clubhouse::{
    domain::{NewAnnouncement, NewEvent, NewMember},
    repository::{
        schema, AnnouncementRepository, EventRepository, MemberRepository,
        SqliteAnnouncementRepository, SqliteEventRepository, SqliteMemberRepository,
    },
};

/// Fills the dashboard database with demo data.
#[derive(Parser, Debug)]
#[command(name = "seed")]
struct Args {
    /// Database to seed
    #[arg(long, default_value = "sqlite://clubhouse.db")]
    database_url: String,

    /// Number of announcements to create
    #[arg(long, default_value_t = 8)]
    announcements: u32,

    /// Number of events to create (half in the past, half upcoming)
    #[arg(long, default_value_t = 6)]
    events: u32,

    /// Number of members to create
    #[arg(long, default_value_t = 10)]
    members: u32,
}

const ROLES: [&str; 5] = ["President", "Treasurer", "Secretary", "Coach", "Member"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("Seeding {}...", args.database_url);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&args.database_url)
        .await?;

    schema::init_schema(&db_pool).await?;

    let announcement_repo = SqliteAnnouncementRepository::new(db_pool.clone());
    let event_repo = SqliteEventRepository::new(db_pool.clone());
    let member_repo = SqliteMemberRepository::new(db_pool);

    for _ in 0..args.announcements {
        announcement_repo
            .create(NewAnnouncement {
                title: Sentence(3..7).fake(),
                content: Paragraph(1..3).fake(),
            })
            .await?;
    }
    println!("  Created {} announcements", args.announcements);

    let today = Local::now().date_naive();
    for i in 0..args.events {
        // Alternate between upcoming and past so both partitions show data.
        let offset = Duration::days(7 * (i as i64 / 2 + 1));
        let date = if i % 2 == 0 { today + offset } else { today - offset };

        event_repo
            .create(NewEvent {
                name: Sentence(2..5).fake(),
                description: Some(Paragraph(1..2).fake()),
                date,
                time: Some("19:00".to_string()),
                location: Some(CityName().fake()),
            })
            .await?;
    }
    println!("  Created {} events", args.events);

    for i in 0..args.members {
        member_repo
            .create(NewMember {
                name: Name().fake(),
                role: Some(ROLES[i as usize % ROLES.len()].to_string()),
                joined_date: today - Duration::days(30 * i as i64),
            })
            .await?;
    }
    println!("  Created {} members", args.members);

    println!("Done.");
    Ok(())
}
