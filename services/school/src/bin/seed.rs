//! Populate a school database with deterministic mock records.
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/campus cargo run -p campus-school --bin seed
//! ```
//!
//! Safe to run repeatedly; every record is upserted.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use sea_orm::Database;

use campus_core::tracing::init_tracing;
use campus_school::state::AppState;
use campus_school::usecase::seed::SeedSchoolUseCase;
use campus_school_migration::{Migrator, MigratorTrait};

#[derive(Parser)]
#[command(about = "Seed the school database with mock admins, teachers, students and classes")]
struct Args {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Do not apply pending migrations before seeding
    #[arg(long)]
    skip_migrations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("campus_school=info,sea_orm_migration=info,warn");
    let args = Args::parse();

    let db = Database::connect(&args.database_url)
        .await
        .context("failed to connect to database")?;

    if !args.skip_migrations {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
    }

    let state = AppState { db: Arc::new(db) };
    let usecase = SeedSchoolUseCase {
        accounts: state.account_repo(),
        classes: state.class_repo(),
        role_links: state.role_link_repo(),
    };
    let report = usecase.execute().await?;

    println!(
        "seeded admin #{}, {} teachers, {} students in classes #{} and #{} ({} new role links)",
        report.admin.id,
        report.teachers.len(),
        report.students.len(),
        report.classes.class_a.id,
        report.classes.class_b.id,
        report.links_created,
    );
    Ok(())
}
