//! Repository tests against a real Postgres database.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL` and
//! applies `./migrations` before the test body runs.

use chrono::Utc;
use portfolio_content_api::{
    entities::contact_message::NewContactMessage,
    repositories::{
        about::AboutRepository,
        contact_message::ContactMessageRepository,
        experience::ExperienceRepository,
        faq::FaqRepository,
        health::HealthRepository,
        hero::HeroRepository,
        project::ProjectRepository,
        sqlx_repo::{
            SqlxAboutRepo, SqlxContactMessageRepo, SqlxExperienceRepo, SqlxFaqRepo,
            SqlxHealthRepo, SqlxHeroRepo, SqlxProjectRepo, SqlxTestimonialRepo,
        },
        testimonial::{TestimonialOrder, TestimonialRepository},
    },
};
use sqlx::PgPool;

async fn insert_about(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO about (name, about_text) VALUES ($1, 'Hello') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_skill(pool: &PgPool, about_id: i64, name: &str) {
    sqlx::query("INSERT INTO skills (about_id, name, icon) VALUES ($1, $2, $3)")
        .bind(about_id)
        .bind(name)
        .bind(format!("skills/{}.svg", name.to_lowercase()))
        .execute(pool)
        .await
        .unwrap();
}

async fn insert_experience(pool: &PgPool, company: &str) {
    sqlx::query(
        "INSERT INTO experiences (company_name, position, year, duration) VALUES ($1, 'Developer', '2024', '6 months')",
    )
    .bind(company)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_testimonial(pool: &PgPool, name: &str) {
    sqlx::query(
        r#"
        INSERT INTO testimonials (name, title, company, location, rating, feedback)
        VALUES ($1, 'CTO', 'Acme', 'Surat', $2, 'Great work')
        "#,
    )
    .bind(name)
    .bind(5_i16)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_faq(pool: &PgPool, question: &str, display_order: i32) {
    sqlx::query("INSERT INTO faqs (question, answer, display_order) VALUES ($1, 'Yes', $2)")
        .bind(question)
        .bind(display_order)
        .execute(pool)
        .await
        .unwrap();
}

// ───── Hero ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn ensure_hero_creates_the_singleton_once(pool: PgPool) {
    let repo = SqlxHeroRepo::new(pool.clone());
    assert!(repo.find_hero().await.unwrap().is_none());

    let (created, was_created) = repo.ensure_hero().await.unwrap();
    assert!(was_created);
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "");
    assert_eq!(created.location, "Rajkot");
    assert!(created.available_for_work);
    assert_eq!(created.github_url, None);

    let (existing, was_created) = repo.ensure_hero().await.unwrap();
    assert!(!was_created);
    assert_eq!(existing, created);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hero_section")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test]
async fn hero_table_rejects_a_second_row(pool: PgPool) {
    let result = sqlx::query("INSERT INTO hero_section (id) VALUES (2)")
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn save_hero_persists_mutable_fields_only(pool: PgPool) {
    let repo = SqlxHeroRepo::new(pool.clone());
    sqlx::query("INSERT INTO hero_section (id, resume_file) VALUES (1, 'resumes/meet.pdf')")
        .execute(&pool)
        .await
        .unwrap();

    let (mut hero, _) = repo.ensure_hero().await.unwrap();
    hero.name = "Meet".into();
    hero.github_url = Some("https://github.com/meet".into());
    hero.available_for_work = false;
    hero.resume_file = "resumes/other.pdf".into();

    repo.save_hero(&hero).await.unwrap();
    let stored = repo.find_hero().await.unwrap().unwrap();

    assert_eq!(stored.name, "Meet");
    assert_eq!(stored.github_url.as_deref(), Some("https://github.com/meet"));
    assert!(!stored.available_for_work);
    assert_eq!(stored.resume_file, "resumes/meet.pdf");
}

#[sqlx::test]
async fn save_hero_without_row_is_not_found(pool: PgPool) {
    let repo = SqlxHeroRepo::new(pool);
    let hero = portfolio_content_api::entities::hero::HeroSection::new_singleton();

    let err = repo.save_hero(&hero).await.unwrap_err();

    assert!(matches!(err, portfolio_content_api::errors::AppError::NotFound(_)));
}

// ───── About & skills ────────────────────────────────────────────────

#[sqlx::test]
async fn first_about_and_its_skills_in_id_order(pool: PgPool) {
    let repo = SqlxAboutRepo::new(pool.clone());
    assert!(repo.find_first_about().await.unwrap().is_none());

    let first = insert_about(&pool, "Meet").await;
    let second = insert_about(&pool, "Someone else").await;
    insert_skill(&pool, first, "React").await;
    insert_skill(&pool, second, "Go").await;
    insert_skill(&pool, first, "Django").await;

    let about = repo.find_first_about().await.unwrap().unwrap();
    assert_eq!(about.id, first);
    assert_eq!(about.name, "Meet");

    let skills: Vec<String> = repo.list_skills(first).await.unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(skills, vec!["React", "Django"]);
}

#[sqlx::test]
async fn deleting_about_cascades_to_skills(pool: PgPool) {
    let repo = SqlxAboutRepo::new(pool.clone());
    let about_id = insert_about(&pool, "Meet").await;
    insert_skill(&pool, about_id, "React").await;
    insert_skill(&pool, about_id, "Django").await;

    sqlx::query("DELETE FROM about WHERE id = $1")
        .bind(about_id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(repo.list_skills(about_id).await.unwrap().is_empty());
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

// ───── Projects ──────────────────────────────────────────────────────

#[sqlx::test]
async fn project_badges_round_trip_exactly(pool: PgPool) {
    let badges = vec![
        "React".to_string(),
        "Django REST".to_string(),
        "C, C++".to_string(),
        "React".to_string(),
    ];
    sqlx::query("INSERT INTO projects (title, description, github, badges) VALUES ($1, $2, $3, $4)")
        .bind("Portfolio")
        .bind("This site")
        .bind("https://github.com/meet/portfolio")
        .bind(&badges)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO projects (title, description, github) VALUES ('Chat', 'Realtime', 'https://github.com/meet/chat')")
        .execute(&pool)
        .await
        .unwrap();

    let projects = SqlxProjectRepo::new(pool).list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Portfolio");
    assert_eq!(projects[0].badges, badges);
    assert_eq!(projects[0].demo, None);
    assert!(projects[1].badges.is_empty());
}

// ───── Ordering ──────────────────────────────────────────────────────

#[sqlx::test]
async fn experiences_are_listed_newest_first(pool: PgPool) {
    for company in ["First Co", "Second Co", "Third Co"] {
        insert_experience(&pool, company).await;
    }

    let companies: Vec<String> = SqlxExperienceRepo::new(pool).list_experiences().await.unwrap()
        .into_iter()
        .map(|e| e.company_name)
        .collect();

    assert_eq!(companies, vec!["Third Co", "Second Co", "First Co"]);
}

#[sqlx::test]
async fn testimonials_follow_requested_order(pool: PgPool) {
    for name in ["Alice", "Bob", "Carol"] {
        insert_testimonial(&pool, name).await;
    }
    let repo = SqlxTestimonialRepo::new(pool);

    let newest: Vec<String> = repo.list_testimonials(TestimonialOrder::NewestFirst).await.unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    let oldest: Vec<String> = repo.list_testimonials(TestimonialOrder::OldestFirst).await.unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(newest, vec!["Carol", "Bob", "Alice"]);
    assert_eq!(oldest, vec!["Alice", "Bob", "Carol"]);
}

#[sqlx::test]
async fn testimonial_rating_is_constrained(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO testimonials (name, title, company, location, rating, feedback) VALUES ('X', 'T', 'C', 'L', 6, 'F')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn faqs_are_listed_by_id_regardless_of_display_order(pool: PgPool) {
    insert_faq(&pool, "First?", 10).await;
    insert_faq(&pool, "Second?", 0).await;

    let questions: Vec<String> = SqlxFaqRepo::new(pool).list_faqs().await.unwrap()
        .into_iter()
        .map(|f| f.question)
        .collect();

    assert_eq!(questions, vec!["First?", "Second?"]);
}

// ───── Contact & health ──────────────────────────────────────────────

#[sqlx::test]
async fn contact_message_gets_server_timestamp(pool: PgPool) {
    let before = Utc::now() - chrono::Duration::seconds(5);
    let repo = SqlxContactMessageRepo::new(pool.clone());

    let stored = repo
        .create_contact_message(&NewContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        })
        .await
        .unwrap();

    assert_eq!(stored.name, "Ada");
    assert!(stored.created_at >= before);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test]
async fn health_probe_succeeds_on_live_pool(pool: PgPool) {
    SqlxHealthRepo::new(pool).check_connection().await.unwrap();
}
