//! Deterministic mock records for development and test databases.
//!
//! Every write is an upsert keyed by email or numeric id, so running the seed
//! again converges on the same rows instead of duplicating them.

use std::collections::HashSet;

use campus_domain::user::UserRole;

use crate::domain::repository::{AccountRepository, ClassRepository, RoleLinkRepository};
use crate::domain::types::{Admin, Class, NewLogin, RoleLink, Student, Teacher};
use crate::error::SchoolServiceError;

pub const MOCK_PASSWORD: &str = "1234";
pub const ADMIN_EMAIL: &str = "adminmail1@test.de";
pub const TEACHER_EMAILS: [&str; 2] = ["teachermail1@test.de", "teachermail2@test.de"];
pub const STUDENT_EMAILS: [&str; 4] = [
    "studentmail1@test.de",
    "studentmail2@test.de",
    "studentmail3@test.de",
    "studentmail4@test.de",
];

/// Students at index <= this go to class A, the rest to class B.
const LAST_CLASS_A_STUDENT: usize = 1;

#[derive(Debug, Clone)]
pub struct SeededClasses {
    pub class_a: Class,
    pub class_b: Class,
}

impl SeededClasses {
    pub fn both(&self) -> [&Class; 2] {
        [&self.class_a, &self.class_b]
    }
}

/// Everything a seeding run wrote, for callers that need the fixture ids.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub admin: Admin,
    pub classes: SeededClasses,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    /// Role links inserted by this run; zero on a re-run.
    pub links_created: usize,
}

/// Upsert the two fixture classes.
pub async fn seed_classes<C: ClassRepository>(
    repo: &C,
) -> Result<SeededClasses, SchoolServiceError> {
    let class_a = repo
        .upsert(&Class {
            id: 1,
            room_number: 101,
            letter: "A".to_owned(),
            year: "2024".to_owned(),
        })
        .await?;
    let class_b = repo
        .upsert(&Class {
            id: 2,
            room_number: 102,
            letter: "B".to_owned(),
            year: "2024".to_owned(),
        })
        .await?;
    Ok(SeededClasses { class_a, class_b })
}

// ── SeedSchool ───────────────────────────────────────────────────────────────

pub struct SeedSchoolUseCase<A, C, L>
where
    A: AccountRepository,
    C: ClassRepository,
    L: RoleLinkRepository,
{
    pub accounts: A,
    pub classes: C,
    pub role_links: L,
}

impl<A, C, L> SeedSchoolUseCase<A, C, L>
where
    A: AccountRepository,
    C: ClassRepository,
    L: RoleLinkRepository,
{
    pub async fn execute(&self) -> Result<SeedReport, SchoolServiceError> {
        // Snapshot of links taken once; links inserted below are added to it so
        // later checks in this run see them. The store's composite key guards
        // against concurrent runs.
        let mut known_links: HashSet<RoleLink> =
            self.role_links.list().await?.into_iter().collect();

        let admin_login = self.upsert_login(ADMIN_EMAIL, UserRole::Admin).await?;
        let admin = self
            .accounts
            .upsert_admin(&Admin {
                id: 1,
                name: "Admin1".to_owned(),
                lastname: "Surname1".to_owned(),
                login_id: admin_login,
            })
            .await?;

        let classes = seed_classes(&self.classes).await?;

        let mut teachers = Vec::with_capacity(TEACHER_EMAILS.len());
        let mut links_created = 0;
        for (i, email) in TEACHER_EMAILS.iter().enumerate() {
            let n = i as i32 + 1;
            let login_id = self.upsert_login(email, UserRole::Teacher).await?;
            let teacher = self
                .accounts
                .upsert_teacher(&Teacher {
                    id: n,
                    name: format!("Teacher{n}"),
                    lastname: format!("Surname{n}"),
                    login_id,
                })
                .await?;

            for class in classes.both() {
                let link = RoleLink {
                    teacher_id: teacher.id,
                    class_id: class.id,
                };
                if known_links.contains(&link) {
                    continue;
                }
                if self.role_links.link(link).await? {
                    links_created += 1;
                }
                known_links.insert(link);
            }
            teachers.push(teacher);
        }

        let mut students = Vec::with_capacity(STUDENT_EMAILS.len());
        for (i, email) in STUDENT_EMAILS.iter().enumerate() {
            let n = i as i32 + 1;
            let class = if i <= LAST_CLASS_A_STUDENT {
                &classes.class_a
            } else {
                &classes.class_b
            };
            let login_id = self.upsert_login(email, UserRole::Student).await?;
            let student = self
                .accounts
                .upsert_student(&Student {
                    id: n,
                    name: format!("Student{n}"),
                    lastname: format!("Surname{n}"),
                    class_id: class.id,
                    login_id,
                })
                .await?;
            students.push(student);
        }

        tracing::info!(
            admin_id = admin.id,
            teachers = teachers.len(),
            students = students.len(),
            links_created,
            "school fixtures seeded"
        );

        Ok(SeedReport {
            admin,
            classes,
            teachers,
            students,
            links_created,
        })
    }

    async fn upsert_login(&self, email: &str, role: UserRole) -> Result<i32, SchoolServiceError> {
        let login = self
            .accounts
            .upsert_login(&NewLogin {
                email: email.to_owned(),
                password: MOCK_PASSWORD.to_owned(),
                role,
            })
            .await?;
        Ok(login.id)
    }
}
