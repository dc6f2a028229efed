use std::sync::{Arc, Mutex};

use chrono::Utc;

use campus_school::domain::repository::{
    AccountRepository, ClassRepository, MealRepository, RoleLinkRepository,
};
use campus_school::domain::types::{
    Admin, Class, LoginData, Meal, NewClass, NewLogin, NewMeal, RoleLink, Student, Teacher,
};
use campus_school::error::SchoolServiceError;

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct Store {
    pub logins: Vec<LoginData>,
    pub admins: Vec<Admin>,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub classes: Vec<Class>,
    pub links: Vec<RoleLink>,
    pub meals: Vec<Meal>,
    /// Number of class repository calls, reads and writes alike.
    pub class_calls: u32,
}

/// Shared in-memory fake implementing every repository trait with the same
/// keying rules as the database adapter.
#[derive(Clone, Default)]
pub struct InMemorySchool {
    pub store: Arc<Mutex<Store>>,
}

impl InMemorySchool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T>(&self, f: impl FnOnce(&Store) -> T) -> T {
        f(&self.store.lock().unwrap())
    }
}

fn upsert_by_id<T: Clone>(rows: &mut Vec<T>, row: T, id: impl Fn(&T) -> i32) -> T {
    match rows.iter_mut().find(|r| id(r) == id(&row)) {
        Some(existing) => *existing = row.clone(),
        None => rows.push(row.clone()),
    }
    row
}

impl ClassRepository for InMemorySchool {
    async fn find_by_id(&self, id: i32) -> Result<Option<Class>, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        store.class_calls += 1;
        Ok(store.classes.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_year(&self, year: &str) -> Result<Vec<Class>, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        store.class_calls += 1;
        Ok(store
            .classes
            .iter()
            .filter(|c| c.year == year)
            .cloned()
            .collect())
    }

    async fn create(&self, class: &NewClass) -> Result<Class, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        store.class_calls += 1;
        let id = store.classes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Class {
            id,
            room_number: class.room_number,
            letter: class.letter.clone(),
            year: class.year.clone(),
        };
        store.classes.push(created.clone());
        for &teacher_id in &class.teacher_ids {
            let link = RoleLink {
                teacher_id,
                class_id: id,
            };
            if !store.links.contains(&link) {
                store.links.push(link);
            }
        }
        for student in store
            .students
            .iter_mut()
            .filter(|s| class.student_ids.contains(&s.id))
        {
            student.class_id = id;
        }
        Ok(created)
    }

    async fn upsert(&self, class: &Class) -> Result<Class, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        store.class_calls += 1;
        Ok(upsert_by_id(&mut store.classes, class.clone(), |c| c.id))
    }
}

impl MealRepository for InMemorySchool {
    async fn create(&self, meal: &NewMeal) -> Result<Meal, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        let created = Meal {
            id: store.meals.len() as i32 + 1,
            name: meal.name.clone(),
            description: meal.description.clone(),
            calories: meal.calories.clone(),
            allergies: meal.allergies.clone(),
            extra: meal.extra.clone(),
            ingredients: meal.ingredients.clone(),
            day: meal.day.clone(),
            created_at: Utc::now(),
        };
        store.meals.push(created.clone());
        Ok(created)
    }

    async fn list(&self, day: Option<&str>) -> Result<Vec<Meal>, SchoolServiceError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .meals
            .iter()
            .filter(|m| day.is_none_or(|d| m.day == d))
            .cloned()
            .collect())
    }
}

impl AccountRepository for InMemorySchool {
    async fn upsert_login(&self, login: &NewLogin) -> Result<LoginData, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        if let Some(existing) = store.logins.iter_mut().find(|l| l.email == login.email) {
            existing.password = login.password.clone();
            return Ok(existing.clone());
        }
        let created = LoginData {
            id: store.logins.len() as i32 + 1,
            email: login.email.clone(),
            password: login.password.clone(),
            role: login.role,
        };
        store.logins.push(created.clone());
        Ok(created)
    }

    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        Ok(upsert_by_id(&mut store.admins, admin.clone(), |a| a.id))
    }

    async fn upsert_teacher(&self, teacher: &Teacher) -> Result<Teacher, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        Ok(upsert_by_id(&mut store.teachers, teacher.clone(), |t| t.id))
    }

    async fn upsert_student(&self, student: &Student) -> Result<Student, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        Ok(upsert_by_id(&mut store.students, student.clone(), |s| s.id))
    }
}

impl RoleLinkRepository for InMemorySchool {
    async fn list(&self) -> Result<Vec<RoleLink>, SchoolServiceError> {
        Ok(self.store.lock().unwrap().links.clone())
    }

    async fn link(&self, link: RoleLink) -> Result<bool, SchoolServiceError> {
        let mut store = self.store.lock().unwrap();
        if store.links.contains(&link) {
            return Ok(false);
        }
        store.links.push(link);
        Ok(true)
    }
}
