use std::sync::Arc;

use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use campus_domain::user::UserRole;
use campus_school_schema::{admins, classes, meals, roles, students, teachers, user_login_data};

use crate::domain::repository::{
    AccountRepository, ClassRepository, MealRepository, RoleLinkRepository,
};
use crate::domain::types::{
    Admin, Class, LoginData, Meal, NewClass, NewLogin, NewMeal, RoleLink, Student, Teacher,
};
use crate::error::SchoolServiceError;

/// Move a serial column's sequence past rows inserted with explicit ids.
async fn sync_serial<C: ConnectionTrait>(db: &C, table: &str, column: &str) -> Result<(), DbErr> {
    let sql = format!(
        "SELECT setval(pg_get_serial_sequence('{table}', '{column}'), \
         (SELECT COALESCE(MAX({column}), 1) FROM {table}))"
    );
    db.execute_unprepared(&sql).await?;
    Ok(())
}

// ── Class repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClassRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ClassRepository for DbClassRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Class>, SchoolServiceError> {
        let model = classes::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find class by id")?;
        Ok(model.map(class_from_model))
    }

    async fn find_by_year(&self, year: &str) -> Result<Vec<Class>, SchoolServiceError> {
        let models = classes::Entity::find()
            .filter(classes::Column::Year.eq(year))
            .order_by_asc(classes::Column::ClassId)
            .all(self.db.as_ref())
            .await
            .context("find classes by year")?;
        Ok(models.into_iter().map(class_from_model).collect())
    }

    async fn create(&self, class: &NewClass) -> Result<Class, SchoolServiceError> {
        let class = class.clone();
        let model = self
            .db
            .transaction::<_, classes::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let model = classes::ActiveModel {
                        room_number: Set(class.room_number),
                        letter: Set(class.letter),
                        year: Set(class.year),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    if !class.teacher_ids.is_empty() {
                        roles::Entity::insert_many(class.teacher_ids.iter().map(|&teacher_id| {
                            roles::ActiveModel {
                                teacher_id: Set(teacher_id),
                                class_id: Set(model.class_id),
                            }
                        }))
                        .on_conflict(
                            OnConflict::columns([roles::Column::TeacherId, roles::Column::ClassId])
                                .do_nothing()
                                .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    }

                    if !class.student_ids.is_empty() {
                        students::Entity::update_many()
                            .col_expr(students::Column::ClassId, Expr::value(model.class_id))
                            .filter(students::Column::StudentId.is_in(class.student_ids))
                            .exec(txn)
                            .await?;
                    }
                    Ok(model)
                })
            })
            .await
            .context("create class")?;
        Ok(class_from_model(model))
    }

    async fn upsert(&self, class: &Class) -> Result<Class, SchoolServiceError> {
        let model = classes::Entity::insert(classes::ActiveModel {
            class_id: Set(class.id),
            room_number: Set(class.room_number),
            letter: Set(class.letter.clone()),
            year: Set(class.year.clone()),
        })
        .on_conflict(
            OnConflict::column(classes::Column::ClassId)
                .update_columns([
                    classes::Column::RoomNumber,
                    classes::Column::Letter,
                    classes::Column::Year,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db.as_ref())
        .await
        .context("upsert class")?;
        sync_serial(self.db.as_ref(), "classes", "class_id")
            .await
            .context("sync classes sequence")?;
        Ok(class_from_model(model))
    }
}

fn class_from_model(model: classes::Model) -> Class {
    Class {
        id: model.class_id,
        room_number: model.room_number,
        letter: model.letter,
        year: model.year,
    }
}

// ── Meal repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMealRepository {
    pub db: Arc<DatabaseConnection>,
}

impl MealRepository for DbMealRepository {
    async fn create(&self, meal: &NewMeal) -> Result<Meal, SchoolServiceError> {
        let model = meals::ActiveModel {
            name: Set(meal.name.clone()),
            description: Set(meal.description.clone()),
            calories: Set(meal.calories.clone()),
            allergies: Set(meal.allergies.clone()),
            extra: Set(meal.extra.clone()),
            ingredients: Set(meal.ingredients.clone()),
            day: Set(meal.day.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .context("create meal")?;
        Ok(meal_from_model(model))
    }

    async fn list(&self, day: Option<&str>) -> Result<Vec<Meal>, SchoolServiceError> {
        let mut query = meals::Entity::find();
        if let Some(day) = day {
            query = query.filter(meals::Column::Day.eq(day));
        }
        let models = query
            .order_by_asc(meals::Column::CreatedAt)
            .order_by_asc(meals::Column::MealId)
            .all(self.db.as_ref())
            .await
            .context("list meals")?;
        Ok(models.into_iter().map(meal_from_model).collect())
    }
}

fn meal_from_model(model: meals::Model) -> Meal {
    Meal {
        id: model.meal_id,
        name: model.name,
        description: model.description,
        calories: model.calories,
        allergies: model.allergies,
        extra: model.extra,
        ingredients: model.ingredients,
        day: model.day,
        created_at: model.created_at,
    }
}

// ── Account repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccountRepository {
    pub db: Arc<DatabaseConnection>,
}

impl AccountRepository for DbAccountRepository {
    async fn upsert_login(&self, login: &NewLogin) -> Result<LoginData, SchoolServiceError> {
        let model = user_login_data::Entity::insert(user_login_data::ActiveModel {
            email: Set(login.email.clone()),
            password: Set(login.password.clone()),
            role: Set(login.role.as_u8() as i16),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(user_login_data::Column::Email)
                .update_column(user_login_data::Column::Password)
                .to_owned(),
        )
        .exec_with_returning(self.db.as_ref())
        .await
        .context("upsert login")?;
        login_from_model(model)
    }

    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, SchoolServiceError> {
        let model = admins::Entity::insert(admins::ActiveModel {
            admin_id: Set(admin.id),
            name: Set(admin.name.clone()),
            lastname: Set(admin.lastname.clone()),
            user_login_data_id: Set(admin.login_id),
        })
        .on_conflict(
            OnConflict::column(admins::Column::AdminId)
                .update_columns([
                    admins::Column::Name,
                    admins::Column::Lastname,
                    admins::Column::UserLoginDataId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db.as_ref())
        .await
        .context("upsert admin")?;
        sync_serial(self.db.as_ref(), "admins", "admin_id")
            .await
            .context("sync admins sequence")?;
        Ok(Admin {
            id: model.admin_id,
            name: model.name,
            lastname: model.lastname,
            login_id: model.user_login_data_id,
        })
    }

    async fn upsert_teacher(&self, teacher: &Teacher) -> Result<Teacher, SchoolServiceError> {
        let model = teachers::Entity::insert(teachers::ActiveModel {
            teacher_id: Set(teacher.id),
            name: Set(teacher.name.clone()),
            lastname: Set(teacher.lastname.clone()),
            user_login_data_id: Set(teacher.login_id),
        })
        .on_conflict(
            OnConflict::column(teachers::Column::TeacherId)
                .update_columns([
                    teachers::Column::Name,
                    teachers::Column::Lastname,
                    teachers::Column::UserLoginDataId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db.as_ref())
        .await
        .context("upsert teacher")?;
        sync_serial(self.db.as_ref(), "teachers", "teacher_id")
            .await
            .context("sync teachers sequence")?;
        Ok(Teacher {
            id: model.teacher_id,
            name: model.name,
            lastname: model.lastname,
            login_id: model.user_login_data_id,
        })
    }

    async fn upsert_student(&self, student: &Student) -> Result<Student, SchoolServiceError> {
        let model = students::Entity::insert(students::ActiveModel {
            student_id: Set(student.id),
            name: Set(student.name.clone()),
            lastname: Set(student.lastname.clone()),
            class_id: Set(student.class_id),
            user_login_data_id: Set(student.login_id),
        })
        .on_conflict(
            OnConflict::column(students::Column::StudentId)
                .update_columns([
                    students::Column::Name,
                    students::Column::Lastname,
                    students::Column::ClassId,
                    students::Column::UserLoginDataId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db.as_ref())
        .await
        .context("upsert student")?;
        sync_serial(self.db.as_ref(), "students", "student_id")
            .await
            .context("sync students sequence")?;
        Ok(Student {
            id: model.student_id,
            name: model.name,
            lastname: model.lastname,
            class_id: model.class_id,
            login_id: model.user_login_data_id,
        })
    }
}

fn login_from_model(model: user_login_data::Model) -> Result<LoginData, SchoolServiceError> {
    let role = u8::try_from(model.role)
        .ok()
        .and_then(UserRole::from_u8)
        .with_context(|| {
            format!(
                "unknown role {} on login {}",
                model.role, model.user_login_data_id
            )
        })?;
    Ok(LoginData {
        id: model.user_login_data_id,
        email: model.email,
        password: model.password,
        role,
    })
}

// ── Role link repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleLinkRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RoleLinkRepository for DbRoleLinkRepository {
    async fn list(&self) -> Result<Vec<RoleLink>, SchoolServiceError> {
        let models = roles::Entity::find()
            .all(self.db.as_ref())
            .await
            .context("list role links")?;
        Ok(models
            .into_iter()
            .map(|m| RoleLink {
                teacher_id: m.teacher_id,
                class_id: m.class_id,
            })
            .collect())
    }

    async fn link(&self, link: RoleLink) -> Result<bool, SchoolServiceError> {
        let inserted = roles::Entity::insert(roles::ActiveModel {
            teacher_id: Set(link.teacher_id),
            class_id: Set(link.class_id),
        })
        .on_conflict(
            OnConflict::columns([roles::Column::TeacherId, roles::Column::ClassId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db.as_ref())
        .await
        .context("link teacher to class")?;
        Ok(inserted > 0)
    }
}
