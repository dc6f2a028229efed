pub mod admins;
pub mod classes;
pub mod meals;
pub mod roles;
pub mod students;
pub mod teachers;
pub mod user_login_data;
