use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tower_cookies::Cookies;

use crate::{
    error::AppError,
    filters,
    handlers::{render, Shell},
    middleware::{push_notice, Notice},
    models::{CreateUser, Role, User, UserStatus},
    search::derive_view,
    state::AppState,
};

#[derive(Template)]
#[template(path = "users/list.html")]
struct UsersTemplate<'a> {
    shell: Shell,
    query: String,
    active_only: bool,
    users: Vec<&'a User>,
    total: usize,
}

#[derive(Template)]
#[template(path = "users/form.html")]
struct UserFormTemplate {
    shell: Shell,
    user: Option<User>,
    roles: [Role; 3],
}

impl UserFormTemplate {
    fn action(&self) -> String {
        match &self.user {
            Some(user) => format!("/users/{}", user.id),
            None => "/users".to_string(),
        }
    }

    fn name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    fn email(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.email.as_str())
    }

    fn department(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.department.as_deref())
            .unwrap_or("")
    }

    fn selected_role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }

    fn is_selected(&self, role: &Role) -> bool {
        self.selected_role() == *role
    }

    fn active(&self) -> bool {
        self.user.as_ref().map_or(true, User::is_active)
    }
}

#[derive(Template)]
#[template(path = "users/delete.html")]
struct DeleteUserTemplate {
    shell: Shell,
    user: User,
}

#[derive(Deserialize, Default)]
pub struct UserFilters {
    #[serde(default)]
    pub q: String,
    pub active_only: Option<String>,
}

impl UserFilters {
    pub fn active_only(&self) -> bool {
        self.active_only
            .as_deref()
            .is_some_and(|v| matches!(v, "on" | "true" | "1"))
    }
}

#[derive(Deserialize)]
pub struct UserForm {
    name: String,
    email: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    department: String,
    is_active: Option<String>, // HTML checkboxes send "on" or nothing
}

impl UserForm {
    fn into_create_user(self) -> Result<CreateUser, AppError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(AppError::BadRequest("name and email are required".to_string()));
        }
        let department = self.department.trim();
        Ok(CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            role: self.role.parse().unwrap_or_default(),
            status: UserStatus::from_active(self.is_active.is_some()),
            department: (!department.is_empty()).then(|| department.to_string()),
        })
    }
}

// Users list
pub async fn users_list(
    cookies: Cookies,
    State(state): State<AppState>,
    Query(filters): Query<UserFilters>,
) -> Result<Html<String>, AppError> {
    let active_only = filters.active_only();
    let data = state.store().read().await;
    let status_filter = |u: &User| !active_only || u.is_active();
    let users = derive_view(data.users.all(), &filters.q, &[&status_filter]);

    let template = UsersTemplate {
        shell: Shell::new("users", &cookies),
        query: filters.q,
        active_only,
        users,
        total: data.users.len(),
    };
    render(&template)
}

pub async fn user_form(cookies: Cookies) -> Result<Html<String>, AppError> {
    let template = UserFormTemplate {
        shell: Shell::new("users", &cookies),
        user: None,
        roles: Role::ALL,
    };
    render(&template)
}

pub async fn user_edit_form(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let user = state
        .store()
        .find_user(&user_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("/users/{user_id}")))?;

    let template = UserFormTemplate {
        shell: Shell::new("users", &cookies),
        user: Some(user),
        roles: Role::ALL,
    };
    render(&template)
}

pub async fn create_user(
    cookies: Cookies,
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, AppError> {
    let user = state.store().add_user(form.into_create_user()?).await?;
    push_notice(&cookies, Notice::info("User added", format!("{} was added", user.name)));
    Ok(Redirect::to("/users"))
}

pub async fn update_user(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, AppError> {
    let user = state
        .store()
        .update_user(&user_id, form.into_create_user()?)
        .await?;
    push_notice(&cookies, Notice::info("User updated", format!("{} was updated", user.name)));
    Ok(Redirect::to("/users"))
}

/// Confirmation step before a delete.
pub async fn confirm_delete_user(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let user = state
        .store()
        .find_user(&user_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("/users/{user_id}")))?;

    let template = DeleteUserTemplate {
        shell: Shell::new("users", &cookies),
        user,
    };
    render(&template)
}

pub async fn delete_user(
    cookies: Cookies,
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Redirect, AppError> {
    let user = state.store().remove_user(&user_id).await?;
    push_notice(&cookies, Notice::info("User deleted", format!("{} was removed", user.name)));
    Ok(Redirect::to("/users"))
}
