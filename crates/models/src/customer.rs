use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    if name.chars().count() > 128 { return Err(ModelError::Validation("name too long (<=128)".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') { return Err(ModelError::Validation("invalid email".into())); }
    if email.len() > 255 { return Err(ModelError::Validation("email too long (<=255)".into())); }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ModelError> {
    if age <= 0 { return Err(ModelError::Validation("age must be positive".into())); }
    Ok(())
}

/// Field checks shared by every write path.
pub fn validate(name: &str, email: &str, age: i32) -> Result<(), ModelError> {
    validate_name(name)?;
    validate_email(email)?;
    validate_age(age)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn email_exists(db: &DatabaseConnection, email: &str) -> Result<bool, ModelError> {
    let n = Entity::find()
        .filter(Column::Email.eq(email))
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(n > 0)
}

pub async fn id_exists(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let n = Entity::find()
        .filter(Column::Id.eq(id))
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(n > 0)
}

/// Insert a new row; the database assigns the id.
pub async fn insert(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password_hash: &str,
    age: i32,
    gender: &str,
) -> Result<Model, ModelError> {
    validate(name, email, age)?;
    if password_hash.trim().is_empty() { return Err(ModelError::Validation("password hash required".into())); }
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(password_hash.to_string()),
        age: Set(age),
        gender: Set(gender.to_string()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Replace every column of the row identified by `model.id`.
pub async fn overwrite(db: &DatabaseConnection, model: Model) -> Result<Model, ModelError> {
    validate(&model.name, &model.email, model.age)?;
    let am = ActiveModel {
        id: Set(model.id),
        name: Set(model.name),
        email: Set(model.email),
        password: Set(model.password),
        age: Set(model.age),
        gender: Set(model.gender),
    };
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
