use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, CustomerId, Gender};
use crate::customer::errors::CustomerError;
use crate::customer::repository::CustomerRepository;

pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// Row to domain mapping; an unknown gender value is treated as corrupt storage.
pub fn to_domain(row: models::customer::Model) -> Result<Customer, CustomerError> {
    let gender = row.gender.parse::<Gender>().map_err(CustomerError::Repository)?;
    Ok(Customer { id: Some(row.id), name: row.name, email: row.email, password: row.password, age: row.age, gender })
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        models::customer::list(&self.db).await?.into_iter().map(to_domain).collect()
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        models::customer::find(&self.db, id).await?.map(to_domain).transpose()
    }

    async fn exists_with_email(&self, email: &str) -> Result<bool, CustomerError> {
        Ok(models::customer::email_exists(&self.db, email).await?)
    }

    async fn exists_with_id(&self, id: CustomerId) -> Result<bool, CustomerError> {
        Ok(models::customer::id_exists(&self.db, id).await?)
    }

    async fn insert(&self, customer: Customer) -> Result<(), CustomerError> {
        models::customer::insert(
            &self.db,
            &customer.name,
            &customer.email,
            &customer.password,
            customer.age,
            customer.gender.as_str(),
        )
        .await?;
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<(), CustomerError> {
        let id = customer
            .id
            .ok_or_else(|| CustomerError::Repository("cannot update a customer without id".into()))?;
        let row = models::customer::Model {
            id,
            name: customer.name,
            email: customer.email,
            password: customer.password,
            age: customer.age,
            gender: customer.gender.as_str().to_string(),
        };
        models::customer::overwrite(&self.db, row).await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        models::customer::hard_delete(&self.db, id).await?;
        Ok(())
    }
}
