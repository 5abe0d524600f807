use async_trait::async_trait;

use super::domain::{Customer, CustomerId};
use super::errors::CustomerError;

/// Data-access contract the customer service is written against.
///
/// Implementations own identifier assignment and durable storage; they
/// carry no business rules.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;
    async fn exists_with_email(&self, email: &str) -> Result<bool, CustomerError>;
    async fn exists_with_id(&self, id: CustomerId) -> Result<bool, CustomerError>;
    /// Persist a new customer; any `id` on the input is ignored.
    async fn insert(&self, customer: Customer) -> Result<(), CustomerError>;
    /// Overwrite every field of the stored customer with `customer.id`.
    async fn update(&self, customer: Customer) -> Result<(), CustomerError>;
    async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError>;
}

/// In-memory repository, used by the `memory` storage backend and in tests
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<CustomerId, Customer>, // key: id; ids ascend, so iteration is oldest first
        last_id: CustomerId,
    }

    #[derive(Default)]
    pub struct InMemoryCustomerRepository {
        inner: RwLock<State>,
    }

    impl InMemoryCustomerRepository {
        pub fn new() -> Self { Self::default() }

        fn check(customer: &Customer) -> Result<(), CustomerError> {
            models::customer::validate(&customer.name, &customer.email, customer.age)?;
            Ok(())
        }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
            let state = self.inner.read().await;
            Ok(state.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
            let state = self.inner.read().await;
            Ok(state.rows.get(&id).cloned())
        }

        async fn exists_with_email(&self, email: &str) -> Result<bool, CustomerError> {
            let state = self.inner.read().await;
            Ok(state.rows.values().any(|c| c.email == email))
        }

        async fn exists_with_id(&self, id: CustomerId) -> Result<bool, CustomerError> {
            let state = self.inner.read().await;
            Ok(state.rows.contains_key(&id))
        }

        async fn insert(&self, customer: Customer) -> Result<(), CustomerError> {
            Self::check(&customer)?;
            let mut state = self.inner.write().await;
            // Mirrors the unique key on customer.email
            if state.rows.values().any(|c| c.email == customer.email) {
                return Err(CustomerError::Repository(format!("duplicate email {}", customer.email)));
            }
            state.last_id += 1;
            let id = state.last_id;
            state.rows.insert(id, Customer { id: Some(id), ..customer });
            Ok(())
        }

        async fn update(&self, customer: Customer) -> Result<(), CustomerError> {
            Self::check(&customer)?;
            let id = customer
                .id
                .ok_or_else(|| CustomerError::Repository("cannot update a customer without id".into()))?;
            let mut state = self.inner.write().await;
            if state.rows.iter().any(|(other, c)| *other != id && c.email == customer.email) {
                return Err(CustomerError::Repository(format!("duplicate email {}", customer.email)));
            }
            match state.rows.get_mut(&id) {
                Some(slot) => {
                    *slot = customer;
                    Ok(())
                }
                None => Err(CustomerError::Repository(format!("no customer row with id {id}"))),
            }
        }

        async fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
            let mut state = self.inner.write().await;
            state.rows.remove(&id);
            Ok(())
        }
    }

}
