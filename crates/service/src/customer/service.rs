use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerId, CustomerRegistrationRequest, CustomerUpdateRequest, CustomerView};
use super::errors::CustomerError;
use super::hashing::PasswordEncoder;
use super::repository::CustomerRepository;

/// Customer business service independent of web framework and storage.
///
/// Each call is a short sequence of repository reads followed by at most one
/// write. Races between concurrent callers (two registrations of the same
/// email, lost updates) are left to the storage layer's constraints.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repo: Arc<R>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl<R: CustomerRepository + ?Sized> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo), encoder: Arc::clone(&self.encoder) }
    }
}

fn to_view(customer: Customer) -> Result<CustomerView, CustomerError> {
    CustomerView::from_customer(customer)
        .ok_or_else(|| CustomerError::Repository("stored customer has no id".into()))
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>, encoder: Arc<dyn PasswordEncoder>) -> Self { Self { repo, encoder } }

    /// All customers as views, in the order the repository yields them.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CustomerView>, CustomerError> {
        let customers = self.repo.list_all().await?;
        debug!(count = customers.len(), "customers_listed");
        customers.into_iter().map(to_view).collect()
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: CustomerId) -> Result<CustomerView, CustomerError> {
        let customer = self.repo.find_by_id(id).await?.ok_or(CustomerError::NotFound(id))?;
        to_view(customer)
    }

    /// Register a new customer with an encoded password.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::customer::{CustomerService, repository::memory::InMemoryCustomerRepository};
    /// use service::customer::domain::{CustomerRegistrationRequest, Gender};
    /// let repo = Arc::new(InMemoryCustomerRepository::new());
    /// let svc = CustomerService::new(repo, Arc::new(|raw: &str| format!("hashed:{raw}")));
    /// let req = CustomerRegistrationRequest { name: "Alex".into(), email: "alex@gmail.com".into(), password: "password".into(), age: 19, gender: Gender::Male };
    /// tokio_test::block_on(svc.register(req)).unwrap();
    /// let all = tokio_test::block_on(svc.list()).unwrap();
    /// assert_eq!(all[0].id, 1);
    /// assert_eq!(all[0].email, "alex@gmail.com");
    /// ```
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: CustomerRegistrationRequest) -> Result<(), CustomerError> {
        if self.repo.exists_with_email(&request.email).await? {
            debug!("email already taken");
            return Err(CustomerError::Conflict);
        }

        let password = self.encoder.encode(&request.password)?;
        let CustomerRegistrationRequest { name, email, age, gender, .. } = request;
        let customer = Customer { id: None, name, email, password, age, gender };

        self.repo.insert(customer).await?;
        info!("customer_registered");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: CustomerId) -> Result<(), CustomerError> {
        if !self.repo.exists_with_id(id).await? {
            return Err(CustomerError::NotFound(id));
        }
        self.repo.delete_by_id(id).await?;
        info!("customer_deleted");
        Ok(())
    }

    /// Apply the present, differing fields of `request` and write the full
    /// record back. A request that changes nothing is rejected.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: CustomerId, request: CustomerUpdateRequest) -> Result<(), CustomerError> {
        let current = self.repo.find_by_id(id).await?.ok_or(CustomerError::NotFound(id))?;

        let mut updated = current.clone();
        let mut changed = false;

        if let Some(name) = request.name.filter(|n| *n != current.name) {
            updated.name = name;
            changed = true;
        }

        if let Some(age) = request.age.filter(|a| *a != current.age) {
            updated.age = age;
            changed = true;
        }

        if let Some(email) = request.email.filter(|e| *e != current.email) {
            if self.repo.exists_with_email(&email).await? {
                debug!(%email, "email already taken");
                return Err(CustomerError::Conflict);
            }
            updated.email = email;
            changed = true;
        }

        if !changed {
            debug!("no data changes");
            return Err(CustomerError::no_changes());
        }

        self.repo.update(updated).await?;
        info!("customer_updated");
        Ok(())
    }
}
