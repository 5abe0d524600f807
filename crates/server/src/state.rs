use service::customer::{repository::CustomerRepository, CustomerService};

/// Shared handler state; the repository behind the service is chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(customers: CustomerService<dyn CustomerRepository>) -> Self { Self { customers } }
}
