pub mod dashboard_viewmodel;
pub mod login_viewmodel;
pub mod products_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use login_viewmodel::{LoginForm, LoginViewModel};
pub use products_viewmodel::{Pagination, ProductsViewModel, ProductsViewState};
