pub mod app;
pub mod bar_chart;
pub mod dashboard_page;
pub mod delete_modal;
pub mod layout;
pub mod login_screen;
pub mod products_page;
pub mod stats_card;

pub use app::App;
pub use bar_chart::BarChart;
pub use dashboard_page::DashboardPage;
pub use delete_modal::DeleteModal;
pub use layout::Layout;
pub use login_screen::LoginScreen;
pub use products_page::ProductsPage;
pub use stats_card::StatsCard;

use yew::prelude::*;

use crate::context::AppContext;

/// Props comunes de las páginas
#[derive(Properties, PartialEq, Clone)]
pub struct PageProps {
    pub ctx: AppContext,
}
