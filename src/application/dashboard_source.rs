// Source trait for dashboard data access
use crate::domain::dashboard::{DashboardDocument, DashboardRef};
use crate::domain::error::ApiError;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// List every dashboard the credential can see, in service order
    async fn search_dashboards(&self) -> Result<Vec<DashboardRef>, ApiError>;

    /// Fetch the full JSON body of one dashboard
    async fn fetch_dashboard(&self, dashboard: &DashboardRef) -> Result<DashboardDocument, ApiError>;
}
