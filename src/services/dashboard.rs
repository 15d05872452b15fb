//! Dashboard endpoint

use reqwest::Method;

use crate::{error::ClientResult, models::dashboard::DashboardStats};

use super::{ApiResponse, LibraryService};

impl LibraryService {
    /// `GET /dashboard`
    pub async fn get_dashboard_stats(&self) -> ClientResult<ApiResponse<DashboardStats>> {
        let request = self.request(Method::GET, &["dashboard"])?;
        self.fetch(request).await
    }
}
