// Application layer - Export use case and its data source seam
pub mod dashboard_source;
pub mod export_service;
