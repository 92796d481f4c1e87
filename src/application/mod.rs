// Application layer - Use cases and ports
pub mod fetch;
pub mod graph_service;
pub mod metric_repository;
