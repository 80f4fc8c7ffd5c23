/// UI layer: egui widgets and egui_plot charts over the prepared
/// [`DashboardData`](crate::state::DashboardData).  No pipeline logic lives
/// here; every chart consumes an already-shaped series.

pub mod charts;
pub mod panels;
pub mod table;
