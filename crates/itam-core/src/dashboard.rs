//! # Dashboard Data
//!
//! Mock analytics rendered by the dashboard module: KPI cards, four trend
//! charts, the recent-activity table and the alerts panel. Everything here is
//! static sample data; the selected [`DateRange`] is echoed back but does not
//! filter anything.
//!
//! The header also carries a "Quick Access" menu ([`QuickLink`]) whose
//! entries jump straight to a sidebar module.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ModuleId;

/// Period selector above the KPI cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    ThisWeek,
    #[default]
    ThisMonth,
    ThisQuarter,
}

impl DateRange {
    pub const fn label(self) -> &'static str {
        match self {
            DateRange::ThisWeek => "This Week",
            DateRange::ThisMonth => "This Month",
            DateRange::ThisQuarter => "This Quarter",
        }
    }

    /// Caption next to the selector buttons.
    pub fn caption(self) -> String {
        format!("Currently viewing: {}", self.label())
    }
}

/// One headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub trend: String,
}

/// How a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
}

/// One plotted series, one value per chart month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub key: String,
    pub label: String,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub title: String,
    pub description: String,
    pub kind: ChartKind,
    pub months: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// A row of the recent-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub activity: String,
    pub user: String,
    pub time: String,
}

/// Category of an alert; decides the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Alert,
    Approval,
    Warning,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AlertEntry {
    pub kind: AlertKind,
    pub message: String,
    pub time: String,
}

/// Entry in the header's "Quick Access" menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub label: String,
    pub module: ModuleId,
}

impl QuickLink {
    fn new(label: &str, module: ModuleId) -> Self {
        QuickLink {
            label: label.to_string(),
            module,
        }
    }
}

/// Menu order. Support tickets are handled by the chatbot module.
pub fn quick_access() -> Vec<QuickLink> {
    vec![
        QuickLink::new("User Management", ModuleId::Users),
        QuickLink::new("Asset Inventory", ModuleId::Assets),
        QuickLink::new("Purchase Requests", ModuleId::Purchases),
        QuickLink::new("Support Tickets", ModuleId::Chatbot),
    ]
}

/// Everything the dashboard module renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub date_range: DateRange,
    pub kpis: Vec<KpiCard>,
    pub charts: Vec<Chart>,
    pub recent_activity: Vec<ActivityEntry>,
    pub alerts: Vec<AlertEntry>,
    pub quick_access: Vec<QuickLink>,
}

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

fn kpi(title: &str, value: &str, trend: &str) -> KpiCard {
    KpiCard {
        title: title.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
    }
}

fn series(key: &str, label: &str, values: [u32; 6]) -> ChartSeries {
    ChartSeries {
        key: key.to_string(),
        label: label.to_string(),
        values: values.to_vec(),
    }
}

fn chart(title: &str, description: &str, kind: ChartKind, series: Vec<ChartSeries>) -> Chart {
    Chart {
        title: title.to_string(),
        description: description.to_string(),
        kind,
        months: MONTHS.iter().map(|m| m.to_string()).collect(),
        series,
    }
}

fn activity(activity: &str, user: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        activity: activity.to_string(),
        user: user.to_string(),
        time: time.to_string(),
    }
}

fn alert(kind: AlertKind, message: &str, time: &str) -> AlertEntry {
    AlertEntry {
        kind,
        message: message.to_string(),
        time: time.to_string(),
    }
}

impl DashboardSnapshot {
    /// Builds the sample dashboard for `date_range`.
    pub fn sample(date_range: DateRange) -> Self {
        DashboardSnapshot {
            date_range,
            kpis: vec![
                kpi("Total Assets", "1,542", "+5% from last month"),
                kpi("Pending Requests", "23", "-12% from last month"),
                kpi("Low Stock Items", "8", "+2 from last month"),
                kpi("Open Tickets", "32", "+6% from last month"),
            ],
            charts: vec![
                chart(
                    "Asset Allocation Over Time",
                    "Distribution of IT assets over the past 6 months",
                    ChartKind::Line,
                    vec![
                        series("laptops", "Laptops", [65, 70, 75, 80, 85, 90]),
                        series("desktops", "Desktops", [45, 42, 40, 38, 35, 32]),
                        series("tablets", "Tablets", [30, 32, 35, 38, 40, 43]),
                        series("phones", "Phones", [25, 28, 30, 32, 35, 38]),
                    ],
                ),
                chart(
                    "Request Fulfillment Rate",
                    "Approved vs. pending requests over time",
                    ChartKind::Bar,
                    vec![
                        series("approved", "Approved", [45, 50, 55, 48, 60, 65]),
                        series("pending", "Pending", [15, 12, 18, 22, 10, 8]),
                    ],
                ),
                chart(
                    "Stock Level Trends",
                    "Inventory changes over the last 6 months",
                    ChartKind::Area,
                    vec![series("stock", "Stock Level", [150, 130, 110, 90, 120, 140])],
                ),
                chart(
                    "Faulty Equipment Trends",
                    "Frequency of equipment failures over time",
                    ChartKind::Line,
                    vec![series("failures", "Equipment Failures", [12, 18, 15, 10, 8, 6])],
                ),
            ],
            recent_activity: vec![
                activity("User Login", "John Smith", "10 minutes ago"),
                activity("Laptop requisition", "Sarah Johnson", "1 hour ago"),
                activity("MacBook Pro assigned", "Robert Lee", "3 hours ago"),
                activity("WiFi connectivity issue", "Maria Garcia", "5 hours ago"),
            ],
            alerts: vec![
                alert(AlertKind::Alert, "Server maintenance scheduled for tonight", "1 hour ago"),
                alert(AlertKind::Approval, "5 purchase requests pending approval", "3 hours ago"),
                alert(AlertKind::Warning, "Printer cartridges running low", "5 hours ago"),
                alert(
                    AlertKind::Maintenance,
                    "Quarterly workstation maintenance due",
                    "1 day ago",
                ),
            ],
            quick_access: quick_access(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_caption() {
        assert_eq!(DateRange::default(), DateRange::ThisMonth);
        assert_eq!(DateRange::ThisQuarter.caption(), "Currently viewing: This Quarter");
    }

    #[test]
    fn test_series_cover_every_month() {
        let snapshot = DashboardSnapshot::sample(DateRange::ThisWeek);
        assert_eq!(snapshot.kpis.len(), 4);
        for chart in &snapshot.charts {
            for s in &chart.series {
                assert_eq!(s.values.len(), chart.months.len(), "{}", s.key);
            }
        }
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(DashboardSnapshot::sample(DateRange::ThisWeek)).unwrap();
        assert_eq!(json["dateRange"], "thisWeek");
        assert_eq!(json["recentActivity"][0]["user"], "John Smith");
        assert_eq!(json["charts"][1]["kind"], "bar");
        assert_eq!(json["quickAccess"][0]["label"], "User Management");
    }

    #[test]
    fn test_quick_access_menu() {
        let labels: Vec<(String, ModuleId)> = quick_access()
            .into_iter()
            .map(|link| (link.label, link.module))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("User Management".to_string(), ModuleId::Users),
                ("Asset Inventory".to_string(), ModuleId::Assets),
                ("Purchase Requests".to_string(), ModuleId::Purchases),
                ("Support Tickets".to_string(), ModuleId::Chatbot),
            ]
        );
        assert_eq!(DashboardSnapshot::sample(DateRange::ThisMonth).quick_access, quick_access());
    }
}
