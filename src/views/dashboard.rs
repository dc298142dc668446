/// Dashboard-root metric cards. The backend exposes no stats RPC; the
/// figures are the placeholders the dashboard ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: u32,
    pub icon: &'static str,
}

pub fn stat_cards() -> [MetricCard; 4] {
    [
        MetricCard { label: "Total Users", value: 1248, icon: "total_users" },
        MetricCard { label: "Total Vendors", value: 124, icon: "total_vendors" },
        MetricCard { label: "Total Orders", value: 2430, icon: "total_orders" },
        MetricCard { label: "Active Deliveries", value: 34, icon: "active_deliveries" },
    ]
}

pub fn daily_cards() -> [MetricCard; 2] {
    [
        MetricCard { label: "Daily Average Orders", value: 78, icon: "daily_average_orders" },
        MetricCard { label: "Daily Active Vendors", value: 48, icon: "daily_active_vendors" },
    ]
}
