//! Immutable record types rendered by the dashboard.
//!
//! Every record is `'static` fixture data standing in for a future API
//! response. Nothing here is created, updated or destroyed at runtime.

use crate::icons::IconName;

/// A sidebar navigation entry. Entries with children render as collapsible
/// sections; entries without render as direct links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    /// Placeholder navigation target
    pub target: &'static str,
    pub icon: Option<IconName>,
    pub badge: Option<&'static str>,
    pub children: &'static [NavItem],
    pub is_active: bool,
}

impl NavItem {
    /// A plain child link with no icon, badge or children
    pub const fn link(title: &'static str) -> Self {
        Self {
            title,
            target: "#",
            icon: None,
            badge: None,
            children: &[],
            is_active: false,
        }
    }

    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Polarity of a metric change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Positive,
    Negative,
}

/// Direction an arrow points, independent of whether the change is good
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl ChangeType {
    /// Arrow direction conventionally paired with this polarity
    #[must_use]
    pub fn trend(self) -> Trend {
        match self {
            ChangeType::Positive => Trend::Up,
            ChangeType::Negative => Trend::Down,
        }
    }
}

/// Key performance indicator card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiMetric {
    pub label: &'static str,
    pub value: &'static str,
    /// Signed percentage, e.g. "+20.1%"
    pub change: &'static str,
    pub change_type: ChangeType,
    pub icon: IconName,
    pub description: &'static str,
}

/// Smaller metric card with a progress gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub change_type: ChangeType,
    pub description: &'static str,
    pub progress: u16,
}

/// Order fulfilment state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Processing,
    Pending,
    /// Any label outside the known set
    Other(&'static str),
}

impl OrderStatus {
    /// Parse a status label. Unknown labels are kept as [`OrderStatus::Other`].
    #[must_use]
    pub fn from_label(label: &'static str) -> Self {
        match label {
            "Completed" => OrderStatus::Completed,
            "Processing" => OrderStatus::Processing,
            "Pending" => OrderStatus::Pending,
            other => OrderStatus::Other(other),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Pending => "Pending",
            OrderStatus::Other(label) => *label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRecord {
    pub id: &'static str,
    pub customer: &'static str,
    pub email: &'static str,
    pub status: OrderStatus,
    /// Preformatted amount, e.g. "$1,999.00"
    pub amount: &'static str,
    pub avatar: &'static str,
}

/// Activity category, only used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    User,
    Order,
    Payment,
    Product,
}

impl ActivityCategory {
    #[must_use]
    pub fn icon(self) -> IconName {
        match self {
            ActivityCategory::User => IconName::Users,
            ActivityCategory::Order => IconName::ShoppingCart,
            ActivityCategory::Payment => IconName::DollarSign,
            ActivityCategory::Product => IconName::Plus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityEvent {
    pub id: u32,
    pub description: &'static str,
    pub actor: &'static str,
    /// Relative timestamp, e.g. "2 minutes ago"
    pub time: &'static str,
    pub category: ActivityCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductStat {
    pub name: &'static str,
    pub sales: u32,
    pub revenue: &'static str,
    /// Ratio in percent, 0-100
    pub progress: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

impl UserProfile {
    /// Avatar fallback text
    #[must_use]
    pub fn initials(&self) -> String {
        crate::utils::text::initials(self.name)
    }
}

/// Entry of a dropdown menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item { label: &'static str, icon: Option<IconName> },
    Separator,
}

impl MenuEntry {
    pub const fn item(label: &'static str, icon: Option<IconName>) -> Self {
        MenuEntry::Item { label, icon }
    }

    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, MenuEntry::Item { .. })
    }

    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Item { label, .. } => Some(*label),
            MenuEntry::Separator => None,
        }
    }
}
