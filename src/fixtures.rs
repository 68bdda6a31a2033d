//! Static dashboard content.
//!
//! These constants stand in for the responses of a future backend API.

use crate::icons::IconName;
use crate::models::{
    ActivityCategory, ActivityEvent, ChangeType, KpiMetric, MenuEntry, NavItem, OrderRecord, OrderStatus,
    ProductStat, SecondaryMetric, Trend, UserProfile,
};

const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=32&width=32";

const ANALYTICS_ITEMS: &[NavItem] = &[
    NavItem::link("Overview"),
    NavItem::link("Revenue"),
    NavItem::link("Traffic"),
    NavItem::link("Conversions"),
];

const ECOMMERCE_ITEMS: &[NavItem] = &[
    NavItem::link("Products"),
    NavItem::link("Orders"),
    NavItem::link("Customers"),
    NavItem::link("Inventory"),
];

const FINANCE_ITEMS: &[NavItem] = &[
    NavItem::link("Transactions"),
    NavItem::link("Invoices"),
    NavItem::link("Billing"),
];

/// Main navigation tree
pub const MAIN_NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        target: "#",
        icon: Some(IconName::Home),
        badge: None,
        children: &[],
        is_active: true,
    },
    NavItem {
        title: "Analytics",
        target: "#",
        icon: Some(IconName::BarChart),
        badge: Some("New"),
        children: ANALYTICS_ITEMS,
        is_active: false,
    },
    NavItem {
        title: "E-commerce",
        target: "#",
        icon: Some(IconName::ShoppingCart),
        badge: None,
        children: ECOMMERCE_ITEMS,
        is_active: false,
    },
    NavItem {
        title: "Users",
        target: "#",
        icon: Some(IconName::Users),
        badge: Some("12"),
        children: &[],
        is_active: false,
    },
    NavItem {
        title: "Finance",
        target: "#",
        icon: Some(IconName::Wallet),
        badge: None,
        children: FINANCE_ITEMS,
        is_active: false,
    },
    NavItem {
        title: "Reports",
        target: "#",
        icon: Some(IconName::FileText),
        badge: None,
        children: &[],
        is_active: false,
    },
    NavItem {
        title: "Calendar",
        target: "#",
        icon: Some(IconName::Calendar),
        badge: None,
        children: &[],
        is_active: false,
    },
    NavItem {
        title: "Messages",
        target: "#",
        icon: Some(IconName::Inbox),
        badge: Some("3"),
        children: &[],
        is_active: false,
    },
];

/// Settings, help and notifications, pinned below the main tree
pub const SECONDARY_NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Settings",
        target: "#",
        icon: Some(IconName::Settings),
        badge: None,
        children: &[],
        is_active: false,
    },
    NavItem {
        title: "Help & Support",
        target: "#",
        icon: Some(IconName::HelpCircle),
        badge: None,
        children: &[],
        is_active: false,
    },
    NavItem {
        title: "Notifications",
        target: "#",
        icon: Some(IconName::Bell),
        badge: Some("5"),
        children: &[],
        is_active: false,
    },
];

pub const CURRENT_USER: UserProfile = UserProfile {
    name: "John Doe",
    email: "john@company.com",
    role: "Administrator",
    avatar: PLACEHOLDER_AVATAR,
};

pub const USER_MENU: &[MenuEntry] = &[
    MenuEntry::item("Account Settings", Some(IconName::User)),
    MenuEntry::item("Billing", Some(IconName::CreditCard)),
    MenuEntry::item("Notifications", Some(IconName::Bell)),
    MenuEntry::Separator,
    MenuEntry::item("Logout", Some(IconName::LogOut)),
];

pub const ORDER_ACTIONS_MENU: &[MenuEntry] = &[
    MenuEntry::item("View details", Some(IconName::Eye)),
    MenuEntry::Separator,
    MenuEntry::item("Edit order", None),
    MenuEntry::item("Cancel order", None),
];

pub const KPI_METRICS: &[KpiMetric] = &[
    KpiMetric {
        label: "Total Revenue",
        value: "$45,231.89",
        change: "+20.1%",
        change_type: ChangeType::Positive,
        icon: IconName::DollarSign,
        description: "from last month",
    },
    KpiMetric {
        label: "Subscriptions",
        value: "+2350",
        change: "+180.1%",
        change_type: ChangeType::Positive,
        icon: IconName::Users,
        description: "from last month",
    },
    KpiMetric {
        label: "Sales",
        value: "+12,234",
        change: "+19%",
        change_type: ChangeType::Positive,
        icon: IconName::ShoppingCart,
        description: "from last month",
    },
    KpiMetric {
        label: "Active Now",
        value: "+573",
        change: "-2.1%",
        change_type: ChangeType::Negative,
        icon: IconName::Activity,
        description: "from last hour",
    },
];

pub const RECENT_ORDERS: &[OrderRecord] = &[
    OrderRecord {
        id: "ORD-001",
        customer: "Olivia Martin",
        email: "olivia.martin@email.com",
        status: OrderStatus::Completed,
        amount: "$1,999.00",
        avatar: PLACEHOLDER_AVATAR,
    },
    OrderRecord {
        id: "ORD-002",
        customer: "Jackson Lee",
        email: "jackson.lee@email.com",
        status: OrderStatus::Processing,
        amount: "$39.00",
        avatar: PLACEHOLDER_AVATAR,
    },
    OrderRecord {
        id: "ORD-003",
        customer: "Isabella Nguyen",
        email: "isabella.nguyen@email.com",
        status: OrderStatus::Completed,
        amount: "$299.00",
        avatar: PLACEHOLDER_AVATAR,
    },
    OrderRecord {
        id: "ORD-004",
        customer: "William Kim",
        email: "will@email.com",
        status: OrderStatus::Pending,
        amount: "$99.00",
        avatar: PLACEHOLDER_AVATAR,
    },
    OrderRecord {
        id: "ORD-005",
        customer: "Sofia Davis",
        email: "sofia.davis@email.com",
        status: OrderStatus::Completed,
        amount: "$39.00",
        avatar: PLACEHOLDER_AVATAR,
    },
];

pub const RECENT_ACTIVITY: &[ActivityEvent] = &[
    ActivityEvent {
        id: 1,
        description: "New user registered",
        actor: "John Doe",
        time: "2 minutes ago",
        category: ActivityCategory::User,
    },
    ActivityEvent {
        id: 2,
        description: "Order completed",
        actor: "Jane Smith",
        time: "5 minutes ago",
        category: ActivityCategory::Order,
    },
    ActivityEvent {
        id: 3,
        description: "Payment received",
        actor: "Mike Johnson",
        time: "10 minutes ago",
        category: ActivityCategory::Payment,
    },
    ActivityEvent {
        id: 4,
        description: "New product added",
        actor: "Admin",
        time: "15 minutes ago",
        category: ActivityCategory::Product,
    },
];

pub const TOP_PRODUCTS: &[ProductStat] = &[
    ProductStat {
        name: "Wireless Headphones",
        sales: 1234,
        revenue: "$24,680",
        progress: 85,
    },
    ProductStat {
        name: "Smart Watch",
        sales: 987,
        revenue: "$19,740",
        progress: 72,
    },
    ProductStat {
        name: "Laptop Stand",
        sales: 654,
        revenue: "$13,080",
        progress: 58,
    },
    ProductStat {
        name: "USB-C Cable",
        sales: 432,
        revenue: "$8,640",
        progress: 41,
    },
];

pub const SECONDARY_METRICS: &[SecondaryMetric] = &[
    SecondaryMetric {
        label: "Conversion Rate",
        value: "3.2%",
        change: "+0.5%",
        trend: Trend::Up,
        change_type: ChangeType::Positive,
        description: "from last week",
        progress: 32,
    },
    // A falling bounce rate is good news: down arrow, affirmative color
    SecondaryMetric {
        label: "Bounce Rate",
        value: "42.3%",
        change: "-2.1%",
        trend: Trend::Down,
        change_type: ChangeType::Positive,
        description: "from last week",
        progress: 42,
    },
    SecondaryMetric {
        label: "Avg. Session",
        value: "4m 32s",
        change: "+12s",
        trend: Trend::Up,
        change_type: ChangeType::Positive,
        description: "from last week",
        progress: 68,
    },
];
