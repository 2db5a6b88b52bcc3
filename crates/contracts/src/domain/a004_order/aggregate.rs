use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Статус заказа
// ============================================================================

/// Статус исполнения заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Название для UI
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидает оплаты",
            OrderStatus::Paid => "Оплачен",
            OrderStatus::Shipped => "Отгружен",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    /// Допустимые переходы: бэкенд проверяет то же самое, UI лишь не
    /// показывает кнопки для запрещённых переходов.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Cancelled)
                | (Paid, Shipped)
                | (Paid, Cancelled)
                | (Shipped, Delivered)
        )
    }

    /// Статусы, в которые можно перевести заказ из текущего
    pub fn allowed_transitions(&self) -> Vec<OrderStatus> {
        Self::ALL
            .into_iter()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Строка заказа
// ============================================================================

/// Строка заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// ID товара (ссылка на a002_product)
    #[serde(rename = "productRef")]
    pub product_ref: String,

    /// ID варианта (ссылка на a003_variant)
    #[serde(rename = "variantRef")]
    pub variant_ref: Option<String>,

    /// Название на момент покупки
    pub title: String,

    pub qty: i32,

    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.qty as f64
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ покупателя
///
/// `base.code` — номер заказа ("ORD-2025-001").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    /// ID покупателя (ссылка на a005_consumer)
    #[serde(rename = "consumerRef")]
    pub consumer_ref: String,

    pub status: OrderStatus,

    pub lines: Vec<OrderLine>,

    /// Сумма по строкам
    #[serde(rename = "itemsTotal")]
    pub items_total: f64,

    /// Стоимость доставки
    #[serde(rename = "shippingFee")]
    pub shipping_fee: f64,

    /// Итого к оплате
    #[serde(rename = "grandTotal")]
    pub grand_total: f64,

    /// Дата оформления
    #[serde(rename = "orderedAt")]
    pub ordered_at: chrono::DateTime<chrono::Utc>,
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Заказ"
    }

    fn list_name() -> &'static str {
        "Заказы"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Запрос смены статуса заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_are_uppercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"SHIPPED\""
        );
        let status: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn transitions_follow_fulfillment_flow() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Paid));
        assert!(OrderStatus::Paid.can_transition_to(OrderStatus::Shipped));
        assert!(OrderStatus::Shipped.can_transition_to(OrderStatus::Delivered));

        // Назад и через ступень — нельзя
        assert!(!OrderStatus::Shipped.can_transition_to(OrderStatus::Paid));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        // Доставленный и отменённый — терминальные
        assert!(OrderStatus::Delivered.allowed_transitions().is_empty());
        assert!(OrderStatus::Cancelled.allowed_transitions().is_empty());
    }

    #[test]
    fn line_total_multiplies_qty() {
        let line = OrderLine {
            product_ref: "p1".to_string(),
            variant_ref: None,
            title: "Кроссовки".to_string(),
            qty: 3,
            unit_price: 49.9,
        };
        assert!((line.line_total() - 149.7).abs() < 1e-9);
    }
}
