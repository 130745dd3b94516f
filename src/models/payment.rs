use crate::entities::payment_entity as payments;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// 支付状态
///
/// 应用层统一使用 READY / DONE / CANCELED / PARTIAL_CANCELED 四个取值。
/// community 库中可能存在旧值 COMPLETED / CANCELLED，读取时分别映射为
/// DONE / CANCELED；其余未知取值不做猜测。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Ready,
    Done,
    Canceled,
    PartialCanceled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Ready => "READY",
            PaymentStatus::Done => "DONE",
            PaymentStatus::Canceled => "CANCELED",
            PaymentStatus::PartialCanceled => "PARTIAL_CANCELED",
        }
    }

    /// 解析数据库中的取值，包括 community 旧值
    pub fn parse_stored(value: &str) -> Option<Self> {
        match value {
            "COMPLETED" => Some(PaymentStatus::Done),
            "CANCELLED" => Some(PaymentStatus::Canceled),
            other => other.parse().ok(),
        }
    }

    /// 计入已结算金额的状态
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Done | PaymentStatus::PartialCanceled)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READY" => Ok(PaymentStatus::Ready),
            "DONE" => Ok(PaymentStatus::Done),
            "CANCELED" => Ok(PaymentStatus::Canceled),
            "PARTIAL_CANCELED" => Ok(PaymentStatus::PartialCanceled),
            other => Err(format!("Unknown payment status: {other}")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    pub user_id: i64,
    /// 最小货币单位
    pub amount: i64,
    #[schema(example = "CARD")]
    pub payment_method: Option<String>,
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentQuery {
    /// 默认 10
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i64,
    pub user_id: i64,
    pub amount: i64,
    pub remain_amount: i64,
    /// 无法识别的旧状态为 None
    pub status: Option<PaymentStatus>,
    /// 数据库中的原始取值
    pub raw_status: String,
    pub payment_method: Option<String>,
    pub order_id: Option<String>,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<payments::Model> for PaymentResponse {
    fn from(payment: payments::Model) -> Self {
        Self {
            id: payment.id,
            user_id: payment.user_id,
            amount: payment.amount,
            remain_amount: payment.remaining(),
            status: payment.status(),
            raw_status: payment.payment_status,
            payment_method: payment.payment_method,
            order_id: payment.order_id,
            transaction_id: payment.transaction_id,
            created_at: payment.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentTotalResponse {
    pub user_id: i64,
    pub settled_count: i64,
    pub total_amount: i64,
}

/// 按状态原值分组的支付统计
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentStatusBreakdown {
    pub status: Option<PaymentStatus>,
    pub raw_status: String,
    pub count: i64,
    pub amount: i64,
    pub remain_amount: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PricingSummaryResponse {
    pub user_id: i64,
    pub payment_count: i64,
    /// 全部支付的原始金额
    pub gross_amount: i64,
    /// 与 /payments/total 相同口径
    pub settled_amount: i64,
    pub canceled_amount: i64,
    pub by_status: Vec<PaymentStatusBreakdown>,
}
