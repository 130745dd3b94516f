use crate::entities::payment_entity as payments;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::optional_text;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use std::collections::BTreeMap;

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct PaymentService {
    pool: DatabaseConnection,
}

impl PaymentService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建支付，初始状态 READY，remain_amount = amount
    pub async fn create_payment(&self, request: CreatePaymentRequest) -> AppResult<PaymentResponse> {
        if request.amount <= 0 {
            return Err(AppError::ValidationError(
                "amount must be greater than 0".to_string(),
            ));
        }

        let payment = payments::ActiveModel {
            user_id: Set(request.user_id),
            amount: Set(request.amount),
            remain_amount: Set(Some(request.amount)),
            payment_status: Set(PaymentStatus::Ready.to_string()),
            payment_method: Set(optional_text(request.payment_method)),
            order_id: Set(optional_text(request.order_id)),
            transaction_id: Set(optional_text(request.transaction_id)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Payment created: id={} user_id={} amount={}",
            payment.id,
            payment.user_id,
            payment.amount
        );
        Ok(payment.into())
    }

    /// READY -> DONE
    pub async fn complete(
        &self,
        payment_id: i64,
        transaction_id: Option<String>,
    ) -> AppResult<PaymentResponse> {
        let payment = self.find_payment(payment_id).await?;
        let status = current_status(&payment)?;
        if status != PaymentStatus::Ready {
            return Err(AppError::ValidationError(format!(
                "Cannot complete a payment in status {status}"
            )));
        }

        let mut update = payments::Entity::update_many()
            .col_expr(
                payments::Column::PaymentStatus,
                Expr::value(PaymentStatus::Done.to_string()),
            )
            .col_expr(payments::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(tx) = optional_text(transaction_id) {
            update = update.col_expr(payments::Column::TransactionId, Expr::value(tx));
        }
        let result = update
            .filter(unchanged_since_read(&payment))
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(concurrent_change(payment_id));
        }

        log::info!("Payment {payment_id} completed");
        Ok(self.find_payment(payment_id).await?.into())
    }

    /// 取消支付
    ///
    /// - amount 为 None 表示取消剩余全部金额
    /// - READY 状态只能全额取消
    /// - 剩余金额大于 0 时为 PARTIAL_CANCELED，为 0 时为 CANCELED
    ///
    /// 写入时以读取到的状态和剩余金额为条件，并发取消不会重复扣减
    pub async fn cancel(&self, payment_id: i64, amount: Option<i64>) -> AppResult<PaymentResponse> {
        let payment = self.find_payment(payment_id).await?;
        let status = current_status(&payment)?;
        let remaining = payment.remaining();

        let cancel_amount = match status {
            PaymentStatus::Canceled => {
                return Err(AppError::ValidationError(
                    "Payment is already canceled".to_string(),
                ));
            }
            PaymentStatus::Ready => match amount {
                None => remaining,
                Some(a) if a == remaining => a,
                Some(_) => {
                    return Err(AppError::ValidationError(
                        "A payment that is not yet done can only be canceled in full".to_string(),
                    ));
                }
            },
            PaymentStatus::Done | PaymentStatus::PartialCanceled => amount.unwrap_or(remaining),
        };

        if cancel_amount <= 0 || cancel_amount > remaining {
            return Err(AppError::ValidationError(format!(
                "Cancel amount must be between 1 and {remaining}"
            )));
        }

        let left = remaining - cancel_amount;
        let next = if left == 0 {
            PaymentStatus::Canceled
        } else {
            PaymentStatus::PartialCanceled
        };

        let result = payments::Entity::update_many()
            .col_expr(payments::Column::RemainAmount, Expr::value(Some(left)))
            .col_expr(payments::Column::PaymentStatus, Expr::value(next.to_string()))
            .col_expr(payments::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(unchanged_since_read(&payment))
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(concurrent_change(payment_id));
        }

        log::info!("Payment {payment_id} canceled {cancel_amount}, remaining {left} ({next})");
        Ok(self.find_payment(payment_id).await?.into())
    }

    /// 最近的支付记录
    pub async fn list_recent(&self, user_id: i64, query: &PaymentQuery) -> AppResult<Vec<PaymentResponse>> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(AppError::ValidationError(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let list = payments::Entity::find()
            .filter(payments::Column::UserId.eq(user_id))
            .order_by_desc(payments::Column::CreatedAt)
            .order_by_desc(payments::Column::Id)
            .limit(limit)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 已结算金额合计 (DONE / PARTIAL_CANCELED，含旧值 COMPLETED)
    pub async fn total(&self, user_id: i64) -> AppResult<PaymentTotalResponse> {
        let list = payments::Entity::find()
            .filter(payments::Column::UserId.eq(user_id))
            .all(&self.pool)
            .await?;

        let settled: Vec<&payments::Model> = list
            .iter()
            .filter(|p| p.status().is_some_and(|s| s.is_settled()))
            .collect();

        Ok(PaymentTotalResponse {
            user_id,
            settled_count: settled.len() as i64,
            total_amount: settled.iter().map(|p| p.remaining()).sum(),
        })
    }

    /// 费用汇总: 按状态分组的笔数与金额
    pub async fn pricing_summary(&self, user_id: i64) -> AppResult<PricingSummaryResponse> {
        let list = payments::Entity::find()
            .filter(payments::Column::UserId.eq(user_id))
            .all(&self.pool)
            .await?;

        let mut groups: BTreeMap<String, PaymentStatusBreakdown> = BTreeMap::new();
        let mut summary = PricingSummaryResponse {
            user_id,
            payment_count: list.len() as i64,
            gross_amount: 0,
            settled_amount: 0,
            canceled_amount: 0,
            by_status: Vec::new(),
        };
        for payment in &list {
            let status = payment.status();
            let remaining = payment.remaining();
            summary.gross_amount += payment.amount;
            if status.is_some_and(|s| s.is_settled()) {
                summary.settled_amount += remaining;
            }
            if status.is_some() {
                summary.canceled_amount += payment.amount - remaining;
            }

            let entry = groups
                .entry(payment.payment_status.clone())
                .or_insert_with(|| PaymentStatusBreakdown {
                    status,
                    raw_status: payment.payment_status.clone(),
                    count: 0,
                    amount: 0,
                    remain_amount: 0,
                });
            entry.count += 1;
            entry.amount += payment.amount;
            entry.remain_amount += remaining;
        }
        summary.by_status = groups.into_values().collect();

        Ok(summary)
    }

    async fn find_payment(&self, payment_id: i64) -> AppResult<payments::Model> {
        payments::Entity::find_by_id(payment_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))
    }
}

/// 与读取时相同的行: 状态原值和剩余金额都未变化
fn unchanged_since_read(payment: &payments::Model) -> Condition {
    let remain = match payment.remain_amount {
        Some(v) => payments::Column::RemainAmount.eq(v),
        None => payments::Column::RemainAmount.is_null(),
    };
    Condition::all()
        .add(payments::Column::Id.eq(payment.id))
        .add(payments::Column::PaymentStatus.eq(payment.payment_status.as_str()))
        .add(remain)
}

fn concurrent_change(payment_id: i64) -> AppError {
    AppError::Conflict(format!(
        "Payment {payment_id} was modified concurrently, retry the operation"
    ))
}

fn current_status(payment: &payments::Model) -> AppResult<PaymentStatus> {
    payment.status().ok_or_else(|| {
        AppError::ValidationError(format!(
            "Payment {} has unrecognized status {}",
            payment.id, payment.payment_status
        ))
    })
}
