mod common;

use bike_rental_backend::entities::{
    payment_entity as payments, user_entity as users,
};
use bike_rental_backend::models::*;
use bike_rental_backend::services::*;
use bike_rental_backend::AppError;
use common::*;
use migration::SchemaProfile;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set,
    Statement,
};

async fn insert_payment_with_status(
    db: &DatabaseConnection,
    user_id: i64,
    status: &str,
    amount: i64,
) -> Result<payments::Model, AppError> {
    Ok(payments::ActiveModel {
        user_id: Set(user_id),
        amount: Set(amount),
        remain_amount: Set(Some(amount)),
        payment_status: Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?)
}

async fn register_file(db: &DatabaseConnection) -> FileResponse {
    FileService::new(db.clone())
        .register_file(RegisterFileRequest {
            category: Some("inquiry".to_string()),
            original_name: "flat_tire.PNG".to_string(),
            path: "/data/uploads".to_string(),
        })
        .await
        .unwrap()
}

fn inquiry(user_id: i64, file_id: Option<i64>) -> CreateInquiryRequest {
    CreateInquiryRequest {
        user_id,
        title: "Flat tire".to_string(),
        content: Some("Rear tire is flat".to_string()),
        image_url: None,
        file_id,
    }
}

#[tokio::test]
async fn test_duplicate_username_is_unique_violation() {
    for profile in [SchemaProfile::Enterprise, SchemaProfile::Community] {
        let db = setup(profile).await;
        create_user(&db, "rider01").await;

        let err = UserService::new(db.clone(), TEST_BCRYPT_COST)
            .create_user(CreateUserRequest {
                username: "rider01".to_string(),
                name: "Someone else".to_string(),
                password: "Password123".to_string(),
                email: None,
                phone: None,
                card_number: None,
                admin_level: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UniqueViolation(_)), "{profile}: {err:?}");
    }
}

#[tokio::test]
async fn test_rental_with_missing_bike_is_foreign_key_violation() {
    let db = setup(SchemaProfile::Community).await;
    let user = create_user(&db, "rider01").await;

    let err = RentalService::new(db.clone())
        .start_rental(StartRentalRequest {
            user_id: user.id,
            bike_id: 9999,
            start_time: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "{err:?}");
}

#[tokio::test]
async fn test_payment_status_check_depends_on_profile() {
    let db = setup(SchemaProfile::Enterprise).await;
    let user = create_user(&db, "rider01").await;
    let err = insert_payment_with_status(&db, user.id, "INVALID", 1000)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CheckViolation(_)), "{err:?}");
    for status in migration::PAYMENT_STATUSES {
        insert_payment_with_status(&db, user.id, status, 1000)
            .await
            .unwrap();
    }

    let db = setup(SchemaProfile::Community).await;
    let user = create_user(&db, "rider01").await;
    let payment = insert_payment_with_status(&db, user.id, "INVALID", 1000)
        .await
        .unwrap();
    assert_eq!(payment.payment_status, "INVALID");
    assert_eq!(payment.status(), None);
}

#[tokio::test]
async fn test_inquiry_file_uniqueness_depends_on_profile() {
    let db = setup(SchemaProfile::Enterprise).await;
    let user = create_user(&db, "rider01").await;
    let file = register_file(&db).await;
    let service = InquiryService::new(db.clone());
    service.create_inquiry(inquiry(user.id, Some(file.id))).await.unwrap();
    let err = service
        .create_inquiry(inquiry(user.id, Some(file.id)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UniqueViolation(_)), "{err:?}");
    // NULL 不受唯一约束限制
    service.create_inquiry(inquiry(user.id, None)).await.unwrap();
    service.create_inquiry(inquiry(user.id, None)).await.unwrap();

    let db = setup(SchemaProfile::Community).await;
    let user = create_user(&db, "rider01").await;
    let file = register_file(&db).await;
    let service = InquiryService::new(db.clone());
    service.create_inquiry(inquiry(user.id, Some(file.id))).await.unwrap();
    service.create_inquiry(inquiry(user.id, Some(file.id))).await.unwrap();
    assert_eq!(service.list_by_user(user.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_inquiry_with_missing_file_is_foreign_key_violation() {
    let db = setup(SchemaProfile::Community).await;
    let user = create_user(&db, "rider01").await;
    let err = InquiryService::new(db.clone())
        .create_inquiry(inquiry(user.id, Some(42)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "{err:?}");
}

#[tokio::test]
async fn test_coupon_code_is_single_use_across_users() {
    let db = setup(SchemaProfile::Enterprise).await;
    let alice = create_user(&db, "alice").await;
    let bob = create_user(&db, "bob").await;
    let coupons = CouponService::new(db.clone());

    assert!(!coupons.is_redeemed("welcome10").await.unwrap());
    let used = coupons.redeem(alice.id, " welcome10 ").await.unwrap();
    assert_eq!(used.coupon_code, "WELCOME10");
    assert!(coupons.is_redeemed("WELCOME10").await.unwrap());

    let err = coupons.redeem(bob.id, "WELCOME10").await.unwrap_err();
    assert!(matches!(err, AppError::UniqueViolation(_)), "{err:?}");
    let err = coupons.redeem(alice.id, "welcome10").await.unwrap_err();
    assert!(matches!(err, AppError::UniqueViolation(_)), "{err:?}");
}

#[tokio::test]
async fn test_coupon_for_missing_user_is_foreign_key_violation() {
    let db = setup(SchemaProfile::Community).await;
    let err = CouponService::new(db.clone())
        .redeem(777, "SPRING")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "{err:?}");
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let db = setup(SchemaProfile::Community).await;
    let first = create_user(&db, "rider01").await;
    let second = create_user(&db, "rider02").await;
    assert!(second.id > first.id);

    UserService::new(db.clone(), TEST_BCRYPT_COST)
        .delete_user(second.id)
        .await
        .unwrap();
    let third = create_user(&db, "rider03").await;
    assert!(third.id > second.id);
}

#[tokio::test]
async fn test_missing_required_column_is_not_null_violation() {
    let db = setup(SchemaProfile::Enterprise).await;
    let user = create_user(&db, "rider01").await;

    let raw = db
        .execute(Statement::from_sql_and_values(
            db.get_database_backend(),
            "INSERT INTO inquiries (user_id, title) VALUES (?, NULL)",
            [user.id.into()],
        ))
        .await
        .unwrap_err();
    let err = AppError::from(raw);
    assert!(matches!(err, AppError::NotNullViolation(_)), "{err:?}");
    assert!(err.is_constraint_violation());
}

#[tokio::test]
async fn test_updated_at_refreshed_on_every_save() {
    let db = setup(SchemaProfile::Community).await;
    let user = create_user(&db, "rider01").await;
    let before = users::Entity::find_by_id(user.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(before.created_at.is_some());
    assert_eq!(before.created_at, before.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let mut model = before.clone().into_active_model();
    model.name = Set("Renamed".to_string());
    let after = model.update(&db).await.unwrap();

    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
async fn test_deleting_referenced_user_is_foreign_key_violation() {
    let db = setup(SchemaProfile::Enterprise).await;
    let user = create_user(&db, "rider01").await;
    let bike = create_bike(&db, "SN-1", None).await;
    RentalService::new(db.clone())
        .start_rental(StartRentalRequest {
            user_id: user.id,
            bike_id: bike.id,
            start_time: None,
        })
        .await
        .unwrap();

    let users = UserService::new(db.clone(), TEST_BCRYPT_COST);
    let err = users.delete_user(user.id).await.unwrap_err();
    assert!(matches!(err, AppError::ForeignKeyViolation(_)), "{err:?}");
    // 没有级联删除，用户仍在
    assert!(users.get_user_profile(user.id).await.is_ok());

    let err = users.delete_user(12345).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_schema_description_reports_profile() {
    let db = setup(SchemaProfile::Enterprise).await;
    let schema = SchemaService::new(db.clone(), SchemaProfile::Enterprise);
    let description = schema.describe().await.unwrap();
    assert_eq!(description.profile, "enterprise");
    assert_eq!(description.tables.len(), 9);
    assert_eq!(description.applied_migrations.len(), 9);
    assert!(description.pending_migrations.is_empty());

    let health = schema.health().await;
    assert_eq!(health.database, "up");
}
