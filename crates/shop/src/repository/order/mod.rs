mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

pub(crate) const ORDER_COLUMNS: &str = r#"
    o.order_id, o.user_id, o.discount_id, o.note, o.ship_address, o.ship_date, o.payment,
    o.created_at, o.updated_at
"#;
