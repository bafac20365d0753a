use crate::model::{order::Order, user::User, variant::Variant};
use shared::domain::{EmailRequest, EmailTemplateData};

pub const ORDER_CONFIRMATION_SUBJECT: &str = "Order Confirmation";

pub struct OrderConfirmation<'a> {
    pub user: &'a User,
    pub order: &'a Order,
    pub variant: &'a Variant,
    pub quantity: i32,
    pub total_price: f64,
}

impl OrderConfirmation<'_> {
    pub fn body(&self) -> String {
        format!(
            "Dear {},\n\n\
             Thank you for your order!\n\n\
             Order Details:\n\
             - Order ID: {}\n\
             - Product: {}\n\
             - Variant: {}\n\
             - Quantity: {}\n\
             - Total Price: ${:.2}\n\n\
             Shipping to: {}\n\
             Payment Method: {}\n\n\
             Best regards,\nYour Store Team",
            self.user.username,
            self.order.order_id,
            self.variant.product_name,
            self.variant.sku,
            self.quantity,
            self.total_price,
            self.order.ship_address,
            self.order.payment,
        )
    }

    pub fn to_email(&self, orders_link: &str) -> EmailRequest {
        EmailRequest {
            to: self.user.email.clone(),
            subject: ORDER_CONFIRMATION_SUBJECT.to_string(),
            data: EmailTemplateData {
                title: ORDER_CONFIRMATION_SUBJECT.to_string(),
                message: self.body(),
                button: "View my orders".to_string(),
                link: orders_link.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn body_lists_every_order_fact() {
        let user = User {
            user_id: 4,
            username: "linh".into(),
            email: "linh@example.com".into(),
            phone_number: Some("0901234567".into()),
            address: None,
            date_of_birth: None,
            created_at: None,
            updated_at: None,
        };
        let order = Order {
            order_id: 77,
            user_id: 4,
            discount_id: None,
            note: None,
            ship_address: "12 Le Loi, Hue".into(),
            ship_date: NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            payment: "COD".into(),
            created_at: None,
            updated_at: None,
        };
        let variant = Variant {
            variant_id: 3,
            product_id: 1,
            product_name: "Galaxy S24".into(),
            sku: "S24-256-GRY".into(),
            memory: None,
            color: None,
            quantity: 5,
            price: 900.0,
            compare_at_price: None,
            img: None,
            created_at: None,
            updated_at: None,
        };

        let email = OrderConfirmation {
            user: &user,
            order: &order,
            variant: &variant,
            quantity: 2,
            total_price: 1620.5,
        }
        .to_email("https://shop.example/order/my-orders/");

        assert_eq!(email.to, "linh@example.com");
        assert_eq!(email.subject, "Order Confirmation");
        for expected in [
            "Dear linh,",
            "- Order ID: 77",
            "- Product: Galaxy S24",
            "- Variant: S24-256-GRY",
            "- Quantity: 2",
            "- Total Price: $1620.50",
            "Shipping to: 12 Le Loi, Hue",
            "Payment Method: COD",
        ] {
            assert!(email.data.message.contains(expected), "missing {expected}");
        }
    }
}
