use crate::model::user::User;
use shared::domain::{EmailRequest, EmailTemplateData};

pub const WELCOME_SUBJECT: &str = "Welcome to Our Platform";

pub fn welcome_email(user: &User, shop_url: &str) -> EmailRequest {
    EmailRequest {
        to: user.email.clone(),
        subject: WELCOME_SUBJECT.to_string(),
        data: EmailTemplateData {
            title: WELCOME_SUBJECT.to_string(),
            message: format!(
                "Dear {},\n\n\
                 Thank you for registering with us. We are excited to have you on board!\n\n\
                 Best regards,\nYour Platform Team",
                user.username
            ),
            button: "Start shopping".to_string(),
            link: shop_url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_the_user_by_name() {
        let user = User {
            user_id: 9,
            username: "minh".into(),
            email: "minh@example.com".into(),
            phone_number: None,
            address: None,
            date_of_birth: None,
            created_at: None,
            updated_at: None,
        };

        let email = welcome_email(&user, "http://shop.test");

        assert_eq!(email.to, "minh@example.com");
        assert_eq!(email.subject, "Welcome to Our Platform");
        assert!(email.data.message.starts_with("Dear minh,"));
        assert!(email.data.message.contains("Your Platform Team"));
        assert_eq!(email.data.link, "http://shop.test");
    }
}
