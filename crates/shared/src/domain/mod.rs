mod email;

pub use self::email::{
    EmailRequest, EmailTemplateData, ORDER_CONFIRMATION_TOPIC, USER_REGISTERED_TOPIC,
};
