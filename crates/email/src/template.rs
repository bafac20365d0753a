use askama::{Error, Template};
use shared::domain::EmailTemplateData;
use tracing::{debug, error};

#[derive(Template, Debug)]
#[template(path = "email.html")]
pub struct EmailTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub button: &'a str,
    pub link: &'a str,
}

impl<'a> From<&'a EmailTemplateData> for EmailTemplate<'a> {
    fn from(data: &'a EmailTemplateData) -> Self {
        EmailTemplate {
            title: &data.title,
            message: &data.message,
            button: &data.button,
            link: &data.link,
        }
    }
}

pub fn render_email(data: &EmailTemplateData) -> Result<String, Error> {
    debug!("📧 Rendering email template '{}'", data.title);

    EmailTemplate::from(data)
        .render()
        .inspect_err(|e| error!("❌ Failed to render email template: {e}"))
}
