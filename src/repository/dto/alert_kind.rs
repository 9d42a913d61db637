use super::Content;
use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum AlertKind {
    #[strum(serialize = "NEW_CONTENT")]
    NewContent,

    #[strum(serialize = "CONTENT_EXPIRING")]
    ContentExpiring,
}

impl AlertKind {
    pub fn message(&self, content: &Content) -> String {
        match self {
            AlertKind::NewContent => {
                let content_type = content
                    .content_type
                    .map(|content_type| content_type.as_ref().to_lowercase())
                    .unwrap_or_else(|| "content".to_string());

                format!("New {content_type}: '{}'!", content.title)
            }
            AlertKind::ContentExpiring => {
                let expires_on = content
                    .available_until
                    .map(|available_until| available_until.date().to_string())
                    .unwrap_or_else(|| "soon".to_string());

                format!("Content '{}' expires on {expires_on}", content.title)
            }
        }
    }
}
