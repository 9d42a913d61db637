use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum ContentType {
    #[strum(serialize = "AUDIO")]
    Audio,

    #[strum(serialize = "VIDEO")]
    Video,
}
