#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum Model {
    #[strum(to_string = "claude-3-5-sonnet-20241022")]
    Claude35Sonnet20241022,
    #[strum(to_string = "claude-3-5-sonnet-latest")]
    Claude35SonnetLatest,
    #[strum(to_string = "claude-3-5-haiku-20241022")]
    Claude35Haiku20241022,
    #[strum(to_string = "claude-3-5-haiku-latest")]
    Claude35HaikuLatest,
    #[strum(to_string = "claude-3-opus-latest")]
    Claude3OpusLatest,
    #[strum(to_string = "claude-3-haiku-20240307")]
    Claude3Haiku20240307,
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}
