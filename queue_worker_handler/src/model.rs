/// A message handed back by `SendMessage`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub body: String,
    pub message_id: Option<String>,
}
