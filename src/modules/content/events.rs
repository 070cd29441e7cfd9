#[derive(Debug, Clone)]
pub struct TranscodeJob {
    pub task_id: String,
    pub content_id: i64,
    pub episode: u32,
    pub source_url: String,
    pub watermark: bool,
}
