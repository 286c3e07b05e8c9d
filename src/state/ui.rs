// UI state - transient status-bar notifications
use std::time::Instant;

const MESSAGE_TIMEOUT_SECS: u64 = 5;

pub struct UiState {
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some((message.into(), Instant::now()));
        self.info_message = None;
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.info_message = Some((message.into(), Instant::now()));
        self.error_message = None;
    }

    pub fn clear_expired_messages(&mut self) {
        if let Some((_, at)) = &self.error_message {
            if at.elapsed().as_secs() >= MESSAGE_TIMEOUT_SECS {
                self.error_message = None;
            }
        }
        if let Some((_, at)) = &self.info_message {
            if at.elapsed().as_secs() >= MESSAGE_TIMEOUT_SECS {
                self.info_message = None;
            }
        }
    }
}
