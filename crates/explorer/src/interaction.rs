//! The interaction port: the narrow surface through which flows talk to
//! the user. Editor hosts back it with modal dialogs and input boxes; the
//! terminal host backs it with stdin/stdout; tests back it with scripted
//! doubles.

use async_trait::async_trait;

/// How loudly to surface a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// User-facing dialogs and notifications.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Yes/no question. `false` means the user declined or dismissed it.
    async fn confirm(&self, message: &str) -> bool;

    /// Free-text input. `None` means the user cancelled.
    async fn prompt(&self, message: &str) -> Option<String>;

    /// Like [`Self::prompt`] but the input should not be echoed (tokens).
    async fn prompt_secret(&self, message: &str) -> Option<String> {
        self.prompt(message).await
    }

    /// Fire-and-forget notification.
    fn notify(&self, severity: Severity, message: &str);
}

/// Scripted interaction double for tests.
///
/// Answers dialogs from pre-loaded queues and records everything it was
/// asked, so tests can assert on prompts, confirmations, and notices
/// without a real UI.
pub mod test_support {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{Interaction, Severity};

    #[derive(Default)]
    pub struct Scripted {
        confirm_answers: Mutex<VecDeque<bool>>,
        prompt_answers: Mutex<VecDeque<Option<String>>>,
        confirms_asked: Mutex<Vec<String>>,
        prompts_asked: Mutex<Vec<String>>,
        notices: Mutex<Vec<(Severity, String)>>,
    }

    impl Scripted {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue the answer for the next confirmation dialog.
        pub fn answer_confirm(&self, answer: bool) {
            self.confirm_answers.lock().unwrap().push_back(answer);
        }

        /// Queue the answer for the next prompt.
        pub fn answer_prompt(&self, answer: Option<&str>) {
            self.prompt_answers
                .lock()
                .unwrap()
                .push_back(answer.map(str::to_string));
        }

        pub fn confirms_asked(&self) -> Vec<String> {
            self.confirms_asked.lock().unwrap().clone()
        }

        pub fn prompts_asked(&self) -> Vec<String> {
            self.prompts_asked.lock().unwrap().clone()
        }

        pub fn notices(&self) -> Vec<(Severity, String)> {
            self.notices.lock().unwrap().clone()
        }

        /// Messages notified at `Severity::Error`.
        pub fn errors(&self) -> Vec<String> {
            self.notices()
                .into_iter()
                .filter(|(severity, _)| *severity == Severity::Error)
                .map(|(_, message)| message)
                .collect()
        }
    }

    #[async_trait]
    impl Interaction for Scripted {
        /// Unscripted confirmations decline, matching a dismissed dialog.
        async fn confirm(&self, message: &str) -> bool {
            self.confirms_asked.lock().unwrap().push(message.to_string());
            self.confirm_answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(false)
        }

        async fn prompt(&self, message: &str) -> Option<String> {
            self.prompts_asked.lock().unwrap().push(message.to_string());
            self.prompt_answers
                .lock()
                .unwrap()
                .pop_front()
                .flatten()
        }

        fn notify(&self, severity: Severity, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }
}
