use crate::decision::domain::head_pose::HeadPoseResult;
use crate::decision::domain::result_sink::FaceResultSink;

/// Sink that reports results through the `log` facade.
///
/// Readiness transitions are logged at info level, every other signal at
/// debug, so steady-state frames stay quiet under the default filter.
pub struct LoggingResultSink {
    last_ready: Option<bool>,
}

impl LoggingResultSink {
    pub fn new() -> Self {
        Self { last_ready: None }
    }

    /// The most recently reported readiness, if any frame has been seen.
    pub fn last_ready(&self) -> Option<bool> {
        self.last_ready
    }
}

impl Default for LoggingResultSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceResultSink for LoggingResultSink {
    fn visibility(&mut self, visible: bool) {
        log::debug!("face visible: {visible}");
    }

    fn expression(&mut self, neutral: bool) {
        log::debug!("neutral expression: {neutral}");
    }

    fn left_eye(&mut self, open: bool) {
        log::debug!("left eye open: {open}");
    }

    fn right_eye(&mut self, open: bool) {
        log::debug!("right eye open: {open}");
    }

    fn head_pose(&mut self, result: &HeadPoseResult) {
        log::debug!("head pose: {result:?}");
    }

    fn requirements_met(&mut self, ready: bool) {
        if self.last_ready != Some(ready) {
            log::info!("capture-ready: {ready}");
            self.last_ready = Some(ready);
        }
    }
}
