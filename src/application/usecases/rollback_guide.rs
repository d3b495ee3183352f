//! 롤백 안내 유스케이스.

use crate::application::ports::{Reporter, Tone};
use crate::domain::rollback::{rollback_steps, rollback_title};

pub struct RollbackGuideUseCase<'a> {
    pub config_name: &'a str,
    pub reporter: &'a dyn Reporter,
}

impl<'a> RollbackGuideUseCase<'a> {
    pub fn execute(&self, number: &str) {
        let number = number.trim();
        let mut lines = vec![format!("To rollback to snapshot {number}:")];
        lines.extend(rollback_steps(self.config_name, number));
        self.reporter.panel(&rollback_title(number), &lines, Tone::Warning);
    }
}
