//! Meeting command (staff meeting, developer scrum, on-boarding)

use std::io;

use anyhow::{Context, Result};

use super::app::MeetingKind;
use super::output::Output;
use crate::demo::sample_company;
use crate::domain::{IdAllocator, Meeting};

impl MeetingKind {
    fn meetings(self) -> &'static [Meeting] {
        match self {
            MeetingKind::Staff => &[Meeting::Staff],
            MeetingKind::Scrum => &[Meeting::Scrum],
            MeetingKind::Onboarding => &[Meeting::Onboarding],
            MeetingKind::All => &Meeting::ALL,
        }
    }
}

/// Run the selected meetings against the sample company
pub fn run(output: &Output, kind: MeetingKind) -> Result<()> {
    let mut ids = IdAllocator::new();
    let company = sample_company(&mut ids);
    let meetings = kind.meetings();

    if output.is_json() {
        let items: Vec<_> = meetings
            .iter()
            .map(|&m| {
                serde_json::json!({
                    "meeting": m,
                    "present": company.attendance(m),
                })
            })
            .collect();
        if let [single] = items.as_slice() {
            output.data(single);
        } else {
            output.data(&items);
        }
        return Ok(());
    }

    let stdout = io::stdout();
    for (i, &meeting) in meetings.iter().enumerate() {
        if i > 0 {
            output.blank();
        }
        output.verbose_ctx("meeting", &format!("Starting {} meeting", meeting.as_str()));
        let mut out = stdout.lock();
        company
            .hold(meeting, &mut out)
            .with_context(|| format!("Failed to run {} meeting", meeting.as_str()))?;
    }

    Ok(())
}
