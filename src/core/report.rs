use crate::domain::model::Member;
use crate::utils::error::{Result, RosterError};

/// Renders the roster as CSV with a `tag,name,count` header. Pure; the
/// input is never mutated.
pub fn render_csv(members: &[Member]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["tag", "name", "count"])?;
    for member in members {
        let count = member.count().to_string();
        writer.write_record([member.tag(), member.name(), count.as_str()])?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::ProcessingError {
            message: format!("CSV writer error: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| RosterError::ProcessingError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}

/// One plain line per member for the log channel.
pub fn render_lines(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .map(|m| format!("{} {} ({})", m.tag(), m.name(), m.count()))
        .collect()
}
