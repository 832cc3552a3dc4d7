//! History command - show recorded soft deletes

use qna::output::{HistoryInfo, HistoryListResult};

use super::Context;

/// Show the delete history
pub fn history(ctx: &Context) -> anyhow::Result<()> {
    let histories = ctx.service().delete_histories()?;
    HistoryListResult {
        histories: histories.iter().map(HistoryInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}
