//! Answer command - add, list, and delete answers

use qna::models::{AnswerId, QuestionId};
use qna::output::{AnswerInfo, AnswerListResult, HistoryInfo, HistoryListResult, OperationResult};

use super::{Context, parse_id};
use crate::cli::app::AnswerAction;

/// Handle answer subcommands
pub fn answer_cmd(ctx: &Context, action: AnswerAction) -> anyhow::Result<()> {
    match action {
        AnswerAction::Add {
            question_id,
            contents,
        } => add(ctx, parse_id(&question_id)?, &contents),
        AnswerAction::List { question_id } => list(ctx, parse_id(&question_id)?),
        AnswerAction::Delete { id } => delete(ctx, parse_id(&id)?),
    }
}

fn add(ctx: &Context, question_id: QuestionId, contents: &str) -> anyhow::Result<()> {
    let service = ctx.service();
    let login_user = ctx.login_user(&service)?;
    let answer = service.answer(&login_user, question_id, contents)?;
    service.flush()?;

    let id = answer.id.map(|id| id.get());
    OperationResult::ok(
        format!("Answered question #{question_id} (answer #{})", id.unwrap_or_default()),
        id,
    )
    .render(ctx.mode());
    Ok(())
}

fn list(ctx: &Context, question_id: QuestionId) -> anyhow::Result<()> {
    let answers = ctx.service().active_answers(question_id)?;
    AnswerListResult {
        question_id: question_id.get(),
        answers: answers.iter().map(AnswerInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}

fn delete(ctx: &Context, id: AnswerId) -> anyhow::Result<()> {
    let service = ctx.service();
    let login_user = ctx.login_user(&service)?;
    let history = service.delete_answer(&login_user, id)?;
    service.flush()?;

    HistoryListResult {
        histories: vec![HistoryInfo::from(&history)],
    }
    .render(ctx.mode());
    Ok(())
}
