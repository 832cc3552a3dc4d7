//! Question command - ask, show, list, and delete questions

use qna::models::{AnswerId, QuestionId};
use qna::output::{
    AnswerInfo, HistoryInfo, HistoryListResult, OperationResult, QuestionInfo,
    QuestionListResult, QuestionShowResult,
};

use super::{Context, parse_id};
use crate::cli::app::QuestionAction;

/// Handle question subcommands
pub fn question_cmd(ctx: &Context, action: QuestionAction) -> anyhow::Result<()> {
    match action {
        QuestionAction::Ask { title, contents } => ask(ctx, &title, &contents),
        QuestionAction::List => list(ctx),
        QuestionAction::Show { id } => show(ctx, parse_id(&id)?),
        QuestionAction::Delete { id } => delete(ctx, parse_id(&id)?),
        QuestionAction::RemoveAnswer {
            question_id,
            answer_id,
        } => remove_answer(ctx, parse_id(&question_id)?, parse_id(&answer_id)?),
    }
}

fn ask(ctx: &Context, title: &str, contents: &str) -> anyhow::Result<()> {
    let service = ctx.service();
    let login_user = ctx.login_user(&service)?;
    let question = service.ask(&login_user, title, contents)?;
    service.flush()?;

    let id = question.id.map(|id| id.get());
    OperationResult::ok(format!("Asked question #{}: {title}", id.unwrap_or_default()), id)
        .render(ctx.mode());
    Ok(())
}

fn list(ctx: &Context) -> anyhow::Result<()> {
    let questions = ctx.service().active_questions()?;
    QuestionListResult {
        questions: questions.iter().map(QuestionInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}

fn show(ctx: &Context, id: QuestionId) -> anyhow::Result<()> {
    let service = ctx.service();
    let question = service.find_question(id)?;
    let answers = service.active_answers(id)?;

    QuestionShowResult {
        question: QuestionInfo::from(&question),
        answers: answers.iter().map(AnswerInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}

fn delete(ctx: &Context, id: QuestionId) -> anyhow::Result<()> {
    let service = ctx.service();
    let login_user = ctx.login_user(&service)?;
    let histories = service.delete_question(&login_user, id)?;
    service.flush()?;

    HistoryListResult {
        histories: histories.iter().map(HistoryInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}

fn remove_answer(
    ctx: &Context,
    question_id: QuestionId,
    answer_id: AnswerId,
) -> anyhow::Result<()> {
    let service = ctx.service();
    if !service.remove_answer(question_id, answer_id)? {
        anyhow::bail!("Answer #{answer_id} is not attached to question #{question_id}");
    }
    service.flush()?;

    OperationResult::ok(format!("Removed answer #{answer_id}"), Some(answer_id.get()))
        .render(ctx.mode());
    Ok(())
}
