//! User command - register and list users

use qna::models::User;
use qna::output::{OperationResult, UserInfo, UserListResult};

use super::Context;
use crate::cli::app::UserAction;

/// Handle user subcommands
pub fn user_cmd(ctx: &Context, action: UserAction) -> anyhow::Result<()> {
    match action {
        UserAction::Add {
            user_id,
            password,
            name,
            email,
        } => add(ctx, User::new(user_id, password, name, email)),
        UserAction::List => list(ctx),
    }
}

fn add(ctx: &Context, user: User) -> anyhow::Result<()> {
    let service = ctx.service();
    let user = service.register_user(&user)?;
    service.flush()?;

    OperationResult::ok(
        format!("Registered user: {}", user.user_id),
        user.id.map(|id| id.get()),
    )
    .render(ctx.mode());
    Ok(())
}

fn list(ctx: &Context) -> anyhow::Result<()> {
    let users = ctx.service().users()?;
    UserListResult {
        users: users.iter().map(UserInfo::from).collect(),
    }
    .render(ctx.mode());
    Ok(())
}
