use rand::seq::SliceRandom;

use crate::actions::classifier::{Decision, MessageContext, Rule};

/// Markup dialect of the chat sink, so rendering does not bake in Telegram's
/// HTML flavor.
pub trait Markup {
    fn bold(&self, text: &str) -> String;
}

/// Telegram's HTML parse mode.
pub struct TelegramHtml;

impl Markup for TelegramHtml {
    fn bold(&self, text: &str) -> String {
        format!("<b>{}</b>", text)
    }
}

/// Pool the Done notification draws one phrase from, per event. No memory
/// between events, repeats are fine.
pub const APPRECIATIONS: &[&str] = &[
    "Fantastic work, keep it up! 👏",
    "Another one shipped! 🚀",
    "Smooth as always, great job! ✨",
    "The team appreciates the hustle! 💪",
    "That one looked great, nice work! 🙌",
];

pub fn render(decision: &Decision, markup: &dyn Markup) -> String {
    match decision.def.rule {
        Rule::ApprovalRequested => approval_requested(&decision.ctx, markup),
        Rule::ApprovalDone => approval_done(&decision.ctx, markup),
    }
}

fn approval_requested(ctx: &MessageContext, markup: &dyn Markup) -> String {
    format!(
        "{} by {} just moved to {} ✨\n\
         📌 Marketing team, please review it.\n\
         ✅ If it passes, move it on to {}.\n\
         📝 If not, leave a comment on {} so the assignee can follow up.{}",
        markup.bold(&format!("{} ({})", ctx.title, ctx.identifier)),
        ctx.assignee,
        markup.bold("In Approval"),
        markup.bold("Done"),
        markup.bold(&ctx.identifier),
        ctx.project_suffix,
    )
}

fn approval_done(ctx: &MessageContext, markup: &dyn Markup) -> String {
    let phrase = APPRECIATIONS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(APPRECIATIONS[0]);
    format!(
        "🎉 {} has been Approved and moved to {}!\n{}{}",
        markup.bold(&format!("{} ({})", ctx.title, ctx.identifier)),
        markup.bold("Done"),
        phrase,
        ctx.project_suffix,
    )
}
