use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};

/// Prints the detail panel for `list` (id or display name), or for the
/// initially selected list when none is named.
pub fn handle(ctx: &ExecutionContext, list: Option<&str>, hctx: &HandlerContext) -> Result<()> {
    let state = ctx.load_state();

    let entry = match list {
        Some(key) => match state.find(key) {
            Some(entry) => Some(entry),
            None => bail!(
                "List '{}' not found among {} loaded list(s). Run 'spexplorer lists' to see them",
                key,
                state.entries().len()
            ),
        },
        None => state.selected_entry(),
    };

    hctx.render(presenters::present_columns(entry))
}
