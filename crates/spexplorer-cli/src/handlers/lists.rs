use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, hctx: &HandlerContext) -> Result<()> {
    let state = ctx.load_state();

    let header = presenters::present_header(
        &ctx.config().environment,
        &state,
        ctx.loader().source_description(),
    );
    hctx.render(presenters::present_lists(&state, header))
}
