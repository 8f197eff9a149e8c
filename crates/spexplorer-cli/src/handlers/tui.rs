use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use anyhow::Result;

pub fn handle(ctx: ExecutionContext) -> Result<()> {
    let renderer = TuiRenderer::new(
        ctx.loader().clone(),
        ctx.runtime().handle().clone(),
        ctx.user().clone(),
        ctx.config().environment.clone(),
    );
    let result = renderer.run();

    tracing::debug!(data_dir = %ctx.data_dir().display(), "explorer closed");
    result
}
